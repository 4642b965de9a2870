//! System clipboard access.

use anyhow::Context;

/// Lazily opened clipboard handle. Kept alive for the whole session because
/// some platforms drop the selection together with the handle.
#[derive(Default)]
pub struct Clipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy_text(&mut self, text: &str) -> anyhow::Result<()> {
        let clipboard = match self.inner.take() {
            Some(c) => c,
            None => arboard::Clipboard::new().context("open clipboard")?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_owned())
            .context("write clipboard")?;
        Ok(())
    }
}
