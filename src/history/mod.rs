use anyhow::Context;
use std::path::{Path, PathBuf};

pub const EXPORT_FILE_NAME: &str = "color-history.json";
pub const DEFAULT_VISIBLE: usize = 10;

/// Chronological record of every color shown. Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a color to the end of the history
    pub fn record(&mut self, hex: impl Into<String>) {
        self.entries.push(hex.into());
    }

    /// The last `n` entries, oldest first
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full history as a pretty-printed JSON array (2-space indent)
    pub fn export_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self.entries()).context("serialize history")
    }

    /// Write the export into `dir`, returning the file path
    pub fn export_to(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
        let path = dir.join(EXPORT_FILE_NAME);
        let raw = self.export_json()?;
        std::fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
