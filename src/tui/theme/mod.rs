//! Theme configuration - dark and light variants

pub mod icons;
pub mod palette;

pub use icons::Icons;
pub use palette::Palette;

use ratatui::symbols::border;

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self {
            palette: if dark { Palette::DARK } else { Palette::LIGHT },
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> border::Set<'static> {
        border::ROUNDED
    }
}

pub fn get_theme(dark: bool) -> Theme {
    Theme::new(dark)
}
