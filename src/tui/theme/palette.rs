//! UI palettes for the dark and light themes

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        bg_primary: Color::Rgb(18, 18, 18),      // #121212
        bg_highlight: Color::Rgb(48, 48, 48),    // #303030
        fg_primary: Color::Rgb(238, 238, 238),   // #eeeeee
        fg_secondary: Color::Rgb(136, 136, 136), // #888888
        accent: Color::Rgb(255, 255, 255),       // #ffffff
        accent_alt: Color::Rgb(200, 200, 200),   // #c8c8c8
        border: Color::Rgb(64, 64, 64),          // #404040
        success: Color::Rgb(129, 199, 132),      // #81c784
        error: Color::Rgb(229, 115, 115),        // #e57373
    };

    pub const LIGHT: Self = Self {
        bg_primary: Color::Rgb(250, 250, 250),   // #fafafa
        bg_highlight: Color::Rgb(224, 224, 224), // #e0e0e0
        fg_primary: Color::Rgb(33, 33, 33),      // #212121
        fg_secondary: Color::Rgb(117, 117, 117), // #757575
        accent: Color::Rgb(0, 0, 0),             // #000000
        accent_alt: Color::Rgb(66, 66, 66),      // #424242
        border: Color::Rgb(189, 189, 189),       // #bdbdbd
        success: Color::Rgb(46, 125, 50),        // #2e7d32
        error: Color::Rgb(198, 40, 40),          // #c62828
    };
}
