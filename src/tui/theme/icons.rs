//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
pub struct Icons {
    pub brush: &'static str,
    pub base: &'static str,
    pub search: &'static str,
    pub history: &'static str,
    pub help: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,

    pub selected: &'static str,
    pub bullet: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            brush: "\u{f1fc}",   // nf-fa-paint_brush
            base: "\u{f1fb}",    // nf-fa-eyedropper
            search: "\u{f002}",  // nf-fa-search
            history: "\u{f1da}", // nf-fa-history
            help: "\u{f059}",    // nf-fa-question_circle

            success: "\u{f00c}", // nf-fa-check
            error: "\u{f00d}",   // nf-fa-times
            info: "\u{f05a}",    // nf-fa-info_circle

            selected: "▲",
            bullet: "•",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
