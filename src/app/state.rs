use crate::color::{Mix, palette};
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Main,
    BaseInput,
    SearchInput,
    History,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Main => Focus::BaseInput,
            Focus::BaseInput => Focus::SearchInput,
            Focus::SearchInput => Focus::History,
            Focus::History => Focus::Main,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Main => Focus::History,
            Focus::BaseInput => Focus::Main,
            Focus::SearchInput => Focus::BaseInput,
            Focus::History => Focus::SearchInput,
        }
    }
}

/// Modal notification; input is swallowed until it is dismissed.
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: AlertKind::Error,
        }
    }
}

/// The color currently on display with its nearest palette name.
#[derive(Debug, Clone)]
pub struct Swatch {
    pub mix: Mix,
    pub hex: String,
    pub name: &'static str,
}

impl Swatch {
    pub fn new(mix: Mix) -> Self {
        Self {
            hex: mix.hex(),
            name: palette::closest(mix.rgb).name,
            mix,
        }
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub focus: Focus,
    pub dark: bool,
    pub show_help: bool,

    // Inputs
    pub base_input: String,
    pub search_query: String,

    pub current: Option<Swatch>,

    // History strip; the index is into the visible window
    pub history_selected: usize,
    pub history_hitboxes: Vec<(Rect, usize)>,

    pub alert: Option<Alert>,
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Main,
            dark: false,
            show_help: false,
            base_input: String::new(),
            search_query: String::new(),
            current: None,
            history_selected: 0,
            history_hitboxes: Vec::new(),
            alert: None,
            status: String::new(),
        }
    }

    pub fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::BaseInput => Some(&mut self.base_input),
            Focus::SearchInput => Some(&mut self.search_query),
            Focus::Main | Focus::History => None,
        }
    }

    /// History slot under a screen position, if any.
    pub fn history_hit(&self, column: u16, row: u16) -> Option<usize> {
        self.history_hitboxes
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, idx)| *idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Main;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Main);
        assert_eq!(Focus::Main.prev(), Focus::History);
    }

    #[test]
    fn test_swatch_names_color() {
        let swatch = Swatch::new(Mix::solid(Rgb::new(0xf4, 0x43, 0x36)));
        assert_eq!(swatch.name, "Red");
        assert_eq!(swatch.hex, "#f44336");
    }

    #[test]
    fn test_history_hit() {
        let mut state = AppState::new();
        state.history_hitboxes = vec![(Rect::new(2, 10, 6, 2), 0), (Rect::new(9, 10, 6, 2), 1)];
        assert_eq!(state.history_hit(2, 10), Some(0));
        assert_eq!(state.history_hit(14, 11), Some(1));
        assert_eq!(state.history_hit(8, 10), None);
        assert_eq!(state.history_hit(3, 12), None);
    }
}
