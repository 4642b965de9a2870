pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard::Clipboard;
use crate::color::{Mix, mixer, palette};
use crate::config::Config;
use crate::history::History;
use crate::input;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::Event;
use state::{Alert, AppState, Focus, Swatch};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    history: History,
    clipboard: Clipboard,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf) -> Self {
        let mut state = AppState::new();
        state.dark = cfg.theme.dark;
        state.status = "Press g to mix a color, ? for help".into();

        Self {
            cfg,
            config_path,
            state,
            history: History::new(),
            clipboard: Clipboard::new(),
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx, self.cfg.input.mouse);

        tui::draw(terminal, &self.cfg, &mut self.state, &self.history)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state, &self.history)?;
        }

        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.theme.dark = self.state.dark;
        if let Err(e) = crate::config::save(&self.cfg, Some(&self.config_path)) {
            tracing::warn!("save config: {e:#}");
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Generate => self.generate(),
            Action::Search => self.search(),
            Action::CopyHex => self.copy_hex(),
            Action::ExportHistory => self.export_history(),
            Action::ClearHistory => {
                self.history.clear();
                self.state.history_selected = 0;
                self.state.status = "History cleared".into();
                tracing::info!("history cleared");
            }
            Action::RandomizeBase => {
                let entry = palette::random_entry(&mut rand::rng());
                self.state.base_input = entry.hex.to_string();
                self.state.status = format!("Base set to {} ({})", entry.name, entry.hex);
            }
            Action::ReselectSelected => self.reselect(self.state.history_selected),
            Action::Reselect(idx) => self.reselect(idx),
            _ => self.reduce(action),
        }
    }

    /// Pure UI-state transitions with no side effects outside `AppState`.
    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::SetFocus(focus) => self.state.focus = focus,
            Action::FocusNext => self.state.focus = self.state.focus.next(),
            Action::FocusPrev => self.state.focus = self.state.focus.prev(),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::DismissAlert => self.state.alert = None,
            Action::InputChar(c) => {
                if let Some(input) = self.state.active_input_mut() {
                    input.push(c);
                }
            }
            Action::Backspace => {
                if let Some(input) = self.state.active_input_mut() {
                    input.pop();
                }
            }
            Action::ClearInput => {
                if let Some(input) = self.state.active_input_mut() {
                    input.clear();
                }
            }
            Action::ToggleTheme => {
                self.state.dark = !self.state.dark;
                self.state.status = if self.state.dark {
                    "Dark mode".into()
                } else {
                    "Light mode".into()
                };
            }
            Action::HistoryLeft => {
                self.state.history_selected = self.state.history_selected.saturating_sub(1);
            }
            Action::HistoryRight => {
                let len = self.visible_history().len();
                self.state.history_selected =
                    (self.state.history_selected + 1).min(len.saturating_sub(1));
            }
            _ => {}
        }
    }

    fn visible_history(&self) -> &[String] {
        self.history.recent(self.cfg.history.visible)
    }

    /// Put a color on display and append it to the history.
    fn show(&mut self, mix: Mix) {
        let swatch = Swatch::new(mix);
        self.history.record(swatch.hex.clone());
        let len = self.visible_history().len();
        self.state.history_selected = len.saturating_sub(1);
        self.state.status = format!("{} · {}", swatch.hex, swatch.name);
        self.state.current = Some(swatch);
    }

    fn generate(&mut self) {
        let base_input = self.state.base_input.trim();
        let base = mixer::base_or_white(Some(base_input));
        let mix = mixer::generate(base, &mut rand::rng());
        tracing::info!(base = %base.to_hex(), result = %mix.hex(), ratio = mix.ratio, "generated color");
        self.show(mix);
    }

    fn search(&mut self) {
        let query = self.state.search_query.trim().to_string();
        match palette::search(&query) {
            Some(entry) => {
                tracing::info!(query = %query, hex = entry.hex, "palette search hit");
                self.show(Mix::solid(entry.rgb()));
            }
            None => {
                tracing::debug!(query = %query, "palette search miss");
                self.state.alert = Some(Alert::error("No matching color found."));
            }
        }
    }

    fn reselect(&mut self, idx: usize) {
        let Some(hex) = self.visible_history().get(idx).cloned() else {
            return;
        };
        if let Some(rgb) = crate::color::hex_to_rgb(&hex) {
            self.show(Mix::solid(rgb));
        }
    }

    fn copy_hex(&mut self) {
        let hex = self
            .state
            .current
            .as_ref()
            .map(|s| s.hex.clone())
            .unwrap_or_default();
        match self.clipboard.copy_text(&hex) {
            Ok(()) => {
                tracing::info!(hex = %hex, "copied to clipboard");
                self.state.alert = Some(Alert::info(format!("Copied Hex: {hex}")));
            }
            Err(e) => {
                tracing::warn!("copy failed: {e:#}");
                self.state.alert = Some(Alert::error(format!("Copy failed: {e:#}")));
            }
        }
    }

    fn export_history(&mut self) {
        match self.history.export_to(&self.cfg.paths.export_dir) {
            Ok(path) => {
                tracing::info!(path = %path.display(), count = self.history.len(), "exported history");
                self.state.alert = Some(Alert::info(format!(
                    "Saved {} colors to {}",
                    self.history.len(),
                    path.display()
                )));
            }
            Err(e) => {
                tracing::warn!("export failed: {e:#}");
                self.state.alert = Some(Alert::error(format!("Export failed: {e:#}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;

    fn app() -> App {
        App::new(defaults::defaults(), std::env::temp_dir().join("tincture-test.toml"))
    }

    fn type_into(app: &mut App, focus: Focus, text: &str) {
        app.handle_action(Action::SetFocus(focus));
        app.handle_action(Action::ClearInput);
        for c in text.chars() {
            app.handle_action(Action::InputChar(c));
        }
    }

    #[test]
    fn test_generate_records_history() {
        let mut app = app();
        for _ in 0..3 {
            app.handle_action(Action::Generate);
        }
        assert_eq!(app.history.len(), 3);
        let current = app.state.current.as_ref().unwrap();
        assert_eq!(app.history.entries()[2], current.hex);
        assert!((0.0..1.0).contains(&current.mix.ratio));
    }

    #[test]
    fn test_search_hit_shows_palette_color() {
        let mut app = app();
        type_into(&mut app, Focus::SearchInput, "blue");
        app.handle_action(Action::Search);

        let current = app.state.current.as_ref().unwrap();
        assert_eq!(current.hex, "#2196f3");
        assert_eq!(current.name, "Blue");
        assert_eq!(current.mix.composition(), "100% Base + 0% Random");
        assert!(app.state.alert.is_none());
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_search_miss_raises_alert() {
        let mut app = app();
        type_into(&mut app, Focus::SearchInput, "nonexistent-xyz");
        app.handle_action(Action::Search);

        assert!(app.state.current.is_none());
        assert!(app.history.is_empty());
        let alert = app.state.alert.as_ref().unwrap();
        assert_eq!(alert.message, "No matching color found.");

        app.handle_action(Action::DismissAlert);
        assert!(app.state.alert.is_none());
    }

    #[test]
    fn test_reselect_appends_duplicate() {
        let mut app = app();
        type_into(&mut app, Focus::SearchInput, "teal");
        app.handle_action(Action::Search);
        type_into(&mut app, Focus::SearchInput, "lime");
        app.handle_action(Action::Search);

        app.handle_action(Action::Reselect(0));
        assert_eq!(app.history.entries(), ["#009688", "#cddc39", "#009688"]);
        assert_eq!(app.state.current.as_ref().unwrap().mix.ratio, 1.0);
    }

    #[test]
    fn test_reselect_black_stays_black() {
        let mut app = app();
        app.history.record("#000000");
        app.handle_action(Action::Reselect(0));
        assert_eq!(app.state.current.as_ref().unwrap().hex, "#000000");
    }

    #[test]
    fn test_reselect_out_of_range_is_ignored() {
        let mut app = app();
        app.handle_action(Action::Reselect(3));
        assert!(app.state.current.is_none());
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_clear_history() {
        let mut app = app();
        for _ in 0..12 {
            app.handle_action(Action::Generate);
        }
        assert_eq!(app.visible_history().len(), 10);
        assert_eq!(app.state.history_selected, 9);

        app.handle_action(Action::ClearHistory);
        assert!(app.visible_history().is_empty());
        assert_eq!(app.state.history_selected, 0);
    }

    #[test]
    fn test_history_selection_bounds() {
        let mut app = app();
        for _ in 0..3 {
            app.handle_action(Action::Generate);
        }
        app.handle_action(Action::HistoryRight);
        assert_eq!(app.state.history_selected, 2);
        for _ in 0..5 {
            app.handle_action(Action::HistoryLeft);
        }
        assert_eq!(app.state.history_selected, 0);
    }

    #[test]
    fn test_randomize_base_uses_palette() {
        let mut app = app();
        app.handle_action(Action::RandomizeBase);
        assert!(palette::PALETTE.iter().any(|e| e.hex == app.state.base_input));
    }

    #[test]
    fn test_input_editing_targets_focused_field() {
        let mut app = app();
        type_into(&mut app, Focus::BaseInput, "#00000");
        app.handle_action(Action::InputChar('0'));
        assert_eq!(app.state.base_input, "#000000");
        assert!(app.state.search_query.is_empty());

        app.handle_action(Action::Backspace);
        assert_eq!(app.state.base_input, "#00000");

        app.handle_action(Action::SetFocus(Focus::Main));
        app.handle_action(Action::InputChar('x'));
        assert_eq!(app.state.base_input, "#00000");
    }

    #[test]
    fn test_resize_leaves_state_untouched() {
        let mut app = app();
        app.handle_action(Action::Generate);
        let hex = app.state.current.as_ref().unwrap().hex.clone();
        app.handle_action(Action::Resize);
        assert_eq!(app.state.current.as_ref().unwrap().hex, hex);
        assert_eq!(app.history.len(), 1);
        assert!(!app.state.should_quit);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = app();
        let before = app.state.dark;
        app.handle_action(Action::ToggleTheme);
        assert_ne!(app.state.dark, before);
    }

    #[test]
    fn test_export_history_writes_file() {
        let dir = std::env::temp_dir().join(format!("tincture-app-export-{}", std::process::id()));
        let mut app = app();
        app.cfg.paths.export_dir = dir.clone();
        for _ in 0..15 {
            app.handle_action(Action::Generate);
        }
        app.handle_action(Action::ExportHistory);

        let raw = std::fs::read_to_string(dir.join(crate::history::EXPORT_FILE_NAME)).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 15);
        assert!(app.state.alert.is_some());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
