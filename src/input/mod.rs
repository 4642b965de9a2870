use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Focus};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            if !event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                continue;
            }
            let ev = match event::read() {
                Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("read terminal event: {e}");
                    continue;
                }
            };
            if tx.blocking_send(Event::Input(ev)).is_err() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => {
            if state.alert.is_some() || state.show_help {
                return None;
            }
            match m.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    state.history_hit(m.column, m.row).map(Action::Reselect)
                }
                MouseEventKind::ScrollUp => Some(Action::HistoryLeft),
                MouseEventKind::ScrollDown => Some(Action::HistoryRight),
                _ => None,
            }
        }
        InputEvent::Key(k) => handle_key(state, k),
    }
}

fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // The alert is modal: nothing else happens until it is dismissed.
    if state.alert.is_some() {
        return match k.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissAlert),
            _ => None,
        };
    }

    if state.show_help {
        return match k.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1) => {
                Some(Action::ToggleHelp)
            }
            _ => None,
        };
    }

    match state.focus {
        Focus::Main => handle_main(k),
        Focus::BaseInput | Focus::SearchInput => handle_text_input(state, k),
        Focus::History => handle_history(k),
    }
}

fn handle_main(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Char('b') => Some(Action::SetFocus(Focus::BaseInput)),
        KeyCode::Char('/') | KeyCode::Char('s') => Some(Action::SetFocus(Focus::SearchInput)),
        KeyCode::Char('h') => Some(Action::SetFocus(Focus::History)),

        KeyCode::Char('g') | KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Generate),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::CopyHex),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('e') => Some(Action::ExportHistory),
        KeyCode::Char('x') => Some(Action::ClearHistory),
        KeyCode::Char('r') => Some(Action::RandomizeBase),
        KeyCode::Left => Some(Action::HistoryLeft),
        KeyCode::Right => Some(Action::HistoryRight),

        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_text_input(state: &AppState, k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::SetFocus(Focus::Main)),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Enter => match state.focus {
            Focus::SearchInput => Some(Action::Search),
            _ => Some(Action::Generate),
        },
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Char('r')
            if k.modifiers.contains(KeyModifiers::CONTROL) && state.focus == Focus::BaseInput =>
        {
            Some(Action::RandomizeBase)
        }
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_history(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::SetFocus(Focus::Main)),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),

        KeyCode::Left | KeyCode::Char('h') => Some(Action::HistoryLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::HistoryRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ReselectSelected),

        KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::CopyHex),
        KeyCode::Char('x') => Some(Action::ClearHistory),
        KeyCode::Char('e') => Some(Action::ExportHistory),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Alert;
    use crossterm::event::{KeyEventState, MouseEvent};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_main_bindings() {
        let state = AppState::new();
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('g'))), Some(Action::Generate));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('c'))), Some(Action::CopyHex));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('t'))), Some(Action::ToggleTheme));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('e'))), Some(Action::ExportHistory));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('x'))), Some(Action::ClearHistory));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('r'))), Some(Action::RandomizeBase));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn test_text_input_captures_letters() {
        let mut state = AppState::new();
        state.focus = Focus::SearchInput;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::InputChar('q')));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::Search));
        assert_eq!(map_input_to_action(&state, ctrl('u')), Some(Action::ClearInput));

        state.focus = Focus::BaseInput;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::Generate));
        assert_eq!(map_input_to_action(&state, ctrl('r')), Some(Action::RandomizeBase));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::SetFocus(Focus::Main)));
    }

    #[test]
    fn test_alert_is_modal() {
        let mut state = AppState::new();
        state.alert = Some(Alert::error("No matching color found."));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('g'))), None);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::DismissAlert));
        assert_eq!(map_input_to_action(&state, ctrl('c')), Some(Action::Quit));
    }

    #[test]
    fn test_click_on_history_swatch() {
        let mut state = AppState::new();
        state.history_hitboxes = vec![(Rect::new(1, 20, 6, 2), 0), (Rect::new(8, 20, 6, 2), 1)];
        assert_eq!(map_input_to_action(&state, click(9, 21)), Some(Action::Reselect(1)));
        assert_eq!(map_input_to_action(&state, click(0, 0)), None);
    }

    #[test]
    fn test_history_focus() {
        let mut state = AppState::new();
        state.focus = Focus::History;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('h'))), Some(Action::HistoryLeft));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::ReselectSelected));
    }
}
