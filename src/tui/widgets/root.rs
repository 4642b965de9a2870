//! Root layout widget - orchestrates main layout structure

use crate::app::state::AppState;
use crate::config::Config;
use crate::history::History;
use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::{alert, controls, help, history, swatch};

/// Main layout structure:
/// ┌ Mixer ─────────────────────────┬ Controls ──────────┐
/// │                                │ Base color         │
/// │          (swatch)              │ Palette search     │
/// │                                │                    │
/// │ Name / composition / hex       │ key hints          │
/// ├ History ───────────────────────┴────────────────────┤
/// │ ■■ ■■ ■■ ■■ ...                                     │
/// └─────────────────────────────────────────────────────┘
///   status line
pub fn render(frame: &mut Frame, cfg: &Config, state: &mut AppState, history_store: &History) {
    let theme = get_theme(state.dark);
    let root = frame.area();

    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(theme.palette.bg_primary)
                .fg(theme.palette.fg_primary),
        ),
        root,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Mixer + controls
            Constraint::Length(5), // History strip
            Constraint::Length(1), // Status line
        ])
        .split(root);

    let top_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    swatch::render(frame, state, &theme, top_cols[0]);
    controls::render(frame, state, &theme, top_cols[1]);
    history::render(frame, cfg, state, history_store, &theme, rows[1]);
    render_status(frame, state, history_store, &theme, rows[2]);

    if state.show_help {
        help::render(frame, &theme, root);
    }
    if let Some(a) = &state.alert {
        alert::render(frame, a, &theme, root);
    }
}

fn render_status(frame: &mut Frame, state: &AppState, history: &History, theme: &Theme, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(28)])
        .split(area);

    let left = Paragraph::new(Line::from(Span::styled(
        format!(" {}", state.status),
        Style::default().fg(theme.palette.fg_secondary),
    )));
    frame.render_widget(left, cols[0]);

    let mode = if state.dark { "dark" } else { "light" };
    let saved = if history.is_empty() {
        "nothing saved".to_string()
    } else {
        format!("{} saved", history.len())
    };
    let right = Paragraph::new(Line::from(Span::styled(
        format!("{} {} {} ", saved, theme.icons.bullet, mode),
        Style::default().fg(theme.palette.fg_secondary),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(right, cols[1]);
}
