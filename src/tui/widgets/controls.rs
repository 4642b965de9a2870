//! Base color and palette search inputs, plus a short key reference

use crate::app::state::{AppState, Focus};
use crate::color::mixer;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Base color
            Constraint::Length(3), // Search
            Constraint::Min(0),    // Hints
        ])
        .split(area);

    let base_preview = mixer::base_or_white(Some(state.base_input.trim()));
    render_input(
        frame,
        theme,
        rows[0],
        InputBox {
            title: format!(" {} Base color ", theme.icons.base),
            value: &state.base_input,
            placeholder: "#ffffff",
            focused: state.focus == Focus::BaseInput,
            preview: Some(Color::from(base_preview)),
        },
    );
    render_input(
        frame,
        theme,
        rows[1],
        InputBox {
            title: format!(" {} Palette search ", theme.icons.search),
            value: &state.search_query,
            placeholder: "e.g. teal",
            focused: state.focus == Focus::SearchInput,
            preview: None,
        },
    );
    render_hints(frame, theme, rows[2]);
}

struct InputBox<'a> {
    title: String,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    preview: Option<Color>,
}

fn render_input(frame: &mut Frame, theme: &Theme, area: Rect, input: InputBox<'_>) {
    let border_color = if input.focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(input.title)
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(5)])
        .split(inner);

    let cursor = if input.focused { "▏" } else { "" };
    let line = if input.value.is_empty() && !input.focused {
        Line::from(Span::styled(
            input.placeholder,
            Style::default().fg(theme.palette.fg_secondary),
        ))
    } else {
        Line::from(vec![
            Span::styled(input.value, Style::default().fg(theme.palette.fg_primary)),
            Span::styled(cursor, Style::default().fg(theme.palette.accent)),
        ])
    };
    frame.render_widget(Paragraph::new(line), cols[0]);

    if let Some(color) = input.preview {
        let swatch = Rect {
            x: cols[1].x + 1,
            width: cols[1].width.saturating_sub(1),
            ..cols[1]
        };
        frame.render_widget(Block::default().style(Style::default().bg(color)), swatch);
    }
}

fn render_hints(frame: &mut Frame, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(" Keys ")
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        hint("g", "Generate", theme),
        hint("r", "Random base", theme),
        hint("b  /", "Edit base / search", theme),
        hint("c", "Copy hex", theme),
        hint("e", "Export history", theme),
        hint("x", "Clear history", theme),
        hint("t", "Toggle theme", theme),
        hint("?", "All keys", theme),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn hint(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:6}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
