//! Mixer panel: the current color, its palette name, composition and hex

use crate::app::state::{AppState, Focus};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;
    let border_color = if state.focus == Focus::Main {
        theme.palette.accent
    } else {
        theme.palette.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} Mixer ", icons.brush))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1), // Left padding
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Right padding
        ])
        .split(inner)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Color box
            Constraint::Length(1), // Spacing
            Constraint::Length(3), // Name, composition, hex
        ])
        .split(padded);

    let Some(current) = &state.current else {
        let empty = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "Nothing mixed yet",
                Style::default().fg(theme.palette.fg_secondary),
            )),
            Line::from(Span::styled(
                "g mixes the base color with a random one",
                Style::default().fg(theme.palette.fg_secondary),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, rows[0]);
        return;
    };

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::from(current.mix.rgb))),
        rows[0],
    );

    let label = Style::default().fg(theme.palette.fg_secondary);
    let info = vec![
        Line::from(Span::styled(
            current.name,
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(current.mix.composition(), label)),
        Line::from(vec![
            Span::styled("Hex  ", label),
            Span::styled(
                current.hex.as_str(),
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(info), rows[2]);
}
