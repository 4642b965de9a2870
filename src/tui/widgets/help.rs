//! Help overlay showing keybindings

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, theme: &Theme, area: Rect) {
    let icons = &theme.icons;
    let area = super::popup_area(area, 72, 20);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent))
        .style(Style::default().bg(theme.palette.bg_highlight));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Colors", theme),
        keybind("g / Enter", "Mix with a random color", theme),
        keybind("r", "Random palette base", theme),
        keybind("c / y", "Copy hex", theme),
        keybind("t", "Toggle dark/light", theme),
        Line::default(),
        section_header("History", theme),
        keybind("Left/Right", "Select swatch", theme),
        keybind("h", "Focus history", theme),
        keybind("Enter", "Show selected again", theme),
        keybind("Click", "Show swatch again", theme),
        keybind("e", "Export to JSON", theme),
        keybind("x", "Clear history", theme),
    ];
    frame.render_widget(
        Paragraph::new(left_content).wrap(Wrap { trim: false }),
        cols[0],
    );

    let right_content = vec![
        section_header("Inputs", theme),
        keybind("b", "Edit base color", theme),
        keybind("/ or s", "Search palette", theme),
        keybind("Enter", "Mix / search", theme),
        keybind("Ctrl+u", "Clear input", theme),
        keybind("Ctrl+r", "Random base (base)", theme),
        keybind("Esc", "Leave input", theme),
        Line::default(),
        section_header("General", theme),
        keybind("Tab", "Cycle focus", theme),
        keybind("? / F1", "Toggle this help", theme),
        keybind("q / Esc", "Quit", theme),
        keybind("Ctrl+c", "Quit from anywhere", theme),
    ];
    frame.render_widget(
        Paragraph::new(right_content).wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
