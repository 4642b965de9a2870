//! Modal alert popup

use crate::app::state::{Alert, AlertKind};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, alert: &Alert, theme: &Theme, area: Rect) {
    let (icon, color) = match alert.kind {
        AlertKind::Info => (theme.icons.info, theme.palette.success),
        AlertKind::Error => (theme.icons.error, theme.palette.error),
    };

    let width = u16::try_from(alert.message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(8)
        .clamp(30, 70);
    let area = super::popup_area(area, width, 7);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", icon))
        .title_style(Style::default().fg(color))
        .style(Style::default().bg(theme.palette.bg_highlight));

    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            alert.message.as_str(),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{} Enter to dismiss", theme.icons.success),
            Style::default().fg(theme.palette.fg_secondary),
        )),
    ];

    let p = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(p, area);
}
