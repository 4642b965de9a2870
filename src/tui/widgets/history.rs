//! History strip - the most recent colors as clickable swatches

use crate::app::state::{AppState, Focus};
use crate::config::Config;
use crate::history::History;
use crate::color::Rgb;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(
    frame: &mut Frame,
    cfg: &Config,
    state: &mut AppState,
    history: &History,
    theme: &Theme,
    area: Rect,
) {
    let focused = state.focus == Focus::History;
    let border_color = if focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} History ", theme.icons.history))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    state.history_hitboxes.clear();

    let recent = history.recent(cfg.history.visible);
    if recent.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No colors yet",
            Style::default().fg(theme.palette.fg_secondary),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    // Each slot is a swatch plus a one-column gap; the first column is padding.
    let avail = inner.width.saturating_sub(1);
    let count = u16::try_from(recent.len()).unwrap_or(u16::MAX);
    let slot = (avail / count).clamp(2, 9);
    let swatch_height = inner.height.saturating_sub(1).max(1);

    // When the strip is too narrow the oldest entries are left out.
    let fits = usize::from(avail / slot);
    let skip = recent.len().saturating_sub(fits);

    for (col, (i, hex)) in recent.iter().enumerate().skip(skip).enumerate() {
        let x = inner.x + 1 + slot * col as u16;
        let rect = Rect::new(x, inner.y, slot - 1, swatch_height);
        let color = Rgb::from_hex(hex).unwrap_or(Rgb::WHITE);
        frame.render_widget(Block::default().style(Style::default().bg(Color::from(color))), rect);
        state.history_hitboxes.push((rect, i));

        if i == state.history_selected && inner.height > swatch_height {
            let marker_style = if focused {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_secondary)
            };
            let marker = Rect::new(x, inner.y + swatch_height, slot - 1, 1);
            let label = if slot > 8 {
                hex.clone()
            } else {
                theme.icons.selected.to_string()
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(label, marker_style))),
                marker,
            );
        }
    }
}
