pub mod alert;
pub mod controls;
pub mod help;
pub mod history;
pub mod root;
pub mod swatch;

use ratatui::layout::Rect;

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
