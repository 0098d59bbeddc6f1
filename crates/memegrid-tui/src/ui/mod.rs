pub mod app;
pub mod detail_modal;
pub mod footer;
pub mod grid;
pub mod header;
pub mod notice;

use ratatui::prelude::Rect;

/// Bounds for a centered overlay, as fractions of the terminal plus hard limits.
#[derive(Debug, Clone, Copy)]
pub struct ModalSize {
    pub width_ratio: f32,
    pub height_ratio: f32,
    pub min_width: u16,
    pub min_height: u16,
    pub max_width: u16,
    pub max_height: u16,
}

/// Center a modal in `size`, never larger than the terminal itself.
pub fn modal_area(size: Rect, bounds: ModalSize) -> Rect {
    let width = (((size.width as f32) * bounds.width_ratio).round() as u16)
        .clamp(bounds.min_width, bounds.max_width)
        .min(size.width);
    let height = (((size.height as f32) * bounds.height_ratio).round() as u16)
        .clamp(bounds.min_height, bounds.max_height)
        .min(size.height);

    Rect::new(
        size.x + (size.width.saturating_sub(width)) / 2,
        size.y + (size.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}
