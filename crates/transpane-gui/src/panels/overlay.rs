use transpane_core::config::Rgb;
use transpane_core::scene::OverlayBox;
use transpane_core::text_fit::vertical_columns;

use crate::convert::{to_color32, to_egui_rect};

/// Smallest font worth laying out; tinier boxes only get their fill.
const MIN_FONT_PX: f32 = 1.0;

pub fn draw(
    painter: &egui::Painter,
    overlay: &OverlayBox,
    fill: Rgb,
    text: Rgb,
) {
    let rect = to_egui_rect(overlay.rect);
    painter.rect_filled(rect, 2.0, to_color32(fill, overlay.fill_alpha));

    if overlay.font_px < MIN_FONT_PX || overlay.text.is_empty() {
        return;
    }

    let painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    let color = to_color32(text, 1.0);
    let font = egui::FontId::proportional(overlay.font_px);

    if overlay.style.is_vertical() {
        draw_vertical(&painter, rect, overlay, font, color);
    } else {
        painter.text(rect.center(), egui::Align2::CENTER_CENTER, &overlay.text, font, color);
    }
}

/// Top-to-bottom columns, first column rightmost, glyphs upright.
fn draw_vertical(
    painter: &egui::Painter,
    rect: egui::Rect,
    overlay: &OverlayBox,
    font: egui::FontId,
    color: egui::Color32,
) {
    let advance = overlay.font_px * overlay.style.line_height;
    let rows = ((rect.height() / advance).floor() as usize).max(1);
    let columns = vertical_columns(&overlay.text, rows);

    let block_width = advance * columns.len() as f32;
    let first_x = rect.center().x + block_width / 2.0 - advance / 2.0;

    for (col, glyphs) in columns.iter().enumerate() {
        let x = first_x - col as f32 * advance;
        let count = glyphs.chars().count() as f32;
        let top = rect.center().y - advance * count / 2.0;
        for (row, ch) in glyphs.chars().enumerate() {
            let y = top + advance * (row as f32 + 0.5);
            painter.text(
                egui::pos2(x, y),
                egui::Align2::CENTER_CENTER,
                ch,
                font.clone(),
                color,
            );
        }
    }
}
