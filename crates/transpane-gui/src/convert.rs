use image::imageops::FilterType;
use image::DynamicImage;
use transpane_core::geometry::{Point, PxRect};

/// Longest texture side uploaded to the GPU; larger images are downscaled
/// for display only.
const MAX_TEXTURE_SIDE: u32 = 8192;

/// Convert a decoded image to an egui ColorImage, downscaling if needed.
pub fn dynamic_to_color_image(img: &DynamicImage) -> egui::ColorImage {
    let resized;
    let img = if img.width().max(img.height()) > MAX_TEXTURE_SIDE {
        resized = img.resize(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE, FilterType::Triangle);
        &resized
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

pub fn to_egui_rect(r: PxRect) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(r.x, r.y), egui::vec2(r.width, r.height))
}

pub fn from_egui_rect(r: egui::Rect) -> PxRect {
    PxRect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn from_egui_pos(p: egui::Pos2) -> Point {
    Point::new(p.x, p.y)
}

pub fn to_color32(rgb: transpane_core::config::Rgb, alpha: f32) -> egui::Color32 {
    let [r, g, b] = rgb.0;
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
