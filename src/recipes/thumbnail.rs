//! Thumbnail decoding

use egui::ColorImage;
use image::imageops::FilterType;
use tracing::warn;

/// Decode image bytes into a square RGBA image of `size` pixels per edge.
///
/// Returns `None` when the bytes are not a supported image format.
pub fn decode_thumbnail(bytes: &[u8], size: u32) -> Option<ColorImage> {
    let decoded = match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(e) => {
            warn!("Failed to decode thumbnail: {}", e);
            return None;
        }
    };

    let rgba = decoded.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
    let dims = [rgba.width() as usize, rgba.height() as usize];
    Some(ColorImage::from_rgba_unmultiplied(dims, rgba.as_raw()))
}
