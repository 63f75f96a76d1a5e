//! Centered logo overlay with a clear-space pad

use crate::error::{Error, Result};
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use std::path::Path;

/// Logo edge length as a fraction of the QR bitmap edge.
///
/// 18% stays within the occlusion budget of the
/// [`High`](crate::render::ErrorCorrection::High) correction tier, which the
/// orchestrator forces whenever a logo is present.
pub const LOGO_FRACTION: f32 = 0.18;

/// Opaque white clear-space pad around the logo's bounding box, in pixels
pub const CLEAR_SPACE_PX: u32 = 7;

/// Load a logo image from disk.
///
/// The file is opened, decoded, and closed in one scoped call; unreadable or
/// corrupt files become [`Error::LogoProcessing`].
pub fn load_logo(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| {
        Error::LogoProcessing(format!("Cannot read logo '{}': {e}", path.display()))
    })
}

/// Embed `logo` at the center of `qr`, returning a flattened RGB image of the
/// same dimensions.
///
/// The logo is resampled to [`LOGO_FRACTION`] of the QR edge with a Lanczos
/// filter, a white quiet box of [`CLEAR_SPACE_PX`] is painted under its
/// bounding box so scanners see clean contrast at the logo edges, then the
/// logo is pasted on top honoring its own alpha channel.
pub fn composite(qr: &image::RgbImage, logo: &DynamicImage) -> Result<image::RgbImage> {
    let (qr_w, qr_h) = qr.dimensions();
    let logo_size = (qr_w as f32 * LOGO_FRACTION) as u32;
    if logo_size == 0 {
        return Err(Error::LogoProcessing(
            "QR bitmap is too small to carry a logo".to_string(),
        ));
    }

    let logo = imageops::resize(&logo.to_rgba8(), logo_size, logo_size, FilterType::Lanczos3);

    let x = (qr_w - logo_size) / 2;
    let y = (qr_h - logo_size) / 2;

    let mut canvas: RgbaImage = DynamicImage::ImageRgb8(qr.clone()).to_rgba8();
    paint_clear_space(&mut canvas, x, y, logo_size);
    imageops::overlay(&mut canvas, &logo, x as i64, y as i64);

    tracing::debug!(logo_size, x, y, "Composited logo onto QR bitmap");

    // Flatten before handoff; save-to-file and print consumers expect no alpha.
    Ok(DynamicImage::ImageRgba8(canvas).to_rgb8())
}

fn paint_clear_space(canvas: &mut RgbaImage, x: u32, y: u32, logo_size: u32) {
    let x0 = x.saturating_sub(CLEAR_SPACE_PX);
    let y0 = y.saturating_sub(CLEAR_SPACE_PX);
    let x1 = (x + logo_size + CLEAR_SPACE_PX).min(canvas.width());
    let y1 = (y + logo_size + CLEAR_SPACE_PX).min(canvas.height());

    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px, py, Rgba([255, 255, 255, 255]));
        }
    }
}
