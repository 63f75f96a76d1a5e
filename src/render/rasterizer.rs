//! Payload-to-bitmap QR rasterization

use crate::error::{Error, Result};
use crate::render::{ErrorCorrection, RenderOptions};
use image::{DynamicImage, GrayImage, Luma, imageops};
use qrcode::QrCode;
use qrcode::types::QrError;

/// Rasterize an encoded payload into an RGB module bitmap.
///
/// The symbol is rendered at `module_size` pixels per module with a white
/// quiet zone of `border` modules on every side. A payload that exceeds the
/// capacity of the chosen correction tier fails with
/// [`Error::Capacity`] rather than being truncated.
pub fn rasterize(
    payload: &str,
    options: &RenderOptions,
    error_correction: ErrorCorrection,
) -> Result<image::RgbImage> {
    if options.module_size == 0 {
        return Err(Error::Config("Module size must be at least 1".to_string()));
    }

    let code = QrCode::with_error_correction_level(
        payload.as_bytes(),
        error_correction.to_ec_level(),
    )
    .map_err(|e| match e {
        QrError::DataTooLong => Error::Capacity(format!(
            "{} bytes exceed the {:?}-tier symbol capacity",
            payload.len(),
            error_correction
        )),
        other => Error::Validation(format!("Payload cannot be QR-encoded: {other:?}")),
    })?;

    // The built-in quiet zone is fixed at four modules; render without it and
    // pad with the caller's border instead.
    let symbol = code
        .render::<Luma<u8>>()
        .module_dimensions(options.module_size, options.module_size)
        .quiet_zone(false)
        .build();

    let border_px = options.border * options.module_size;
    let mut canvas = GrayImage::from_pixel(
        symbol.width() + 2 * border_px,
        symbol.height() + 2 * border_px,
        Luma([255]),
    );
    imageops::replace(&mut canvas, &symbol, border_px as i64, border_px as i64);

    tracing::debug!(
        payload_bytes = payload.len(),
        version = ?code.version(),
        side_px = canvas.width(),
        "Rasterized QR symbol"
    );

    Ok(DynamicImage::ImageLuma8(canvas).to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_follow_module_size_and_border() {
        let options = RenderOptions {
            module_size: 4,
            border: 2,
            ..Default::default()
        };
        let image = rasterize("hello", &options, ErrorCorrection::Low).unwrap();

        // Smallest symbol is 21 modules per side, plus 2 border modules each way.
        assert_eq!(image.width(), (21 + 4) * 4);
        assert_eq!(image.width(), image.height());
    }

    #[test]
    fn test_border_is_white() {
        let options = RenderOptions {
            module_size: 4,
            border: 2,
            ..Default::default()
        };
        let image = rasterize("hello", &options, ErrorCorrection::Low).unwrap();
        for offset in 0..8 {
            assert_eq!(image.get_pixel(offset, 0).0, [255, 255, 255]);
            assert_eq!(image.get_pixel(0, offset).0, [255, 255, 255]);
        }
    }

    #[test]
    fn test_oversized_payload_is_capacity_error() {
        let payload = "x".repeat(8000);
        let result = rasterize(&payload, &RenderOptions::default(), ErrorCorrection::High);
        assert!(matches!(result, Err(Error::Capacity(_))));
    }

    #[test]
    fn test_zero_module_size_rejected() {
        let options = RenderOptions {
            module_size: 0,
            ..Default::default()
        };
        let result = rasterize("hello", &options, ErrorCorrection::Low);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_high_tier_grows_symbol() {
        let options = RenderOptions {
            module_size: 1,
            border: 0,
            ..Default::default()
        };
        let payload = "https://example.com/some/longer/path";
        let low = rasterize(payload, &options, ErrorCorrection::Low).unwrap();
        let high = rasterize(payload, &options, ErrorCorrection::High).unwrap();
        assert!(high.width() > low.width());
    }
}
