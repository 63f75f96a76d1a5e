//! Payload orchestrator: build, rasterize, composite, persist

use crate::error::{Error, Result};
use crate::payload::FieldSet;
use crate::registry::PayloadKind;
use crate::render::{ErrorCorrection, RenderOptions, compositor, rasterizer};
use std::path::Path;

/// A finished generation result.
///
/// Carries both the image and the exact text that was encoded: the displayed
/// payload is the caller's only way to audit what actually went into the
/// symbol. Ownership transfers fully to the caller; the orchestrator keeps no
/// history.
#[derive(Debug, Clone)]
pub struct GeneratedQr {
    /// The exact text encoded into the symbol
    pub payload: String,
    /// The correction tier that was actually used
    pub error_correction: ErrorCorrection,
    /// The final bitmap, logo included if one was requested
    pub image: image::RgbImage,
}

impl GeneratedQr {
    /// Save the image as a lossless PNG at `path`.
    ///
    /// A failure here is purely local to the save step and does not
    /// invalidate the in-memory image.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| Error::Persistence(format!("{}: {e}", path.display())))
    }
}

/// Generate a QR code for `kind` from `fields` under `options`.
///
/// Builder validation errors propagate untouched; an empty encoded payload is
/// rejected as [`Error::EmptyContent`]. When a logo is present the correction
/// tier is forced to [`ErrorCorrection::High`] regardless of the caller's
/// choice, and a logo failure fails the whole call rather than silently
/// substituting a logo-less image.
pub fn generate(kind: PayloadKind, fields: &FieldSet, options: &RenderOptions) -> Result<GeneratedQr> {
    let payload = kind.build(fields)?;
    if payload.is_empty() {
        return Err(Error::EmptyContent);
    }

    let error_correction = effective_error_correction(options);
    let qr = rasterizer::rasterize(&payload, options, error_correction)?;

    let image = match &options.logo {
        Some(path) => {
            let logo = compositor::load_logo(path)?;
            compositor::composite(&qr, &logo)?
        }
        None => qr,
    };

    tracing::info!(
        kind = %kind,
        payload_bytes = payload.len(),
        ?error_correction,
        logo = options.logo.is_some(),
        "Generated QR code"
    );

    Ok(GeneratedQr {
        payload,
        error_correction,
        image,
    })
}

/// The correction tier a request will actually use: the caller's choice, or
/// `High` whenever a logo will occlude modules.
pub fn effective_error_correction(options: &RenderOptions) -> ErrorCorrection {
    if options.logo.is_some() {
        ErrorCorrection::High
    } else {
        options.error_correction
    }
}
