//! QR rasterization and logo compositing
//!
//! The rasterizer turns an encoded payload string into a module bitmap; the
//! compositor embeds an optional brand logo without corrupting the module
//! structure beyond the error-correction budget.

pub mod compositor;
pub mod rasterizer;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// QR error-correction tier
///
/// `Low` tolerates small damage and yields denser codes; `High` roughly
/// doubles the byte-recovery budget and is mandatory whenever a logo is
/// overlaid on the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// ~7% of the symbol may be damaged
    #[default]
    Low,
    /// ~30% of the symbol may be damaged
    High,
}

impl ErrorCorrection {
    /// Parse a tier identifier (case-insensitive) from a string slice.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }

    pub(crate) fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            Self::Low => qrcode::EcLevel::L,
            Self::High => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value)
            .ok_or_else(|| format!("Unsupported correction tier '{value}', expected 'low' or 'high'"))
    }
}

/// Rendering parameters for one generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Edge length of one QR module in pixels (must be at least 1)
    pub module_size: u32,
    /// Quiet-zone width around the symbol, in modules
    pub border: u32,
    /// Requested correction tier; forced to `High` when a logo is present
    pub error_correction: ErrorCorrection,
    /// Optional path to a logo image to embed at the center
    pub logo: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_size: 10,
            border: 4,
            error_correction: ErrorCorrection::Low,
            logo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parsing() {
        assert_eq!(ErrorCorrection::parse("High"), Some(ErrorCorrection::High));
        assert_eq!(ErrorCorrection::parse("l"), Some(ErrorCorrection::Low));
        assert_eq!(ErrorCorrection::parse("medium"), None);
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.module_size, 10);
        assert_eq!(options.border, 4);
        assert_eq!(options.error_correction, ErrorCorrection::Low);
        assert!(options.logo.is_none());
    }
}
