//! QR Studio core - payload templating and logo-badged QR rendering
//!
//! This library turns structured user intent (a contact, a Wi-Fi credential,
//! a calendar event, a geolocation, a message) into a standards-compliant
//! text payload and rasterizes it into a scannable QR image, optionally with
//! a centered logo overlay.
//!
//! # Features
//!
//! - **Format builders**: WIFI-QR, vCard 3.0, iCalendar, `mailto:`, `wa.me`,
//!   and `geo:` grammars with per-kind field validation
//! - **Template registry**: static field schemas for driving a form UI
//! - **Logo compositing**: Lanczos-resampled center logo with a clear-space
//!   pad, with the correction tier forced to `High` automatically
//! - **Synchronous**: no runtime, no I/O beyond logo load and PNG save
//!
//! # Example
//!
//! ```no_run
//! use qrstudio::{FieldSet, PayloadKind, RenderOptions, generate};
//!
//! fn main() -> qrstudio::Result<()> {
//!     let fields = FieldSet::new()
//!         .with("ssid", "Home")
//!         .with("password", "secret1");
//!
//!     let result = generate(PayloadKind::WifiCredential, &fields, &RenderOptions::default())?;
//!
//!     println!("Encoded: {}", result.payload);
//!     result.save_png("wifi_qr.png".as_ref())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod payload;
pub mod registry;
pub mod render;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{LogRotation, LoggingOptions, RenderDefaults, StudioConfig};
pub use generator::{GeneratedQr, generate};
pub use payload::{
    CalendarEvent, Clock, ContactCard, EmailMessage, FieldSet, GeoLocation, PlainText,
    SystemClock, WhatsAppMessage, WifiCredential, WifiSecurity,
};
pub use registry::{FieldDescriptor, PayloadKind, Template};
pub use render::{ErrorCorrection, RenderOptions};
