//! Payload format builders
//!
//! One submodule per payload kind, each exposing a strongly typed input
//! record with two halves: `from_fields` converts the UI's generic string map
//! into the record (rejecting missing or malformed fields with
//! [`Error::Validation`](crate::Error::Validation)), and `encode` serializes
//! the record into the external text grammar the kind targets (WIFI-QR
//! convention, vCard 3.0, iCalendar, `mailto:` / `wa.me` URL schemes).
//!
//! Builders never mutate their input and are deterministic: encoding the same
//! record twice yields byte-identical output. The single exception is
//! [`CalendarEvent`], whose `DTSTAMP`/`UID` lines depend on the injected
//! [`Clock`].

mod contact;
mod email;
mod event;
mod geo;
mod text;
mod whatsapp;
mod wifi;

pub use contact::ContactCard;
pub use email::EmailMessage;
pub use event::{CalendarEvent, Clock, SystemClock};
pub use geo::GeoLocation;
pub use text::PlainText;
pub use whatsapp::WhatsAppMessage;
pub use wifi::{WifiCredential, WifiSecurity};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::collections::HashMap;

/// A string-keyed field map collected by the UI collaborator.
///
/// Constructed fresh per generation request and read-only to the builders.
/// Missing keys read as the empty string, so builders only distinguish
/// "absent" from "blank" where their grammar requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    values: HashMap<String, String>,
}

impl FieldSet {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Raw value for `key`, or the empty string if absent
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Value for `key` with surrounding whitespace removed
    pub fn trimmed(&self, key: &str) -> &str {
        self.value(key).trim()
    }

    /// Interpret `key` as a boolean flag (`true`, `1`, `on`, case-insensitive)
    pub fn flag(&self, key: &str) -> bool {
        matches!(
            self.value(key).trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "on"
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// Everything outside RFC 3986 unreserved is escaped in query parameters.
const QUERY_PARAM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// Prefilled message text additionally keeps `/` readable.
const MESSAGE_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a URL query parameter value
pub(crate) fn encode_query_param(value: &str) -> String {
    utf8_percent_encode(value, QUERY_PARAM).to_string()
}

/// Percent-encode prefilled message text for a URL query
pub(crate) fn encode_message_text(value: &str) -> String {
    utf8_percent_encode(value, MESSAGE_TEXT).to_string()
}
