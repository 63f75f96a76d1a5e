//! WhatsApp click-to-chat payload (`wa.me` URL)

use crate::error::{Error, Result};
use crate::payload::{FieldSet, encode_message_text};

/// A WhatsApp chat link with an optional prefilled message
///
/// The phone number is reduced to its digits (country code included); the
/// `wa.me` scheme accepts no punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppMessage {
    /// Digits-only phone number, country code first
    pub phone_digits: String,
    /// Optional prefilled message, empty for none
    pub message: String,
}

impl WhatsAppMessage {
    /// Convert a field set (`phone`, `text`) into a chat link record
    pub fn from_fields(fields: &FieldSet) -> Result<Self> {
        let phone = fields.trimmed("phone");
        if phone.is_empty() {
            return Err(Error::Validation(
                "WhatsApp: phone number (with country code) is required".to_string(),
            ));
        }

        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(Error::Validation(
                "WhatsApp: phone number contains no digits".to_string(),
            ));
        }

        Ok(Self {
            phone_digits: digits,
            message: fields.value("text").to_string(),
        })
    }

    /// Serialize to a `https://wa.me/...` URL
    pub fn encode(&self) -> String {
        let encoded = encode_message_text(&self.message);
        if encoded.is_empty() {
            format!("https://wa.me/{}", self.phone_digits)
        } else {
            format!("https://wa.me/{}?text={}", self.phone_digits, encoded)
        }
    }
}
