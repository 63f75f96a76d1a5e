//! Plain text / URL payload

use crate::error::Result;
use crate::payload::FieldSet;

/// Free-form text or URL payload, encoded verbatim after trimming.
///
/// An empty value is not a builder error: the orchestrator treats an empty
/// encoded payload as a separate "nothing to encode" condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText {
    /// The text to encode
    pub text: String,
}

impl PlainText {
    /// Convert a field set into a plain text record. Never fails.
    pub fn from_fields(fields: &FieldSet) -> Result<Self> {
        Ok(Self {
            text: fields.trimmed("text").to_string(),
        })
    }

    /// The trimmed text, verbatim
    pub fn encode(&self) -> String {
        self.text.clone()
    }
}
