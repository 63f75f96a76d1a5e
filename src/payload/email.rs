//! Email payload (`mailto:` URL)

use crate::error::{Error, Result};
use crate::payload::{FieldSet, encode_query_param};

/// A prefilled email serialized as a `mailto:` URL
///
/// Subject and body are appended as query parameters only when non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Optional subject line, empty for none
    pub subject: String,
    /// Optional message body, empty for none
    pub body: String,
}

impl EmailMessage {
    /// Convert a field set (`to`, `subject`, `body`) into an email record
    pub fn from_fields(fields: &FieldSet) -> Result<Self> {
        let to = fields.trimmed("to");
        if to.is_empty() {
            return Err(Error::Validation(
                "Email: recipient address is required".to_string(),
            ));
        }

        Ok(Self {
            to: to.to_string(),
            subject: fields.value("subject").to_string(),
            body: fields.value("body").to_string(),
        })
    }

    /// Serialize to a `mailto:` URL
    pub fn encode(&self) -> String {
        let mut params = Vec::new();
        if !self.subject.is_empty() {
            params.push(format!("subject={}", encode_query_param(&self.subject)));
        }
        if !self.body.is_empty() {
            params.push(format!("body={}", encode_query_param(&self.body)));
        }

        if params.is_empty() {
            format!("mailto:{}", self.to)
        } else {
            format!("mailto:{}?{}", self.to, params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_and_body() {
        let fields = FieldSet::new()
            .with("to", "ada@example.com")
            .with("subject", "Hello there")
            .with("body", "First line\nsecond");
        let record = EmailMessage::from_fields(&fields).unwrap();
        assert_eq!(
            record.encode(),
            "mailto:ada@example.com?subject=Hello%20there&body=First%20line%0Asecond"
        );
    }

    #[test]
    fn test_subject_only() {
        let fields = FieldSet::new()
            .with("to", "ada@example.com")
            .with("subject", "Hi");
        let record = EmailMessage::from_fields(&fields).unwrap();
        assert_eq!(record.encode(), "mailto:ada@example.com?subject=Hi");
    }

    #[test]
    fn test_bare_mailto() {
        let record =
            EmailMessage::from_fields(&FieldSet::new().with("to", "ada@example.com")).unwrap();
        assert_eq!(record.encode(), "mailto:ada@example.com");
    }

    #[test]
    fn test_missing_recipient_rejected() {
        let fields = FieldSet::new().with("subject", "Hi");
        assert!(matches!(
            EmailMessage::from_fields(&fields),
            Err(Error::Validation(_))
        ));
    }
}
