//! Contact card payload (vCard 3.0)

use crate::error::{Error, Result};
use crate::payload::FieldSet;

/// A contact card serialized as a minimal vCard 3.0 block
///
/// At least one of first/last name must be present; every other field is
/// optional and emitted only when non-empty, in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactCard {
    /// Given name(s)
    pub first: String,
    /// Family name(s)
    pub last: String,
    /// Mobile phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Organisation
    pub org: String,
    /// Job title
    pub title: String,
    /// Website URL
    pub url: String,
}

impl ContactCard {
    /// Convert a field set into a contact record
    pub fn from_fields(fields: &FieldSet) -> Result<Self> {
        let first = fields.trimmed("first");
        let last = fields.trimmed("last");

        if first.is_empty() && last.is_empty() {
            return Err(Error::Validation(
                "Contact: first or last name is required".to_string(),
            ));
        }

        Ok(Self {
            first: first.to_string(),
            last: last.to_string(),
            phone: fields.trimmed("phone").to_string(),
            email: fields.trimmed("email").to_string(),
            org: fields.trimmed("org").to_string(),
            title: fields.trimmed("title").to_string(),
            url: fields.trimmed("url").to_string(),
        })
    }

    /// Serialize to a vCard 3.0 block
    pub fn encode(&self) -> String {
        let display_name = format!("{} {}", self.first, self.last);

        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("FN:{}", display_name.trim()),
            format!("N:{};{};;;", self.last, self.first),
        ];

        if !self.org.is_empty() {
            lines.push(format!("ORG:{}", self.org));
        }
        if !self.title.is_empty() {
            lines.push(format!("TITLE:{}", self.title));
        }
        if !self.phone.is_empty() {
            lines.push(format!("TEL;TYPE=CELL:{}", self.phone));
        }
        if !self.email.is_empty() {
            lines.push(format!("EMAIL:{}", self.email));
        }
        if !self.url.is_empty() {
            lines.push(format!("URL:{}", self.url));
        }

        lines.push("END:VCARD".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_card_field_order() {
        let fields = FieldSet::new()
            .with("first", "Ada")
            .with("last", "Lovelace")
            .with("phone", "+44 20 1234")
            .with("email", "ada@example.com")
            .with("org", "Analytical Engines")
            .with("title", "Programmer")
            .with("url", "https://example.com");
        let card = ContactCard::from_fields(&fields).unwrap();
        assert_eq!(
            card.encode(),
            "BEGIN:VCARD\n\
             VERSION:3.0\n\
             FN:Ada Lovelace\n\
             N:Lovelace;Ada;;;\n\
             ORG:Analytical Engines\n\
             TITLE:Programmer\n\
             TEL;TYPE=CELL:+44 20 1234\n\
             EMAIL:ada@example.com\n\
             URL:https://example.com\n\
             END:VCARD"
        );
    }

    #[test]
    fn test_last_name_only() {
        let card = ContactCard::from_fields(&FieldSet::new().with("last", "Lovelace")).unwrap();
        let encoded = card.encode();
        assert!(encoded.contains("FN:Lovelace\n"));
        assert!(encoded.contains("N:Lovelace;;;;"));
    }

    #[test]
    fn test_optional_lines_skipped_when_empty() {
        let card = ContactCard::from_fields(&FieldSet::new().with("first", "Ada")).unwrap();
        let encoded = card.encode();
        assert!(!encoded.contains("ORG:"));
        assert!(!encoded.contains("TEL;"));
        assert!(!encoded.contains("EMAIL:"));
        assert!(encoded.ends_with("END:VCARD"));
    }

    #[test]
    fn test_both_names_missing_rejected() {
        let fields = FieldSet::new().with("first", " ").with("phone", "123");
        assert!(matches!(
            ContactCard::from_fields(&fields),
            Err(Error::Validation(_))
        ));
    }
}
