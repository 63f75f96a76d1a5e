//! Template registry mapping payload kinds to field schemas and builders
//!
//! The registry is the static, total table the UI collaborator drives: every
//! [`PayloadKind`] resolves to an ordered list of [`FieldDescriptor`]s (for
//! rendering inputs) and to its format builder via an exhaustive match, so
//! adding a kind is a compile-time-checked extension rather than a runtime
//! dictionary probe.

use crate::error::{Error, Result};
use crate::payload::{
    CalendarEvent, ContactCard, EmailMessage, FieldSet, GeoLocation, PlainText, WhatsAppMessage,
    WifiCredential,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of payload kinds QR Studio can encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    /// Free-form text or URL
    PlainText,
    /// Wi-Fi network credential
    WifiCredential,
    /// vCard 3.0 contact
    ContactCard,
    /// WhatsApp click-to-chat link
    WhatsAppMessage,
    /// Prefilled `mailto:` email
    EmailMessage,
    /// Geographic coordinates
    GeoLocation,
    /// iCalendar event
    CalendarEvent,
}

/// Label/key pair describing one input field of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Human-readable label for the UI
    pub label: &'static str,
    /// Field key looked up in the [`FieldSet`]
    pub key: &'static str,
}

/// Static schema for one payload kind
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Display name of the template
    pub name: &'static str,
    /// Ordered field descriptors, as the UI should render them
    pub fields: &'static [FieldDescriptor],
}

const fn field(label: &'static str, key: &'static str) -> FieldDescriptor {
    FieldDescriptor { label, key }
}

static PLAIN_TEXT: Template = Template {
    name: "URL / Text",
    fields: &[field("Content", "text")],
};

static WIFI: Template = Template {
    name: "Wi-Fi",
    fields: &[
        field("SSID", "ssid"),
        field("Password", "password"),
        field("Security", "security"),
        field("Hidden network", "hidden"),
    ],
};

static CONTACT: Template = Template {
    name: "Contact (vCard)",
    fields: &[
        field("First name", "first"),
        field("Last name", "last"),
        field("Phone", "phone"),
        field("Email", "email"),
        field("Company", "org"),
        field("Job title", "title"),
        field("Website", "url"),
    ],
};

static WHATSAPP: Template = Template {
    name: "WhatsApp",
    fields: &[
        field("Phone (country code)", "phone"),
        field("Message", "text"),
    ],
};

static EMAIL: Template = Template {
    name: "Email",
    fields: &[
        field("To", "to"),
        field("Subject", "subject"),
        field("Message", "body"),
    ],
};

static GEO: Template = Template {
    name: "Location",
    fields: &[field("Latitude", "lat"), field("Longitude", "lon")],
};

static EVENT: Template = Template {
    name: "Event (iCalendar)",
    fields: &[
        field("Title", "summary"),
        field("Venue", "location"),
        field("Description", "description"),
        field("Start date (YYYY-MM-DD)", "date_start"),
        field("Start time (HH:MM)", "time_start"),
        field("End date (YYYY-MM-DD)", "date_end"),
        field("End time (HH:MM)", "time_end"),
    ],
};

impl PayloadKind {
    /// All payload kinds, in UI presentation order
    pub const ALL: [PayloadKind; 7] = [
        PayloadKind::PlainText,
        PayloadKind::WifiCredential,
        PayloadKind::ContactCard,
        PayloadKind::WhatsAppMessage,
        PayloadKind::EmailMessage,
        PayloadKind::GeoLocation,
        PayloadKind::CalendarEvent,
    ];

    /// Field schema for this kind
    pub fn template(&self) -> &'static Template {
        match self {
            PayloadKind::PlainText => &PLAIN_TEXT,
            PayloadKind::WifiCredential => &WIFI,
            PayloadKind::ContactCard => &CONTACT,
            PayloadKind::WhatsAppMessage => &WHATSAPP,
            PayloadKind::EmailMessage => &EMAIL,
            PayloadKind::GeoLocation => &GEO,
            PayloadKind::CalendarEvent => &EVENT,
        }
    }

    /// Build the encoded payload text for this kind from a field set.
    ///
    /// Validation failures are returned as
    /// [`Error::Validation`](crate::Error::Validation); the output string is
    /// byte-identical across calls with the same fields (CalendarEvent's
    /// `DTSTAMP`/`UID` excepted).
    pub fn build(&self, fields: &FieldSet) -> Result<String> {
        match self {
            PayloadKind::PlainText => Ok(PlainText::from_fields(fields)?.encode()),
            PayloadKind::WifiCredential => Ok(WifiCredential::from_fields(fields)?.encode()),
            PayloadKind::ContactCard => Ok(ContactCard::from_fields(fields)?.encode()),
            PayloadKind::WhatsAppMessage => Ok(WhatsAppMessage::from_fields(fields)?.encode()),
            PayloadKind::EmailMessage => Ok(EmailMessage::from_fields(fields)?.encode()),
            PayloadKind::GeoLocation => Ok(GeoLocation::from_fields(fields)?.encode()),
            PayloadKind::CalendarEvent => Ok(CalendarEvent::from_fields(fields)?.encode()),
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template().name)
    }
}

impl FromStr for PayloadKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "plain_text" | "url" => Ok(PayloadKind::PlainText),
            "wifi" | "wifi_credential" => Ok(PayloadKind::WifiCredential),
            "contact" | "vcard" | "contact_card" => Ok(PayloadKind::ContactCard),
            "whatsapp" | "whats_app_message" => Ok(PayloadKind::WhatsAppMessage),
            "email" | "email_message" => Ok(PayloadKind::EmailMessage),
            "geo" | "location" | "geo_location" => Ok(PayloadKind::GeoLocation),
            "event" | "calendar" | "calendar_event" => Ok(PayloadKind::CalendarEvent),
            other => Err(Error::Config(format!("Unknown payload kind '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_template() {
        for kind in PayloadKind::ALL {
            let template = kind.template();
            assert!(!template.name.is_empty());
            assert!(!template.fields.is_empty());
        }
    }

    #[test]
    fn test_field_keys_unique_per_template() {
        for kind in PayloadKind::ALL {
            let keys: Vec<_> = kind.template().fields.iter().map(|f| f.key).collect();
            let mut deduped = keys.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(keys.len(), deduped.len(), "{kind} has duplicate field keys");
        }
    }

    #[test]
    fn test_build_dispatches_to_kind() {
        let fields = FieldSet::new().with("lat", "1.5").with("lon", "2.5");
        let payload = PayloadKind::GeoLocation.build(&fields).unwrap();
        assert_eq!(payload, "geo:1.5,2.5");
    }

    #[test]
    fn test_build_is_deterministic() {
        let fields = FieldSet::new()
            .with("first", "Ada")
            .with("email", "ada@example.com");
        let first = PayloadKind::ContactCard.build(&fields).unwrap();
        let second = PayloadKind::ContactCard.build(&fields).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_kind_parses_from_aliases() {
        assert_eq!("wifi".parse::<PayloadKind>().unwrap(), PayloadKind::WifiCredential);
        assert_eq!("vcard".parse::<PayloadKind>().unwrap(), PayloadKind::ContactCard);
        assert!("barcode".parse::<PayloadKind>().is_err());
    }
}
