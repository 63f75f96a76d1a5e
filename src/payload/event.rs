//! Calendar event payload (iCalendar VEVENT)

use crate::error::{Error, Result};
use crate::payload::FieldSet;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

/// Timestamp format used for DTSTAMP/DTSTART/DTEND
const ICAL_TIMESTAMP: &str = "%Y%m%dT%H%M%SZ";

/// Source of the current time for `DTSTAMP` generation.
///
/// Production code uses [`SystemClock`]; tests inject a fixed clock to make
/// the encoded block reproducible.
pub trait Clock {
    /// Current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall-clock backed [`Clock`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A calendar event serialized as a minimal VCALENDAR/VEVENT block
///
/// Known limitation: start/end are the user's naive local wall-clock input,
/// yet they are emitted with a `Z` (UTC) suffix and no timezone conversion.
/// This matches what common scanners expect from simple event QR codes, so
/// the behavior is preserved rather than corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Event title
    pub summary: String,
    /// Optional venue, empty for none
    pub location: String,
    /// Optional free-form description, empty for none
    pub description: String,
    /// Event start (naive wall clock)
    pub start: NaiveDateTime,
    /// Event end (naive wall clock)
    pub end: NaiveDateTime,
}

impl CalendarEvent {
    /// Convert a field set (`summary`, `location`, `description`,
    /// `date_start`, `time_start`, `date_end`, `time_end`) into an event
    /// record
    pub fn from_fields(fields: &FieldSet) -> Result<Self> {
        let summary = fields.trimmed("summary");
        if summary.is_empty() {
            return Err(Error::Validation("Event: title is required".to_string()));
        }

        let date_start = fields.trimmed("date_start");
        let time_start = fields.trimmed("time_start");
        let date_end = fields.trimmed("date_end");
        let time_end = fields.trimmed("time_end");

        if date_start.is_empty() || time_start.is_empty() || date_end.is_empty() || time_end.is_empty()
        {
            return Err(Error::Validation(
                "Event: start and end date/time are required".to_string(),
            ));
        }

        Ok(Self {
            summary: summary.to_string(),
            location: fields.trimmed("location").to_string(),
            description: fields.trimmed("description").to_string(),
            start: parse_date_time(date_start, time_start)?,
            end: parse_date_time(date_end, time_end)?,
        })
    }

    /// Serialize to an iCalendar block using the system clock for `DTSTAMP`
    pub fn encode(&self) -> String {
        self.encode_at(&SystemClock)
    }

    /// Serialize to an iCalendar block with an injected clock
    pub fn encode_at(&self, clock: &dyn Clock) -> String {
        let dtstamp = clock.now_utc().format(ICAL_TIMESTAMP);
        let uid = Uuid::new_v4();

        let mut lines = vec![
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            "PRODID:-//QR Studio//EN//".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{uid}@qrstudio"),
            format!("DTSTAMP:{dtstamp}"),
            format!("DTSTART:{}", self.start.format(ICAL_TIMESTAMP)),
            format!("DTEND:{}", self.end.format(ICAL_TIMESTAMP)),
            format!("SUMMARY:{}", self.summary),
        ];

        if !self.location.is_empty() {
            lines.push(format!("LOCATION:{}", self.location));
        }
        if !self.description.is_empty() {
            // iCalendar forbids raw newlines inside a property value
            lines.push(format!("DESCRIPTION:{}", self.description.replace('\n', "\\n")));
        }

        lines.push("END:VEVENT".to_string());
        lines.push("END:VCALENDAR".to_string());
        lines.join("\n")
    }
}

fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        Error::Validation(format!("Event: '{date}' is not a valid date (YYYY-MM-DD)"))
    })?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| {
        Error::Validation(format!("Event: '{time}' is not a valid time (HH:MM, 24h)"))
    })?;
    Ok(date.and_time(time))
}
