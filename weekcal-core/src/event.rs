//! Weekly event records.
//!
//! An event repeats every week on one weekday at one time. Where it happens is
//! a `Venue`, which ties the modality to exactly one of location or remote URL.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{WeekcalError, WeekcalResult};

/// Display format for event times.
pub const TIME_FORMAT: &str = "%H:%M";

/// Day of the week, in column order (the week starts on Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    /// Column position, 0 for Sunday.
    pub fn column(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = WeekcalError;

    fn from_str(s: &str) -> WeekcalResult<Self> {
        let lower = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == lower)
            .ok_or_else(|| WeekcalError::InvalidField {
                field: "weekday",
                message: format!("unknown weekday \"{}\"", s),
            })
    }
}

/// Whether an event happens in person or remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    #[default]
    InPerson,
    Remote,
}

impl Modality {
    pub const ALL: [Modality; 2] = [Modality::InPerson, Modality::Remote];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::InPerson => "in-person",
            Modality::Remote => "remote",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = WeekcalError;

    fn from_str(s: &str) -> WeekcalResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "in-person" => Ok(Modality::InPerson),
            "remote" => Ok(Modality::Remote),
            _ => Err(WeekcalError::InvalidField {
                field: "modality",
                message: format!("expected \"in-person\" or \"remote\", got \"{}\"", s),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Academic,
    Work,
    Personal,
    Social,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Academic,
        Category::Work,
        Category::Personal,
        Category::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Social => "social",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = WeekcalError;

    fn from_str(s: &str) -> WeekcalResult<Self> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| WeekcalError::InvalidField {
                field: "category",
                message: format!("unknown category \"{}\"", s),
            })
    }
}

/// Where an event takes place. Holding the place inside the modality variant
/// means a record can never carry both a location and a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Venue {
    InPerson { location: String },
    Remote { url: String },
}

impl Venue {
    pub fn modality(&self) -> Modality {
        match self {
            Venue::InPerson { .. } => Modality::InPerson,
            Venue::Remote { .. } => Modality::Remote,
        }
    }
}

/// A recurring weekly event.
///
/// Serializes flat, with `modality`, `location` and `remote_url` fields, the
/// irrelevant one of the last two being `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawEventRecord", try_from = "RawEventRecord")]
pub struct EventRecord {
    pub name: String,
    pub weekday: Weekday,
    pub time: NaiveTime,
    pub venue: Venue,
    pub category: Category,
    /// Free-form attendee list; absent when left blank
    pub attendees: Option<String>,
}

impl EventRecord {
    pub fn modality(&self) -> Modality {
        self.venue.modality()
    }

    pub fn location(&self) -> Option<&str> {
        match &self.venue {
            Venue::InPerson { location } => Some(location),
            Venue::Remote { .. } => None,
        }
    }

    pub fn remote_url(&self) -> Option<&str> {
        match &self.venue {
            Venue::Remote { url } => Some(url),
            Venue::InPerson { .. } => None,
        }
    }

    /// Time as shown on cards and in the form, e.g. "09:00".
    pub fn time_label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.weekday, self.time_label())
    }
}

/// Parse an `HH:MM` time as entered in the form.
pub fn parse_time(input: &str) -> WeekcalResult<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT).map_err(|_| WeekcalError::InvalidField {
        field: "time",
        message: format!("expected HH:MM, got \"{}\"", input),
    })
}

#[derive(Serialize, Deserialize)]
struct RawEventRecord {
    name: String,
    weekday: Weekday,
    time: String,
    modality: Modality,
    location: Option<String>,
    remote_url: Option<String>,
    category: Category,
    attendees: Option<String>,
}

impl From<EventRecord> for RawEventRecord {
    fn from(record: EventRecord) -> Self {
        let time = record.time_label();
        let modality = record.modality();
        let (location, remote_url) = match record.venue {
            Venue::InPerson { location } => (Some(location), None),
            Venue::Remote { url } => (None, Some(url)),
        };

        RawEventRecord {
            name: record.name,
            weekday: record.weekday,
            time,
            modality,
            location,
            remote_url,
            category: record.category,
            attendees: record.attendees,
        }
    }
}

impl TryFrom<RawEventRecord> for EventRecord {
    type Error = WeekcalError;

    fn try_from(raw: RawEventRecord) -> WeekcalResult<Self> {
        let venue = match (raw.modality, raw.location, raw.remote_url) {
            (Modality::InPerson, Some(location), None) => Venue::InPerson { location },
            (Modality::Remote, None, Some(url)) => Venue::Remote { url },
            (modality, _, _) => {
                return Err(WeekcalError::Serialization(format!(
                    "{} event must set exactly {}",
                    modality,
                    match modality {
                        Modality::InPerson => "location",
                        Modality::Remote => "remote_url",
                    }
                )));
            }
        };

        Ok(EventRecord {
            name: raw.name,
            weekday: raw.weekday,
            time: parse_time(&raw.time)?,
            venue,
            category: raw.category,
            attendees: raw.attendees,
        })
    }
}
