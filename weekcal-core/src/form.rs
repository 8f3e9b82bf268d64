//! The event form: raw field values as entered, plus their validation.

use std::fmt;

use crate::error::WeekcalError;
use crate::event::{Category, EventRecord, Modality, Venue, Weekday, parse_time};
use crate::modality::FieldToggle;

/// Raw values of the event form.
///
/// Select fields are kept as strings so that the form can hold whatever the
/// user picked until `validate` runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub weekday: String,
    pub time: String,
    pub modality: String,
    pub location: String,
    pub remote_url: String,
    pub category: String,
    pub attendees: String,
    pub toggle: FieldToggle,
}

impl Default for EventForm {
    fn default() -> Self {
        EventForm {
            name: String::new(),
            weekday: Weekday::Sunday.to_string(),
            time: String::new(),
            modality: Modality::default().to_string(),
            location: String::new(),
            remote_url: String::new(),
            category: Category::default().to_string(),
            attendees: String::new(),
            toggle: FieldToggle::default(),
        }
    }
}

impl EventForm {
    /// Pre-fill the form from a stored record.
    pub fn from_record(record: &EventRecord) -> Self {
        EventForm {
            name: record.name.clone(),
            weekday: record.weekday.to_string(),
            time: record.time_label(),
            modality: record.modality().to_string(),
            location: record.location().unwrap_or_default().to_string(),
            remote_url: record.remote_url().unwrap_or_default().to_string(),
            category: record.category.to_string(),
            attendees: record.attendees.clone().unwrap_or_default(),
            toggle: FieldToggle::for_modality(record.modality()),
        }
    }

    /// Clear every field back to its default value.
    pub fn reset(&mut self) {
        *self = EventForm::default();
    }

    /// The modality currently selected, falling back to in-person when the
    /// selector holds nothing usable.
    pub fn selected_modality(&self) -> Modality {
        self.modality.parse().unwrap_or_default()
    }

    /// Check required fields and types, then build the record.
    ///
    /// Whichever of location / remote URL is inactive under the current toggle
    /// is left out of the record.
    pub fn validate(&self) -> Result<EventRecord, FormErrors> {
        let mut errors = FormErrors::default();

        let name = required(&mut errors, "name", &self.name);
        let weekday = parse_field::<Weekday>(&mut errors, "weekday", &self.weekday);
        let time = required(&mut errors, "time", &self.time).and_then(|t| match parse_time(t) {
            Ok(time) => Some(time),
            Err(e) => {
                errors.push_error(e);
                None
            }
        });
        let modality = parse_field::<Modality>(&mut errors, "modality", &self.modality);
        let category = parse_field::<Category>(&mut errors, "category", &self.category);

        let location = if self.toggle.location.required {
            required(&mut errors, "location", &self.location)
        } else {
            None
        };
        let remote_url = if self.toggle.remote_url.required {
            required(&mut errors, "remote_url", &self.remote_url).filter(|u| {
                let parsed = url::Url::parse(u.trim());
                if let Err(e) = &parsed {
                    errors.push("remote_url", format!("not a valid URL: {}", e));
                }
                parsed.is_ok()
            })
        } else {
            None
        };

        let (Some(name), Some(weekday), Some(time), Some(modality), Some(category)) =
            (name, weekday, time, modality, category)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let venue = match (modality, location, remote_url) {
            (Modality::InPerson, Some(location), _) => Venue::InPerson {
                location: location.to_string(),
            },
            (Modality::Remote, _, Some(url)) => Venue::Remote {
                url: url.to_string(),
            },
            // Toggle out of step with the selector
            (Modality::InPerson, None, _) => {
                errors.push("location", "is required".to_string());
                return Err(errors);
            }
            (Modality::Remote, _, None) => {
                errors.push("remote_url", "is required".to_string());
                return Err(errors);
            }
        };

        Ok(EventRecord {
            name: name.to_string(),
            weekday,
            time,
            venue,
            category,
            attendees: (!self.attendees.is_empty()).then(|| self.attendees.clone()),
        })
    }
}

/// Only an empty value fails; anything else is kept exactly as typed.
fn required<'a>(errors: &mut FormErrors, field: &'static str, value: &'a str) -> Option<&'a str> {
    if value.is_empty() {
        errors.push(field, "is required".to_string());
        None
    } else {
        Some(value)
    }
}

fn parse_field<T>(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<T>
where
    T: std::str::FromStr<Err = WeekcalError>,
{
    let value = required(errors, field, value)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.push_error(e);
            None
        }
    }
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Every field check that failed during one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    fn push(&mut self, field: &'static str, message: String) {
        self.0.push(FieldError { field, message });
    }

    fn push_error(&mut self, error: WeekcalError) {
        match error {
            WeekcalError::InvalidField { field, message } => self.push(field, message),
            other => self.push("form", other.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        f.write_str(&messages.join(", "))
    }
}

impl std::error::Error for FormErrors {}
