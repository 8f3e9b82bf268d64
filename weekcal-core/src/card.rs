//! Cards: the rendered form of one event in its weekday column.

use std::fmt;

use crate::event::{EventRecord, Modality, Weekday};
use crate::palette::Palette;

/// Identifies the card of the record at a store index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

impl CardId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event-card-{}", self.0)
    }
}

/// One labelled detail line on a card, e.g. `Time: 09:00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for CardLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub weekday: Weekday,
    /// Background color as `#rrggbb`
    pub background: String,
    pub title: String,
    pub details: Vec<CardLine>,
}

impl Card {
    pub fn from_record(record: &EventRecord, index: usize, palette: &Palette) -> Self {
        let venue = match record.modality() {
            Modality::InPerson => CardLine {
                label: "Location",
                value: record.location().unwrap_or_default().to_string(),
            },
            Modality::Remote => CardLine {
                label: "Remote URL",
                value: record.remote_url().unwrap_or_default().to_string(),
            },
        };

        let details = vec![
            CardLine {
                label: "Time",
                value: record.time_label(),
            },
            CardLine {
                label: "Modality",
                value: record.modality().to_string(),
            },
            venue,
            CardLine {
                label: "Category",
                value: record.category.to_string(),
            },
            CardLine {
                label: "Attendees",
                value: record
                    .attendees
                    .clone()
                    .filter(|a| !a.is_empty())
                    .unwrap_or_else(|| "None".to_string()),
            },
        ];

        Card {
            id: CardId(index),
            weekday: record.weekday,
            background: palette.color_for(record.category.as_str()).to_string(),
            title: record.name.clone(),
            details,
        }
    }

    /// Detail lines as displayed, without the title.
    pub fn detail_lines(&self) -> Vec<String> {
        self.details.iter().map(|line| line.to_string()).collect()
    }

    pub fn shows(&self, text: &str) -> bool {
        self.title == text || self.details.iter().any(|line| line.to_string() == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, Venue};
    use chrono::NaiveTime;

    fn record() -> EventRecord {
        EventRecord {
            name: "Algorithms Lecture".into(),
            weekday: Weekday::Monday,
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            venue: Venue::InPerson {
                location: "Room 4".into(),
            },
            category: Category::Academic,
            attendees: Some("30".into()),
        }
    }

    #[test]
    fn card_id_display() {
        assert_eq!(CardId(3).to_string(), "event-card-3");
    }

    #[test]
    fn in_person_card_lines() {
        let card = Card::from_record(&record(), 0, &Palette::default());
        assert_eq!(card.title, "Algorithms Lecture");
        assert_eq!(card.weekday, Weekday::Monday);
        assert_eq!(card.background, "#e3f2fd");
        assert_eq!(
            card.detail_lines(),
            vec![
                "Time: 09:00",
                "Modality: in-person",
                "Location: Room 4",
                "Category: academic",
                "Attendees: 30",
            ]
        );
    }

    #[test]
    fn remote_card_shows_url() {
        let mut record = record();
        record.venue = Venue::Remote {
            url: "https://example.com".into(),
        };
        let card = Card::from_record(&record, 2, &Palette::default());
        assert_eq!(card.id, CardId(2));
        assert!(card.shows("Remote URL: https://example.com"));
        assert!(!card.detail_lines().iter().any(|l| l.starts_with("Location")));
    }

    #[test]
    fn missing_attendees_show_none() {
        let mut record = record();
        record.attendees = None;
        let card = Card::from_record(&record, 0, &Palette::default());
        assert!(card.shows("Attendees: None"));
    }
}
