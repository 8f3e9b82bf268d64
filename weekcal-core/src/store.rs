//! Positional event store.
//!
//! Records are identified by their index. There is no deletion, so an index
//! handed out by `append` stays valid for the lifetime of the store.

use serde::Serialize;

use crate::event::EventRecord;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct EventStore {
    events: Vec<EventRecord>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the end and return its index.
    pub fn append(&mut self, record: EventRecord) -> usize {
        self.events.push(record);
        self.events.len() - 1
    }

    /// Overwrite the record at `index`, returning the previous one.
    /// Out-of-bounds indices are ignored and yield `None`.
    pub fn replace(&mut self, index: usize, record: EventRecord) -> Option<EventRecord> {
        let slot = self.events.get_mut(index)?;
        Some(std::mem::replace(slot, record))
    }

    pub fn get(&self, index: usize) -> Option<&EventRecord> {
        self.events.get(index)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Records with their indices, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &EventRecord)> {
        self.events.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, Venue, Weekday};
    use chrono::NaiveTime;

    fn record(name: &str) -> EventRecord {
        EventRecord {
            name: name.into(),
            weekday: Weekday::Wednesday,
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            venue: Venue::InPerson {
                location: "Library".into(),
            },
            category: Category::Personal,
            attendees: None,
        }
    }

    #[test]
    fn append_returns_consecutive_indices() {
        let mut store = EventStore::new();
        assert_eq!(store.append(record("a")), 0);
        assert_eq!(store.append(record("b")), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().name, "b");
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = EventStore::new();
        store.append(record("a"));
        store.append(record("b"));

        let previous = store.replace(0, record("c")).unwrap();

        assert_eq!(previous.name, "a");
        assert_eq!(store.get(0).unwrap().name, "c");
        assert_eq!(store.get(1).unwrap().name, "b");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_out_of_bounds_is_noop() {
        let mut store = EventStore::new();
        store.append(record("a"));

        assert!(store.replace(3, record("z")).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().name, "a");
    }

    #[test]
    fn get_missing_index_is_none() {
        let store = EventStore::new();
        assert!(store.is_empty());
        assert!(store.get(0).is_none());
    }

    #[test]
    fn iter_follows_insertion_order() {
        let mut store = EventStore::new();
        store.append(record("first"));
        store.append(record("second"));

        let names: Vec<_> = store.iter().map(|(i, r)| (i, r.name.as_str())).collect();
        assert_eq!(names, vec![(0, "first"), (1, "second")]);
    }
}
