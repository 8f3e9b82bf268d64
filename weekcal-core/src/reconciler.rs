//! Create/edit reconciliation between the form, the store and the cards.
//!
//! The reconciler is in one of two modes:
//! - `Creating`: a valid submit appends a record and places a new card
//! - `Editing(i)`: a valid submit replaces record `i` and swaps its card,
//!   then returns to `Creating`
//!
//! Selecting a card enters `Editing` for its index; the create action always
//! returns to `Creating`, abandoning any unsaved edit. An invalid submit
//! changes nothing.

use tracing::{debug, info, warn};

use crate::card::{Card, CardId};
use crate::event::{EventRecord, Modality};
use crate::form::{EventForm, FormErrors};
use crate::modality::FieldToggle;
use crate::palette::Palette;
use crate::store::EventStore;
use crate::view::{CREATE_TITLE, CalendarView, UPDATE_TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Creating,
    Editing(usize),
}

/// The store plus the index being edited, if any.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    store: EventStore,
    editing: Option<usize>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        match self.editing {
            Some(index) => Mode::Editing(index),
            None => Mode::Creating,
        }
    }
}

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(usize),
    Updated(usize),
    /// The edited index had no record; nothing changed
    Ignored(usize),
}

impl SaveOutcome {
    pub fn index(&self) -> usize {
        match self {
            SaveOutcome::Created(i) | SaveOutcome::Updated(i) | SaveOutcome::Ignored(i) => *i,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    state: EditorState,
    palette: Palette,
}

impl Reconciler {
    pub fn new(palette: Palette) -> Self {
        Reconciler {
            state: EditorState::new(),
            palette,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Bring a freshly loaded view in line with its form's default modality.
    pub fn init<V: CalendarView>(&self, view: &mut V) {
        let modality = view.form().selected_modality();
        view.apply_toggle(FieldToggle::for_modality(modality));
        view.set_modal_title(CREATE_TITLE);
    }

    /// The modality selector changed.
    pub fn select_modality<V: CalendarView>(&self, view: &mut V, modality: Modality) {
        view.form_mut().modality = modality.to_string();
        view.apply_toggle(FieldToggle::for_modality(modality));
    }

    /// The create button: drop any pending edit and open an empty form.
    pub fn start_create<V: CalendarView>(&mut self, view: &mut V) {
        if let Some(index) = self.state.editing.take() {
            debug!(index, "abandoning edit");
        }
        view.form_mut().reset();
        view.set_modal_title(CREATE_TITLE);
        let modality = view.form().selected_modality();
        view.apply_toggle(FieldToggle::for_modality(modality));
        view.open_modal();
    }

    /// A card was selected: load its record into the form for editing.
    ///
    /// Returns `false`, leaving everything untouched, when no record exists
    /// at `index`.
    pub fn start_edit<V: CalendarView>(&mut self, view: &mut V, index: usize) -> bool {
        let Some(record) = self.state.store.get(index) else {
            warn!(index, "no event at index; ignoring edit");
            return false;
        };

        self.state.editing = Some(index);
        *view.form_mut() = EventForm::from_record(record);
        view.apply_toggle(FieldToggle::for_modality(record.modality()));
        view.set_modal_title(UPDATE_TITLE);
        view.open_modal();
        debug!(index, "editing event");
        true
    }

    /// Submit the form.
    ///
    /// On failure the errors are reported to the view and returned; neither
    /// the store nor the board changes and the modal stays open.
    pub fn save<V: CalendarView>(&mut self, view: &mut V) -> Result<SaveOutcome, FormErrors> {
        // Requiredness must follow the modality as submitted
        let modality = view.form().selected_modality();
        view.apply_toggle(FieldToggle::for_modality(modality));

        let record = match view.form().validate() {
            Ok(record) => record,
            Err(errors) => {
                debug!(%errors, "form rejected");
                view.report_errors(&errors);
                return Err(errors);
            }
        };

        let outcome = match self.state.editing.take() {
            Some(index) => {
                if self.update(view, index, record) {
                    SaveOutcome::Updated(index)
                } else {
                    SaveOutcome::Ignored(index)
                }
            }
            None => SaveOutcome::Created(self.create(view, record)),
        };

        view.form_mut().reset();
        view.set_modal_title(CREATE_TITLE);
        view.close_modal();
        Ok(outcome)
    }

    fn create<V: CalendarView>(&mut self, view: &mut V, record: EventRecord) -> usize {
        let card_record = record.clone();
        let index = self.state.store.append(record);
        view.place_card(Card::from_record(&card_record, index, &self.palette));

        info!(index, event = %card_record, "event created");
        match serde_json::to_string(&self.state.store) {
            Ok(json) => debug!(events = %json, "events"),
            Err(e) => warn!(error = %e, "could not serialize events"),
        }
        index
    }

    /// Returns `false` when there was no record at `index` to replace.
    fn update<V: CalendarView>(&mut self, view: &mut V, index: usize, record: EventRecord) -> bool {
        let card = Card::from_record(&record, index, &self.palette);
        if self.state.store.replace(index, record).is_none() {
            warn!(index, "edited event no longer exists; save ignored");
            return false;
        }

        view.remove_card(CardId(index));
        info!(index, "event updated");
        view.place_card(card);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, Weekday};
    use crate::view::Page;

    fn fill(page: &mut Page, name: &str, weekday: &str) {
        page.form.name = name.into();
        page.form.weekday = weekday.into();
        page.form.time = "09:00".into();
        page.form.location = "Room 4".into();
    }

    fn setup() -> (Reconciler, Page) {
        let reconciler = Reconciler::default();
        let mut page = Page::new();
        reconciler.init(&mut page);
        (reconciler, page)
    }

    // --- creating ---

    #[test]
    fn init_applies_default_modality() {
        let (_, page) = setup();
        assert!(page.form.toggle.location.required);
        assert!(!page.form.toggle.remote_url.visible);
        assert_eq!(page.modal.title, CREATE_TITLE);
    }

    #[test]
    fn create_appends_and_places_card() {
        let (mut reconciler, mut page) = setup();
        reconciler.start_create(&mut page);
        assert!(page.modal.open);

        fill(&mut page, "Lecture", "monday");
        let outcome = reconciler.save(&mut page).unwrap();

        assert_eq!(outcome, SaveOutcome::Created(0));
        assert_eq!(reconciler.state().store().len(), 1);
        assert_eq!(page.board.column(Weekday::Monday).len(), 1);
        assert_eq!(page.form, EventForm::default());
        assert!(!page.modal.open);
        assert_eq!(reconciler.mode(), Mode::Creating);
    }

    #[test]
    fn invalid_submit_changes_nothing() {
        let (mut reconciler, mut page) = setup();
        reconciler.start_create(&mut page);
        fill(&mut page, "", "monday");

        let errors = reconciler.save(&mut page).unwrap_err();

        assert!(errors.has_field("name"));
        assert!(reconciler.state().store().is_empty());
        assert!(page.board.is_empty());
        assert!(page.modal.open);
        assert_eq!(page.errors.as_ref(), Some(&errors));
        assert_eq!(page.form.weekday, "monday");
    }

    #[test]
    fn save_reapplies_toggle_for_submitted_modality() {
        let (mut reconciler, mut page) = setup();
        reconciler.start_create(&mut page);
        fill(&mut page, "Standup", "tuesday");
        // selector changed without the toggle following
        page.form.modality = "remote".into();

        let errors = reconciler.save(&mut page).unwrap_err();
        assert!(errors.has_field("remote_url"));
        assert!(!errors.has_field("location"));
        assert!(page.form.toggle.remote_url.required);
    }

    // --- editing ---

    #[test]
    fn edit_replaces_in_place_and_swaps_card() {
        let (mut reconciler, mut page) = setup();
        reconciler.start_create(&mut page);
        fill(&mut page, "Lecture", "monday");
        reconciler.save(&mut page).unwrap();
        reconciler.start_create(&mut page);
        fill(&mut page, "Lab", "thursday");
        reconciler.save(&mut page).unwrap();

        assert!(reconciler.start_edit(&mut page, 0));
        assert_eq!(reconciler.mode(), Mode::Editing(0));
        assert_eq!(page.modal.title, UPDATE_TITLE);
        assert_eq!(page.form.name, "Lecture");

        page.form.weekday = "friday".into();
        page.form.category = "social".into();
        let outcome = reconciler.save(&mut page).unwrap();

        assert_eq!(outcome, SaveOutcome::Updated(0));
        let store = reconciler.state().store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().category, Category::Social);
        assert_eq!(store.get(1).unwrap().name, "Lab");
        assert!(page.board.column(Weekday::Monday).is_empty());
        assert_eq!(page.board.column(Weekday::Friday)[0].id, CardId(0));
        assert_eq!(page.board.count(CardId(0)), 1);
        assert_eq!(page.board.len(), 2);
        assert_eq!(reconciler.mode(), Mode::Creating);
        assert_eq!(page.modal.title, CREATE_TITLE);
    }

    #[test]
    fn save_for_vanished_index_reports_ignored() {
        let (mut reconciler, mut page) = setup();
        reconciler.state.editing = Some(5);
        fill(&mut page, "Lecture", "monday");

        let outcome = reconciler.save(&mut page).unwrap();

        assert_eq!(outcome, SaveOutcome::Ignored(5));
        assert!(reconciler.state().store().is_empty());
        assert!(page.board.is_empty());
        assert_eq!(reconciler.mode(), Mode::Creating);
    }

    #[test]
    fn edit_of_missing_index_is_ignored() {
        let (mut reconciler, mut page) = setup();
        assert!(!reconciler.start_edit(&mut page, 4));
        assert_eq!(reconciler.mode(), Mode::Creating);
        assert!(!page.modal.open);
    }

    #[test]
    fn create_button_abandons_edit() {
        let (mut reconciler, mut page) = setup();
        reconciler.start_create(&mut page);
        fill(&mut page, "Lecture", "monday");
        reconciler.save(&mut page).unwrap();

        reconciler.start_edit(&mut page, 0);
        page.form.name = "Renamed".into();
        reconciler.start_create(&mut page);

        assert_eq!(reconciler.mode(), Mode::Creating);
        assert_eq!(page.form, EventForm::default());
        assert_eq!(page.modal.title, CREATE_TITLE);

        fill(&mut page, "Seminar", "monday");
        assert_eq!(reconciler.save(&mut page).unwrap(), SaveOutcome::Created(1));
        assert_eq!(reconciler.state().store().get(0).unwrap().name, "Lecture");
    }

    #[test]
    fn invalid_edit_submit_keeps_editing() {
        let (mut reconciler, mut page) = setup();
        reconciler.start_create(&mut page);
        fill(&mut page, "Lecture", "monday");
        reconciler.save(&mut page).unwrap();

        reconciler.start_edit(&mut page, 0);
        page.form.time = String::new();
        assert!(reconciler.save(&mut page).is_err());
        assert_eq!(reconciler.mode(), Mode::Editing(0));
        assert_eq!(reconciler.state().store().get(0).unwrap().time_label(), "09:00");
    }

    #[test]
    fn select_modality_updates_form_and_toggle() {
        let (reconciler, mut page) = setup();
        reconciler.select_modality(&mut page, Modality::Remote);
        assert_eq!(page.form.modality, "remote");
        assert!(page.form.toggle.remote_url.visible);
        assert!(!page.form.toggle.location.required);
    }
}
