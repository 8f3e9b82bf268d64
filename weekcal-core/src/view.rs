//! The seam between the reconciler and whatever displays the calendar.

use crate::board::WeekBoard;
use crate::card::{Card, CardId};
use crate::form::{EventForm, FormErrors};
use crate::modality::FieldToggle;

pub const CREATE_TITLE: &str = "Create Event";
pub const UPDATE_TITLE: &str = "Update Event";

/// Everything the reconciler needs from a display surface.
pub trait CalendarView {
    fn form(&self) -> &EventForm;
    fn form_mut(&mut self) -> &mut EventForm;

    /// Show/hide and (un)require the venue fields.
    fn apply_toggle(&mut self, toggle: FieldToggle) {
        self.form_mut().toggle = toggle;
    }

    fn set_modal_title(&mut self, title: &str);
    fn open_modal(&mut self);
    fn close_modal(&mut self);

    fn place_card(&mut self, card: Card);
    fn remove_card(&mut self, id: CardId) -> Option<Card>;

    /// Surface failed field checks to the user. The modal stays open.
    fn report_errors(&mut self, errors: &FormErrors);
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub open: bool,
}

impl Default for Modal {
    fn default() -> Self {
        Modal {
            title: CREATE_TITLE.to_string(),
            open: false,
        }
    }
}

/// In-memory page: the form, its modal and the week board.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub form: EventForm,
    pub modal: Modal,
    pub board: WeekBoard,
    /// Errors from the last rejected submit, cleared on the next success
    pub errors: Option<FormErrors>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalendarView for Page {
    fn form(&self) -> &EventForm {
        &self.form
    }

    fn form_mut(&mut self) -> &mut EventForm {
        &mut self.form
    }

    fn set_modal_title(&mut self, title: &str) {
        self.modal.title = title.to_string();
    }

    fn open_modal(&mut self) {
        self.modal.open = true;
    }

    fn close_modal(&mut self) {
        self.modal.open = false;
        self.errors = None;
    }

    fn place_card(&mut self, card: Card) {
        self.board.insert(card);
    }

    fn remove_card(&mut self, id: CardId) -> Option<Card> {
        self.board.remove(id)
    }

    fn report_errors(&mut self, errors: &FormErrors) {
        self.errors = Some(errors.clone());
    }
}
