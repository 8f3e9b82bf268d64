//! Location / remote URL field toggling.

use crate::event::Modality;

/// Visibility and requiredness of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub visible: bool,
    pub required: bool,
}

impl FieldState {
    const ACTIVE: FieldState = FieldState {
        visible: true,
        required: true,
    };
    const HIDDEN: FieldState = FieldState {
        visible: false,
        required: false,
    };
}

/// State of the two venue fields for a given modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldToggle {
    pub location: FieldState,
    pub remote_url: FieldState,
}

impl FieldToggle {
    pub fn for_modality(modality: Modality) -> Self {
        match modality {
            Modality::InPerson => FieldToggle {
                location: FieldState::ACTIVE,
                remote_url: FieldState::HIDDEN,
            },
            Modality::Remote => FieldToggle {
                location: FieldState::HIDDEN,
                remote_url: FieldState::ACTIVE,
            },
        }
    }
}

impl Default for FieldToggle {
    fn default() -> Self {
        FieldToggle::for_modality(Modality::default())
    }
}
