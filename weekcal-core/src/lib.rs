//! Core types for weekcal.
//!
//! This crate holds everything that does not need a terminal:
//! - `event` and `store` for the records and their positional store
//! - `form` and `modality` for the editable form and its field toggling
//! - `card`, `board` and `view` for the rendered week and the view seam
//! - `reconciler` for the create/edit state machine tying them together

pub mod board;
pub mod card;
pub mod config;
pub mod error;
pub mod event;
pub mod form;
pub mod modality;
pub mod palette;
pub mod reconciler;
pub mod store;
pub mod view;

// Re-export event types at crate root for convenience
pub use event::*;
