//! Submission controller.
//!
//! This module is the form's state machine: it runs the validation engine on
//! the store's current values, publishes the result, and on success captures
//! a [`Summary`] and requests a scroll to the top of the page.
//!
//! # Phases
//!
//! - **Editing**: initial phase, and the phase after any field edit
//! - **Invalid**: the last submit found errors
//! - **Accepted**: the last submit passed and produced a summary

mod machine;
mod summary;

pub use machine::{SideEffect, SubmissionController, SubmitOutcome};
pub use summary::{Summary, SummaryEntry};
