//! Core form data types.
//!
//! This module contains the pure data side of the form:
//! - The static field registry
//! - Raw field values and the derived attending flag
//! - Submission phases and their immutable history
//!
//! Nothing in this module performs I/O or logging.

mod error;
mod field;
mod history;
mod phase;
mod values;

pub use error::ParseError;
pub use field::{visible_fields, FieldKey, FieldKind, FieldSpec, Presence, Visibility, REGISTRY};
pub use history::{PhaseTransition, SubmissionHistory};
pub use phase::Phase;
pub use values::{FieldValues, GuestChoice, ATTENDING_WITH_GUEST};
