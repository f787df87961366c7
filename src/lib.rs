//! rsvp-form: a pure, synchronous form controller
//!
//! The crate models an RSVP form (name, email, age, guest choice, guest name)
//! as a small state machine with a pure validation engine at its core.
//! Rendering, styling and animation are left to a presentation adapter that
//! feeds events in and reads state out.
//!
//! # Core Concepts
//!
//! - **Registry**: static description of every field (`core`)
//! - **Store**: raw values and the error slot, with the attending flag
//!   projected from the guest field (`store`)
//! - **Validation**: pure function from values to per-field errors,
//!   accumulating every failure (`validation`)
//! - **Controller**: `Editing / Invalid / Accepted` phases, summary capture
//!   and the scroll-to-top signal (`controller`)
//!
//! # Example
//!
//! ```rust
//! use rsvp_form::{FieldKey, Form, GuestChoice, SideEffect, SubmitOutcome};
//!
//! let mut form = Form::new();
//! form.on_field_change("name", "Ada").unwrap();
//! form.on_field_change("email", "ada@example.com").unwrap();
//! form.on_field_change("age", "30").unwrap();
//! form.on_guest_choice(GuestChoice::Yes);
//!
//! // Attending with a guest makes the guest name required.
//! let outcome = form.on_submit();
//! assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
//! assert_eq!(
//!     form.errors().message(FieldKey::GuestName).as_deref(),
//!     Some("Guest Name is required")
//! );
//!
//! form.on_field_change("guestName", "Bob").unwrap();
//! assert!(form.on_submit().is_accepted());
//! assert_eq!(form.summary().unwrap().get(FieldKey::GuestName), "Bob");
//! assert_eq!(form.drain_effects(), vec![SideEffect::ScrollToTop]);
//! ```

pub mod controller;
pub mod core;
pub mod form;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use controller::{SideEffect, SubmissionController, SubmitOutcome, Summary};
pub use crate::core::{FieldKey, FieldValues, GuestChoice, ParseError, Phase};
pub use form::{Form, FormError, FormEvent, FormView};
pub use store::FormStore;
pub use validation::{validate, FieldErrors, ValidationError};
