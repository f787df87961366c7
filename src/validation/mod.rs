//! Validation engine for form submissions.
//!
//! Each visible field is checked independently and every failure is
//! collected with Stillwater's `Validation`, so a single submit reports all
//! problems at once instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use rsvp_form::core::{FieldKey, FieldValues};
//! use rsvp_form::validation::validate;
//!
//! let values = FieldValues::new()
//!     .with(FieldKey::Name, "Ada")
//!     .with(FieldKey::Email, "bad-email")
//!     .with(FieldKey::Age, "30");
//!
//! let errors = validate(&values, values.attending_with_guest());
//! assert_eq!(
//!     errors.message(FieldKey::Email).as_deref(),
//!     Some("Email address is invalid")
//! );
//! assert_eq!(errors.len(), 1);
//! ```

pub mod errors;
pub mod rules;

pub use errors::{FieldErrors, ValidationError};
pub use rules::{check_field, validate, FieldCheck};
