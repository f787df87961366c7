//! Field rules, accumulated with `Validation`.

use crate::core::{visible_fields, FieldKind, FieldSpec, FieldValues};
use crate::validation::errors::{FieldErrors, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking a single field.
pub type FieldCheck = Validation<(), NonEmptyVec<ValidationError>>;

// Shape check only: something, "@", something, ".", something.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Validate every visible field, accumulating ALL failures.
///
/// Pure: the result depends only on the arguments. `guestName` is only
/// visible (and therefore only checked) while attending with a guest.
pub fn validate(values: &FieldValues, attending_with_guest: bool) -> FieldErrors {
    let checks: Vec<FieldCheck> = visible_fields(attending_with_guest)
        .map(|spec| check_field(spec, values.get(spec.key)))
        .collect();

    match Validation::all_vec(checks) {
        Validation::Success(_) => FieldErrors::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

/// Presence check first, then the kind's shape check. At most one error.
pub fn check_field(spec: &FieldSpec, raw: &str) -> FieldCheck {
    let field = spec.key;

    if spec.presence.is_missing(raw) {
        return if spec.required {
            Validation::fail(ValidationError::Required { field })
        } else {
            Validation::success(())
        };
    }

    match spec.kind {
        FieldKind::Email if !is_email_shaped(raw) => {
            Validation::fail(ValidationError::InvalidEmail { field })
        }
        FieldKind::Numeric if !is_positive_number(raw) => {
            Validation::fail(ValidationError::NotPositiveNumber { field })
        }
        _ => Validation::success(()),
    }
}

pub fn is_email_shaped(raw: &str) -> bool {
    EMAIL_SHAPE.is_match(raw)
}

/// Finite decimal number strictly greater than zero. Surrounding whitespace
/// is ignored. Only decimal notation (with optional exponent) is accepted:
/// hexadecimal literals and infinities are rejected.
pub fn is_positive_number(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldKey;

    fn valid_values() -> FieldValues {
        FieldValues::new()
            .with(FieldKey::Name, "Ada")
            .with(FieldKey::Email, "ada@example.com")
            .with(FieldKey::Age, "30")
            .with(FieldKey::Guest, "No")
    }

    #[test]
    fn all_empty_reports_every_required_field() {
        let errors = validate(&FieldValues::new(), false);

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.message(FieldKey::Name).as_deref(),
            Some("Name is required")
        );
        assert_eq!(
            errors.message(FieldKey::Email).as_deref(),
            Some("Email is required")
        );
        assert_eq!(
            errors.message(FieldKey::Age).as_deref(),
            Some("Age is required")
        );
        assert!(!errors.contains(FieldKey::GuestName));
        assert!(!errors.contains(FieldKey::Guest));
    }

    #[test]
    fn blank_name_is_required() {
        let values = valid_values().with(FieldKey::Name, "   ");
        let errors = validate(&values, false);
        assert_eq!(
            errors.message(FieldKey::Name).as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn whitespace_guest_name_is_accepted_when_attending() {
        let values = valid_values()
            .with(FieldKey::Guest, "Yes")
            .with(FieldKey::GuestName, "   ");
        let errors = validate(&values, true);
        assert!(errors.is_empty());
    }

    #[test]
    fn email_shape_is_checked_after_presence() {
        let values = valid_values().with(FieldKey::Email, "bad-email");
        let errors = validate(&values, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(FieldKey::Email).as_deref(),
            Some("Email address is invalid")
        );
    }

    #[test]
    fn email_shape_examples() {
        assert!(is_email_shaped("ada@example.com"));
        assert!(is_email_shaped("a@b.c"));
        assert!(!is_email_shaped("ada@example"));
        assert!(!is_email_shaped("@example.com"));
        assert!(!is_email_shaped("ada@.com"));
        assert!(!is_email_shaped("   "));
    }

    #[test]
    fn age_must_be_positive_number() {
        assert!(is_positive_number("30"));
        assert!(is_positive_number("0.5"));
        assert!(is_positive_number(" 42 "));
        assert!(is_positive_number("1e3"));
        assert!(!is_positive_number("0"));
        assert!(!is_positive_number("-3"));
        assert!(!is_positive_number("thirty"));
        assert!(!is_positive_number("NaN"));
        assert!(!is_positive_number("inf"));
        assert!(!is_positive_number(" "));
    }

    #[test]
    fn age_rejects_hex_and_infinity_literals() {
        assert!(!is_positive_number("0x10"));
        assert!(!is_positive_number("Infinity"));
        assert!(!is_positive_number("infinity"));

        let values = valid_values().with(FieldKey::Age, "Infinity");
        let errors = validate(&values, false);
        assert!(matches!(
            errors.get(FieldKey::Age),
            Some(ValidationError::NotPositiveNumber { .. })
        ));
    }

    #[test]
    fn zero_age_reports_number_error() {
        let values = valid_values().with(FieldKey::Age, "0");
        let errors = validate(&values, false);
        assert_eq!(
            errors.message(FieldKey::Age).as_deref(),
            Some("Age must be a number greater than 0")
        );
    }

    #[test]
    fn guest_name_required_only_when_attending() {
        let values = valid_values().with(FieldKey::Guest, "Yes");

        let errors = validate(&values, true);
        assert_eq!(
            errors.message(FieldKey::GuestName).as_deref(),
            Some("Guest Name is required")
        );

        let errors = validate(&values, false);
        assert!(errors.is_empty());
    }

    #[test]
    fn failures_accumulate_across_fields() {
        let values = FieldValues::new()
            .with(FieldKey::Email, "nope")
            .with(FieldKey::Age, "-1");
        let errors = validate(&values, true);

        assert_eq!(errors.len(), 4);
        assert!(errors.contains(FieldKey::Name));
        assert!(matches!(
            errors.get(FieldKey::Email),
            Some(ValidationError::InvalidEmail { .. })
        ));
        assert!(matches!(
            errors.get(FieldKey::Age),
            Some(ValidationError::NotPositiveNumber { .. })
        ));
        assert!(errors.contains(FieldKey::GuestName));
    }

    #[test]
    fn valid_values_pass() {
        assert!(validate(&valid_values(), false).is_empty());

        let with_guest = valid_values()
            .with(FieldKey::Guest, "Yes")
            .with(FieldKey::GuestName, "Bob");
        assert!(validate(&with_guest, true).is_empty());
    }

    #[test]
    fn check_field_yields_at_most_one_error() {
        let spec = FieldKey::Email.spec();
        match check_field(spec, "") {
            Validation::Failure(errors) => assert_eq!(errors.len(), 1),
            Validation::Success(_) => panic!("Expected failure for empty email"),
        }
        assert!(check_field(spec, "ada@example.com").is_success());
    }
}
