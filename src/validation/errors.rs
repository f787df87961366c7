//! Per-field validation errors.

use crate::core::FieldKey;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

/// A rule a field failed. The `Display` text is the message shown inline
/// next to the field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .field.label())]
    Required { field: FieldKey },

    #[error("{} address is invalid", .field.label())]
    InvalidEmail { field: FieldKey },

    #[error("{} must be a number greater than 0", .field.label())]
    NotPositiveNumber { field: FieldKey },
}

impl ValidationError {
    /// Field the error belongs to.
    pub fn field(&self) -> FieldKey {
        match self {
            Self::Required { field }
            | Self::InvalidEmail { field }
            | Self::NotPositiveNumber { field } => *field,
        }
    }
}

/// Errors keyed by field. Fields that passed have no entry.
///
/// Serializes as a map of wire name to message, which is what an adapter
/// renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldKey, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, key: FieldKey) -> Option<&ValidationError> {
        self.errors.get(&key)
    }

    /// Inline message for `key`, if the field failed.
    pub fn message(&self, key: FieldKey) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.errors.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &ValidationError)> {
        self.errors.iter().map(|(key, error)| (*key, error))
    }

    /// Every message keyed by field.
    pub fn messages(&self) -> BTreeMap<FieldKey, String> {
        self.errors
            .iter()
            .map(|(key, error)| (*key, error.to_string()))
            .collect()
    }

    /// Keep the first error per field.
    fn insert(&mut self, error: ValidationError) {
        self.errors.entry(error.field()).or_insert(error);
    }
}

impl FromIterator<ValidationError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.errors
                .iter()
                .map(|(key, error)| (key, error.to_string())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_field_labels() {
        let required = ValidationError::Required {
            field: FieldKey::GuestName,
        };
        assert_eq!(required.to_string(), "Guest Name is required");

        let email = ValidationError::InvalidEmail {
            field: FieldKey::Email,
        };
        assert_eq!(email.to_string(), "Email address is invalid");

        let age = ValidationError::NotPositiveNumber {
            field: FieldKey::Age,
        };
        assert_eq!(age.to_string(), "Age must be a number greater than 0");
    }

    #[test]
    fn first_error_per_field_wins() {
        let errors: FieldErrors = vec![
            ValidationError::Required {
                field: FieldKey::Email,
            },
            ValidationError::InvalidEmail {
                field: FieldKey::Email,
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(FieldKey::Email).as_deref(),
            Some("Email is required")
        );
    }

    #[test]
    fn serializes_as_message_map() {
        let errors: FieldErrors = std::iter::once(ValidationError::Required {
            field: FieldKey::Name,
        })
        .collect();

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Name is required" }));
    }

    #[test]
    fn empty_errors_report_nothing() {
        let errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert!(errors.message(FieldKey::Age).is_none());
        assert!(!errors.contains(FieldKey::Age));
    }
}
