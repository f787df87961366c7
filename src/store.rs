//! Form state store.
//!
//! The store owns the raw field values and the error slot. Values change only
//! through [`FormStore::set_field`]; errors change only when the submission
//! controller publishes a fresh validation result.

use crate::core::{FieldKey, FieldValues};
use crate::validation::FieldErrors;
use serde::Serialize;
use tracing::debug;

/// Owned copy of the store's values plus the attending flag derived from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub values: FieldValues,
    pub attending_with_guest: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FormStore {
    values: FieldValues,
    errors: FieldErrors,
}

impl FormStore {
    /// Empty values, no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the raw value for `key`. No validation happens here.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        let value = value.into();
        debug!(field = %key, len = value.len(), "field updated");
        self.values.set(key, value);
        if key == FieldKey::Guest {
            debug!(
                attending_with_guest = self.attending_with_guest(),
                "guest choice changed"
            );
        }
    }

    /// Projection of the guest field; recomputed on every call.
    pub fn attending_with_guest(&self) -> bool {
        self.values.attending_with_guest()
    }

    /// Values and attending flag by value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.values.clone(),
            attending_with_guest: self.attending_with_guest(),
        }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Errors from the most recent submit attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Replace the error slot with a freshly computed result.
    pub(crate) fn publish_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }
}
