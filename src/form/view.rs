//! Render model handed to the presentation layer.

use crate::controller::Summary;
use crate::core::{FieldKey, FieldValues, Phase};
use crate::form::FormError;
use crate::validation::FieldErrors;
use serde::Serialize;

/// Everything an adapter needs to draw the form in one value.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView<'a> {
    pub phase: Phase,
    pub values: &'a FieldValues,
    pub errors: &'a FieldErrors,
    pub attending_with_guest: bool,
    /// Fields to render, in display order
    pub visible_fields: Vec<FieldKey>,
    pub summary: Option<&'a Summary>,
}

impl FormView<'_> {
    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Inline error message for `key`, if any.
    pub fn error_for(&self, key: FieldKey) -> Option<String> {
        self.errors.message(key)
    }
}
