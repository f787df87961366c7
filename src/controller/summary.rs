//! Accepted submission snapshot.

use crate::core::{FieldKey, FieldValues};
use serde::Serialize;

/// Immutable copy of the values that passed validation.
///
/// Only the submission controller creates one. Two summaries captured from
/// the same values compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    values: FieldValues,
}

/// One labelled line of the rendered summary block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryEntry<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

impl Summary {
    pub(crate) fn capture(values: FieldValues) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn get(&self, key: FieldKey) -> &str {
        self.values.get(key)
    }

    pub fn attending_with_guest(&self) -> bool {
        self.values.attending_with_guest()
    }

    /// Lines shown in the summary block. The guest name line only appears
    /// when the captured guest answer is "Yes".
    pub fn entries(&self) -> Vec<SummaryEntry<'_>> {
        let mut entries = vec![
            SummaryEntry {
                label: "Name",
                value: self.get(FieldKey::Name),
            },
            SummaryEntry {
                label: "Email",
                value: self.get(FieldKey::Email),
            },
            SummaryEntry {
                label: "Age",
                value: self.get(FieldKey::Age),
            },
            SummaryEntry {
                label: "Attending with Guest",
                value: self.get(FieldKey::Guest),
            },
        ];
        if self.attending_with_guest() {
            entries.push(SummaryEntry {
                label: "Guest Name",
                value: self.get(FieldKey::GuestName),
            });
        }
        entries
    }
}
