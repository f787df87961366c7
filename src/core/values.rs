//! Raw field values and the guest choice.

use super::field::FieldKey;
use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Value of the guest field that marks the respondent as bringing a guest.
pub const ATTENDING_WITH_GUEST: &str = "Yes";

/// Raw string value for every registered field.
///
/// Every key in [`FieldKey::ALL`] is always present; a field nobody has
/// touched holds the empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: BTreeMap<FieldKey, String>,
}

impl Default for FieldValues {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValues {
    /// All fields empty.
    pub fn new() -> Self {
        Self {
            values: FieldKey::ALL
                .into_iter()
                .map(|key| (key, String::new()))
                .collect(),
        }
    }

    /// Current raw value of `key`.
    pub fn get(&self, key: FieldKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Builder-style setter, handy when assembling fixtures.
    pub fn with(mut self, key: FieldKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// True iff the guest field reads exactly `"Yes"`.
    ///
    /// This is the only definition of the attending flag; nothing caches it.
    pub fn attending_with_guest(&self) -> bool {
        self.get(FieldKey::Guest) == ATTENDING_WITH_GUEST
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Answer to "Are you attending with a guest?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestChoice {
    Yes,
    No,
}

impl GuestChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => ATTENDING_WITH_GUEST,
            Self::No => "No",
        }
    }
}

impl FromStr for GuestChoice {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            other => Err(ParseError::UnknownGuestChoice {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for GuestChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_values_hold_every_key() {
        let values = FieldValues::new();
        for key in FieldKey::ALL {
            assert_eq!(values.get(key), "");
        }
        assert_eq!(values.iter().count(), FieldKey::ALL.len());
    }

    #[test]
    fn attending_follows_guest_value() {
        let values = FieldValues::new().with(FieldKey::Guest, "Yes");
        assert!(values.attending_with_guest());

        let values = values.with(FieldKey::Guest, "No");
        assert!(!values.attending_with_guest());

        // Only the exact string counts.
        let values = values.with(FieldKey::Guest, "yes");
        assert!(!values.attending_with_guest());
    }

    #[test]
    fn guest_choice_parses_radio_values() {
        assert_eq!("Yes".parse::<GuestChoice>().unwrap(), GuestChoice::Yes);
        assert_eq!("No".parse::<GuestChoice>().unwrap(), GuestChoice::No);
        assert!(matches!(
            "Maybe".parse::<GuestChoice>(),
            Err(ParseError::UnknownGuestChoice { .. })
        ));
    }

    #[test]
    fn values_serialize_with_wire_names() {
        let values = FieldValues::new().with(FieldKey::GuestName, "Bob");
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["guestName"], "Bob");
        assert_eq!(json["name"], "");
    }
}
