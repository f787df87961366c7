//! Static field registry.
//!
//! Every field the form knows about is declared once in [`REGISTRY`]. The
//! store, the validation rules and the render model all read from it; nothing
//! writes to it.

use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Typed key for a registered field.
///
/// Serializes to the adapter's wire names (`name`, `email`, `age`, `guest`,
/// `guestName`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Name,
    Email,
    Age,
    Guest,
    GuestName,
}

impl FieldKey {
    /// All keys in registry order.
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Age,
        FieldKey::Guest,
        FieldKey::GuestName,
    ];

    /// Wire name used by the presentation adapter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Guest => "guest",
            Self::GuestName => "guestName",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    /// Registry entry for this key.
    pub fn spec(&self) -> &'static FieldSpec {
        // REGISTRY is laid out in the same order as `ALL`.
        &REGISTRY[*self as usize]
    }

    /// Parse an adapter field name into a key.
    pub fn parse(name: &str) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| ParseError::UnknownField {
                name: name.to_string(),
            })
    }
}

impl FromStr for FieldKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input kind, which selects the shape check applied after the presence check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Numeric,
    Choice,
}

/// What counts as "nothing entered" for the presence check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Presence {
    /// Only the empty string is missing
    NonEmpty,
    /// Whitespace-only input is missing too
    NonBlank,
}

impl Presence {
    pub fn is_missing(&self, raw: &str) -> bool {
        match self {
            Self::NonEmpty => raw.is_empty(),
            Self::NonBlank => raw.trim().is_empty(),
        }
    }
}

/// Condition under which a field is shown (and therefore validated).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    Always,
    WhenAttendingWithGuest,
}

impl Visibility {
    /// Evaluate the condition against the derived attending flag (pure).
    pub fn check(&self, attending_with_guest: bool) -> bool {
        match self {
            Self::Always => true,
            Self::WhenAttendingWithGuest => attending_with_guest,
        }
    }
}

/// Static description of one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub label: &'static str,
    pub required: bool,
    pub presence: Presence,
    pub kind: FieldKind,
    pub visible_when: Visibility,
}

impl FieldSpec {
    pub fn is_visible(&self, attending_with_guest: bool) -> bool {
        self.visible_when.check(attending_with_guest)
    }
}

/// The form's fields, in display order.
pub static REGISTRY: [FieldSpec; 5] = [
    FieldSpec {
        key: FieldKey::Name,
        label: "Name",
        required: true,
        presence: Presence::NonBlank,
        kind: FieldKind::Text,
        visible_when: Visibility::Always,
    },
    FieldSpec {
        key: FieldKey::Email,
        label: "Email",
        required: true,
        presence: Presence::NonEmpty,
        kind: FieldKind::Email,
        visible_when: Visibility::Always,
    },
    FieldSpec {
        key: FieldKey::Age,
        label: "Age",
        required: true,
        presence: Presence::NonEmpty,
        kind: FieldKind::Numeric,
        visible_when: Visibility::Always,
    },
    FieldSpec {
        key: FieldKey::Guest,
        label: "Guest",
        required: false,
        presence: Presence::NonEmpty,
        kind: FieldKind::Choice,
        visible_when: Visibility::Always,
    },
    FieldSpec {
        key: FieldKey::GuestName,
        label: "Guest Name",
        required: true,
        presence: Presence::NonEmpty,
        kind: FieldKind::Text,
        visible_when: Visibility::WhenAttendingWithGuest,
    },
];

/// Specs visible for the given attending flag, in registry order.
pub fn visible_fields(attending_with_guest: bool) -> impl Iterator<Item = &'static FieldSpec> {
    REGISTRY
        .iter()
        .filter(move |spec| spec.is_visible(attending_with_guest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_matches_keys() {
        for key in FieldKey::ALL {
            assert_eq!(key.spec().key, key);
        }
    }

    #[test]
    fn parse_accepts_wire_names() {
        assert_eq!(FieldKey::parse("guestName").unwrap(), FieldKey::GuestName);
        assert_eq!("email".parse::<FieldKey>().unwrap(), FieldKey::Email);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let result = FieldKey::parse("guest_name");
        assert!(matches!(result, Err(ParseError::UnknownField { name }) if name == "guest_name"));
    }

    #[test]
    fn guest_name_only_visible_when_attending() {
        let hidden: Vec<_> = visible_fields(false).map(|s| s.key).collect();
        assert!(!hidden.contains(&FieldKey::GuestName));
        assert_eq!(hidden.len(), 4);

        let shown: Vec<_> = visible_fields(true).map(|s| s.key).collect();
        assert_eq!(shown.last(), Some(&FieldKey::GuestName));
    }

    #[test]
    fn guest_choice_is_optional() {
        let spec = FieldKey::Guest.spec();
        assert!(!spec.required);
        assert_eq!(spec.kind, FieldKind::Choice);
    }

    #[test]
    fn only_name_treats_blank_as_missing() {
        assert!(FieldKey::Name.spec().presence.is_missing("   "));
        assert!(!FieldKey::GuestName.spec().presence.is_missing("   "));
        assert!(FieldKey::GuestName.spec().presence.is_missing(""));
    }

    #[test]
    fn keys_serialize_to_wire_names() {
        let json = serde_json::to_string(&FieldKey::GuestName).unwrap();
        assert_eq!(json, "\"guestName\"");
    }
}
