//! Submission phases.

use serde::{Deserialize, Serialize};

/// Where the form is in its submit cycle.
///
/// ```text
///            submit (errors)          submit (no errors)
/// Editing ──────────────────▶ Invalid ──────────────────▶ Accepted
///    ▲                          │                            │
///    └──────── field edit ──────┴──────── field edit ────────┘
/// ```
///
/// `submit` is accepted from every phase, so `Editing` can also move straight
/// to `Accepted`, and `Accepted` back to `Invalid`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Editing,
    Invalid,
    Accepted,
}

impl Phase {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Invalid => "Invalid",
            Self::Accepted => "Accepted",
        }
    }

    /// Last submit attempt was rejected.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Last submit attempt was accepted and nothing was edited since.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}
