//! Phase transition history.
//!
//! Provides immutable tracking of submission phase changes over time.

use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use rsvp_form::core::{Phase, PhaseTransition};
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: Phase::Editing,
///     to: Phase::Invalid,
///     timestamp: Utc::now(),
///     attempt: 1,
/// };
/// assert!(transition.to.is_error());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// Number of submit attempts made so far (0 before the first submit)
    pub attempt: usize,
}

/// Ordered history of phase changes.
///
/// History is immutable: `record` returns a new history with the transition
/// appended and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use rsvp_form::core::{Phase, PhaseTransition, SubmissionHistory};
/// use chrono::Utc;
///
/// let history = SubmissionHistory::new();
/// let history = history.record(PhaseTransition {
///     from: Phase::Editing,
///     to: Phase::Invalid,
///     timestamp: Utc::now(),
///     attempt: 1,
/// });
/// let history = history.record(PhaseTransition {
///     from: Phase::Invalid,
///     to: Phase::Accepted,
///     timestamp: Utc::now(),
///     attempt: 2,
/// });
///
/// assert_eq!(
///     history.get_path(),
///     vec![&Phase::Editing, &Phase::Invalid, &Phase::Accepted]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionHistory {
    transitions: Vec<PhaseTransition>,
}

impl SubmissionHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Highest attempt number seen, i.e. how many submits were recorded.
    pub fn attempts(&self) -> usize {
        self.transitions
            .iter()
            .map(|t| t.attempt)
            .max()
            .unwrap_or(0)
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }
}
