//! Submission state machine.

use crate::controller::summary::Summary;
use crate::core::{Phase, PhaseTransition, SubmissionHistory};
use crate::store::FormStore;
use crate::validation::{validate, FieldErrors};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

/// Result of a single submit.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Every visible field passed; the summary now holds these values
    Accepted(Summary),

    /// At least one field failed; the errors were published to the store
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// One-shot requests for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SideEffect {
    /// Bring the summary block into view
    ScrollToTop,
}

/// Drives `Editing → Invalid → Accepted` and owns the accepted summary.
///
/// The controller never holds field values itself: every submit reads the
/// store passed in, so there is exactly one source of truth for input.
///
/// Every accepted submit queues one [`SideEffect::ScrollToTop`]. The queue is
/// only emptied by [`drain_effects`](Self::drain_effects), so the caller must
/// drain it after each submit; undrained signals accumulate.
#[derive(Clone, Debug, Default)]
pub struct SubmissionController {
    phase: Phase,
    summary: Option<Summary>,
    history: SubmissionHistory,
    attempts: usize,
    effects: Vec<SideEffect>,
}

impl SubmissionController {
    /// Start in `Editing` with no summary.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last accepted summary. Editing does not clear it; only the next
    /// accepted submit replaces it.
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn history(&self) -> &SubmissionHistory {
        &self.history
    }

    /// Number of submits so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Side effects requested but not yet handed to the presentation layer.
    pub fn pending_effects(&self) -> &[SideEffect] {
        &self.effects
    }

    /// Hand over and forget all pending side effects.
    ///
    /// Call after every submit. Signals are never dropped or merged, so a
    /// caller that skips this sees one `ScrollToTop` per accepted submit
    /// the next time it drains.
    pub fn drain_effects(&mut self) -> Vec<SideEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Validate the store's current values and move to `Invalid` or
    /// `Accepted`. Allowed from every phase.
    pub fn submit(&mut self, store: &mut FormStore) -> SubmitOutcome {
        self.attempts += 1;
        let snapshot = store.snapshot();
        let errors = validate(&snapshot.values, snapshot.attending_with_guest);

        if errors.is_empty() {
            store.publish_errors(FieldErrors::new());
            let summary = Summary::capture(snapshot.values);
            self.summary = Some(summary.clone());
            self.transition(Phase::Accepted);
            self.effects.push(SideEffect::ScrollToTop);
            info!(attempt = self.attempts, "submission accepted");
            SubmitOutcome::Accepted(summary)
        } else {
            debug!(
                attempt = self.attempts,
                failed_fields = errors.len(),
                "submission rejected"
            );
            store.publish_errors(errors.clone());
            self.transition(Phase::Invalid);
            SubmitOutcome::Rejected(errors)
        }
    }

    /// A field changed: the next submit starts from `Editing` again.
    pub fn mark_edited(&mut self) {
        if self.phase != Phase::Editing {
            self.transition(Phase::Editing);
        }
    }

    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        debug!(from = from.name(), to = to.name(), "phase transition");
        self.history = self.history.record(PhaseTransition {
            from,
            to,
            timestamp: Utc::now(),
            attempt: self.attempts,
        });
        self.phase = to;
    }
}
