//! Event-facing form facade.
//!
//! [`Form`] owns one store and one submission controller and is the only
//! thing a presentation adapter talks to. Events are applied one at a time,
//! in the order they are delivered.

mod error;
mod view;

pub use error::FormError;
pub use view::FormView;

use crate::controller::{SideEffect, SubmissionController, SubmitOutcome, Summary};
use crate::core::{visible_fields, FieldKey, FieldValues, GuestChoice, Phase};
use crate::store::FormStore;
use crate::validation::FieldErrors;
use tracing::error;

/// Inbound events from the presentation adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// A text input changed; `name` is the adapter's field name
    FieldChange { name: String, value: String },

    /// The guest radio group changed
    GuestChoice(GuestChoice),

    /// The submit button was pressed
    Submit,
}

#[derive(Clone, Debug, Default)]
pub struct Form {
    store: FormStore,
    controller: SubmissionController,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Only `Submit` yields an outcome.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<Option<SubmitOutcome>, FormError> {
        match event {
            FormEvent::FieldChange { name, value } => {
                self.on_field_change(&name, value)?;
                Ok(None)
            }
            FormEvent::GuestChoice(choice) => {
                self.on_guest_choice(choice);
                Ok(None)
            }
            FormEvent::Submit => Ok(Some(self.on_submit())),
        }
    }

    /// String-keyed update from the adapter. Unknown names are rejected
    /// without touching any state.
    pub fn on_field_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let key = FieldKey::parse(name).inspect_err(|err| {
            error!(%err, "presentation adapter sent an unregistered field");
        })?;
        self.set_field(key, value);
        Ok(())
    }

    pub fn on_guest_choice(&mut self, choice: GuestChoice) {
        self.set_field(FieldKey::Guest, choice.as_str());
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.controller.submit(&mut self.store)
    }

    /// Typed update. Any edit returns the controller to `Editing`.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.store.set_field(key, value);
        self.controller.mark_edited();
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    pub fn values(&self) -> &FieldValues {
        self.store.values()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.store.errors()
    }

    pub fn attending_with_guest(&self) -> bool {
        self.store.attending_with_guest()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.controller.summary()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// Take the one-shot signals (scroll to top) raised since the last call.
    ///
    /// Adapters must call this after each `Submit`; pending signals are
    /// kept until drained.
    pub fn drain_effects(&mut self) -> Vec<SideEffect> {
        self.controller.drain_effects()
    }

    pub fn view(&self) -> FormView<'_> {
        let attending_with_guest = self.attending_with_guest();
        FormView {
            phase: self.phase(),
            values: self.values(),
            errors: self.errors(),
            attending_with_guest,
            visible_fields: visible_fields(attending_with_guest)
                .map(|spec| spec.key)
                .collect(),
            summary: self.summary(),
        }
    }
}
