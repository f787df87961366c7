//! Errors at the presentation boundary.

use crate::core::ParseError;
use thiserror::Error;

/// Contract violations by the presentation adapter.
///
/// These are programming errors, not user input problems; user input
/// problems are reported as [`crate::validation::ValidationError`] data.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to render form view: {0}")]
    Render(#[from] serde_json::Error),
}
