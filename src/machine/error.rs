//! Errors raised when firing triggers.

use std::fmt::Display;
use thiserror::Error;

/// Errors that can occur when firing a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The current state is configured but does not permit the trigger.
    #[error("No transition defined from state {state} using trigger {trigger}")]
    InvalidTransition { state: String, trigger: String },
}

impl TransitionError {
    pub(crate) fn invalid_transition(state: &impl Display, trigger: &impl Display) -> Self {
        Self::InvalidTransition {
            state: state.to_string(),
            trigger: trigger.to_string(),
        }
    }
}
