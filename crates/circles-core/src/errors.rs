//! Error hierarchy for the circles activity stack.
//!
//! Two outcomes deliberately are NOT errors: a subject code that matches no
//! rule (a normal `Unhandled` render outcome) and an unknown event-kind tag.
//! [`ActivityError`] covers the cases where the event cannot be processed at
//! all.

use thiserror::Error;

/// Errors raised while parsing an activity event.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// The event does not belong to this domain: wrong application id or the
    /// mandatory `circle` parameter key is missing. The caller must treat
    /// this as "not mine" and leave the event untouched.
    #[error("event does not belong to the circles app: {reason}")]
    UnrecognizedEvent {
        /// What made the event unrecognizable.
        reason: String,
    },

    /// A version-1 legacy payload could not be decoded.
    #[error("invalid legacy parameters: {reason}")]
    InvalidParams {
        /// Decode failure description.
        reason: String,
    },

    /// Provider configuration could not be loaded.
    #[error("invalid provider config: {reason}")]
    Config {
        /// Validation or IO failure description.
        reason: String,
    },
}

impl ActivityError {
    /// An [`ActivityError::UnrecognizedEvent`] with the given reason.
    #[must_use]
    pub fn unrecognized(reason: impl Into<String>) -> Self {
        Self::UnrecognizedEvent {
            reason: reason.into(),
        }
    }

    /// An [`ActivityError::InvalidParams`] with the given reason.
    #[must_use]
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    /// An [`ActivityError::Config`] with the given reason.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
