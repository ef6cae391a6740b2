//! Cross-cutting error types for parklog.
//!
//! These are the user-facing failures a handler can report. Storage failures
//! are `DatabaseError` in `parklog-db`; all errors converge as `anyhow` in
//! `parklog-cli`.

use thiserror::Error;

/// Errors that can be raised by any parklog crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// One or more fields failed validation. Every failing field is listed.
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),

    /// Entity lookup returned no result.
    #[error("The {entity_type} '{id}' was not found.")]
    NotFound { entity_type: String, id: String },

    /// The entity already exists (park name, or visit on the same date).
    #[error("{0}")]
    Duplicate(String),

    /// The requested operation needs a signed-in user.
    #[error("You must be signed in to do that.")]
    SignInRequired,

    /// Username/password pair did not match a stored account.
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

impl CoreError {
    /// Shorthand for a missing park.
    #[must_use]
    pub fn park_not_found(name: &str) -> Self {
        Self::NotFound {
            entity_type: "park".into(),
            id: name.into(),
        }
    }

    /// Shorthand for a missing visit.
    #[must_use]
    pub fn visit_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "visit".into(),
            id: id.to_string(),
        }
    }

    /// The messages to show the user, one per line.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}
