//! Request-scoped state handed to every handler.
//!
//! Holds the signed-in identity, the request to resume after signing in, and
//! the flash messages to show once the handler finishes. Validators and
//! repositories never see it.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Explicit per-request session.
///
/// Only `username` and `original_request` are persisted between requests;
/// flash messages live for a single request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestContext {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub original_request: Option<String>,
    #[serde(skip)]
    message: Option<String>,
    #[serde(skip)]
    error: Option<String>,
}

/// Flash messages drained from a [`RequestContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl Flash {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.message.is_none() && self.error.is_none()
    }
}

impl RequestContext {
    #[must_use]
    pub fn signed_in_as(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.username.is_some()
    }

    /// Record the signed-in user. Returns the request that was refused for
    /// lack of a sign-in, if any, clearing it.
    pub fn sign_in(&mut self, username: impl Into<String>) -> Option<String> {
        self.username = Some(username.into());
        self.original_request.take()
    }

    pub fn sign_out(&mut self) {
        self.username = None;
        self.original_request = None;
    }

    /// Gate a handler on a signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SignInRequired` when nobody is signed in, after
    /// remembering `request` so it can be resumed.
    pub fn require_signed_in(&mut self, request: &str) -> Result<String, CoreError> {
        if let Some(username) = &self.username {
            return Ok(username.clone());
        }
        self.original_request = Some(request.to_string());
        Err(CoreError::SignInRequired)
    }

    pub fn flash_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn flash_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Drain pending flash messages.
    pub fn take_flash(&mut self) -> Flash {
        Flash {
            message: self.message.take(),
            error: self.error.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_request_is_remembered_until_sign_in() {
        let mut ctx = RequestContext::default();
        let err = ctx.require_signed_in("park add --name Zion").unwrap_err();
        assert!(matches!(err, CoreError::SignInRequired));
        assert_eq!(ctx.original_request.as_deref(), Some("park add --name Zion"));

        let resumed = ctx.sign_in("ranger");
        assert_eq!(resumed.as_deref(), Some("park add --name Zion"));
        assert!(ctx.original_request.is_none());
        assert_eq!(ctx.require_signed_in("park delete Zion").unwrap(), "ranger");
    }

    #[test]
    fn sign_out_forgets_identity() {
        let mut ctx = RequestContext::signed_in_as("ranger");
        ctx.sign_out();
        assert!(!ctx.is_signed_in());
    }

    #[test]
    fn flash_is_drained_once() {
        let mut ctx = RequestContext::default();
        ctx.flash_message("Zion has been added.");
        ctx.flash_error("Invalid area.");
        let flash = ctx.take_flash();
        assert_eq!(flash.message.as_deref(), Some("Zion has been added."));
        assert_eq!(flash.error.as_deref(), Some("Invalid area."));
        assert!(ctx.take_flash().is_empty());
    }

    #[test]
    fn flash_is_not_persisted() {
        let mut ctx = RequestContext::signed_in_as("ranger");
        ctx.flash_message("hello");
        let json = serde_json::to_string(&ctx).unwrap();
        let restored: RequestContext = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.username(), Some("ranger"));
        assert!(restored.clone().take_flash().is_empty());
    }
}
