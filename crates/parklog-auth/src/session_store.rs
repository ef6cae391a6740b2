//! File-backed session between CLI invocations.
//!
//! Only the persisted half of a [`RequestContext`] (`username` and
//! `original_request`) is written; flash messages never reach disk.

use std::fs;
use std::path::{Path, PathBuf};

use parklog_core::context::RequestContext;

use crate::error::AuthError;

/// A JSON session file at a fixed path.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved session, or a fresh one if there is none.
    ///
    /// A missing file is normal. An unreadable or corrupt file is logged and
    /// treated as signed out.
    #[must_use]
    pub fn load(&self) -> RequestContext {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return RequestContext::default();
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "failed to read session file");
                return RequestContext::default();
            }
        };

        if content.trim().is_empty() {
            return RequestContext::default();
        }

        serde_json::from_str(&content).unwrap_or_else(|error| {
            tracing::warn!(path = %self.path.display(), %error, "ignoring corrupt session file");
            RequestContext::default()
        })
    }

    /// Persist the session, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file cannot be written.
    pub fn store(&self, context: &RequestContext) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(context)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", self.path.display());
            }
        }

        tracing::debug!(path = %self.path.display(), signed_in = context.is_signed_in(), "stored session");
        Ok(())
    }

    /// Remove the session file. Succeeds if it is already gone.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::SessionStore(format!(
                "failed to delete {}: {e}",
                self.path.display()
            ))),
        }
    }
}
