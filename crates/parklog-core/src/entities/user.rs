use serde::{Deserialize, Serialize};

/// An account allowed to sign in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    /// bcrypt hash; never rendered.
    #[serde(skip_serializing)]
    pub password_hash: String,
}
