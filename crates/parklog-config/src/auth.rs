//! Sign-in configuration.

use serde::{Deserialize, Serialize};

/// bcrypt work factor for newly provisioned accounts.
const fn default_bcrypt_cost() -> u32 {
    12
}

fn default_session_file() -> String {
    ".parklog/session.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// bcrypt cost used when hashing new passwords (4..=31).
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// File holding the signed-in session between invocations.
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
            session_file: default_session_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AuthConfig::default();
        assert_eq!(config.bcrypt_cost, 12);
        assert_eq!(config.session_file, ".parklog/session.json");
    }
}
