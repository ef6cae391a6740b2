//! # parklog-auth
//!
//! Sign-in support for the parklog CLI: bcrypt password hashing and a small
//! JSON file that carries the signed-in user between invocations.

pub mod error;
pub mod password;
pub mod session_store;

pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use session_store::SessionStore;
