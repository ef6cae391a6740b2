//! bcrypt hashing for the `users.password` column.

use crate::error::AuthError;

/// Hash a plaintext password with the given bcrypt cost.
///
/// # Errors
///
/// Returns `AuthError::Hash` if `cost` is outside 4..=31.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a submitted password against a stored hash.
///
/// # Errors
///
/// Returns `AuthError::Hash` if the stored value is not a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    Ok(bcrypt::verify(password, hash)?)
}
