//! Password hashing utilities.
//!
//! Passwords are stored as argon2id PHC strings with a per-password random
//! salt. Hashing happens at registration and setup; verification at sign-in.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a plain-text password into an argon2id PHC string.
///
/// # Arguments
/// - `password` - The plain-text password to hash
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash, safe to store
/// - `Err(AppError::InternalError)` - Hashing infrastructure failure
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;

    Ok(hash.to_string())
}

/// Verifies a plain-text password against a stored PHC hash string.
///
/// Returns `false` both for a wrong password and for a hash that fails to
/// parse: a corrupt stored hash must deny sign-in, not grant it.
///
/// # Arguments
/// - `password` - The plain-text password to check
/// - `password_hash` - The stored PHC hash string
///
/// # Returns
/// - `true` - Password matches the hash
/// - `false` - Password does not match, or the stored hash is unparseable
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
