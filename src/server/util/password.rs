//! Password hashing and verification utilities.
//!
//! Centralizes Argon2 password handling for user accounts. Hashes are stored as PHC
//! strings, which embed the salt and parameters. Argon2 is deliberately slow, so every
//! public function runs it on the blocking thread pool instead of a runtime worker.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hash a password using default Argon2 settings and a random salt.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(InternalError::BlockingTask)?
}

/// Verify a password against a stored Argon2 PHC string.
///
/// A stored value that is not a valid PHC string never verifies.
pub async fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();

    let verified = tokio::task::spawn_blocking(move || verify_blocking(&password, &stored_hash))
        .await
        .map_err(InternalError::BlockingTask)?;

    Ok(verified)
}

/// Spend the same Argon2 work as `verify_password` without a stored hash to check.
///
/// Used when a login names an unknown email, so the response takes as long as a wrong
/// password and does not reveal whether the account exists.
pub async fn dummy_password_verify(password: &str) -> Result<(), AppError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || {
        if let Some(hash) = dummy_hash() {
            verify_blocking(&password, hash);
        }
    })
    .await
    .map_err(InternalError::BlockingTask)?;

    Ok(())
}

fn hash_blocking(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(InternalError::PasswordHash)?;

    Ok(hash.to_string())
}

fn verify_blocking(password: &str, stored_hash: &str) -> bool {
    let Ok(hash) = PasswordHash::new(stored_hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}

/// Hash with the same parameters as real accounts, computed on first use.
fn dummy_hash() -> Option<&'static str> {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    DUMMY_HASH
        .get_or_init(|| hash_blocking("no-account-placeholder").ok())
        .as_deref()
}
