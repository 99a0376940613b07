//! Admin password hashing.
//!
//! Hashes are Argon2id PHC strings with the crate's default parameters, so
//! they can be verified without storing the parameters separately.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{self, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Shortest password accepted for a new admin.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Password hashing errors.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// New password is shorter than [`MIN_PASSWORD_LEN`].
    #[error("password must be at least {min} characters")]
    TooShort {
        /// Required minimum length.
        min: usize,
    },

    /// Stored hash is not a PHC string.
    #[error("invalid password hash format")]
    InvalidHash,

    /// Argon2 itself failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl From<password_hash::Error> for PasswordError {
    fn from(err: password_hash::Error) -> Self {
        Self::Hashing(err.to_string())
    }
}

/// Hashes a password chosen for a new admin.
///
/// # Errors
///
/// Returns `TooShort` below [`MIN_PASSWORD_LEN`] characters.
pub fn hash_new_password(password: &str) -> Result<String, PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    hash_password(password)
}

/// Hashes a password with a fresh random salt.
///
/// ```
/// use sekolah_core::auth::hash_password;
///
/// let hash = hash_password("kata sandi rahasia").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Checks `password` against a stored hash.
///
/// A wrong password is `Ok(false)`; only an unreadable hash is an error.
///
/// ```
/// use sekolah_core::auth::{hash_password, verify_password};
///
/// let hash = hash_password("benar").unwrap();
/// assert!(verify_password("benar", &hash).unwrap());
/// assert!(!verify_password("salah", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let stored = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_string() {
        let hash = hash_password("admin_sekolah_2025!").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("admin_sekolah_2025!"));
    }

    #[test]
    fn test_verify_round() {
        let hash = hash_password("correct_password").unwrap();

        assert!(verify_password("correct_password", &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_same_password_salted_differently() {
        let first = hash_password("password1").unwrap();
        let second = hash_password("password1").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("password1", &first).unwrap());
        assert!(verify_password("password1", &second).unwrap());
    }

    #[test]
    fn test_new_password_minimum_length() {
        assert!(matches!(
            hash_new_password("short"),
            Err(PasswordError::TooShort { min: MIN_PASSWORD_LEN })
        ));
        assert!(matches!(
            hash_new_password("tujuh77"),
            Err(PasswordError::TooShort { .. })
        ));

        let hash = hash_new_password("delapan8").unwrap();
        assert!(verify_password("delapan8", &hash).unwrap());
    }

    #[test]
    fn test_invalid_hash_format() {
        assert!(matches!(
            verify_password("password", "not-a-phc-string"),
            Err(PasswordError::InvalidHash)
        ));
    }
}
