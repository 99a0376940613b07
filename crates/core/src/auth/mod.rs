//! Admin password hashing with Argon2id.

mod password;

pub use password::{
    MIN_PASSWORD_LEN, PasswordError, hash_new_password, hash_password, verify_password,
};
