//! Credential handling for Spendwise
//!
//! Argon2id password hashing, plus a decoder for the legacy reversible
//! password encoding so that older records can still sign in.

pub mod legacy;
pub mod password;

pub use password::{hash_password, is_hashed, verify_password, HashParams, Verification};
