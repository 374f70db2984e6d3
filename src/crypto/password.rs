//! Password hashing using Argon2id
//!
//! New credentials are stored as PHC strings (`$argon2id$v=19$...`) with a
//! random salt. Older records hold either the legacy reversible encoding or
//! the bare password; those still verify, and callers are told to re-hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use serde::{Deserialize, Serialize};

use super::legacy;
use crate::error::{LedgerError, LedgerResult};

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParams {
    /// Memory cost in KiB (default: 19456 = 19 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 2)
    pub time_cost: u32,
    /// Parallelism degree (default: 1)
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_cost: 19456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl HashParams {
    /// Create params with specific values
    pub fn with_values(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    fn argon2(&self) -> LedgerResult<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| LedgerError::Credential(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Outcome of checking a supplied password against a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Matched an Argon2 hash
    Match,
    /// Matched a legacy value; the record should be re-hashed
    MatchLegacy,
    Mismatch,
}

impl Verification {
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::Mismatch)
    }
}

/// Hash a password into a PHC string with a fresh random salt
pub fn hash_password(password: &str, params: &HashParams) -> LedgerResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = params
        .argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| LedgerError::Credential(format!("Password hashing failed: {}", e)))?;
    Ok(hash.to_string())
}

/// Whether a stored value is an Argon2 PHC string rather than a legacy value
pub fn is_hashed(stored: &str) -> bool {
    PasswordHash::new(stored).is_ok_and(|h| h.algorithm.as_str().starts_with("argon2"))
}

/// Check a supplied password against a stored credential
///
/// Legacy values are first decoded with the reversible scheme; if that fails
/// the stored value is compared directly.
pub fn verify_password(password: &str, stored: &str) -> Verification {
    if let Ok(hash) = PasswordHash::new(stored) {
        if hash.algorithm.as_str().starts_with("argon2") {
            return if Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok()
            {
                Verification::Match
            } else {
                Verification::Mismatch
            };
        }
    }

    let decoded_matches = legacy::decode(stored)
        .map(|decoded| constant_time_eq(decoded.as_bytes(), password.as_bytes()))
        .unwrap_or(false);

    if decoded_matches || constant_time_eq(stored.as_bytes(), password.as_bytes()) {
        Verification::MatchLegacy
    } else {
        Verification::Mismatch
    }
}

/// Byte comparison whose running time depends only on the lengths
///
/// A length mismatch returns early, so timing reveals whether the legacy
/// plaintext has the supplied length. Only legacy values reach this, and
/// they are replaced by an Argon2 hash on the first successful sign-in.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> HashParams {
        HashParams::with_values(1024, 1, 1)
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("pw1", &cheap()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(is_hashed(&hash));
        assert_eq!(verify_password("pw1", &hash), Verification::Match);
        assert_eq!(verify_password("pw2", &hash), Verification::Mismatch);
    }

    #[test]
    fn test_same_password_different_salt() {
        let a = hash_password("same", &cheap()).unwrap();
        let b = hash_password("same", &cheap()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_plain_legacy_value() {
        assert!(!is_hashed("hunter2"));
        assert_eq!(verify_password("hunter2", "hunter2"), Verification::MatchLegacy);
        assert_eq!(verify_password("hunter3", "hunter2"), Verification::Mismatch);
    }

    #[test]
    fn test_encoded_legacy_value() {
        let stored = "U2FsdGVkX1/+HwOJ7pB2xrcSWpInIgB7g8FHKRbt0Cs=";
        assert!(!is_hashed(stored));
        assert_eq!(verify_password("pw1", stored), Verification::MatchLegacy);
        assert_eq!(verify_password("nope", stored), Verification::Mismatch);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let err = hash_password("pw", &HashParams::with_values(1, 0, 0)).unwrap_err();
        assert!(matches!(err, LedgerError::Credential(_)));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
