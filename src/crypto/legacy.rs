//! Legacy reversible password encoding
//!
//! Early records stored passwords encrypted with a passphrase that ships
//! inside the program, in the OpenSSL "salted" format:
//! `base64("Salted__" || salt[8] || AES-256-CBC/PKCS#7 ciphertext)`, with the
//! key and IV derived from passphrase and salt by `EVP_BytesToKey` (MD5, one
//! iteration). That offers no secrecy, so nothing new is written this way:
//! the decoder exists only so those records can still sign in (and be
//! upgraded to an Argon2 hash on success).

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use md5::{Digest, Md5};
use zeroize::Zeroizing;

use crate::error::{LedgerError, LedgerResult};

type Aes256CbcDec = cbc::Decryptor<Aes256>;

const LEGACY_PASSPHRASE: &[u8] = b"expense_manager_secret_key_2025";
const SALTED_MAGIC: &[u8] = b"Salted__";
const SALT_LEN: usize = 8;
const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;
const BLOCK_LEN: usize = 16;

/// `EVP_BytesToKey` with MD5 and a single round
fn derive_key_iv(passphrase: &[u8], salt: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut material = Zeroizing::new(Vec::with_capacity(KEY_LEN + IV_LEN + 16));
    let mut previous: Vec<u8> = Vec::new();

    while material.len() < KEY_LEN + IV_LEN {
        let mut hasher = Md5::new();
        hasher.update(&previous);
        hasher.update(passphrase);
        hasher.update(salt);
        previous = hasher.finalize().to_vec();
        material.extend_from_slice(&previous);
    }

    material
}

/// Decode a legacy token back to the password
pub fn decode(token: &str) -> LedgerResult<String> {
    let raw = STANDARD
        .decode(token.trim())
        .map_err(|e| LedgerError::Credential(format!("Invalid legacy token encoding: {}", e)))?;

    let body = raw
        .strip_prefix(SALTED_MAGIC)
        .ok_or_else(|| LedgerError::Credential("Not a legacy token".into()))?;

    if body.len() < SALT_LEN + BLOCK_LEN || (body.len() - SALT_LEN) % BLOCK_LEN != 0 {
        return Err(LedgerError::Credential(format!(
            "Invalid legacy token length: {} bytes",
            raw.len()
        )));
    }

    let (salt, ciphertext) = body.split_at(SALT_LEN);
    let material = derive_key_iv(LEGACY_PASSPHRASE, salt);

    let plaintext = Aes256CbcDec::new_from_slices(
        &material[..KEY_LEN],
        &material[KEY_LEN..KEY_LEN + IV_LEN],
    )
    .map_err(|e| LedgerError::Credential(format!("Failed to create cipher: {}", e)))?
    .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
    .map_err(|_| LedgerError::Credential("Decryption failed: corrupted token".into()))?;

    String::from_utf8(plaintext)
        .map_err(|e| LedgerError::Credential(format!("Invalid UTF-8 in decoded password: {}", e)))
}
