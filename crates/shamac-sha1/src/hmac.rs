// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA1 per RFC 2104

use shamac_buffer::{BufferError, ByteBuffer};
use shamac_util::constant_time_eq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::consts::{BLOCK_LEN, DIGEST_LEN, IPAD, OPAD};
use crate::digest::Digest;
use crate::engine::{digest, digest_padded};
use crate::error::Sha1Error;
use crate::padding::{PaddedMessage, padded_len};

/// Brings `key` to exactly one block.
///
/// - longer than 64 bytes: replaced by SHA-1(key), then zero-padded
/// - shorter than 64 bytes: zero-padded on the right
/// - exactly 64 bytes: copied unchanged
///
/// `key` is only read; the result is a fresh, zeroize-on-drop copy.
pub fn normalize_key(key: &[u8]) -> Result<Zeroizing<[u8; BLOCK_LEN]>, Sha1Error> {
    let mut key_block = Zeroizing::new([0u8; BLOCK_LEN]);

    if key.len() > BLOCK_LEN {
        let mut hashed = digest(key)?;
        key_block[..DIGEST_LEN].copy_from_slice(hashed.as_bytes());
        hashed.zeroize();
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    tracing::trace!(
        key_len = key.len(),
        hashed = key.len() > BLOCK_LEN,
        "hmac key normalized"
    );

    Ok(key_block)
}

/// HMAC-SHA1 key with both masked blocks precomputed.
///
/// K ⊕ ipad and K ⊕ opad are derived once in [`HmacKey::new`] and reused for
/// every message. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HmacKey {
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; BLOCK_LEN],
}

impl core::fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HmacKey")
            .field("k_ipad", &"REDACTED")
            .field("k_opad", &"REDACTED")
            .finish()
    }
}

impl HmacKey {
    /// Derives the inner and outer key blocks from `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Sha1Error::Buffer`] if hashing an over-long key cannot
    /// allocate.
    pub fn new(key: &[u8]) -> Result<Self, Sha1Error> {
        let key_block = normalize_key(key)?;

        let mut k_ipad = [IPAD; BLOCK_LEN];
        let mut k_opad = [OPAD; BLOCK_LEN];
        for ((i, o), k) in k_ipad.iter_mut().zip(k_opad.iter_mut()).zip(key_block.iter()) {
            *i ^= k;
            *o ^= k;
        }

        Ok(Self { k_ipad, k_opad })
    }

    /// K ⊕ ipad
    pub fn inner_block(&self) -> &[u8; BLOCK_LEN] {
        &self.k_ipad
    }

    /// K ⊕ opad
    pub fn outer_block(&self) -> &[u8; BLOCK_LEN] {
        &self.k_opad
    }

    /// SHA1(K ⊕ opad || SHA1(K ⊕ ipad || message))
    ///
    /// # Errors
    ///
    /// Returns [`Sha1Error::Buffer`] if a working buffer cannot be allocated.
    pub fn sign(&self, message: &[u8]) -> Result<Digest, Sha1Error> {
        let mut inner_digest = keyed_digest(&self.k_ipad, message)?;
        let tag = keyed_digest(&self.k_opad, inner_digest.as_bytes());
        inner_digest.zeroize();
        tag
    }

    /// [`HmacKey::sign`] over the bytes held by `message`.
    pub fn sign_buffer(&self, message: &ByteBuffer) -> Result<Digest, Sha1Error> {
        self.sign(message.as_slice())
    }

    /// Recomputes the tag for `message` and compares it to `tag` in
    /// constant time.
    pub fn verify(&self, message: &[u8], tag: &[u8]) -> Result<bool, Sha1Error> {
        let mut expected = self.sign(message)?;
        let matches = constant_time_eq(expected.as_bytes(), tag);
        expected.zeroize();
        Ok(matches)
    }
}

/// SHA1(pad || data), padding the concatenation in place.
fn keyed_digest(pad: &[u8; BLOCK_LEN], data: &[u8]) -> Result<Digest, Sha1Error> {
    let total = BLOCK_LEN
        .checked_add(data.len())
        .and_then(padded_len)
        .ok_or(BufferError::CapacityOverflow)?;

    let mut keyed = ByteBuffer::with_capacity(total)?;
    keyed.append_bytes(pad)?;
    keyed.append_bytes(data)?;

    let padded = PaddedMessage::from_buffer(keyed)?;
    Ok(digest_padded(&padded))
}

/// HMAC-SHA1 of `message` under `key`.
///
/// # Example
///
/// ```rust
/// use shamac_sha1::hmac_sha1;
///
/// let tag = hmac_sha1(b"key", b"The quick brown fox jumps over the lazy dog").unwrap();
/// assert_eq!(tag.to_hex(), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
/// ```
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> Result<Digest, Sha1Error> {
    HmacKey::new(key)?.sign(message)
}
