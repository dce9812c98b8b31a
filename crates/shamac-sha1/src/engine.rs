// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot SHA-1 per FIPS 180-4 Section 6.1.2
//!
//! The engine moves through its phases by ownership:
//! raw bytes → [`PaddedMessage`] → [`HashState`] per block →
//! [`HashState::finalize`], which consumes the state.

use shamac_buffer::ByteBuffer;

use crate::digest::Digest;
use crate::error::Sha1Error;
use crate::padding::PaddedMessage;
use crate::state::HashState;

/// SHA-1 of `message`.
///
/// Pads a private copy; `message` is only borrowed.
///
/// # Errors
///
/// Returns [`Sha1Error::Buffer`] if the padded copy cannot be allocated.
///
/// # Example
///
/// ```rust
/// use shamac_sha1::digest;
///
/// let d = digest(b"abc").unwrap();
/// assert_eq!(d.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
/// ```
pub fn digest(message: &[u8]) -> Result<Digest, Sha1Error> {
    let padded = PaddedMessage::new(message)?;
    Ok(digest_padded(&padded))
}

/// SHA-1 of the bytes held by `buffer`. The buffer is left untouched.
pub fn digest_buffer(buffer: &ByteBuffer) -> Result<Digest, Sha1Error> {
    digest(buffer.as_slice())
}

/// SHA-1 of an already padded message.
pub fn digest_padded(padded: &PaddedMessage) -> Digest {
    let mut state = HashState::new();

    for block in padded.blocks() {
        state.process_block(block);
    }

    tracing::trace!(
        message_len = padded.message_len(),
        blocks = padded.block_count(),
        "sha1 digest computed"
    );

    state.finalize()
}
