// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Section 5.1.1

use shamac_buffer::{BufferError, ByteBuffer};
use shamac_util::u64_to_be;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN, LENGTH_FIELD_OFFSET, PAD_MARKER};
use crate::error::Sha1Error;

/// Number of zero bytes that follow the 0x80 marker for a message of
/// `message_len` bytes, so that the length field ends on a block boundary.
#[inline]
pub fn zero_padding_len(message_len: usize) -> usize {
    let after_marker = message_len % BLOCK_LEN + 1;
    (BLOCK_LEN + LENGTH_FIELD_OFFSET - after_marker) % BLOCK_LEN
}

/// Total padded length for a message of `message_len` bytes.
///
/// Returns `None` if the padded length does not fit in `usize`.
#[inline]
pub fn padded_len(message_len: usize) -> Option<usize> {
    message_len
        .checked_add(1 + LENGTH_FIELD_LEN)?
        .checked_next_multiple_of(BLOCK_LEN)
}

/// A message that has been padded exactly once.
///
/// Only raw bytes or a raw [`ByteBuffer`] can be turned into a
/// `PaddedMessage`, and there is no way back, so padding twice is not
/// expressible.
#[derive(Debug)]
pub struct PaddedMessage {
    buffer: ByteBuffer,
    message_len: usize,
}

impl PaddedMessage {
    /// Pads a private copy of `message`. The caller's bytes are untouched.
    ///
    /// The copy is allocated once, at its final padded size.
    pub fn new(message: &[u8]) -> Result<Self, Sha1Error> {
        let total = padded_len(message.len()).ok_or(BufferError::CapacityOverflow)?;

        let mut buffer = ByteBuffer::with_capacity(total)?;
        buffer.append_bytes(message)?;

        Self::from_buffer(buffer)
    }

    /// Pads `buffer` in place, taking ownership of it.
    pub fn from_buffer(mut buffer: ByteBuffer) -> Result<Self, Sha1Error> {
        let message_len = buffer.len();
        let bit_len = (message_len as u64).wrapping_mul(8);

        // 1. Single 1 bit
        buffer.append(PAD_MARKER)?;

        // 2. Zeros up to the length field
        buffer.append_repeated(0x00, zero_padding_len(message_len))?;

        // 3. Original length in bits, big-endian
        buffer.append_bytes(&u64_to_be(bit_len))?;

        debug_assert_eq!(buffer.len() % BLOCK_LEN, 0);

        Ok(Self {
            buffer,
            message_len,
        })
    }

    /// Length of the original, unpadded message in bytes.
    pub fn message_len(&self) -> usize {
        self.message_len
    }

    /// Padded length in bytes, always a multiple of [`BLOCK_LEN`].
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always `false`: even the empty message pads to one block.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of 64-byte blocks.
    pub fn block_count(&self) -> usize {
        self.buffer.len() / BLOCK_LEN
    }

    /// The padded bytes.
    pub fn as_slice(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Iterates the padded message block by block, in order.
    pub fn blocks(&self) -> impl Iterator<Item = &[u8; BLOCK_LEN]> {
        self.buffer
            .chunks_exact(BLOCK_LEN)
            .filter_map(|chunk| chunk.try_into().ok())
    }
}
