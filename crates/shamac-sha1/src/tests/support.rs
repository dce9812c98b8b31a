// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared helpers for test vectors

use shamac_util::hex_decode;

use crate::consts::BLOCK_LEN;
use crate::padding::PaddedMessage;

/// Decodes a hex test vector.
pub fn hex(s: &str) -> Vec<u8> {
    hex_decode(s).expect("Failed to hex_decode(..)")
}

/// First padded block of `message`.
pub fn first_block(message: &[u8]) -> [u8; BLOCK_LEN] {
    let padded = PaddedMessage::new(message).expect("Failed to PaddedMessage::new(..)");
    *padded.blocks().next().expect("Padded message has no blocks")
}
