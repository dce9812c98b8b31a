// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shamac_util::u32_to_be;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::{WorkingVars, compress};
use crate::consts::{BLOCK_LEN, DIGEST_LEN, H0};
use crate::digest::Digest;
use crate::schedule::expand_block;

/// Running SHA-1 state H0..H4.
///
/// Created from the fixed initial values, updated once per block, and
/// consumed by [`HashState::finalize`]. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HashState {
    h: [u32; 5],
}

impl core::fmt::Debug for HashState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashState")
            .field("h", &"REDACTED")
            .finish()
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    /// State initialized with H(0).
    pub fn new() -> Self {
        Self { h: H0 }
    }

    /// State with arbitrary words, for resuming from known intermediate values.
    pub fn from_words(h: [u32; 5]) -> Self {
        Self { h }
    }

    /// Current H0..H4.
    pub fn words(&self) -> &[u32; 5] {
        &self.h
    }

    /// Working variables seeded from the current state.
    pub fn working_vars(&self) -> WorkingVars {
        WorkingVars::from(self.h)
    }

    /// Adds the working variables into H0..H4 (mod 2^32).
    pub fn chain(&mut self, vars: &WorkingVars) {
        for (h, v) in self.h.iter_mut().zip(vars.to_array()) {
            *h = h.wrapping_add(v);
        }
    }

    /// Expands and compresses one block into the state.
    pub fn process_block(&mut self, block: &[u8; BLOCK_LEN]) {
        let schedule = expand_block(block);
        compress(self, &schedule);
    }

    /// Serializes H0..H4 as big-endian words, consuming the state.
    pub fn finalize(self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&u32_to_be(*word));
        }
        Digest::from(out)
    }
}
