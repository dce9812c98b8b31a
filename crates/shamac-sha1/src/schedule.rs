// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule per FIPS 180-4 Section 6.1.2 step 1

use shamac_util::u32_from_be;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, SCHEDULE_LEN};

/// The 80 words W[0..79] derived from one block. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MessageSchedule {
    w: [u32; SCHEDULE_LEN],
}

impl core::fmt::Debug for MessageSchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MessageSchedule")
            .field("w", &"REDACTED")
            .finish()
    }
}

impl MessageSchedule {
    /// All 80 words.
    #[inline]
    pub fn words(&self) -> &[u32; SCHEDULE_LEN] {
        &self.w
    }

    /// Word W[t]. Panics if `t >= 80`.
    #[inline]
    pub fn word(&self, t: usize) -> u32 {
        self.w[t]
    }
}

/// Expands one block into its message schedule.
///
/// - W[0..15]: big-endian words of the block
/// - W[16..79]: W[t] = ROTL^1(W[t-3] ⊕ W[t-8] ⊕ W[t-14] ⊕ W[t-16])
pub fn expand_block(block: &[u8; BLOCK_LEN]) -> MessageSchedule {
    let mut w = [0u32; SCHEDULE_LEN];

    for (t, word) in w.iter_mut().take(16).enumerate() {
        let i = t * 4;
        *word = u32_from_be(&[block[i], block[i + 1], block[i + 2], block[i + 3]]);
    }

    for t in 16..SCHEDULE_LEN {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let schedule = MessageSchedule { w };
    w.zeroize();
    schedule
}
