// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 compression per FIPS 180-4 Section 6.1.2 steps 2-4
//!
//! Every function here except [`compress`] is pure, so single rounds can be
//! checked against published intermediate values.

use zeroize::Zeroize;

use crate::consts::{K, ROUNDS};
use crate::schedule::MessageSchedule;
use crate::state::HashState;

/// Working variables a, b, c, d, e of one compression pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct WorkingVars {
    /// a
    pub a: u32,
    /// b
    pub b: u32,
    /// c
    pub c: u32,
    /// d
    pub d: u32,
    /// e
    pub e: u32,
}

impl WorkingVars {
    /// Working variables in order a, b, c, d, e.
    pub const fn new(a: u32, b: u32, c: u32, d: u32, e: u32) -> Self {
        Self { a, b, c, d, e }
    }

    /// Variables as `[a, b, c, d, e]`.
    pub const fn to_array(&self) -> [u32; 5] {
        [self.a, self.b, self.c, self.d, self.e]
    }
}

impl From<[u32; 5]> for WorkingVars {
    fn from(v: [u32; 5]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4])
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Logical functions per FIPS 180-4 Section 4.1.1
// ═══════════════════════════════════════════════════════════════════════════

/// Ch(x,y,z) = (x ∧ y) ∨ (¬x ∧ z), rounds 0-19
#[inline(always)]
pub const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Parity(x,y,z) = x ⊕ y ⊕ z, rounds 20-39 and 60-79
#[inline(always)]
pub const fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// Maj(x,y,z) = (x ∧ y) ∨ (x ∧ z) ∨ (y ∧ z), rounds 40-59
#[inline(always)]
pub const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// f(t; b, c, d): the logical function selected by round index.
///
/// `t` must be below 80; larger indices are treated as the last stage.
#[inline(always)]
pub fn f(t: usize, b: u32, c: u32, d: u32) -> u32 {
    debug_assert!(t < ROUNDS, "round index {t} out of range");

    match t {
        0..=19 => ch(b, c, d),
        20..=39 => parity(b, c, d),
        40..=59 => maj(b, c, d),
        _ => parity(b, c, d),
    }
}

/// K(t): the round constant for round `t`.
#[inline(always)]
pub fn k(t: usize) -> u32 {
    debug_assert!(t < ROUNDS, "round index {t} out of range");

    match t {
        0..=19 => K[0],
        20..=39 => K[1],
        40..=59 => K[2],
        _ => K[3],
    }
}

/// One round: returns the working variables after round `t` with word `w_t`.
///
/// ```text
/// T = ROTL^5(a) + f(t; b, c, d) + e + K(t) + W[t]   (mod 2^32)
/// e = d; d = c; c = ROTL^30(b); b = a; a = T
/// ```
#[inline(always)]
pub fn round(vars: WorkingVars, t: usize, w_t: u32) -> WorkingVars {
    let temp = vars
        .a
        .rotate_left(5)
        .wrapping_add(f(t, vars.b, vars.c, vars.d))
        .wrapping_add(vars.e)
        .wrapping_add(k(t))
        .wrapping_add(w_t);

    WorkingVars {
        a: temp,
        b: vars.a,
        c: vars.b.rotate_left(30),
        d: vars.c,
        e: vars.d,
    }
}

/// Runs all 80 rounds over `schedule` and chains the result into `state`.
pub fn compress(state: &mut HashState, schedule: &MessageSchedule) {
    let mut vars = state.working_vars();

    for (t, w_t) in schedule.words().iter().enumerate() {
        vars = round(vars, t, *w_t);
    }

    state.chain(&vars);
    vars.zeroize();
}
