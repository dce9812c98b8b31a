// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 and HMAC-SHA1
//!
//! Implementation per FIPS 180-4 (SHA-1) and RFC 2104 (HMAC). The whole
//! message is buffered before hashing. Schedule expansion and single rounds
//! are exposed as pure functions so intermediate values can be pinned.
//! Working state, schedules and key blocks are zeroized on drop.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 2202: Test Cases for HMAC-MD5 and HMAC-SHA-1
//!   <https://datatracker.ietf.org/doc/html/rfc2202>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

pub mod compress;
pub mod consts;
pub mod padding;
pub mod schedule;

mod digest;
mod engine;
mod error;
mod hmac;
mod state;

pub use digest::Digest;
pub use engine::{digest, digest_buffer, digest_padded};
pub use error::Sha1Error;
pub use hmac::{HmacKey, hmac_sha1, normalize_key};
pub use state::HashState;
