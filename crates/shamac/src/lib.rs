// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 and HMAC-SHA1 over a growable zeroizing byte buffer.
//!
//! Whole-message hashing: the input is held in full, padded, split into
//! 64-byte blocks and compressed one block at a time. Every intermediate
//! (message copies, schedules, working state, key blocks) is zeroized
//! when dropped.
//!
//! # Quick Start
//!
//! ```rust
//! use shamac::{digest, hmac_sha1};
//!
//! let d = digest(b"abc")?;
//! assert_eq!(d.to_string(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//!
//! let tag = hmac_sha1(b"key", b"The quick brown fox jumps over the lazy dog")?;
//! assert_eq!(tag.to_hex(), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
//! # Ok::<(), shamac::Error>(())
//! ```
//!
//! # Crates
//!
//! - [`buffer`]: `ByteBuffer`, capacity doubling with zeroization of
//!   abandoned allocations
//! - [`sha1`]: padding, schedule expansion, rounds, digest engine and HMAC
//! - [`util`]: explicit big-endian conversions, hex, constant-time equality
//!
//! With the `std` feature (default), [`io::read_file`] loads a whole file
//! into a `ByteBuffer` for hashing.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

mod error;

#[cfg(feature = "std")]
pub mod io;

pub use shamac_buffer as buffer;
pub use shamac_sha1 as sha1;
pub use shamac_util as util;

pub use error::Error;

pub use shamac_buffer::ByteBuffer;
pub use shamac_sha1::{Digest, HmacKey};

/// SHA-1 of `message`.
pub fn digest(message: &[u8]) -> Result<Digest, Error> {
    Ok(shamac_sha1::digest(message)?)
}

/// HMAC-SHA1 of `message` under `key`.
pub fn hmac_sha1(key: &[u8], message: &[u8]) -> Result<Digest, Error> {
    Ok(shamac_sha1::hmac_sha1(key, message)?)
}
