// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable byte buffer with amortized append and automatic zeroization.
//!
//! `ByteBuffer` is a wrapper around `Vec<u8>` that owns its growth policy:
//!
//! - **Doubling growth**: the first allocation is 64 bytes, and every
//!   subsequent relocation doubles capacity until the pending write fits.
//! - **Fallible growth**: allocation failure is reported as
//!   [`BufferError::AllocationFailure`] instead of aborting the process.
//! - **Zeroization**: abandoned allocations are zeroized before release, and
//!   the live allocation is zeroized on drop.
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject growth failures:
//!
//! ```toml
//! [dev-dependencies]
//! shamac-buffer = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use `ByteBufferBehaviour` to drive error paths:
//!
//! ```rust
//! #[cfg(test)]
//! mod tests {
//!     use shamac_buffer::{ByteBuffer, ByteBufferBehaviour};
//!
//!     #[test]
//!     fn test_handles_growth_failure() {
//!         let mut buffer = ByteBuffer::new();
//!         buffer.change_behaviour(ByteBufferBehaviour::FailAtGrow);
//!
//!         assert!(buffer.append(1).is_err());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod byte_buffer;
mod error;

#[cfg(test)]
mod tests;

pub use byte_buffer::{ByteBuffer, MIN_CAPACITY};
pub use error::BufferError;

#[cfg(any(test, feature = "test-utils"))]
pub use byte_buffer::ByteBufferBehaviour;
