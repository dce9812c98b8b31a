// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shamac-buffer.

use thiserror::Error;

/// Error type for `ByteBuffer` growth.
///
/// Both variants are terminal for the computation that owns the buffer:
/// there is no retry path for in-memory growth failure.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The allocator could not provide the requested capacity.
    #[error("allocation failure: could not grow buffer to {requested} bytes")]
    AllocationFailure {
        /// Capacity that was requested, in bytes
        requested: usize,
    },

    /// The required capacity is not representable as `usize`.
    #[error("capacity overflow: required buffer size exceeds usize::MAX")]
    CapacityOverflow,
}
