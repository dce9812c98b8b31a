// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shamac_buffer::BufferError;
use shamac_sha1::Sha1Error;
use thiserror::Error;

/// Errors surfaced by the facade.
#[derive(Debug, Error)]
pub enum Error {
    /// Hashing failed.
    #[error(transparent)]
    Sha1(#[from] Sha1Error),

    /// Buffer growth failed while collecting input.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// Input file could not be opened or read.
    #[cfg(feature = "std")]
    #[error("input unavailable: {}", .path.display())]
    InputUnavailable {
        /// Path that was requested.
        path: std::path::PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
