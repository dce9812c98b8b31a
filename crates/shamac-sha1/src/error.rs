// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shamac_buffer::BufferError;
use thiserror::Error;

/// SHA-1 / HMAC-SHA1 error
///
/// The digest itself cannot fail; only buffer growth can. No partial digest
/// is ever returned alongside an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha1Error {
    /// A working buffer could not grow
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
