// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hex decoding error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Input has an odd number of characters
    #[error("hex input has an odd number of digits")]
    OddLength,

    /// Character at `index` is not a hexadecimal digit
    #[error("invalid hex digit at index {index}")]
    InvalidDigit {
        /// Offset of the offending character
        index: usize,
    },
}
