// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the shamac crates.
//!
//! Every multi-byte conversion here is built from explicit shifts and byte
//! placement. Nothing reinterprets an integer's in-memory layout, so results
//! are identical on little- and big-endian hosts.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;

#[cfg(test)]
mod tests;

use alloc::string::String;
use alloc::vec::Vec;

pub use error::HexError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Generates `{type}_from_be` and `{type}_to_be` functions for integer types.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Reads ", stringify!($size), " bytes as a big-endian `", stringify!($type), "`.")]
        ///
        /// The most significant byte comes first. The value is assembled with
        /// shifts, one byte at a time.
        #[inline(always)]
        pub fn $fn_from(bytes: &[u8; $size]) -> $type {
            let mut value: $type = 0;
            for byte in bytes.iter() {
                value = (value << 8) | (*byte as $type);
            }
            value
        }

        #[doc = concat!("Writes a `", stringify!($type), "` as ", stringify!($size), " big-endian bytes.")]
        ///
        /// Each byte is extracted with a shift and placed explicitly, most
        /// significant byte first.
        #[inline(always)]
        pub fn $fn_to(value: $type) -> [u8; $size] {
            let mut bytes = [0u8; $size];
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (value >> (8 * ($size - 1 - i))) as u8;
            }
            bytes
        }
    };
}

impl_be_conversions!(u32, 4, u32_from_be, u32_to_be);
impl_be_conversions!(u64, 8, u64_from_be, u64_to_be);

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise. For equal lengths
/// the running time does not depend on where the slices differ.
///
/// # Example
///
/// ```
/// use shamac_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// assert!(!constant_time_eq(&[1, 2], &[1, 2, 3]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Renders bytes as lowercase hexadecimal, two digits per byte,
/// most significant nibble first.
///
/// # Example
///
/// ```
/// use shamac_util::hex_encode;
///
/// assert_eq!(hex_encode(&[0xde, 0xad, 0x0b, 0xef]), "dead0bef");
/// assert_eq!(hex_encode(&[]), "");
/// ```
pub fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Parses a hexadecimal string into bytes.
///
/// Accepts upper- and lowercase digits. The string must have an even number
/// of characters.
///
/// # Errors
///
/// - [`HexError::OddLength`] if the input has an odd number of characters.
/// - [`HexError::InvalidDigit`] with the offending character index otherwise.
///
/// # Example
///
/// ```
/// use shamac_util::{hex_decode, HexError};
///
/// assert_eq!(hex_decode("DEADbeef"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
/// assert_eq!(hex_decode("abc"), Err(HexError::OddLength));
/// assert_eq!(hex_decode("zz"), Err(HexError::InvalidDigit { index: 0 }));
/// ```
pub fn hex_decode(hex: &str) -> Result<Vec<u8>, HexError> {
    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    let mut out = Vec::with_capacity(digits.len() / 2);
    for (pair_index, pair) in digits.chunks_exact(2).enumerate() {
        let index = pair_index * 2;
        let high = nibble(pair[0]).ok_or(HexError::InvalidDigit { index })?;
        let low = nibble(pair[1]).ok_or(HexError::InvalidDigit { index: index + 1 })?;
        out.push((high << 4) | low);
    }

    Ok(out)
}

#[inline(always)]
fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
