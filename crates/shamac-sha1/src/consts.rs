// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-1 block size in bytes
pub const BLOCK_LEN: usize = 64;

/// SHA-1 output size in bytes
pub const DIGEST_LEN: usize = 20;

/// Number of 32-bit words in the message schedule (one per round)
pub const SCHEDULE_LEN: usize = 80;

/// Number of compression rounds per block
pub const ROUNDS: usize = 80;

/// Size of the trailing big-endian bit-length field
pub const LENGTH_FIELD_LEN: usize = 8;

/// Offset within the final block where the length field starts
pub const LENGTH_FIELD_OFFSET: usize = BLOCK_LEN - LENGTH_FIELD_LEN;

/// First padding byte (a single 1 bit followed by zeros)
pub const PAD_MARKER: u8 = 0x80;

/// Initial hash values H(0) per FIPS 180-4 Section 5.3.1
pub const H0: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants per FIPS 180-4 Section 4.2.1, one per 20-round stage
pub const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// HMAC inner pad byte per RFC 2104
pub const IPAD: u8 = 0x36;

/// HMAC outer pad byte per RFC 2104
pub const OPAD: u8 = 0x5C;
