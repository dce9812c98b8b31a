// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Full SHA-1 digests
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
// [2] RFC 3174: US Secure Hash Algorithm 1 (SHA1), Section 7.3 test cases
//     https://www.rfc-editor.org/rfc/rfc3174.html

use shamac_buffer::ByteBuffer;

use super::support::hex;
use crate::{digest, digest_buffer};

fn assert_sha1(message: &[u8], expected_hex: &str) {
    let result = digest(message).expect("Failed to digest(..)");

    assert_eq!(
        result.as_bytes().to_vec(),
        hex(expected_hex),
        "SHA-1 mismatch for {}-byte message",
        message.len()
    );
    assert_eq!(result.to_hex(), expected_hex);
}

#[test]
fn test_sha1_empty() {
    assert_sha1(b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn test_sha1_abc() {
    assert_sha1(b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn test_sha1_56_bytes() {
    // Exactly 56 bytes forces a second block with only padding + length
    let message = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(message.len(), 56, "Test vector should be 56 bytes");

    assert_sha1(message, "84983e441c3bd26ebaae4aa1f95129e5e54670f1");
}

#[test]
fn test_sha1_112_bytes() {
    let message = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    assert_eq!(message.len(), 112, "Test vector should be 112 bytes");

    assert_sha1(message, "a49b2446a02c645bf419f995b67091253a04a259");
}

#[test]
fn test_sha1_quick_brown_fox() {
    assert_sha1(
        b"The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    );
}

#[test]
fn test_sha1_block_boundaries() {
    assert_sha1(&[b'a'; 55], "c1c8bbdc22796e28c0e15163d20899b65621d65a");
    assert_sha1(&[b'a'; 56], "c2db330f6083854c99d4b5bfb6e8f29f201be699");
    assert_sha1(&[b'a'; 64], "0098ba824b5c16427bd7a1122a5a442a25ec644d");
}

#[test]
fn test_sha1_one_million_a() {
    let message = vec![b'a'; 1_000_000];
    assert_sha1(&message, "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}

#[test]
fn test_digest_buffer_matches_slice_and_leaves_buffer_untouched() {
    let buffer = ByteBuffer::from_slice(b"abc").expect("Failed to from_slice(..)");

    let from_buffer = digest_buffer(&buffer).expect("Failed to digest_buffer(..)");

    assert_eq!(from_buffer, digest(b"abc").expect("Failed to digest(..)"));
    assert_eq!(buffer.as_slice(), b"abc");
    assert_eq!(buffer.len(), 3);
}
