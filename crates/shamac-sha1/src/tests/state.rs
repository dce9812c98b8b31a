// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::support::hex;
use crate::compress::WorkingVars;
use crate::consts::H0;
use crate::padding::PaddedMessage;
use crate::HashState;

#[test]
fn test_new_uses_initial_values() {
    let state = HashState::new();
    assert_eq!(
        state.words(),
        &[0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0]
    );
    assert_eq!(HashState::default().words(), &H0);
}

#[test]
fn test_working_vars_seeded_from_state() {
    let state = HashState::from_words([1, 2, 3, 4, 5]);
    assert_eq!(state.working_vars(), WorkingVars::new(1, 2, 3, 4, 5));
}

#[test]
fn test_chain_wraps() {
    let mut state = HashState::from_words([u32::MAX, u32::MAX, 0, 7, 0x80000000]);
    state.chain(&WorkingVars::new(1, 2, 3, 0, 0x80000000));

    assert_eq!(state.words(), &[0, 1, 3, 7, 0]);
}

#[test]
fn test_two_block_chaining() {
    // FIPS 180 example 2: 56-byte message spans two blocks
    let message = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    let padded = PaddedMessage::new(message).expect("Failed to PaddedMessage::new(..)");
    let mut blocks = padded.blocks();

    let mut state = HashState::new();

    state.process_block(blocks.next().expect("Missing block 1"));
    assert_eq!(
        state.words(),
        &[0xF4286818, 0xC37B27AE, 0x0408F581, 0x84677148, 0x4A566572]
    );

    state.process_block(blocks.next().expect("Missing block 2"));
    assert_eq!(
        state.words(),
        &[0x84983E44, 0x1C3BD26E, 0xBAAE4AA1, 0xF95129E5, 0xE54670F1]
    );

    assert!(blocks.next().is_none());
}

#[test]
fn test_zero_block_from_initial_state() {
    let mut state = HashState::new();
    state.process_block(&[0u8; 64]);

    assert_eq!(
        state.words(),
        &[0x92B404E5, 0x56588CED, 0x6C1ACD4E, 0xBF053F68, 0x09F73A93]
    );
}

#[test]
fn test_finalize_is_big_endian() {
    let state = HashState::from_words([0x01020304, 0x05060708, 0x090A0B0C, 0x0D0E0F10, 0x11121314]);
    let digest = state.finalize();

    assert_eq!(
        digest.as_bytes().to_vec(),
        hex("0102030405060708090a0b0c0d0e0f1011121314")
    );
}

#[test]
fn test_debug_redacts_state() {
    let rendered = format!("{:?}", HashState::new());
    assert!(rendered.contains("REDACTED"));
}
