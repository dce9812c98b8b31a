// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shamac_buffer::{BufferError, ByteBuffer, ByteBufferBehaviour};

use crate::Sha1Error;
use crate::padding::{PaddedMessage, padded_len, zero_padding_len};

// =============================================================================
// zero_padding_len() / padded_len()
// =============================================================================

#[test]
fn test_zero_padding_len_boundaries() {
    assert_eq!(zero_padding_len(0), 55);
    assert_eq!(zero_padding_len(3), 52);
    // 55 + 0x80 lands exactly on the length field
    assert_eq!(zero_padding_len(55), 0);
    // 56 spills into a second block
    assert_eq!(zero_padding_len(56), 63);
    assert_eq!(zero_padding_len(63), 56);
    assert_eq!(zero_padding_len(64), 55);
}

#[test]
fn test_padded_len_boundaries() {
    assert_eq!(padded_len(0), Some(64));
    assert_eq!(padded_len(55), Some(64));
    assert_eq!(padded_len(56), Some(128));
    assert_eq!(padded_len(64), Some(128));
    assert_eq!(padded_len(119), Some(128));
    assert_eq!(padded_len(120), Some(192));
}

#[test]
fn test_padded_len_overflow() {
    assert_eq!(padded_len(usize::MAX), None);
    assert_eq!(padded_len(usize::MAX - 8), None);
}

// =============================================================================
// PaddedMessage::new()
// =============================================================================

#[test]
fn test_pad_empty_message() {
    let padded = PaddedMessage::new(b"").expect("Failed to PaddedMessage::new(..)");

    let mut expected = [0u8; 64];
    expected[0] = 0x80;

    assert_eq!(padded.message_len(), 0);
    assert_eq!(padded.block_count(), 1);
    assert!(!padded.is_empty());
    assert_eq!(padded.as_slice(), &expected[..]);
}

#[test]
fn test_pad_abc() {
    let padded = PaddedMessage::new(b"abc").expect("Failed to PaddedMessage::new(..)");
    let bytes = padded.as_slice();

    assert_eq!(padded.len(), 64);
    assert_eq!(&bytes[..3], b"abc");
    assert_eq!(bytes[3], 0x80);
    assert!(bytes[4..63].iter().all(|&b| b == 0));
    // 3 bytes = 24 bits
    assert_eq!(bytes[63], 0x18);
}

#[test]
fn test_pad_56_bytes_needs_second_block() {
    let message = [b'a'; 56];
    let padded = PaddedMessage::new(&message).expect("Failed to PaddedMessage::new(..)");
    let bytes = padded.as_slice();

    assert_eq!(padded.block_count(), 2);
    assert_eq!(bytes[56], 0x80);
    assert!(bytes[57..120].iter().all(|&b| b == 0));
    // 56 * 8 = 448 = 0x01C0
    assert_eq!(&bytes[120..], &[0, 0, 0, 0, 0, 0, 0x01, 0xC0]);
}

#[test]
fn test_pad_length_field_is_big_endian_bits() {
    let message = vec![0u8; 1000];
    let padded = PaddedMessage::new(&message).expect("Failed to PaddedMessage::new(..)");
    let bytes = padded.as_slice();

    // 8000 = 0x1F40
    assert_eq!(&bytes[bytes.len() - 8..], &[0, 0, 0, 0, 0, 0, 0x1F, 0x40]);
}

#[test]
fn test_blocks_iterate_in_order() {
    let message: Vec<u8> = (0..100u8).collect();
    let padded = PaddedMessage::new(&message).expect("Failed to PaddedMessage::new(..)");

    let blocks: Vec<&[u8; 64]> = padded.blocks().collect();

    assert_eq!(blocks.len(), 2);
    assert_eq!(&blocks[0][..], &message[..64]);
    assert_eq!(&blocks[1][..36], &message[64..]);
    assert_eq!(blocks[1][36], 0x80);
}

// =============================================================================
// PaddedMessage::from_buffer()
// =============================================================================

#[test]
fn test_from_buffer_matches_copy_path() {
    let buffer = ByteBuffer::from_slice(b"in place").expect("Failed to from_slice(..)");

    let in_place = PaddedMessage::from_buffer(buffer).expect("Failed to from_buffer(..)");
    let copied = PaddedMessage::new(b"in place").expect("Failed to PaddedMessage::new(..)");

    assert_eq!(in_place.as_slice(), copied.as_slice());
    assert_eq!(in_place.message_len(), 8);
}

#[test]
fn test_from_buffer_propagates_allocation_failure() {
    let mut buffer = ByteBuffer::new();
    buffer.change_behaviour(ByteBufferBehaviour::FailAtGrow);

    let result = PaddedMessage::from_buffer(buffer);

    assert!(matches!(
        result,
        Err(Sha1Error::Buffer(BufferError::AllocationFailure { .. }))
    ));
}
