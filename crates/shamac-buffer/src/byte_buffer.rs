// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::BufferError;

/// Capacity of the first allocation made by an empty buffer (one SHA-1 block).
pub const MIN_CAPACITY: usize = 64;

/// Test-only behaviour injection for `ByteBuffer`.
///
/// Lets callers exercise allocation-failure paths without exhausting memory.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteBufferBehaviour {
    /// Normal behaviour
    #[default]
    None,
    /// Every growth attempt fails with `AllocationFailure`
    FailAtGrow,
}

/// Growable, owned, contiguous byte sequence.
///
/// Length is tracked separately from capacity and `len() <= capacity()`
/// always holds. Capacity never shrinks.
///
/// When an append would exceed capacity, the buffer relocates:
/// 1. Allocates new storage with doubled capacity (fallible)
/// 2. Copies current bytes into it
/// 3. Zeroizes the old allocation before releasing it
///
/// Contents are zeroized on drop.
///
/// # Example
///
/// ```rust
/// use shamac_buffer::{BufferError, ByteBuffer};
///
/// fn example() -> Result<(), BufferError> {
///     let mut buffer = ByteBuffer::new();
///     buffer.append(b'a')?;
///     buffer.append_bytes(b"bc")?;
///
///     assert_eq!(buffer.as_slice(), b"abc");
///     assert_eq!(buffer.capacity(), 64);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct ByteBuffer {
    inner: Vec<u8>,

    #[cfg(any(test, feature = "test-utils"))]
    #[zeroize(skip)]
    behaviour: ByteBufferBehaviour,
}

impl core::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("data", &"REDACTED")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for ByteBuffer {}

impl ByteBuffer {
    /// Creates a new empty buffer. Does not allocate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with exactly `capacity` bytes reserved.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        let mut buffer = Self::new();
        buffer
            .inner
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::AllocationFailure {
                requested: capacity,
            })?;
        Ok(buffer)
    }

    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] if the allocation fails.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, BufferError> {
        let mut buffer = Self::new();
        buffer.append_bytes(bytes)?;
        Ok(buffer)
    }

    /// Changes the buffer's test behaviour.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: ByteBufferBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of bytes stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the allocated capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the stored bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Next capacity in the doubling sequence that fits `min_capacity`.
    fn next_capacity(&self, min_capacity: usize) -> Result<usize, BufferError> {
        let mut new_capacity = match self.capacity() {
            0 => MIN_CAPACITY,
            current => current
                .checked_mul(2)
                .ok_or(BufferError::CapacityOverflow)?,
        };

        while new_capacity < min_capacity {
            new_capacity = new_capacity
                .checked_mul(2)
                .ok_or(BufferError::CapacityOverflow)?;
        }

        Ok(new_capacity)
    }

    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, min_capacity: usize) -> Result<(), BufferError> {
        #[cfg(any(test, feature = "test-utils"))]
        if self.behaviour == ByteBufferBehaviour::FailAtGrow {
            return Err(BufferError::AllocationFailure {
                requested: min_capacity,
            });
        }

        let new_capacity = self.next_capacity(min_capacity)?;

        // 1. Allocate the new storage
        let mut grown = Vec::new();
        grown
            .try_reserve_exact(new_capacity)
            .map_err(|_| BufferError::AllocationFailure {
                requested: new_capacity,
            })?;

        // 2. Copy current bytes
        grown.extend_from_slice(&self.inner);

        // 3. Zeroize old allocation, then release it
        self.inner.zeroize();
        let old_capacity = self.capacity();
        self.inner = grown;

        tracing::trace!(
            from = old_capacity,
            to = new_capacity,
            len = self.len(),
            "byte buffer relocated"
        );

        Ok(())
    }

    #[inline(always)]
    fn reserve_for(&mut self, additional: usize) -> Result<(), BufferError> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or(BufferError::CapacityOverflow)?;

        if self.capacity() >= required {
            return Ok(());
        }

        self.grow_to(required)
    }

    /// Appends one byte, doubling capacity first if the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailure`] or
    /// [`BufferError::CapacityOverflow`] if the buffer cannot grow. The
    /// buffer is left as it was before the call.
    pub fn append(&mut self, byte: u8) -> Result<(), BufferError> {
        self.reserve_for(1)?;
        self.inner.push(byte);
        Ok(())
    }

    /// Appends every byte of `bytes` in order.
    ///
    /// Grows once, to the first doubled capacity that fits the whole slice.
    ///
    /// # Errors
    ///
    /// Same as [`ByteBuffer::append`].
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.reserve_for(bytes.len())?;
        self.inner.extend_from_slice(bytes);
        Ok(())
    }

    /// Appends `count` copies of `byte`.
    ///
    /// # Errors
    ///
    /// Same as [`ByteBuffer::append`].
    pub fn append_repeated(&mut self, byte: u8, count: usize) -> Result<(), BufferError> {
        self.reserve_for(count)?;
        self.inner.resize(self.len() + count, byte);
        Ok(())
    }

    /// Copies all bytes of `other` onto the end of this buffer.
    ///
    /// `other` is only borrowed and is left unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`ByteBuffer::append`].
    pub fn concatenate(&mut self, other: &ByteBuffer) -> Result<(), BufferError> {
        self.append_bytes(other.as_slice())
    }

    /// Zeroizes and removes all bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.inner.zeroize();
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}
