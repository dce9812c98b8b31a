// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Whole-file input

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use shamac_buffer::ByteBuffer;
use zeroize::Zeroize;

use crate::error::Error;

const READ_CHUNK: usize = 4096;

/// Reads the file at `path` into a [`ByteBuffer`].
///
/// The file is read in fixed-size chunks appended to the buffer; the chunk
/// is zeroized before returning.
///
/// # Errors
///
/// - [`Error::InputUnavailable`] if the file cannot be opened or read
/// - [`Error::Buffer`] if the buffer cannot grow
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<ByteBuffer, Error> {
    let path = path.as_ref();
    let unavailable = |source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(unavailable)?;
    let mut buffer = ByteBuffer::new();
    let mut chunk = [0u8; READ_CHUNK];

    let result = loop {
        match file.read(&mut chunk) {
            Ok(0) => break Ok(()),
            Ok(n) => {
                if let Err(e) = buffer.append_bytes(&chunk[..n]) {
                    break Err(Error::from(e));
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => break Err(unavailable(e)),
        }
    };
    chunk.zeroize();
    result?;

    tracing::trace!(bytes = buffer.len(), "input file read");

    Ok(buffer)
}

/// SHA-1 of the file at `path`.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Result<shamac_sha1::Digest, Error> {
    let buffer = read_file(path)?;
    Ok(shamac_sha1::digest_buffer(&buffer)?)
}
