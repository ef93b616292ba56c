/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Radiance specific reads on top of [`ZByteReader`]
//!
//! Short reads are reported as [`HdrDecodeErrors::TruncatedInput`] carrying
//! the requested and available byte counts, the cursor does not move on failure.
use zune_core::bytestream::ZByteReader;

use crate::errors::HdrDecodeErrors;

/// Return the next `num_bytes` bytes, advancing the cursor past them
#[inline]
pub(crate) fn read_bytes<'r>(
    reader: &'r mut ZByteReader<&[u8]>, num_bytes: usize
) -> Result<&'r [u8], HdrDecodeErrors> {
    let remaining = reader.remaining();

    reader
        .get(num_bytes)
        .map_err(|_| HdrDecodeErrors::TruncatedInput(num_bytes, remaining))
}

/// Read `N` bytes into a fixed array or error out if
/// the buffer cannot satisfy the read
#[inline(always)]
pub(crate) fn read_fixed<const N: usize>(
    reader: &mut ZByteReader<&[u8]>
) -> Result<[u8; N], HdrDecodeErrors> {
    let remaining = reader.remaining();

    reader
        .get_fixed_bytes_or_err::<N>()
        .map_err(|_| HdrDecodeErrors::TruncatedInput(N, remaining))
}

/// Get a whole radiance line and increment the cursor
/// past that line.
///
/// The newline is consumed but not part of the returned slice,
/// the end of the buffer terminates the last line.
/// Returns `None` when the cursor is already at the end.
pub(crate) fn read_line<'r>(reader: &'r mut ZByteReader<&[u8]>) -> Option<&'r [u8]> {
    if reader.eof() {
        return None;
    }
    let length = match reader.remaining_bytes().iter().position(|x| *x == b'\n') {
        Some(end) => end + 1,
        None => reader.remaining()
    };
    let line = reader.get(length).ok()?;

    Some(line.strip_suffix(b"\n").unwrap_or(line))
}
