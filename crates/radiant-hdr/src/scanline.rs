/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scanline decoding
//!
//! New style scanlines start with the bytes `2, 2, width >> 8, width & 255`
//! followed by the four channels (R, G, B, E) each run length encoded on its own.
//! Files whose first scanline does not start with that marker are read as
//! flat RGBE quads.
use alloc::vec;

use zune_core::bytestream::ZByteReader;
use zune_core::log::trace;

use crate::errors::HdrDecodeErrors;
use crate::reader::{read_bytes, read_fixed};

/// Whether the four bytes starting a scanline mark it as
/// per channel run length encoded
#[inline]
const fn is_rle_marker(marker: [u8; 4]) -> bool {
    marker[0] == 2 && marker[1] == 2 && (marker[2] & 0x80) == 0
}

/// Decode `height` scanlines of `width` pixels into `out` as interleaved RGBE
///
/// `out` must be exactly `width * height * 4` bytes long.
pub(crate) fn decode_pixels(
    reader: &mut ZByteReader<&[u8]>, width: usize, height: usize, out: &mut [u8]
) -> Result<(), HdrDecodeErrors> {
    let scanline_size = width * 4;

    debug_assert_eq!(out.len(), scanline_size * height);

    let mut marker = read_fixed::<4>(reader)?;

    if !is_rle_marker(marker) {
        trace!("First scanline is not run length encoded, reading flat RGBE data");
        return read_flat(reader, marker, out);
    }
    // channel planar, all R bytes then all G, B and E
    let mut scanline = vec![0_u8; scanline_size];

    for (y, out_scanline) in out.chunks_exact_mut(scanline_size).enumerate() {
        if y != 0 {
            marker = read_fixed::<4>(reader)?;
        }
        let encoded_width = usize::from(u16::from_be_bytes([marker[2], marker[3]]));

        if !is_rle_marker(marker) || encoded_width != width {
            return Err(HdrDecodeErrors::ScanlineWidthMismatch {
                scanline: y,
                expected: width,
                found:    encoded_width
            });
        }

        for (channel, plane) in scanline.chunks_exact_mut(width).enumerate() {
            decode_channel(reader, plane, y, channel)?;
        }
        interleave(&scanline, width, out_scanline);
    }
    Ok(())
}

/// Read the whole image as uncompressed RGBE quads, the first of which
/// has already been consumed as `first_pixel`
fn read_flat(
    reader: &mut ZByteReader<&[u8]>, first_pixel: [u8; 4], out: &mut [u8]
) -> Result<(), HdrDecodeErrors> {
    let (first, rest) = out.split_at_mut(4);

    first.copy_from_slice(&first_pixel);
    rest.copy_from_slice(read_bytes(reader, rest.len())?);

    Ok(())
}

/// Fill one channel of a scanline from (count, value) run units
/// and (count, literal...) blocks
fn decode_channel(
    reader: &mut ZByteReader<&[u8]>, plane: &mut [u8], scanline: usize, channel: usize
) -> Result<(), HdrDecodeErrors> {
    let mut position = 0;

    while position < plane.len() {
        let [count, value] = read_fixed::<2>(reader)?;
        let remaining = plane.len() - position;

        if count > 128 {
            let run = usize::from(count - 128);

            if run > remaining {
                return Err(HdrDecodeErrors::MalformedRun {
                    scanline,
                    channel,
                    count: run,
                    remaining
                });
            }
            plane[position..position + run].fill(value);
            position += run;
        } else {
            let run = usize::from(count);

            if run == 0 || run > remaining {
                return Err(HdrDecodeErrors::MalformedLiteralBlock {
                    scanline,
                    channel,
                    count: run,
                    remaining
                });
            }
            plane[position] = value;
            // the rest of the block follows unpaired
            plane[position + 1..position + run].copy_from_slice(read_bytes(reader, run - 1)?);
            position += run;
        }
    }
    Ok(())
}

/// Transpose a channel planar scanline into interleaved RGBE
fn interleave(planar: &[u8], width: usize, out: &mut [u8]) {
    let (r, rest) = planar.split_at(width);
    let (g, rest) = rest.split_at(width);
    let (b, e) = rest.split_at(width);

    for (i, pixel) in out.chunks_exact_mut(4).enumerate() {
        pixel[0] = r[i];
        pixel[1] = g[i];
        pixel[2] = b[i];
        pixel[3] = e[i];
    }
}
