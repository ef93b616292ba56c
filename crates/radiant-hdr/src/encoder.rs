/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Radiance HDR encoder

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::errors::HdrEncodeErrors;
use crate::header::MAX_HEADER_LINES;
use crate::rgbe::rgb_to_rgbe;

/// Shortest run written as a run unit, anything shorter goes into literal blocks
const MIN_RUN: usize = 4;
/// Longest run a single unit can express
const MAX_RUN: usize = 127;
/// Longest literal block
const MAX_LITERAL: usize = 128;

enum Pixels<'a> {
    Rgbe(&'a [u8]),
    Linear(&'a [f32])
}

/// A simple HDR encoder
///
/// Writes new style run length encoded scanlines, either from
/// RGBE bytes (`width*height*4`) or linear RGB floats (`width*height*3`)
pub struct HdrEncoder<'a> {
    pixels:   Pixels<'a>,
    width:    usize,
    height:   usize,
    exposure: f32,
    headers:  Option<&'a BTreeMap<String, String>>
}

impl<'a> HdrEncoder<'a> {
    /// Create an encoder for interleaved RGBE pixels
    pub fn from_rgbe(data: &'a [u8], width: usize, height: usize) -> HdrEncoder<'a> {
        HdrEncoder {
            pixels: Pixels::Rgbe(data),
            width,
            height,
            exposure: 1.0,
            headers: None
        }
    }

    /// Create an encoder for linear RGB floats
    ///
    /// Floats are converted to RGBE while encoding, negative values are
    /// clamped to zero.
    pub fn from_linear(data: &'a [f32], width: usize, height: usize) -> HdrEncoder<'a> {
        HdrEncoder {
            pixels: Pixels::Linear(data),
            width,
            height,
            exposure: 1.0,
            headers: None
        }
    }

    /// Record an `EXPOSURE=` line in the header
    ///
    /// Pixel values are written as given, the exposure is only metadata.
    pub fn set_exposure(&mut self, exposure: f32) {
        self.exposure = exposure;
    }

    /// Add extra headers to be encoded  with the image
    ///
    /// # Arguments:
    /// - headers: A map containing keys and values, the values will be encoded as key=value
    /// in the hdr header before encoding
    pub fn add_headers(&mut self, headers: &'a BTreeMap<String, String>) {
        self.headers = Some(headers)
    }

    /// Upper bound on the encoded size
    pub fn expected_buffer_size(&self) -> Option<usize> {
        // worst case, every channel byte lands in a literal block
        let scanline = self.width.checked_mul(4)?.checked_add(4 + 4 * 2)?;
        scanline.checked_mul(self.height)?.checked_add(1024)
    }

    fn header_lines(&self) -> Result<Vec<u8>, HdrEncodeErrors> {
        let mut lines = 5 + usize::from(self.exposure != 1.0);

        let mut header = Vec::with_capacity(128);
        header.extend_from_slice(b"#?RADIANCE\n");
        header.extend_from_slice(b"SOFTWARE=radiant-hdr\n");

        if let Some(headers) = self.headers {
            lines += headers.len();

            for (k, v) in headers {
                if !is_metadata_key(k) {
                    return Err(HdrEncodeErrors::InvalidHeaderKey(k.clone()));
                }
                if v.contains('\n') {
                    return Err(HdrEncodeErrors::Generic(
                        "header values cannot contain newlines"
                    ));
                }
                header.extend_from_slice(format!("{}={}\n", k, v).as_bytes());
            }
        }
        if lines > MAX_HEADER_LINES {
            return Err(HdrEncodeErrors::Generic("too many header lines"));
        }
        if self.exposure != 1.0 {
            header.extend_from_slice(format!("EXPOSURE={:?}\n", self.exposure).as_bytes());
        }
        header.extend_from_slice(b"FORMAT=32-bit_rle_rgbe\n\n");
        header.extend_from_slice(format!("-Y {} +X {}\n", self.height, self.width).as_bytes());

        Ok(header)
    }

    /// Encode the image, returning the file contents
    ///
    /// # Examples
    /// - Encode a black image of 10x10
    ///```
    /// use radiant_hdr::HdrEncoder;
    /// let data = vec![0.0_f32; 10 * 10 * 3];
    /// let encoder = HdrEncoder::from_linear(&data, 10, 10);
    /// let file = encoder.encode().unwrap();
    /// assert!(file.starts_with(b"#?RADIANCE\n"));
    ///```
    pub fn encode(&self) -> Result<Vec<u8>, HdrEncodeErrors> {
        if self.width == 0 {
            return Err(HdrEncodeErrors::ZeroDimension("width"));
        }
        if self.height == 0 {
            return Err(HdrEncodeErrors::ZeroDimension("height"));
        }
        if self.width > 0x7fff {
            return Err(HdrEncodeErrors::TooLargeWidth(self.width));
        }
        let components = match self.pixels {
            Pixels::Rgbe(_) => 4,
            Pixels::Linear(_) => 3
        };
        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(components))
            .ok_or(HdrEncodeErrors::Generic("overflow detected"))?;

        let found = match self.pixels {
            Pixels::Rgbe(data) => data.len(),
            Pixels::Linear(data) => data.len()
        };
        if expected != found {
            return Err(HdrEncodeErrors::WrongInputSize(expected, found));
        }
        let size = self
            .expected_buffer_size()
            .ok_or(HdrEncodeErrors::Generic("overflow detected"))?;

        let mut out = Vec::with_capacity(size);
        out.extend_from_slice(&self.header_lines()?);

        let width = self.width;
        let mut rgbe_scanline = vec![0_u8; width * 4];
        let mut channel = vec![0_u8; width];

        for y in 0..self.height {
            match self.pixels {
                Pixels::Rgbe(data) => {
                    rgbe_scanline.copy_from_slice(&data[y * width * 4..(y + 1) * width * 4]);
                }
                Pixels::Linear(data) => {
                    let floats = &data[y * width * 3..(y + 1) * width * 3];

                    for (rgb, rgbe) in floats
                        .chunks_exact(3)
                        .zip(rgbe_scanline.chunks_exact_mut(4))
                    {
                        rgbe.copy_from_slice(&rgb_to_rgbe([rgb[0], rgb[1], rgb[2]]));
                    }
                }
            }
            out.extend_from_slice(&[2, 2, (width >> 8) as u8, (width & 255) as u8]);

            for c in 0..4 {
                for (dest, pixel) in channel.iter_mut().zip(rgbe_scanline.chunks_exact(4)) {
                    *dest = pixel[c];
                }
                rle(&channel, &mut out);
            }
        }
        Ok(out)
    }
}

/// Whether `key` reads back as plain `KEY=VALUE` metadata
///
/// Lines starting with `#` are comments and `-`/`+` start resolution lines,
/// `FORMAT`, `EXPOSURE` and `GAMMA` are interpreted by the decoder.
fn is_metadata_key(key: &str) -> bool {
    if key.contains(['\n', '=']) || key.starts_with(['#', '-', '+']) {
        return false;
    }
    !matches!(key.trim(), "FORMAT" | "EXPOSURE" | "GAMMA")
}

/// Length of the run of equal bytes starting at `start`, capped at [`MAX_RUN`]
fn run_length(data: &[u8], start: usize) -> usize {
    data[start..]
        .iter()
        .take(MAX_RUN)
        .take_while(|x| **x == data[start])
        .count()
}

/// Run length encode a single channel of a scanline
fn rle(data: &[u8], out: &mut Vec<u8>) {
    let mut cur = 0;

    while cur < data.len() {
        // find where the next worthwhile run starts
        let mut run_start = cur;
        let mut run_count = 0;

        while run_start < data.len() {
            run_count = run_length(data, run_start);

            if run_count >= MIN_RUN {
                break;
            }
            run_start += run_count;
        }

        while cur < run_start {
            let literal_count = MAX_LITERAL.min(run_start - cur);

            out.push(literal_count as u8);
            out.extend_from_slice(&data[cur..cur + literal_count]);
            cur += literal_count;
        }

        if run_count >= MIN_RUN {
            out.push((128 + run_count) as u8);
            out.push(data[run_start]);
            cur += run_count;
        }
    }
}
