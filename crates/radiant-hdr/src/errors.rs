/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use core::convert::From;
use core::fmt::{Debug, Display, Formatter};
use core::num::ParseIntError;

/// HDR decoding errors
///
/// Every error is terminal for the decode call that produced it,
/// no partially filled texture is ever returned alongside one.
pub enum HdrDecodeErrors {
    /// The header was scanned for the given number of lines
    /// without finding a `-Y <height> +X <width>` line
    MalformedHeader(usize),
    /// The header lacks a `FORMAT=32-bit_rle_rgbe` line
    UnsupportedFormat,
    /// A scanline header declares a width different from the image width
    ScanlineWidthMismatch {
        scanline: usize,
        expected: usize,
        found:    usize
    },
    /// A run is empty or longer than what is left of the channel
    MalformedRun {
        scanline:  usize,
        channel:   usize,
        count:     usize,
        remaining: usize
    },
    /// A literal block is empty or longer than what is left of the channel
    MalformedLiteralBlock {
        scanline:  usize,
        channel:   usize,
        count:     usize,
        remaining: usize
    },
    /// Fewer bytes were left than a read needed
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes left
    TruncatedInput(usize, usize),
    /// The decoder could not convert string to int
    ParseError(ParseIntError),
    /// Width or height was declared as zero
    ZeroDimension(&'static str),
    /// Too large dimensions for a given dimension
    TooLargeDimensions(&'static str, usize, usize),
    /// The output array is too small to contain the whole
    /// image
    TooSmallOutputArray(usize, usize),
    /// Pixel bytes handed to a texture do not match `width*height*4`
    ///
    /// # Arguments
    /// - 1st argument is the expected length
    /// - 2nd argument is the length found
    WrongPixelCount(usize, usize),
    /// Generic message
    Generic(&'static str)
}

impl Debug for HdrDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            HdrDecodeErrors::MalformedHeader(lines) => {
                writeln!(
                    f,
                    "Malformed header, no `-Y <height> +X <width>` line in the first {lines} lines"
                )
            }
            HdrDecodeErrors::UnsupportedFormat => {
                writeln!(f, "File is not run length encoded, missing FORMAT=32-bit_rle_rgbe")
            }
            HdrDecodeErrors::ScanlineWidthMismatch {
                scanline,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Wrong scanline width {found} at scanline {scanline}, expected {expected}"
                )
            }
            HdrDecodeErrors::MalformedRun {
                scanline,
                channel,
                count,
                remaining
            } => {
                writeln!(
                    f,
                    "Bad run of length {count} in channel {channel} of scanline {scanline}, {remaining} bytes remain in channel"
                )
            }
            HdrDecodeErrors::MalformedLiteralBlock {
                scanline,
                channel,
                count,
                remaining
            } => {
                writeln!(
                    f,
                    "Bad literal block of length {count} in channel {channel} of scanline {scanline}, {remaining} bytes remain in channel"
                )
            }
            HdrDecodeErrors::TruncatedInput(expected, found) => {
                writeln!(
                    f,
                    "Truncated input, expected {expected} bytes but only {found} remain"
                )
            }
            HdrDecodeErrors::ParseError(err) => {
                writeln!(f, "Could not parse integer {:?}", err)
            }
            HdrDecodeErrors::ZeroDimension(dimension) => {
                writeln!(f, "Image {dimension} is zero")
            }
            HdrDecodeErrors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            HdrDecodeErrors::TooSmallOutputArray(expected, found) => {
                writeln!(f, "Too small of an output array, expected array of at least length {} but found {}", expected, found)
            }
            HdrDecodeErrors::WrongPixelCount(expected, found) => {
                writeln!(f, "Texture needs {expected} pixel bytes but {found} were given")
            }
            HdrDecodeErrors::Generic(error) => {
                writeln!(f, "{error}")
            }
        }
    }
}

impl From<ParseIntError> for HdrDecodeErrors {
    fn from(value: ParseIntError) -> Self {
        HdrDecodeErrors::ParseError(value)
    }
}

impl Display for HdrDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
impl std::error::Error for HdrDecodeErrors {}

impl Display for HdrEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for HdrEncodeErrors {}

/// HDR encoding errors
pub enum HdrEncodeErrors {
    /// The input was expected to be of a certain size but isn't
    WrongInputSize(usize, usize),
    /// Width or height is zero
    ZeroDimension(&'static str),
    /// Width does not fit the 15 bits a scanline header has for it
    TooLargeWidth(usize),
    /// An extra header key the decoder would read as something
    /// other than plain metadata
    InvalidHeaderKey(String),
    /// Generic message
    Generic(&'static str)
}

impl Debug for HdrEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            HdrEncodeErrors::WrongInputSize(expected, found) => {
                writeln!(f, "Input array length {found} doesn't match {expected}")
            }
            HdrEncodeErrors::ZeroDimension(dimension) => {
                writeln!(f, "Cannot encode an image with zero {dimension}")
            }
            HdrEncodeErrors::TooLargeWidth(width) => {
                writeln!(
                    f,
                    "Width {width} is too large for run length encoded scanlines, max is 32767"
                )
            }
            HdrEncodeErrors::InvalidHeaderKey(key) => {
                writeln!(f, "Header key {key:?} cannot be written as metadata")
            }
            HdrEncodeErrors::Generic(err) => writeln!(f, "{}", err)
        }
    }
}

impl From<&'static str> for HdrEncodeErrors {
    fn from(value: &'static str) -> Self {
        HdrEncodeErrors::Generic(value)
    }
}
