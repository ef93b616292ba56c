/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Radiance header parsing
//!
//! The header is a sequence of newline terminated ASCII lines
//! ending with the resolution line `-Y <height> +X <width>`,
//! pixel data starts right after that line's newline.
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use zune_core::bytestream::ZByteReader;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::errors::HdrDecodeErrors;
use crate::reader::read_line;

/// Maximum number of lines scanned while looking for the resolution line
pub const MAX_HEADER_LINES: usize = 20;

/// The only pixel format we can decode
const RLE_RGBE_FORMAT: &str = "32-bit_rle_rgbe";

/// Information extracted from a Radiance header
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderInfo {
    /// Image width in pixels
    pub width:                 usize,
    /// Image height in pixels, i.e number of scanlines
    pub height:                usize,
    /// Value of the last `EXPOSURE=` line, 1.0 if absent
    pub exposure:              f32,
    /// Value of the last `GAMMA=` line, 1.0 if absent
    pub gamma:                 f32,
    /// Whether a `FORMAT=32-bit_rle_rgbe` line was seen
    pub is_run_length_encoded: bool,
    /// Offset of the first byte after the resolution line
    pub pixel_data_offset:     usize,
    /// Every other `KEY=VALUE` line
    ///
    /// Keys and values are lossily decoded, invalid UTF-8 is replaced with
    /// [REPLACEMENT_CHARACTER](core::char::REPLACEMENT_CHARACTER)
    pub metadata:              BTreeMap<String, String>
}

impl Default for HeaderInfo {
    fn default() -> Self {
        HeaderInfo {
            width:                 0,
            height:                0,
            exposure:              1.0,
            gamma:                 1.0,
            is_run_length_encoded: false,
            pixel_data_offset:     0,
            metadata:              BTreeMap::new()
        }
    }
}

/// What a single header line turned out to be
#[derive(Debug, PartialEq)]
enum HeaderLine {
    Signature,
    RleFormat,
    Exposure(Option<f32>),
    Gamma(Option<f32>),
    Comment,
    Resolution { width: usize, height: usize },
    KeyValue(String, String),
    Other
}

fn parse_float(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok()
}

/// Match `-Y <height> +X <width>`, returning `None` for any other shape
fn parse_resolution(line: &str) -> Result<Option<(usize, usize)>, HdrDecodeErrors> {
    let mut tokens = line.split_ascii_whitespace();

    let (Some("-Y"), Some(height), Some("+X"), Some(width)) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Ok(None);
    };
    let is_number = |x: &str| !x.is_empty() && x.bytes().all(|c| c.is_ascii_digit());

    if !(is_number(height) && is_number(width)) {
        return Ok(None);
    }
    Ok(Some((width.parse::<usize>()?, height.parse::<usize>()?)))
}

fn classify_line(line: &[u8]) -> Result<HeaderLine, HdrDecodeErrors> {
    if line.starts_with(b"#?RADIANCE") {
        return Ok(HeaderLine::Signature);
    }
    if line.starts_with(b"#") {
        return Ok(HeaderLine::Comment);
    }
    let line = String::from_utf8_lossy(line);

    if line.starts_with("-Y") {
        if let Some((width, height)) = parse_resolution(&line)? {
            return Ok(HeaderLine::Resolution { width, height });
        }
        warn!("Ignoring unsupported resolution line {:?}", line);
        return Ok(HeaderLine::Other);
    }

    match line.split_once('=') {
        Some((key, value)) => {
            let key = key.trim();

            Ok(match key {
                "FORMAT" if value.trim() == RLE_RGBE_FORMAT => HeaderLine::RleFormat,
                "EXPOSURE" => HeaderLine::Exposure(parse_float(value)),
                "GAMMA" => HeaderLine::Gamma(parse_float(value)),
                _ => HeaderLine::KeyValue(key.to_string(), value.trim().to_string())
            })
        }
        None => Ok(HeaderLine::Other)
    }
}

/// Read header lines from `reader` until the resolution line
///
/// On success the reader is positioned at the first byte of pixel data.
pub(crate) fn read_header(
    reader: &mut ZByteReader<&[u8]>, options: &DecoderOptions
) -> Result<HeaderInfo, HdrDecodeErrors> {
    let mut info = HeaderInfo::default();
    let mut resolution = None;
    let mut lines_scanned = 0;

    while lines_scanned < MAX_HEADER_LINES {
        let Some(line) = read_line(reader) else {
            break;
        };
        lines_scanned += 1;

        match classify_line(line)? {
            HeaderLine::Signature | HeaderLine::Comment | HeaderLine::Other => {}
            HeaderLine::RleFormat => info.is_run_length_encoded = true,
            HeaderLine::Exposure(Some(exposure)) => info.exposure = exposure,
            HeaderLine::Gamma(Some(gamma)) => info.gamma = gamma,
            HeaderLine::Exposure(None) | HeaderLine::Gamma(None) => {
                warn!("Ignoring unparsable header line {:?}", String::from_utf8_lossy(line));
            }
            HeaderLine::KeyValue(key, value) => {
                info.metadata.insert(key, value);
            }
            HeaderLine::Resolution { width, height } => {
                resolution = Some((width, height));
                break;
            }
        }
    }
    info.pixel_data_offset = reader.get_position();

    if !info.is_run_length_encoded {
        return Err(HdrDecodeErrors::UnsupportedFormat);
    }
    let (width, height) = match resolution {
        Some(dimensions) => dimensions,
        None if lines_scanned < MAX_HEADER_LINES => {
            // ran out of bytes before the bound
            return Err(HdrDecodeErrors::TruncatedInput(1, 0));
        }
        None => return Err(HdrDecodeErrors::MalformedHeader(lines_scanned))
    };

    if width == 0 {
        return Err(HdrDecodeErrors::ZeroDimension("width"));
    }
    if height == 0 {
        return Err(HdrDecodeErrors::ZeroDimension("height"));
    }
    if height > options.get_max_height() {
        return Err(HdrDecodeErrors::TooLargeDimensions(
            "height",
            options.get_max_height(),
            height
        ));
    }
    if width > options.get_max_width() {
        return Err(HdrDecodeErrors::TooLargeDimensions(
            "width",
            options.get_max_width(),
            width
        ));
    }
    info.width = width;
    info.height = height;

    trace!("Metadata: {:?}", info.metadata);
    trace!("Exposure: {}", info.exposure);
    trace!("Width: {}", info.width);
    trace!("Height: {}", info.height);

    Ok(info)
}
