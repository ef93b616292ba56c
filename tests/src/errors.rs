/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use radiant_hdr::{parse, HdrDecodeErrors, HdrDecoder, HdrEncoder, MAX_HEADER_LINES};

use crate::{make_file, solid_scanline, synthetic_image, RLE_HEADER};

#[test]
fn missing_format_line() {
    let file = make_file(b"#?RADIANCE\nEXPOSURE=1.0\n", 8, 1, &solid_scanline(8, [1; 4]));

    let err = parse(&file).unwrap_err();
    assert!(matches!(err, HdrDecodeErrors::UnsupportedFormat), "{err:?}");
}

#[test]
fn missing_format_line_wins_over_missing_resolution() {
    let err = parse(b"#?RADIANCE\n\n\n").unwrap_err();
    assert!(matches!(err, HdrDecodeErrors::UnsupportedFormat), "{err:?}");
}

#[test]
fn resolution_outside_line_bound() {
    let mut header = RLE_HEADER.to_vec();
    for _ in 0..MAX_HEADER_LINES {
        header.extend_from_slice(b"\n");
    }
    let file = make_file(&header, 8, 1, &solid_scanline(8, [1; 4]));

    let err = parse(&file).unwrap_err();
    assert!(matches!(err, HdrDecodeErrors::MalformedHeader(_)), "{err:?}");
}

#[test]
fn unsupported_orientation() {
    let mut file = RLE_HEADER.to_vec();
    file.extend_from_slice(b"+X 8 -Y 1\n");
    file.extend_from_slice(&solid_scanline(8, [1; 4]));

    assert!(parse(&file).is_err());
}

#[test]
fn second_scanline_width_mismatch() {
    let mut pixels = solid_scanline(8, [1; 4]);
    pixels.extend_from_slice(&solid_scanline(7, [1; 4]));
    let file = make_file(RLE_HEADER, 8, 2, &pixels);

    let err = parse(&file).unwrap_err();
    assert!(
        matches!(
            err,
            HdrDecodeErrors::ScanlineWidthMismatch {
                scanline: 1,
                expected: 8,
                found:    7
            }
        ),
        "{err:?}"
    );
}

#[test]
fn second_scanline_without_marker_does_not_fall_back() {
    let mut pixels = solid_scanline(8, [1; 4]);
    pixels.extend_from_slice(&[7; 8 * 4]);
    let file = make_file(RLE_HEADER, 8, 2, &pixels);

    let err = parse(&file).unwrap_err();
    assert!(
        matches!(
            err,
            HdrDecodeErrors::ScanlineWidthMismatch { scanline: 1, .. }
        ),
        "{err:?}"
    );
}

#[test]
fn first_scanline_width_mismatch() {
    let file = make_file(RLE_HEADER, 8, 1, &solid_scanline(9, [1; 4]));

    let err = parse(&file).unwrap_err();
    assert!(
        matches!(
            err,
            HdrDecodeErrors::ScanlineWidthMismatch {
                scanline: 0,
                expected: 8,
                found:    9
            }
        ),
        "{err:?}"
    );
}

#[test]
fn run_past_channel_end() {
    // run of 9 in an 8 wide channel
    let pixels = [2, 2, 0, 8, 137, 0];
    let file = make_file(RLE_HEADER, 8, 1, &pixels);

    let err = parse(&file).unwrap_err();
    assert!(
        matches!(
            err,
            HdrDecodeErrors::MalformedRun {
                scanline:  0,
                channel:   0,
                count:     9,
                remaining: 8
            }
        ),
        "{err:?}"
    );
}

#[test]
fn literal_past_channel_end() {
    // R channel filled, G channel gets a 9 byte literal block
    let pixels = [2, 2, 0, 8, 136, 0, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8];
    let file = make_file(RLE_HEADER, 8, 1, &pixels);

    let err = parse(&file).unwrap_err();
    assert!(
        matches!(
            err,
            HdrDecodeErrors::MalformedLiteralBlock {
                channel: 1,
                count: 9,
                ..
            }
        ),
        "{err:?}"
    );
}

#[test]
fn empty_literal_block() {
    let pixels = [2, 2, 0, 8, 0, 0];
    let file = make_file(RLE_HEADER, 8, 1, &pixels);

    let err = parse(&file).unwrap_err();
    assert!(
        matches!(err, HdrDecodeErrors::MalformedLiteralBlock { count: 0, .. }),
        "{err:?}"
    );
}

#[test]
fn every_truncation_of_pixel_data_fails() {
    let pixels = synthetic_image(21, 4, 3);
    let file = HdrEncoder::from_rgbe(&pixels, 21, 4).encode().unwrap();

    let mut decoder = HdrDecoder::new(&file);
    decoder.decode_headers().unwrap();
    let offset = decoder.header_info().unwrap().pixel_data_offset;

    for end in offset..file.len() {
        let err = parse(&file[..end]).unwrap_err();
        assert!(
            matches!(err, HdrDecodeErrors::TruncatedInput(_, _)),
            "cut at {end}: {err:?}"
        );
    }
}

#[test]
fn truncated_flat_file() {
    let file = make_file(RLE_HEADER, 4, 4, &[1; 4 * 4 * 4 - 1]);

    let err = parse(&file).unwrap_err();
    assert!(matches!(err, HdrDecodeErrors::TruncatedInput(_, _)), "{err:?}");
}

#[test]
fn zero_width() {
    let file = make_file(RLE_HEADER, 0, 4, &[]);

    let err = parse(&file).unwrap_err();
    assert!(matches!(err, HdrDecodeErrors::ZeroDimension("width")), "{err:?}");
}
