/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use radiant_hdr::{parse, ColorFormat, HdrDecoder, InternalFormat};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::{make_file, solid_scanline, RLE_HEADER};

#[test]
fn decode_four_by_four() {
    let mut pixels = vec![];
    for y in 0..4 {
        pixels.extend_from_slice(&solid_scanline(4, [y, 2 * y, 3 * y, 128]));
    }
    let file = make_file(RLE_HEADER, 4, 4, &pixels);

    let mut decoder = HdrDecoder::new(&file);
    decoder.decode_headers().unwrap();

    let header = decoder.header_info().unwrap();
    assert_eq!(header.width, 4);
    assert_eq!(header.height, 4);
    assert_eq!(header.exposure, 1.0);
    assert!(header.is_run_length_encoded);
    assert_eq!(header.pixel_data_offset, file.len() - pixels.len());

    let decoded = decoder.decode().unwrap();
    assert_eq!(decoded.len(), 64);

    for (y, row) in decoded.chunks_exact(16).enumerate() {
        let y = y as u8;
        for pixel in row.chunks_exact(4) {
            assert_eq!(pixel, [y, 2 * y, 3 * y, 128]);
        }
    }
}

#[test]
fn parse_builds_texture_record() {
    let mut pixels = vec![];
    for _ in 0..3 {
        pixels.extend_from_slice(&solid_scanline(9, [1, 2, 3, 4]));
    }
    let file = make_file(RLE_HEADER, 9, 3, &pixels);

    let texture = parse(&file).unwrap();

    assert_eq!(texture.dimensions(), (9, 3));
    assert_eq!(texture.color_format(), ColorFormat::Rgba8888);
    assert_eq!(texture.internal_format(), InternalFormat::PixelArray);
    assert_eq!(texture.colorspace(), ColorSpace::RGBA);
    assert!(!texture.use_mipmap());

    let levels = texture.mipmaps();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].width(), 9);
    assert_eq!(levels[0].height(), 3);
    assert_eq!(levels[0].data().len(), 9 * 3 * 4);
    assert!(levels[0].data().chunks_exact(4).all(|x| x == [1, 2, 3, 4]));
}

#[test]
fn parse_accepts_owned_and_borrowed_buffers() {
    let file = make_file(RLE_HEADER, 8, 1, &solid_scanline(8, [9, 9, 9, 129]));

    let borrowed = parse(file.as_slice()).unwrap();
    let owned = parse(file).unwrap();

    assert_eq!(borrowed, owned);
}

#[test]
fn legacy_flat_file() {
    // first pixel does not start with 2,2 so everything is flat RGBE
    let pixels: Vec<u8> = (0..3 * 2 * 4).map(|x| x as u8 + 10).collect();
    let file = make_file(RLE_HEADER, 3, 2, &pixels);

    let decoded = HdrDecoder::new(&file).decode().unwrap();
    assert_eq!(decoded, pixels);
}

#[test]
fn legacy_flat_file_with_marker_like_high_bit() {
    // 2,2 followed by a byte with the top bit set is not a scanline marker
    let mut pixels = vec![2, 2, 0x80, 0];
    pixels.extend_from_slice(&[5; 4 * 4 - 4]);
    let file = make_file(RLE_HEADER, 4, 1, &pixels);

    let decoded = HdrDecoder::new(&file).decode().unwrap();
    assert_eq!(decoded, pixels);
}

#[test]
fn narrow_scanlines_are_accepted_run_length_encoded() {
    // widths below 8 are not special cased
    let mut pixels = solid_scanline(2, [1, 1, 1, 1]);
    pixels.extend_from_slice(&solid_scanline(2, [2, 2, 2, 2]));
    let file = make_file(RLE_HEADER, 2, 2, &pixels);

    let decoded = HdrDecoder::new(&file).decode().unwrap();
    assert_eq!(decoded, [1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2]);
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut pixels = solid_scanline(8, [3, 3, 3, 3]);
    pixels.extend_from_slice(b"junk");
    let file = make_file(RLE_HEADER, 8, 1, &pixels);

    assert_eq!(HdrDecoder::new(&file).decode().unwrap(), vec![3; 32]);
}

#[test]
fn header_metadata_is_kept() {
    let header = b"#?RADIANCE\n# comment\nSOFTWARE=tests\nPRIMARIES=0.64 0.33 0.3 0.6 0.15 0.06 0.3127 0.329\nGAMMA=2.2\nEXPOSURE=0.5\nFORMAT=32-bit_rle_rgbe\n\n";
    let file = make_file(header, 8, 1, &solid_scanline(8, [128, 64, 192, 129]));

    let mut decoder = HdrDecoder::new(&file);
    let texture = decoder.decode_texture().unwrap();
    let info = decoder.header_info().unwrap();

    assert_eq!(info.metadata.get("SOFTWARE").map(String::as_str), Some("tests"));
    assert!(info.metadata.contains_key("PRIMARIES"));
    assert_eq!(info.gamma, 2.2);
    assert_eq!(texture.exposure(), 0.5);
    assert_eq!(texture.gamma(), 2.2);

    let linear = texture.to_linear_rgb();
    assert_eq!(&linear[..3], &[2.0, 1.0, 3.0]);
}

#[test]
fn options_limit_dimensions() {
    let file = make_file(RLE_HEADER, 8, 2, &[]);
    let options = DecoderOptions::default().set_max_height(1);

    let mut decoder = HdrDecoder::new_with_options(&file, options);
    assert!(decoder.decode_headers().is_err());
    assert_eq!(decoder.dimensions(), None);
}
