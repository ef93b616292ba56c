/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(dead_code)]

use nanorand::{Rng, WyRand};

mod decode;
mod errors;

pub const RLE_HEADER: &[u8] = b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\nEXPOSURE=1.0\n";

/// Build a file from header lines, a resolution line and raw pixel bytes
pub fn make_file(header: &[u8], width: usize, height: usize, pixels: &[u8]) -> Vec<u8> {
    let mut file = header.to_vec();
    file.extend_from_slice(format!("-Y {height} +X {width}\n").as_bytes());
    file.extend_from_slice(pixels);
    file
}

/// Encode one scanline where every channel is a single run
pub fn solid_scanline(width: usize, rgbe: [u8; 4]) -> Vec<u8> {
    assert!(width <= 127);
    let mut scanline = vec![2, 2, (width >> 8) as u8, (width & 255) as u8];

    for value in rgbe {
        scanline.extend_from_slice(&[128 + width as u8, value]);
    }
    scanline
}

/// Deterministic RGBE image with both flat regions and noise,
/// so encoding produces runs as well as literal blocks
pub fn synthetic_image(width: usize, height: usize, seed: u32) -> Vec<u8> {
    let mut rng = WyRand::new_seed(u64::from(seed));
    let mut pixels = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            let noise = rng.generate::<u32>();

            if (x / 5 + y) % 3 == 0 {
                pixels.extend_from_slice(&[200, 100, 50, 130]);
            } else {
                pixels.extend_from_slice(&[
                    (noise & 255) as u8,
                    ((noise >> 8) & 255) as u8,
                    (x & 255) as u8,
                    128 + (y % 4) as u8
                ]);
            }
        }
    }
    pixels
}
