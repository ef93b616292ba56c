/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use radiant_hdr::HdrEncoder;

/// Encode a synthetic sky like image, smooth gradients with
/// a noisy horizon so scanlines contain both runs and literals
pub fn sample_image(width: usize, height: usize) -> Vec<u8> {
    let mut floats = Vec::with_capacity(width * height * 3);

    for y in 0..height {
        let sky = 1.0 - y as f32 / height as f32;

        for x in 0..width {
            if y > height / 2 {
                let noise = ((x * 31 + y * 17) % 97) as f32 / 97.0;
                floats.extend_from_slice(&[0.2 * noise, 0.15 * noise, 0.1 * noise]);
            } else {
                floats.extend_from_slice(&[4.0 * sky, 6.0 * sky, 12.0 * sky]);
            }
        }
    }
    match HdrEncoder::from_linear(&floats, width, height).encode() {
        Ok(file) => file,
        Err(err) => panic!("could not encode sample image {err:?}")
    }
}
