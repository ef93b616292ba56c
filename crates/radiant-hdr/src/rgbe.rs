/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversions between RGBE pixels and linear floating point RGB
//!
//! A pixel `(R, G, B, E)` with a non-zero exponent maps to
//! `(R, G, B) / 256 * 2^(E - 128)`, a zero exponent is black.

/// `2^exp` for exponents representable as a normal `f32`
#[inline(always)]
fn pow2(exp: i32) -> f32 {
    debug_assert!((-126..=127).contains(&exp));
    f32::from_bits(((exp + 127) as u32) << 23)
}

/// Calculate `x * 2^exp`
///
/// Large exponents are applied in steps so intermediate
/// factors never overflow or flush to zero early.
pub fn ldexp(mut x: f32, mut exp: i32) -> f32 {
    while exp > 127 {
        x *= pow2(127);
        exp -= 127;
        if x.is_infinite() {
            return x;
        }
    }
    while exp < -126 {
        x *= pow2(-126);
        exp += 126;
        if x == 0.0 {
            return x;
        }
    }
    x * pow2(exp)
}

/// Split `x` into a mantissa in `[0.5, 1)` and an exponent
/// such that `x = mantissa * 2^exponent`
///
/// Zero, infinities and NaN are returned unchanged with a zero exponent.
pub fn frexp(x: f32) -> (f32, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let bits = x.to_bits();
    let biased = ((bits >> 23) & 0xff) as i32;

    if biased == 0 {
        // subnormal, scale into the normal range first
        let (mantissa, exp) = frexp(x * pow2(64));
        return (mantissa, exp - 64);
    }
    let mantissa = f32::from_bits((bits & !(0xff << 23)) | (126 << 23));

    (mantissa, biased - 126)
}

/// Convert one RGBE pixel to linear RGB
#[inline]
pub fn rgbe_to_rgb(rgbe: [u8; 4]) -> [f32; 3] {
    if rgbe[3] == 0 {
        return [0.0; 3];
    }
    // mantissa / 256 * 2^(E-128)
    let scale = ldexp(1.0, i32::from(rgbe[3]) - (128 + 8));

    [
        f32::from(rgbe[0]) * scale,
        f32::from(rgbe[1]) * scale,
        f32::from(rgbe[2]) * scale
    ]
}

/// Convert one linear RGB pixel to RGBE
///
/// Negative components are clamped to zero, values too large
/// for the shared exponent saturate.
pub fn rgb_to_rgbe(rgb: [f32; 3]) -> [u8; 4] {
    let v = rgb.iter().fold(0.0_f32, |x, y| x.max(*y));

    if !(v > 1e-32) {
        return [0; 4];
    }
    if v.is_infinite() {
        return [255; 4];
    }
    let (mantissa, exp) = frexp(v);

    if exp > 127 {
        return [255; 4];
    }
    let scale = mantissa * 256.0 / v;

    [
        (rgb[0] * scale).clamp(0.0, 255.0) as u8,
        (rgb[1] * scale).clamp(0.0, 255.0) as u8,
        (rgb[2] * scale).clamp(0.0, 255.0) as u8,
        (exp + 128) as u8
    ]
}

/// Convert a row of interleaved RGBE bytes into linear RGB floats,
/// multiplying every component by `scale`
pub(crate) fn convert_scanline(in_scanline: &[u8], out_scanline: &mut [f32], scale: f32) {
    for (rgbe, out) in in_scanline
        .chunks_exact(4)
        .zip(out_scanline.chunks_exact_mut(3))
    {
        let rgb = rgbe_to_rgb([rgbe[0], rgbe[1], rgbe[2], rgbe[3]]);

        out[0] = rgb[0] * scale;
        out[1] = rgb[1] * scale;
        out[2] = rgb[2] * scale;
    }
}
