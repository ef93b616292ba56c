/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Engine facing texture records
use alloc::vec;
use alloc::vec::Vec;

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

use crate::errors::HdrDecodeErrors;
use crate::rgbe::convert_scanline;

/// Pixel layout of a mip level
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorFormat {
    /// Four 8 bit channels per pixel, for decoded textures the
    /// channels carry R, G, B and the shared exponent
    Rgba8888
}

impl ColorFormat {
    /// The colorspace the bytes are laid out in
    pub const fn colorspace(self) -> ColorSpace {
        match self {
            ColorFormat::Rgba8888 => ColorSpace::RGBA
        }
    }
    /// The bit depth of a single channel
    pub const fn bit_depth(self) -> BitDepth {
        match self {
            ColorFormat::Rgba8888 => BitDepth::Eight
        }
    }
    /// Number of bytes a single pixel occupies
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            ColorFormat::Rgba8888 => 4
        }
    }
}

/// How texture data is handed to the renderer
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InternalFormat {
    /// Raw pixel array, uploaded as is
    PixelArray
}

/// A single mip level
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MipmapData {
    data:   Vec<u8>,
    width:  usize,
    height: usize
}

impl MipmapData {
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> MipmapData {
        MipmapData {
            data,
            width,
            height
        }
    }
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Take the pixel bytes out of this level
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// A decoded texture ready for upload
///
/// Decoded Radiance files always produce exactly one mip level
/// with mipmapping disabled, pixels stay RGBE encoded and it's up
/// to the consumer (usually a shader) to expand them.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    width:           usize,
    height:          usize,
    color_format:    ColorFormat,
    internal_format: InternalFormat,
    mipmaps:         Vec<MipmapData>,
    use_mipmap:      bool,
    exposure:        f32,
    gamma:           f32
}

impl Texture {
    /// Wrap interleaved RGBE pixels into a texture with a single mip level
    ///
    /// # Errors
    /// - `WrongPixelCount`: `pixels` is not exactly `width * height * 4` bytes long
    /// - `Generic`: the expected length overflows a usize
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<Texture, HdrDecodeErrors> {
        let color_format = ColorFormat::Rgba8888;

        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(color_format.bytes_per_pixel()))
            .ok_or(HdrDecodeErrors::Generic("overflow when calculating texture size"))?;

        if pixels.len() != expected {
            return Err(HdrDecodeErrors::WrongPixelCount(expected, pixels.len()));
        }

        Ok(Texture {
            width,
            height,
            color_format,
            internal_format: InternalFormat::PixelArray,
            mipmaps: vec![MipmapData::new(pixels, width, height)],
            use_mipmap: false,
            exposure: 1.0,
            gamma: 1.0
        })
    }

    pub(crate) fn with_header_values(mut self, exposure: f32, gamma: f32) -> Texture {
        self.exposure = exposure;
        self.gamma = gamma;
        self
    }

    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn color_format(&self) -> ColorFormat {
        self.color_format
    }
    pub const fn internal_format(&self) -> InternalFormat {
        self.internal_format
    }
    pub const fn use_mipmap(&self) -> bool {
        self.use_mipmap
    }
    pub fn mipmaps(&self) -> &[MipmapData] {
        &self.mipmaps
    }
    pub fn into_mipmaps(self) -> Vec<MipmapData> {
        self.mipmaps
    }
    /// Exposure recorded in the file header
    pub const fn exposure(&self) -> f32 {
        self.exposure
    }
    /// Gamma recorded in the file header
    pub const fn gamma(&self) -> f32 {
        self.gamma
    }
    pub const fn colorspace(&self) -> ColorSpace {
        self.color_format.colorspace()
    }
    pub const fn bit_depth(&self) -> BitDepth {
        self.color_format.bit_depth()
    }

    /// Expand the base level into linear RGB floats
    ///
    /// Values are divided by the header exposure to undo it,
    /// a zero or non finite exposure is treated as 1.0.
    pub fn to_linear_rgb(&self) -> Vec<f32> {
        let mut out = vec![0.0_f32; self.width * self.height * 3];

        let scale = if self.exposure.is_finite() && self.exposure > 0.0 {
            1.0 / self.exposure
        } else {
            1.0
        };
        if let Some(level) = self.mipmaps.first() {
            convert_scanline(level.data(), &mut out, scale);
        }
        out
    }
}
