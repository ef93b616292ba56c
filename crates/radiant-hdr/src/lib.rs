/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A RADIANCE HDR texture decoder and encoder
//!
//! Decodes `.hdr` files into engine ready textures, a single
//! mip level of interleaved RGBE bytes tagged as RGBA8888.
//!
//! # Features
//! - Minimal interface, few dependencies
//! - No unsafe
//! - Fuzz tested decoder
//! - `log`: forward decoder traces to the `log` crate
//!
//! # Usage notes
//! The decoder does not expand pixels to floating point by default,
//! RGBE quads are handed over as is and it's the consumer's (usually a shader)
//! work to turn them into radiance. [`Texture::to_linear_rgb`] and
//! [`HdrDecoder::decode_linear`] do the conversion on the CPU when needed.
//!
//! # Metadata
//! `EXPOSURE`, `GAMMA` and `FORMAT` lines are interpreted, every other
//! key value pair is kept in [`HeaderInfo::metadata`] without interpretation.
//!
//! # Example
//! ```no_run
//! let contents = std::fs::read("sky.hdr").unwrap();
//! let texture = radiant_hdr::parse(&contents).unwrap();
//! let level = &texture.mipmaps()[0];
//! assert_eq!(level.data().len(), texture.width() * texture.height() * 4);
//! ```
#![forbid(unsafe_code)]
extern crate alloc;
extern crate core;
pub extern crate zune_core;

pub use decoder::HdrDecoder;
pub use encoder::HdrEncoder;
pub use errors::{HdrDecodeErrors, HdrEncodeErrors};
pub use header::{HeaderInfo, MAX_HEADER_LINES};
pub use texture::{ColorFormat, InternalFormat, MipmapData, Texture};

mod decoder;
mod encoder;
mod errors;
mod header;
mod reader;
pub mod rgbe;
mod scanline;
mod texture;

/// Decode a whole Radiance file into a texture
///
/// Accepts anything that can be viewed as bytes, e.g `Vec<u8>`, `&[u8]`
/// or a memory mapped file.
pub fn parse<T: AsRef<[u8]>>(data: T) -> Result<Texture, HdrDecodeErrors> {
    HdrDecoder::new(data.as_ref()).decode_texture()
}
