/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use zune_core::bytestream::ZByteReader;
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_core::options::DecoderOptions;

use crate::errors::HdrDecodeErrors;
use crate::header::{read_header, HeaderInfo};
use crate::scanline::decode_pixels;
use crate::texture::Texture;

/// A simple radiance HDR decoder
///
/// Pixels are returned as raw RGBE quads, no floating point
/// conversion happens unless [`decode_linear`](Self::decode_linear) is used.
///
/// # Accessing metadata
///
/// Radiance files may contain metadata in their headers as key value pairs,
/// the ones the decoder does not interpret itself are kept in
/// [`HeaderInfo::metadata`].
pub struct HdrDecoder<'a> {
    reader:  ZByteReader<&'a [u8]>,
    options: DecoderOptions,
    header:  Option<HeaderInfo>
}

impl<'a> HdrDecoder<'a> {
    /// Create a new HDR decoder
    ///
    /// # Arguments
    ///
    /// * `data`: Raw HDR file contents
    ///
    /// returns: HdrDecoder
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use radiant_hdr::HdrDecoder;
    /// // read hdr file to memory
    /// let file_data = std::fs::read("sample.hdr").unwrap();
    /// let decoder = HdrDecoder::new(&file_data);
    /// ```
    pub fn new(data: &'a [u8]) -> HdrDecoder<'a> {
        Self::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new HDR decoder with the specified options
    ///
    /// # Arguments
    ///
    /// * `data`: Raw HDR file contents already in memory
    /// * `options`: Decoder options that influence how decoding occurs
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use zune_core::options::DecoderOptions;
    /// use radiant_hdr::HdrDecoder;
    /// let file_data = std::fs::read("sample.hdr").unwrap();
    /// // set that the decoder does not decode images greater than
    /// // 50 px width
    /// let options = DecoderOptions::default().set_max_width(50);
    /// let decoder = HdrDecoder::new_with_options(&file_data, options);
    /// ```
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> HdrDecoder<'a> {
        HdrDecoder {
            reader: ZByteReader::new(data),
            options,
            header: None
        }
    }

    /// Decode headers for the HDR image
    ///
    /// The struct is modified in place and data can be
    /// extracted from appropriate getters.
    pub fn decode_headers(&mut self) -> Result<(), HdrDecodeErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        self.reader.set_position(0);
        self.header = Some(read_header(&mut self.reader, &self.options)?);

        Ok(())
    }

    /// Header information, or `None` if headers haven't been decoded
    pub const fn header_info(&self) -> Option<&HeaderInfo> {
        self.header.as_ref()
    }

    /// Get image dimensions as a tuple of width and height
    /// or `None` if the headers haven't been decoded.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header.as_ref().map(|x| (x.width, x.height))
    }

    /// Return the output colorspace of the image
    ///
    /// # Returns
    /// -`Some(Colorspace)`: Always RGBA, the fourth channel being the shared exponent
    /// - None : Indicates the headers weren't decoded
    pub fn colorspace(&self) -> Option<ColorSpace> {
        self.header.as_ref().map(|_| ColorSpace::RGBA)
    }

    /// Return the number of bytes required to hold the decoded RGBE pixels
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image headers were not decoded or
    /// `width*height*4` calculation  overflows a usize
    pub fn output_buffer_size(&self) -> Option<usize> {
        let header = self.header.as_ref()?;

        header.width.checked_mul(header.height)?.checked_mul(4)
    }

    /// Decode into a pre-allocated buffer
    ///
    /// It is an error if the buffer size is smaller than
    /// [`output_buffer_size()`](Self::output_buffer_size),
    /// if the buffer is bigger than expected, we ignore the end padding bytes.
    ///
    /// On error the buffer contents are unspecified.
    pub fn decode_into(&mut self, buffer: &mut [u8]) -> Result<(), HdrDecodeErrors> {
        self.decode_headers()?;

        let output_size = self
            .output_buffer_size()
            .ok_or(HdrDecodeErrors::Generic("overflow when calculating output size"))?;

        if buffer.len() < output_size {
            return Err(HdrDecodeErrors::TooSmallOutputArray(
                output_size,
                buffer.len()
            ));
        }
        let (width, height, offset) = match &self.header {
            Some(header) => (header.width, header.height, header.pixel_data_offset),
            None => return Err(HdrDecodeErrors::Generic("headers not decoded"))
        };
        self.reader.set_position(offset);

        decode_pixels(&mut self.reader, width, height, &mut buffer[..output_size])?;

        trace!("Decoded {} bytes of pixel data", output_size);

        Ok(())
    }

    /// Decode HDR file returning the interleaved RGBE pixels
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)`: `width*height*4` bytes of RGBE data
    /// - `Err(HdrDecodeErrors)`: Indicates an unrecoverable
    ///  error occurred during decoding.
    pub fn decode(&mut self) -> Result<Vec<u8>, HdrDecodeErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(HdrDecodeErrors::Generic("overflow when calculating output size"))?;

        let mut buffer = vec![0_u8; size];

        self.decode_into(&mut buffer)?;

        Ok(buffer)
    }

    /// Decode the file into a texture with a single mip level
    pub fn decode_texture(&mut self) -> Result<Texture, HdrDecodeErrors> {
        let pixels = self.decode()?;

        let header = self
            .header
            .as_ref()
            .ok_or(HdrDecodeErrors::Generic("headers not decoded"))?;

        Ok(Texture::new(pixels, header.width, header.height)?
            .with_header_values(header.exposure, header.gamma))
    }

    /// Decode the file into linear RGB floats, `width*height*3` of them
    ///
    /// The header exposure is divided out.
    pub fn decode_linear(&mut self) -> Result<Vec<f32>, HdrDecodeErrors> {
        Ok(self.decode_texture()?.to_linear_rgb())
    }
}
