/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use radiant_hdr::HdrDecoder;

use crate::cmd_parsers::CmdOptions;
use crate::errors::CmdErrors;
use crate::serde::Metadata;

/// Extract header information from a file and render it as json
pub fn probe_file(in_file: &OsStr, contents: &[u8], options: &CmdOptions) -> Result<String, CmdErrors> {
    let mut decoder = HdrDecoder::new_with_options(contents, options.decoder_options());

    decoder.decode_headers()?;

    let header = decoder
        .header_info()
        .ok_or_else(|| CmdErrors::Generic("headers not decoded".to_string()))?;

    let metadata = Metadata::new(in_file, contents.len() as u64, header);

    Ok(serde_json::to_string_pretty(&metadata)?)
}
