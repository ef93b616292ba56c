/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::{read, OpenOptions};
use std::io::{BufWriter, Write};

use clap::ArgMatches;
use log::{debug, info};
use radiant_hdr::HdrDecoder;

use crate::cmd_args::OutputFormat;
use crate::cmd_parsers::CmdOptions;
use crate::errors::CmdErrors;
use crate::probe_files::probe_file;

pub(crate) fn decode_files_from_cmd(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    let inputs: Vec<&OsStr> = args
        .get_raw("in")
        .map(|x| x.collect())
        .unwrap_or_default();

    if args.get_flag("probe") {
        for in_file in inputs {
            let contents = read(in_file)?;
            println!("{}", probe_file(in_file, &contents, cmd_opts)?);
        }
        return Ok(());
    }

    let outputs: Vec<&OsStr> = args
        .get_raw("out")
        .map(|x| x.collect())
        .unwrap_or_default();

    if !outputs.is_empty() && outputs.len() != inputs.len() {
        return Err(CmdErrors::Generic(format!(
            "Got {} inputs but {} outputs, expected one output per input",
            inputs.len(),
            outputs.len()
        )));
    }

    for (i, in_file) in inputs.iter().enumerate() {
        info!("Decoding {:?}", in_file);

        let contents = read(in_file)?;
        let bytes = decode_file(&contents, cmd_opts)?;

        match outputs.get(i) {
            Some(out_file) => {
                let file = OpenOptions::new()
                    .write(true)
                    .truncate(true)
                    .create(true)
                    .open(out_file)?;

                let mut writer = BufWriter::new(file);
                writer.write_all(&bytes)?;
                writer.flush()?;

                info!("Wrote {} bytes to {:?}", bytes.len(), out_file);
            }
            None => {
                debug!("No output for {:?}, decoded {} bytes", in_file, bytes.len());
            }
        }
    }
    Ok(())
}

/// Decode a file into the bytes written out for the chosen output format
pub(crate) fn decode_file(contents: &[u8], cmd_opts: &CmdOptions) -> Result<Vec<u8>, CmdErrors> {
    let mut decoder = HdrDecoder::new_with_options(contents, cmd_opts.decoder_options());

    let bytes = match cmd_opts.output_format {
        OutputFormat::Rgbe => decoder.decode()?,
        OutputFormat::Linear => decoder
            .decode_linear()?
            .iter()
            .flat_map(|x| x.to_le_bytes())
            .collect()
    };
    Ok(bytes)
}
