/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use zune_core::options::DecoderOptions;

use crate::cmd_args::OutputFormat;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:     usize,
    pub max_height:    usize,
    pub output_format: OutputFormat
}

impl CmdOptions {
    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let cmd_options = CmdOptions {
        max_width:     options.get_one::<usize>("max-width").copied().unwrap_or(16384),
        max_height:    options.get_one::<usize>("max-height").copied().unwrap_or(16384),
        output_format: options
            .get_one::<OutputFormat>("output-format")
            .copied()
            .unwrap_or(OutputFormat::Rgbe)
    };
    info!("Options: {:?}", cmd_options);

    cmd_options
}

/// Pick the log level from the logging flags, warnings when none is given
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if simple_logger::init_with_level(log_level).is_err() {
        eprintln!("Could not initialize logger");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
