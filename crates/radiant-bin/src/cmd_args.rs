/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};

/// Layout of the decoded bytes written to an output file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputFormat {
    /// Interleaved RGBE bytes, exactly as handed to the renderer
    Rgbe,
    /// Little endian `f32` RGB triples with exposure divided out
    Linear
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Rgbe, Self::Linear]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Rgbe => PossibleValue::new("rgbe"),
            Self::Linear => PossibleValue::new("linear")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("radiant")
        .about("Inspect and decode Radiance HDR textures")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Output to write the decoded pixels to, one per input")
            .action(ArgAction::Append))
        .arg(Arg::new("output-format")
            .long("output-format")
            .help("Layout of decoded pixels in the output")
            .value_parser(value_parser!(OutputFormat))
            .default_value("rgbe"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print header information as json and exit"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an image, larger images are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an image, larger images are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
}
