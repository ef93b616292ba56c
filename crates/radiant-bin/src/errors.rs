/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use radiant_hdr::HdrDecodeErrors;

pub enum CmdErrors {
    Io(std::io::Error),
    Decode(HdrDecodeErrors),
    Json(serde_json::Error),
    Generic(String)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CmdErrors::Io(err) => writeln!(f, "I/O error {err}"),
            CmdErrors::Decode(err) => writeln!(f, "hdr: {err:?}"),
            CmdErrors::Json(err) => writeln!(f, "json: {err}"),
            CmdErrors::Generic(err) => writeln!(f, "{err}")
        }
    }
}

impl From<std::io::Error> for CmdErrors {
    fn from(value: std::io::Error) -> Self {
        CmdErrors::Io(value)
    }
}

impl From<HdrDecodeErrors> for CmdErrors {
    fn from(value: HdrDecodeErrors) -> Self {
        CmdErrors::Decode(value)
    }
}

impl From<serde_json::Error> for CmdErrors {
    fn from(value: serde_json::Error) -> Self {
        CmdErrors::Json(value)
    }
}
