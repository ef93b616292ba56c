/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use radiant_hdr::HeaderInfo;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:   &'a OsStr,
    size:   u64,
    header: &'a HeaderInfo
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a OsStr, size: u64, header: &'a HeaderInfo) -> Metadata<'a> {
        Metadata { file, size, header }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("HeaderInfo", 8)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.size)?;
        state.serialize_field("width", &self.header.width)?;
        state.serialize_field("height", &self.header.height)?;
        state.serialize_field("exposure", &self.header.exposure)?;
        state.serialize_field("gamma", &self.header.gamma)?;
        state.serialize_field("run_length_encoded", &self.header.is_run_length_encoded)?;
        state.serialize_field("metadata", &self.header.metadata)?;

        state.end()
    }
}
