// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use anonprobe_core::cli::CommonArgs;
use clap::Parser;

use crate::constants::*;
use crate::Config;

/// Probe a Google Cloud Storage bucket for anonymous access.
///
/// Flags may be written Go style with a single dash, e.g. `-mode read`.
#[derive(Parser, Debug, Clone)]
#[command(name = "gcs-probe", version, about, long_about = None)]
pub struct Cli {
    /// Test to run: 'list', 'read' or 'upload'
    #[arg(long, default_value = DEFAULT_MODE)]
    pub mode: String,

    /// Bucket name
    #[arg(long)]
    pub bucket: Option<String>,

    /// Object name for the read or upload test
    #[arg(long, default_value = DEFAULT_OBJECT_NAME)]
    pub object: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl Cli {
    /// Convert the parsed flags into a [`Config`].
    pub fn config(&self) -> Config {
        let mut cfg = Config::new()
            .with_mode(&self.mode)
            .with_bucket(self.bucket.clone().unwrap_or_default())
            .with_object(&self.object);
        if let Some(ep) = &self.common.endpoint {
            cfg = cfg.with_endpoint(ep);
        }
        cfg
    }
}
