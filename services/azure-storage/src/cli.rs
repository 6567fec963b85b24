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

/// Probe Azure Blob Storage and Azure File Shares for anonymous access.
///
/// Flags may be written Go style with a single dash, e.g. `-mode file`.
#[derive(Parser, Debug, Clone)]
#[command(name = "azure-probe", version, about, long_about = None)]
pub struct Cli {
    /// Resource type to test: 'blob' or 'file'
    #[arg(long, default_value = DEFAULT_MODE)]
    pub mode: String,

    /// Storage account name
    #[arg(long)]
    pub account: Option<String>,

    /// Container name (for the blob test)
    #[arg(long)]
    pub container: Option<String>,

    /// File share name (for the file test)
    #[arg(long)]
    pub share: Option<String>,

    /// Blob name for the upload test
    #[arg(long, default_value = DEFAULT_BLOB_NAME)]
    pub blob: String,

    /// File name for the upload test (file share)
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    pub file: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl Cli {
    /// Convert the parsed flags into a [`Config`].
    pub fn config(&self) -> Config {
        let mut cfg = Config::new()
            .with_mode(&self.mode)
            .with_account(self.account.clone().unwrap_or_default())
            .with_container(self.container.clone().unwrap_or_default())
            .with_share(self.share.clone().unwrap_or_default())
            .with_blob(&self.blob)
            .with_file(&self.file);
        if let Some(ep) = &self.common.endpoint {
            cfg = cfg.with_endpoint(ep);
        }
        cfg
    }
}
