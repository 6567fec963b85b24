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

//! Anonymous access probes for Azure Storage.
//!
//! Two modes are supported:
//! - `blob`: list a container, then upload a block blob into it
//! - `file`: list the root directory of a file share, then create a file in it
//!
//! Every request is sent without credentials. The HTTP status the service
//! answers with is the result: `403` or `404` usually means anonymous access
//! is denied, `200` or `201` means it's allowed.
//!
//! # Example
//!
//! ```rust,no_run
//! use anonprobe_azure_storage::Config;
//! use anonprobe_core::{Context, OutputFormat, Reporter};
//! use anonprobe_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anonprobe_core::Result<()> {
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!     let config = Config::new().with_account("myaccount").with_container("public");
//!     let mut reporter = Reporter::new(std::io::stdout(), OutputFormat::Text);
//!
//!     anonprobe_azure_storage::run(&ctx, &config, &mut reporter).await?;
//!     Ok(())
//! }
//! ```

use std::io::Write;

use anonprobe_core::{Context, Outcome, Reporter, Result};

mod constants;

mod config;
pub use config::{AzureTarget, Config};

mod build;
pub use build::{blob_list, blob_upload, file_list, file_upload};

mod mode;
pub use mode::MODES;

mod cli;
pub use cli::Cli;

/// Run the probe described by `config`, writing reports to `reporter`.
///
/// Errors with [`ConfigInvalid`](anonprobe_core::ErrorKind::ConfigInvalid)
/// when a required name is missing and with
/// [`ModeInvalid`](anonprobe_core::ErrorKind::ModeInvalid) for an unknown
/// mode. In both cases nothing is sent. Failed requests are not errors;
/// they are reported and returned as [`Outcome::Failed`].
pub async fn run<W: Write>(
    ctx: &Context,
    config: &Config,
    reporter: &mut Reporter<W>,
) -> Result<Vec<Outcome>> {
    let target = config.target()?;
    anonprobe_core::run(ctx, &MODES, &config.mode, &target, reporter).await
}
