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

//! Anonymous access probes for Google Cloud Storage.
//!
//! Three modes are supported, each sending a single request:
//! - `list`: list the objects of a bucket
//! - `read`: download one object
//! - `upload`: upload one small text object
//!
//! The status and body of the response are reported as they are; a
//! `401` or `403` means anonymous access is denied.
//!
//! # Example
//!
//! ```rust,no_run
//! use anonprobe_core::{Context, OutputFormat, Reporter};
//! use anonprobe_google::Config;
//! use anonprobe_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anonprobe_core::Result<()> {
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!     let config = Config::new().with_mode("read").with_bucket("my-bucket");
//!     let mut reporter = Reporter::new(std::io::stdout(), OutputFormat::Text);
//!
//!     anonprobe_google::run(&ctx, &config, &mut reporter).await?;
//!     Ok(())
//! }
//! ```

use std::io::Write;

use anonprobe_core::{Context, Outcome, Reporter, Result};

mod constants;

mod config;
pub use config::{Config, GcsTarget};

mod build;
pub use build::{list_objects, read_object, upload_object};

mod mode;
pub use mode::MODES;

mod cli;
pub use cli::Cli;

/// Run the probe described by `config`, writing reports to `reporter`.
///
/// Errors with [`ConfigInvalid`](anonprobe_core::ErrorKind::ConfigInvalid)
/// when the bucket is missing and with
/// [`ModeInvalid`](anonprobe_core::ErrorKind::ModeInvalid) for an unknown
/// mode, before anything is sent.
pub async fn run<W: Write>(
    ctx: &Context,
    config: &Config,
    reporter: &mut Reporter<W>,
) -> Result<Vec<Outcome>> {
    let target = config.target()?;
    anonprobe_core::run(ctx, &MODES, &config.mode, &target, reporter).await
}
