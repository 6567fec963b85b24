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

//! Core components for probing anonymous access to cloud storage.
//!
//! This crate provides the types the provider probes are built from. A probe
//! is a handful of plain HTTP requests sent without any credential; the HTTP
//! status the server answers with is the result.
//!
//! ## Overview
//!
//! - **Context**: holds the [`HttpSend`] implementation used to send requests
//! - **ProbeOperation**: one request (method, url, headers, body) plus how to report it
//! - **ModeTable**: a provider's recognized modes and the operations each one plans
//! - **Reporter**: writes outcomes as text, `key=value` records or JSON lines
//!
//! ## Example
//!
//! ```no_run
//! use anonprobe_core::{Context, Mode, ModeTable, MockHttpSend, OutputFormat, ProbeOperation, Reporter, Result};
//! use http::Method;
//!
//! fn plan(bucket: &String) -> Vec<ProbeOperation> {
//!     vec![ProbeOperation::new("list", Method::GET, format!("https://example.com/{bucket}"))
//!         .with_report(bucket.clone(), format!("Anonymous listing of {bucket:?}"), "listing")]
//! }
//!
//! fn validate(_: &String) -> Result<()> {
//!     Ok(())
//! }
//!
//! static MODES: [Mode<String>; 1] = [Mode { name: "list", banner: "Listing:", validate, plan }];
//! static TABLE: ModeTable<String> = ModeTable::new("example", &MODES);
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(MockHttpSend::new());
//! let mut reporter = Reporter::new(std::io::stdout(), OutputFormat::Text);
//! anonprobe_core::run(&ctx, &TABLE, "list", &"b1".to_string(), &mut reporter).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod cli;
pub mod constants;
pub mod utils;

mod context;
pub use context::Context;
mod error;
pub use error::{Error, ErrorKind, Result};
mod send;
pub use send::{HttpSend, NoopHttpSend};
mod mock;
pub use mock::{MockHttpSend, RecordedRequest};
mod mode;
pub use mode::{Mode, ModeTable};
mod operation;
pub use operation::{BodyDisplay, ProbeOperation};
mod probe;
pub use probe::{probe, run};
mod report;
pub use report::{status_line, Outcome, OutputFormat, Reporter};
