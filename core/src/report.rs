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

use std::borrow::Cow;
use std::io::Write;

use bytes::Bytes;
use http::StatusCode;
use serde::Serialize;

use crate::{BodyDisplay, Error, ProbeOperation, Result};

/// Output format of a probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One human readable sentence per operation.
    #[default]
    Text,
    /// One `key=value` record per operation.
    Kv,
    /// One JSON object per line.
    Json,
}

/// Outcome of a single probe operation.
#[derive(Debug)]
pub enum Outcome {
    /// The server answered. Any status, including 4xx and 5xx, lands here.
    Response {
        /// Response status.
        status: StatusCode,
        /// Full response body.
        body: Bytes,
    },
    /// The request never got a response.
    Failed(Error),
}

impl Outcome {
    /// Status of the response, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Outcome::Response { status, .. } => Some(*status),
            Outcome::Failed(_) => None,
        }
    }
}

/// Format a status like `403 Forbidden`, or just `499` for codes without a canonical reason.
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[derive(Serialize)]
struct Record<'a> {
    provider: &'a str,
    operation: &'a str,
    method: &'a str,
    url: &'a str,
    resource: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> Record<'a> {
    fn new(provider: &'a str, op: &'a ProbeOperation, outcome: &'a Outcome) -> Self {
        let mut record = Record {
            provider,
            operation: op.id,
            method: op.method.as_str(),
            url: &op.url,
            resource: &op.resource,
            status: None,
            reason: None,
            body: None,
            error: None,
        };
        match outcome {
            Outcome::Response { status, body } => {
                record.status = Some(status.as_u16());
                record.reason = status.canonical_reason();
                if let BodyDisplay::Shown(_) = op.display {
                    record.body = Some(String::from_utf8_lossy(body));
                }
            }
            Outcome::Failed(err) => record.error = Some(err.chain()),
        }
        record
    }

    fn to_kv(&self) -> String {
        let mut fields = vec![
            ("provider", self.provider.to_string()),
            ("operation", self.operation.to_string()),
            ("method", self.method.to_string()),
            ("url", self.url.to_string()),
            ("resource", self.resource.to_string()),
        ];
        if let Some(status) = self.status {
            fields.push(("status", status.to_string()));
        }
        if let Some(reason) = self.reason {
            fields.push(("reason", reason.to_string()));
        }
        if let Some(body) = &self.body {
            fields.push(("body", body.to_string()));
        }
        if let Some(error) = &self.error {
            fields.push(("error", error.clone()));
        }

        fields
            .iter()
            .map(|(k, v)| format!("{k}={}", kv_value(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn kv_value(v: &str) -> Cow<'_, str> {
    let needs_quotes = v.is_empty()
        || v
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '"' || c == '=');
    if needs_quotes {
        Cow::Owned(format!("{v:?}"))
    } else {
        Cow::Borrowed(v)
    }
}

/// Reporter writes probe results to an output stream in the selected format.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    /// Create a new reporter.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Print a banner line. Structured formats skip banners.
    pub fn banner(&mut self, line: &str) -> Result<()> {
        if self.format == OutputFormat::Text {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Print a message line in every format.
    pub fn message(&mut self, line: &str) -> Result<()> {
        self.write_line(line)
    }

    /// Print the report for one operation.
    pub fn report(
        &mut self,
        provider: &str,
        op: &ProbeOperation,
        outcome: &Outcome,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Text => match outcome {
                Outcome::Response { status, body } => {
                    self.write_line(&format!(
                        "{} returned: {}",
                        op.summary,
                        status_line(*status)
                    ))?;
                    if let BodyDisplay::Shown(label) = op.display {
                        self.write_body(label, body)?;
                    }
                    Ok(())
                }
                Outcome::Failed(err) => {
                    self.write_line(&format!("Error {}: {}", op.action, err.chain()))
                }
            },
            OutputFormat::Kv => {
                let line = Record::new(provider, op, outcome).to_kv();
                self.write_line(&line)
            }
            OutputFormat::Json => {
                let line = serde_json::to_string(&Record::new(provider, op, outcome))
                    .map_err(|e| Error::unexpected("failed to encode report").with_source(e))?;
                self.write_line(&line)
            }
        }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `label: ` followed by the body bytes exactly as received.
    fn write_body(&mut self, label: &str, body: &[u8]) -> Result<()> {
        write!(self.out, "{label}: ")
            .and_then(|_| self.out.write_all(body))
            .and_then(|_| self.out.write_all(b"\n"))
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::unexpected("failed to write report").with_source(e))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::unexpected("failed to write report").with_source(e))
    }
}
