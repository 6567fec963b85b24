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

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};

use crate::{Error, Result};

/// How a response body is shown in the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyDisplay {
    /// Only the status line is reported; the body is read and dropped.
    Hidden,
    /// The body is printed on its own line after the given label, e.g. `Response: ...`.
    Shown(&'static str),
}

/// ProbeOperation describes one anonymous request and how to report it.
///
/// Operations are built by a provider's planner and executed by [`crate::run`].
/// They own everything needed to send the request, so no two operations share
/// request state.
#[derive(Debug, Clone)]
pub struct ProbeOperation {
    /// Stable identifier used in structured output, e.g. `blob-list`.
    pub id: &'static str,
    /// The resource this operation touches, e.g. `c1/testblob.txt`.
    pub resource: String,
    /// Sentence head of the text report, e.g. `Anonymous listing of container "c1"`.
    pub summary: String,
    /// Gerund phrase used when the request fails, e.g. `listing container`.
    pub action: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Fully built request url.
    pub url: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body, empty for most probes.
    pub body: Bytes,
    /// Whether the response body is part of the report.
    pub display: BodyDisplay,
}

impl ProbeOperation {
    /// Create a new operation with no headers, an empty body and a hidden response body.
    pub fn new(id: &'static str, method: Method, url: impl Into<String>) -> Self {
        Self {
            id,
            resource: String::new(),
            summary: String::new(),
            action: id,
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
            display: BodyDisplay::Hidden,
        }
    }

    /// Set the resource name and the report wording.
    pub fn with_report(
        mut self,
        resource: impl Into<String>,
        summary: impl Into<String>,
        action: &'static str,
    ) -> Self {
        self.resource = resource.into();
        self.summary = summary.into();
        self.action = action;
        self
    }

    /// Add a request header.
    pub fn with_header(mut self, name: HeaderName, value: &'static str) -> Self {
        self.headers.insert(name, HeaderValue::from_static(value));
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Show the response body in the report under the given label.
    pub fn with_body_shown(mut self, label: &'static str) -> Self {
        self.display = BodyDisplay::Shown(label);
        self
    }

    /// Build the http request for this operation.
    ///
    /// Fails with [`ErrorKind::RequestInvalid`](crate::ErrorKind::RequestInvalid)
    /// when the url can't be parsed, e.g. an account name that isn't a valid host label.
    pub fn to_request(&self) -> Result<http::Request<Bytes>> {
        let uri: http::Uri = self.url.parse().map_err(|e| {
            Error::request_invalid(format!("invalid url {:?}", self.url)).with_source(e)
        })?;

        let mut req = http::Request::builder()
            .method(self.method.clone())
            .uri(uri)
            .body(self.body.clone())
            .map_err(|e| Error::request_invalid("failed to build request").with_source(e))?;
        *req.headers_mut() = self.headers.clone();
        Ok(req)
    }
}
