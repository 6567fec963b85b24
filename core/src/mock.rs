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

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};

use crate::HttpSend;

/// A request captured by [`MockHttpSend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Request method.
    pub method: Method,
    /// Full request uri.
    pub uri: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Bytes,
}

#[derive(Debug, Clone)]
enum MockResponse {
    Reply(StatusCode, Bytes),
    Fail(String),
}

#[derive(Debug)]
struct MockState {
    requests: Vec<RecordedRequest>,
    queue: VecDeque<MockResponse>,
    fallback: MockResponse,
}

/// MockHttpSend records every request and answers from a queue.
///
/// Queued responses are used in order; once the queue is empty every request
/// gets the fallback response (`200 OK` with an empty body unless changed).
/// Clones share the same state, so a test can keep one handle and give
/// another to [`Context::with_http_send`](crate::Context::with_http_send).
///
/// This is useful for testing or for dry runs.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockHttpSend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHttpSend {
    /// Create a new mock answering `200 OK` to everything.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                requests: Vec::new(),
                queue: VecDeque::new(),
                fallback: MockResponse::Reply(StatusCode::OK, Bytes::new()),
            })),
        }
    }

    /// Answer every request that has no queued response with `status` and `body`.
    pub fn with_fallback(self, status: StatusCode, body: impl Into<Bytes>) -> Self {
        self.state.lock().expect("lock poisoned").fallback =
            MockResponse::Reply(status, body.into());
        self
    }

    /// Queue a response.
    pub fn push_response(&self, status: StatusCode, body: impl Into<Bytes>) {
        self.state
            .lock()
            .expect("lock poisoned")
            .queue
            .push_back(MockResponse::Reply(status, body.into()));
    }

    /// Queue a transport failure with the given message.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.state
            .lock()
            .expect("lock poisoned")
            .queue
            .push_back(MockResponse::Fail(message.into()));
    }

    /// All requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().expect("lock poisoned").requests.clone()
    }
}

#[async_trait::async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();

        let response = {
            let mut state = self.state.lock().expect("lock poisoned");
            state.requests.push(RecordedRequest {
                method: parts.method,
                uri: parts.uri.to_string(),
                headers: parts.headers,
                body,
            });
            state
                .queue
                .pop_front()
                .unwrap_or_else(|| state.fallback.clone())
        };

        match response {
            MockResponse::Reply(status, body) => Ok(http::Response::builder()
                .status(status)
                .body(body)?),
            MockResponse::Fail(message) => Err(anyhow::anyhow!(message)),
        }
    }
}
