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

//! Utility functions for building probe urls.

use percent_encoding::utf8_percent_encode;

use crate::constants::{PATH_ENCODE_SET, SEGMENT_ENCODE_SET};

/// Percent-encode an object path (blob, file or object name).
///
/// `/` is kept so that `dir/name.txt` still addresses a nested path.
pub fn encode_path(name: &str) -> String {
    utf8_percent_encode(name, &PATH_ENCODE_SET).to_string()
}

/// Percent-encode a single path segment (container, share or bucket) or a query value.
pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, &SEGMENT_ENCODE_SET).to_string()
}

/// Join a base endpoint and a path, dropping any trailing `/` on the endpoint.
pub fn join_endpoint(endpoint: &str, path: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), path)
}
