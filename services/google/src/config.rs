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

use anonprobe_core::{Error, Result};
use log::debug;

use crate::constants::*;

/// Config carries all the configuration for a Google Cloud Storage probe run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Test to run: `list`, `read` or `upload`.
    pub mode: String,
    /// Bucket name. Required.
    pub bucket: String,
    /// Object read or created by the `read` and `upload` tests.
    pub object: String,
    /// Base url replacing `https://storage.googleapis.com`.
    pub endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            bucket: String::new(),
            object: DEFAULT_OBJECT_NAME.to_string(),
            endpoint: None,
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mode.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the bucket name.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Set the object name.
    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object = object.into();
        self
    }

    /// Send every probe to `endpoint` instead of `https://storage.googleapis.com`.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the probe target, failing if the bucket name is empty.
    pub fn target(&self) -> Result<GcsTarget> {
        if self.bucket.is_empty() {
            return Err(Error::config_invalid(
                "Provide the bucket name with the -bucket flag",
            ));
        }

        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        debug!("gcs endpoint: {endpoint}");

        Ok(GcsTarget {
            bucket: self.bucket.clone(),
            object: self.object.clone(),
            endpoint,
        })
    }
}

/// GcsTarget identifies the bucket and object a GCS probe run contacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcsTarget {
    /// Bucket name.
    pub bucket: String,
    /// Object name.
    pub object: String,
    /// Base url of the storage service.
    pub endpoint: String,
}
