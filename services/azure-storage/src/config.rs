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

/// Config carries all the configuration for an Azure Storage probe run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Resource type to test: `blob` or `file`.
    pub mode: String,
    /// Storage account name. Required.
    pub account: String,
    /// Container name. Required in blob mode.
    pub container: String,
    /// File share name. Required in file mode.
    pub share: String,
    /// Blob created by the upload probe.
    pub blob: String,
    /// File created by the upload probe.
    pub file: String,
    /// Base url replacing `https://{account}.{blob,file}.core.windows.net`.
    pub endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            account: String::new(),
            container: String::new(),
            share: String::new(),
            blob: DEFAULT_BLOB_NAME.to_string(),
            file: DEFAULT_FILE_NAME.to_string(),
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

    /// Set the storage account name.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Set the container name.
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    /// Set the file share name.
    pub fn with_share(mut self, share: impl Into<String>) -> Self {
        self.share = share.into();
        self
    }

    /// Set the blob name used by the upload probe.
    pub fn with_blob(mut self, blob: impl Into<String>) -> Self {
        self.blob = blob.into();
        self
    }

    /// Set the file name used by the upload probe.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Send every probe to `endpoint` instead of the public Azure endpoints.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the probe target.
    ///
    /// Fails if the account name is empty or is not a valid storage account
    /// name. Container and share are checked later, by the mode that needs
    /// them.
    pub fn target(&self) -> Result<AzureTarget> {
        if self.account.is_empty() {
            return Err(Error::config_invalid(
                "Provide the storage account name with the -account flag",
            ));
        }
        if !is_valid_account(&self.account) {
            return Err(Error::config_invalid(format!(
                "Invalid storage account name {:?}: use 3 to 24 lowercase letters and digits",
                self.account
            )));
        }

        let (blob_endpoint, file_endpoint) = match &self.endpoint {
            Some(ep) => (ep.clone(), ep.clone()),
            None => (
                format!("https://{}.blob.core.windows.net", self.account),
                format!("https://{}.file.core.windows.net", self.account),
            ),
        };
        debug!("azure endpoints: blob={blob_endpoint} file={file_endpoint}");

        Ok(AzureTarget {
            account: self.account.clone(),
            container: self.container.clone(),
            share: self.share.clone(),
            blob: self.blob.clone(),
            file: self.file.clone(),
            blob_endpoint,
            file_endpoint,
        })
    }
}

/// The account name becomes part of the host, so it must stay a single label.
fn is_valid_account(account: &str) -> bool {
    ACCOUNT_NAME_LEN.contains(&account.len())
        && account
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// AzureTarget identifies the resources an Azure probe run contacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AzureTarget {
    /// Storage account name.
    pub account: String,
    /// Container name, may be empty outside blob mode.
    pub container: String,
    /// File share name, may be empty outside file mode.
    pub share: String,
    /// Blob name.
    pub blob: String,
    /// File name.
    pub file: String,
    /// Base url of the blob service.
    pub blob_endpoint: String,
    /// Base url of the file service.
    pub file_endpoint: String,
}
