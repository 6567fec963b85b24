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

use anonprobe_core::{Error, Mode, ModeTable, ProbeOperation, Result};

use crate::build::{blob_list, blob_upload, file_list, file_upload};
use crate::constants::{MODE_BLOB, MODE_FILE};
use crate::AzureTarget;

static AZURE_MODES: [Mode<AzureTarget>; 2] = [
    Mode {
        name: MODE_BLOB,
        banner: "Testing Azure Blob Storage via anonymous access:",
        validate: require_container,
        plan: plan_blob,
    },
    Mode {
        name: MODE_FILE,
        banner: "Testing Azure File Shares via anonymous access:",
        validate: require_share,
        plan: plan_file,
    },
];

/// Modes recognized by the Azure probe. Each mode lists then uploads.
pub static MODES: ModeTable<AzureTarget> = ModeTable::new("azure", &AZURE_MODES);

fn require_container(t: &AzureTarget) -> Result<()> {
    if t.container.is_empty() {
        return Err(Error::config_invalid(
            "Provide the container name with the -container flag to test blob access",
        ));
    }
    Ok(())
}

fn require_share(t: &AzureTarget) -> Result<()> {
    if t.share.is_empty() {
        return Err(Error::config_invalid(
            "Provide the file share name with the -share flag to test file access",
        ));
    }
    Ok(())
}

fn plan_blob(t: &AzureTarget) -> Vec<ProbeOperation> {
    vec![blob_list(t), blob_upload(t)]
}

fn plan_file(t: &AzureTarget) -> Vec<ProbeOperation> {
    vec![file_list(t), file_upload(t)]
}
