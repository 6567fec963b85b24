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

use anonprobe_core::{Mode, ModeTable, ProbeOperation, Result};

use crate::build::{list_objects, read_object, upload_object};
use crate::constants::{MODE_LIST, MODE_READ, MODE_UPLOAD};
use crate::GcsTarget;

static GCS_MODES: [Mode<GcsTarget>; 3] = [
    Mode {
        name: MODE_LIST,
        banner: "Testing anonymous bucket listing...",
        validate: no_extra_names,
        plan: plan_list,
    },
    Mode {
        name: MODE_READ,
        banner: "Testing anonymous object read...",
        validate: no_extra_names,
        plan: plan_read,
    },
    Mode {
        name: MODE_UPLOAD,
        banner: "Testing anonymous upload to bucket...",
        validate: no_extra_names,
        plan: plan_upload,
    },
];

/// Modes recognized by the GCS probe. Each mode sends a single request.
pub static MODES: ModeTable<GcsTarget> = ModeTable::new("gcs", &GCS_MODES);

// The object name always has a default, so only the bucket is required.
fn no_extra_names(_: &GcsTarget) -> Result<()> {
    Ok(())
}

fn plan_list(t: &GcsTarget) -> Vec<ProbeOperation> {
    vec![list_objects(t)]
}

fn plan_read(t: &GcsTarget) -> Vec<ProbeOperation> {
    vec![read_object(t)]
}

fn plan_upload(t: &GcsTarget) -> Vec<ProbeOperation> {
    vec![upload_object(t)]
}
