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

//! Builders for the Google Cloud Storage probe operations.
//!
//! Listing and upload go through the [JSON API](https://cloud.google.com/storage/docs/json_api);
//! reads use the plain object url.

use anonprobe_core::constants::PROBE_PAYLOAD;
use anonprobe_core::utils::{encode_path, encode_segment, join_endpoint};
use anonprobe_core::ProbeOperation;
use http::header::CONTENT_TYPE;
use http::Method;

use crate::constants::TEXT_PLAIN;
use crate::GcsTarget;

/// `GET {endpoint}/storage/v1/b/{bucket}/o`
pub fn list_objects(t: &GcsTarget) -> ProbeOperation {
    let url = join_endpoint(
        &t.endpoint,
        &format!("storage/v1/b/{}/o", encode_segment(&t.bucket)),
    );
    ProbeOperation::new("list", Method::GET, url)
        .with_report(
            t.bucket.clone(),
            format!("Anonymous listing of bucket {:?}", t.bucket),
            "listing bucket",
        )
        .with_body_shown("Response")
}

/// `GET {endpoint}/{bucket}/{object}`
pub fn read_object(t: &GcsTarget) -> ProbeOperation {
    let url = join_endpoint(
        &t.endpoint,
        &format!("{}/{}", encode_segment(&t.bucket), encode_path(&t.object)),
    );
    ProbeOperation::new("read", Method::GET, url)
        .with_report(
            format!("{}/{}", t.bucket, t.object),
            format!(
                "Anonymous read of object {:?} in bucket {:?}",
                t.object, t.bucket
            ),
            "reading object",
        )
        .with_body_shown("Content")
}

/// `POST {endpoint}/upload/storage/v1/b/{bucket}/o?uploadType=media&name={object}`
pub fn upload_object(t: &GcsTarget) -> ProbeOperation {
    let url = join_endpoint(
        &t.endpoint,
        &format!(
            "upload/storage/v1/b/{}/o?uploadType=media&name={}",
            encode_segment(&t.bucket),
            encode_segment(&t.object)
        ),
    );
    ProbeOperation::new("upload", Method::POST, url)
        .with_header(CONTENT_TYPE, TEXT_PLAIN)
        .with_body(PROBE_PAYLOAD)
        .with_report(
            format!("{}/{}", t.bucket, t.object),
            format!(
                "Anonymous upload of object {:?} to bucket {:?}",
                t.object, t.bucket
            ),
            "uploading object",
        )
        .with_body_shown("Response")
}
