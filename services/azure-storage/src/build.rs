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

//! Builders for the four Azure Storage probe operations.
//!
//! - [List Blobs](https://learn.microsoft.com/en-us/rest/api/storageservices/list-blobs)
//! - [Put Blob](https://learn.microsoft.com/en-us/rest/api/storageservices/put-blob)
//! - [List Directories and Files](https://learn.microsoft.com/en-us/rest/api/storageservices/list-directories-and-files)
//! - [Create File](https://learn.microsoft.com/en-us/rest/api/storageservices/create-file)

use anonprobe_core::constants::PROBE_PAYLOAD;
use anonprobe_core::utils::{encode_path, encode_segment, join_endpoint};
use anonprobe_core::ProbeOperation;
use http::header::{HeaderName, CONTENT_TYPE};
use http::Method;

use crate::constants::*;
use crate::AzureTarget;

/// `GET {blob_endpoint}/{container}?restype=container&comp=list`
pub fn blob_list(t: &AzureTarget) -> ProbeOperation {
    let url = join_endpoint(
        &t.blob_endpoint,
        &format!("{}?{}", encode_segment(&t.container), BLOB_LIST_QUERY),
    );
    ProbeOperation::new("blob-list", Method::GET, url).with_report(
        t.container.clone(),
        format!("Anonymous listing of container {:?}", t.container),
        "listing container",
    )
}

/// `PUT {blob_endpoint}/{container}/{blob}` with a small text body.
pub fn blob_upload(t: &AzureTarget) -> ProbeOperation {
    let url = join_endpoint(
        &t.blob_endpoint,
        &format!("{}/{}", encode_segment(&t.container), encode_path(&t.blob)),
    );
    ProbeOperation::new("blob-upload", Method::PUT, url)
        .with_header(HeaderName::from_static(X_MS_BLOB_TYPE), BLOCK_BLOB)
        .with_header(CONTENT_TYPE, TEXT_PLAIN)
        .with_body(PROBE_PAYLOAD)
        .with_report(
            format!("{}/{}", t.container, t.blob),
            format!(
                "Anonymous upload of blob {:?} to container {:?}",
                t.blob, t.container
            ),
            "uploading blob",
        )
}

/// `GET {file_endpoint}/{share}?restype=directory&comp=list`
pub fn file_list(t: &AzureTarget) -> ProbeOperation {
    let url = join_endpoint(
        &t.file_endpoint,
        &format!("{}?{}", encode_segment(&t.share), FILE_LIST_QUERY),
    );
    ProbeOperation::new("file-list", Method::GET, url).with_report(
        t.share.clone(),
        format!("Anonymous listing of file share {:?}", t.share),
        "listing file share",
    )
}

/// `PUT {file_endpoint}/{share}/{file}` declaring a fixed length and sending no body.
pub fn file_upload(t: &AzureTarget) -> ProbeOperation {
    let url = join_endpoint(
        &t.file_endpoint,
        &format!("{}/{}", encode_segment(&t.share), encode_path(&t.file)),
    );
    ProbeOperation::new("file-upload", Method::PUT, url)
        .with_header(HeaderName::from_static(X_MS_CONTENT_LENGTH), FILE_CONTENT_LENGTH)
        .with_header(HeaderName::from_static(X_MS_TYPE), FILE_TYPE)
        .with_report(
            format!("{}/{}", t.share, t.file),
            format!(
                "Anonymous upload of file {:?} to file share {:?}",
                t.file, t.share
            ),
            "uploading file",
        )
}
