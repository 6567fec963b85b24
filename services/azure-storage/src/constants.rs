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

// Mode names accepted by `-mode`.
pub const MODE_BLOB: &str = "blob";
pub const MODE_FILE: &str = "file";

/// Storage account names are 3 to 24 lowercase letters and digits.
pub const ACCOUNT_NAME_LEN: std::ops::RangeInclusive<usize> = 3..=24;

pub const DEFAULT_MODE: &str = MODE_BLOB;
pub const DEFAULT_BLOB_NAME: &str = "testblob.txt";
pub const DEFAULT_FILE_NAME: &str = "testfile.txt";

// Headers used by Put Blob and Create File.
pub const X_MS_BLOB_TYPE: &str = "x-ms-blob-type";
pub const X_MS_CONTENT_LENGTH: &str = "x-ms-content-length";
pub const X_MS_TYPE: &str = "x-ms-type";

pub const BLOCK_BLOB: &str = "BlockBlob";
pub const FILE_TYPE: &str = "File";
/// Create File declares an 11 byte file but sends no content.
pub const FILE_CONTENT_LENGTH: &str = "11";
pub const TEXT_PLAIN: &str = "text/plain";

pub const BLOB_LIST_QUERY: &str = "restype=container&comp=list";
pub const FILE_LIST_QUERY: &str = "restype=directory&comp=list";
