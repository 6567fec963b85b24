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
pub const MODE_LIST: &str = "list";
pub const MODE_READ: &str = "read";
pub const MODE_UPLOAD: &str = "upload";

pub const DEFAULT_MODE: &str = MODE_LIST;
pub const DEFAULT_OBJECT_NAME: &str = "test.txt";
pub const DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";

pub const TEXT_PLAIN: &str = "text/plain";
