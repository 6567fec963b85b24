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

//! Exit code checks against the built binary.
//!
//! No case needs the network: most stop before any request is sent, and the
//! rest target a closed local port.

use assert_cmd::Command;
use predicates::str::contains;

#[allow(deprecated)]
fn azure_probe() -> Command {
    Command::cargo_bin("azure-probe").expect("binary must be built")
}

#[test]
fn test_missing_account_exits_1() {
    azure_probe()
        .assert()
        .code(1)
        .stdout(contains("-account"));
}

#[test]
fn test_missing_container_exits_1() {
    azure_probe()
        .args(["-account", "acct"])
        .assert()
        .code(1)
        .stdout(contains("-container"));
}

#[test]
fn test_missing_share_exits_1() {
    azure_probe()
        .args(["-mode", "file", "-account", "acct", "-container", "c1"])
        .assert()
        .code(1)
        .stdout(contains("-share"));
}

#[test]
fn test_invalid_mode_exits_0() {
    azure_probe()
        .args(["-mode=bogus", "-account", "acct"])
        .assert()
        .success()
        .stdout(contains("Invalid mode \"bogus\""));
}

#[test]
fn test_unknown_flag_exits_2() {
    azure_probe().args(["-bucket", "b1"]).assert().code(2);
}

#[test]
fn test_invalid_account_exits_1() {
    azure_probe()
        .args(["-account", "evil.example/x", "-container", "c1"])
        .assert()
        .code(1)
        .stdout(contains("Invalid storage account name"));
}

#[test]
fn test_transport_failure_exits_0() {
    azure_probe()
        .args([
            "-account",
            "acct",
            "-container",
            "c1",
            "-endpoint",
            "http://127.0.0.1:1",
        ])
        .assert()
        .success()
        .stdout(contains("Testing Azure Blob Storage via anonymous access:"))
        .stdout(contains("Error listing container: "))
        .stdout(contains("Error uploading blob: "));
}
