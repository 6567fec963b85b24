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

use anonprobe_azure_storage::Config;
use anonprobe_core::constants::PROBE_PAYLOAD;
use anonprobe_core::{ErrorKind, OutputFormat};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;

use super::{init_mock, run_with};

fn config() -> Config {
    Config::new().with_account("acct").with_container("c1")
}

#[tokio::test]
async fn test_blob_mode_sends_list_then_upload() {
    let (ctx, mock) = init_mock();
    mock.push_response(StatusCode::NOT_FOUND, "<Error><Code>ResourceNotFound</Code></Error>");
    mock.push_response(StatusCode::UNAUTHORIZED, "");

    let (result, out) = run_with(&ctx, &config(), OutputFormat::Text).await;
    assert_eq!(result.expect("run must succeed").len(), 2);

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 2);

    assert_eq!(reqs[0].method, Method::GET);
    assert_eq!(
        reqs[0].uri,
        "https://acct.blob.core.windows.net/c1?restype=container&comp=list"
    );
    assert!(reqs[0].headers.is_empty());
    assert!(reqs[0].body.is_empty());

    assert_eq!(reqs[1].method, Method::PUT);
    assert_eq!(reqs[1].uri, "https://acct.blob.core.windows.net/c1/testblob.txt");
    assert_eq!(reqs[1].headers["x-ms-blob-type"], "BlockBlob");
    assert_eq!(reqs[1].headers["content-type"], "text/plain");
    assert_eq!(reqs[1].body.as_ref(), PROBE_PAYLOAD.as_bytes());

    assert_eq!(
        out,
        concat!(
            "Testing Azure Blob Storage via anonymous access:\n",
            "Anonymous listing of container \"c1\" returned: 404 Not Found\n",
            "Anonymous upload of blob \"testblob.txt\" to container \"c1\" returned: 401 Unauthorized\n",
        )
    );
}

#[tokio::test]
async fn test_blob_mode_custom_blob_name() {
    let (ctx, mock) = init_mock();

    let config = config().with_blob("probe/anon check.txt");
    let (result, _) = run_with(&ctx, &config, OutputFormat::Text).await;
    result.expect("run must succeed");

    let reqs = mock.requests();
    assert_eq!(
        reqs[1].uri,
        "https://acct.blob.core.windows.net/c1/probe/anon%20check.txt"
    );
}

#[tokio::test]
async fn test_blob_mode_requires_container() {
    let (ctx, mock) = init_mock();

    let config = Config::new().with_account("acct");
    let (result, out) = run_with(&ctx, &config, OutputFormat::Text).await;

    let err = result.err().expect("missing container must fail");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(err.to_string().contains("-container"));
    assert!(out.is_empty());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_missing_account() {
    let (ctx, mock) = init_mock();

    let config = Config::new().with_container("c1");
    let (result, _) = run_with(&ctx, &config, OutputFormat::Text).await;

    let err = result.err().expect("missing account must fail");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(err.to_string().contains("-account"));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_account_outside_azure_host_sends_nothing() {
    let (ctx, mock) = init_mock();

    let config = Config::new()
        .with_account("evil.example/x")
        .with_container("c1");
    let (result, out) = run_with(&ctx, &config, OutputFormat::Text).await;

    let err = result.err().expect("invalid account must fail");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(out.is_empty());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_missing_account_is_checked_before_mode() {
    let (ctx, mock) = init_mock();

    let config = Config::new().with_mode("bogus");
    let (result, _) = run_with(&ctx, &config, OutputFormat::Text).await;

    assert_eq!(result.err().unwrap().kind(), ErrorKind::ConfigInvalid);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_invalid_mode() {
    let (ctx, mock) = init_mock();

    let config = Config::new().with_account("acct").with_mode("bogus");
    let (result, out) = run_with(&ctx, &config, OutputFormat::Text).await;

    let err = result.err().expect("unknown mode must fail");
    assert_eq!(err.kind(), ErrorKind::ModeInvalid);
    assert_eq!(
        err.to_string(),
        "Invalid mode \"bogus\". Use '-mode blob' or '-mode file'"
    );
    assert!(out.is_empty());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_list_failure_still_uploads() {
    let (ctx, mock) = init_mock();
    mock.push_failure("dns error: failed to lookup address information");
    mock.push_response(StatusCode::FORBIDDEN, "");

    let (result, out) = run_with(&ctx, &config(), OutputFormat::Text).await;
    result.expect("transport failures must not fail the run");

    assert_eq!(mock.requests().len(), 2);
    assert_eq!(
        out,
        concat!(
            "Testing Azure Blob Storage via anonymous access:\n",
            "Error listing container: failed to send request: dns error: failed to lookup address information\n",
            "Anonymous upload of blob \"testblob.txt\" to container \"c1\" returned: 403 Forbidden\n",
        )
    );
}

#[tokio::test]
async fn test_kv_output() {
    let (ctx, mock) = init_mock();
    mock.push_response(StatusCode::OK, "<EnumerationResults/>");
    mock.push_response(StatusCode::CREATED, "");

    let (result, out) = run_with(&ctx, &config(), OutputFormat::Kv).await;
    result.expect("run must succeed");

    assert_eq!(
        out,
        concat!(
            "provider=azure operation=blob-list method=GET ",
            "url=\"https://acct.blob.core.windows.net/c1?restype=container&comp=list\" ",
            "resource=c1 status=200 reason=OK\n",
            "provider=azure operation=blob-upload method=PUT ",
            "url=https://acct.blob.core.windows.net/c1/testblob.txt ",
            "resource=c1/testblob.txt status=201 reason=Created\n",
        )
    );
}

#[tokio::test]
async fn test_endpoint_override() {
    let (ctx, mock) = init_mock();

    let config = Config::new()
        .with_account("devstoreaccount1")
        .with_container("c1")
        .with_endpoint("http://127.0.0.1:10000/devstoreaccount1/");
    let (result, _) = run_with(&ctx, &config, OutputFormat::Text).await;
    result.expect("run must succeed");

    let uris: Vec<_> = mock.requests().into_iter().map(|r| r.uri).collect();
    assert_eq!(
        uris,
        vec![
            "http://127.0.0.1:10000/devstoreaccount1/c1?restype=container&comp=list",
            "http://127.0.0.1:10000/devstoreaccount1/c1/testblob.txt",
        ]
    );
}
