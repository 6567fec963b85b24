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

use anonprobe_core::constants::PROBE_PAYLOAD;
use anonprobe_core::{
    Context, ErrorKind, MockHttpSend, Outcome, OutputFormat, Reporter, Result,
};
use anonprobe_google::{run, Config};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;

fn init_mock() -> (Context, MockHttpSend) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mock = MockHttpSend::new();
    let ctx = Context::new().with_http_send(mock.clone());
    (ctx, mock)
}

async fn run_with(
    ctx: &Context,
    config: &Config,
    format: OutputFormat,
) -> (Result<Vec<Outcome>>, String) {
    let mut reporter = Reporter::new(Vec::new(), format);
    let result = run(ctx, config, &mut reporter).await;
    let out = String::from_utf8(reporter.into_inner()).expect("output must be utf-8");
    (result, out)
}

#[tokio::test]
async fn test_list() {
    let (ctx, mock) = init_mock();
    mock.push_response(
        StatusCode::OK,
        "{\n  \"kind\": \"storage#objects\"\n}\n",
    );

    let config = Config::new().with_bucket("b1");
    let (result, out) = run_with(&ctx, &config, OutputFormat::Text).await;
    result.expect("run must succeed");

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, Method::GET);
    assert_eq!(reqs[0].uri, "https://storage.googleapis.com/storage/v1/b/b1/o");

    assert_eq!(
        out,
        concat!(
            "Testing anonymous bucket listing...\n",
            "Anonymous listing of bucket \"b1\" returned: 200 OK\n",
            "Response: {\n  \"kind\": \"storage#objects\"\n}\n\n",
        )
    );
}

#[tokio::test]
async fn test_read() {
    let (ctx, mock) = init_mock();
    mock.push_response(StatusCode::FORBIDDEN, "AccessDenied");

    let config = Config::new().with_mode("read").with_bucket("b1");
    let (result, out) = run_with(&ctx, &config, OutputFormat::Text).await;
    result.expect("run must succeed");

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, Method::GET);
    assert_eq!(reqs[0].uri, "https://storage.googleapis.com/b1/test.txt");
    assert_eq!(
        out,
        concat!(
            "Testing anonymous object read...\n",
            "Anonymous read of object \"test.txt\" in bucket \"b1\" returned: 403 Forbidden\n",
            "Content: AccessDenied\n",
        )
    );
}

#[tokio::test]
async fn test_read_prints_binary_content_unchanged() {
    let (ctx, mock) = init_mock();
    mock.push_response(StatusCode::OK, &b"\x89PNG\r\n\x1a\n\xff\xfe"[..]);

    let config = Config::new().with_mode("read").with_bucket("b1");
    let mut reporter = Reporter::new(Vec::new(), OutputFormat::Text);
    run(&ctx, &config, &mut reporter).await.expect("run must succeed");

    let mut expected = concat!(
        "Testing anonymous object read...\n",
        "Anonymous read of object \"test.txt\" in bucket \"b1\" returned: 200 OK\n",
        "Content: ",
    )
    .as_bytes()
    .to_vec();
    expected.extend_from_slice(b"\x89PNG\r\n\x1a\n\xff\xfe\n");
    assert_eq!(reporter.into_inner(), expected);
}

#[tokio::test]
async fn test_upload() {
    let (ctx, mock) = init_mock();
    let body = "{\"error\": {\"code\": 401, \"message\": \"Anonymous caller does not have storage.objects.create access\"}}";
    mock.push_response(StatusCode::UNAUTHORIZED, body);

    let config = Config::new()
        .with_mode("upload")
        .with_bucket("b1")
        .with_object("o1.txt");
    let (result, out) = run_with(&ctx, &config, OutputFormat::Text).await;
    result.expect("run must succeed");

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, Method::POST);
    assert_eq!(
        reqs[0].uri,
        "https://storage.googleapis.com/upload/storage/v1/b/b1/o?uploadType=media&name=o1.txt"
    );
    assert_eq!(reqs[0].headers["content-type"], "text/plain");
    assert_eq!(reqs[0].body.as_ref(), PROBE_PAYLOAD.as_bytes());

    assert_eq!(
        out,
        format!(
            "Testing anonymous upload to bucket...\n\
             Anonymous upload of object \"o1.txt\" to bucket \"b1\" returned: 401 Unauthorized\n\
             Response: {body}\n"
        )
    );
}

#[tokio::test]
async fn test_same_response_same_output() {
    let mock = MockHttpSend::new().with_fallback(StatusCode::NOT_FOUND, "No such object: b1/test.txt");
    let ctx = Context::new().with_http_send(mock.clone());
    let config = Config::new().with_mode("read").with_bucket("b1");

    let (_, first) = run_with(&ctx, &config, OutputFormat::Text).await;
    let (_, second) = run_with(&ctx, &config, OutputFormat::Text).await;

    assert_eq!(first, second);
    assert_eq!(mock.requests().len(), 2);
}

#[tokio::test]
async fn test_missing_bucket() {
    let (ctx, mock) = init_mock();

    let (result, out) = run_with(&ctx, &Config::new(), OutputFormat::Text).await;

    let err = result.err().expect("missing bucket must fail");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert_eq!(err.to_string(), "Provide the bucket name with the -bucket flag");
    assert!(out.is_empty());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_invalid_mode() {
    let (ctx, mock) = init_mock();

    let config = Config::new().with_mode("bogus").with_bucket("b1");
    let (result, out) = run_with(&ctx, &config, OutputFormat::Text).await;

    assert_eq!(result.err().unwrap().kind(), ErrorKind::ModeInvalid);
    assert!(out.is_empty());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_transport_failure() {
    let (ctx, mock) = init_mock();
    mock.push_failure("dns error: failed to lookup address information");

    let config = Config::new().with_bucket("no-such-bucket");
    let (result, out) = run_with(&ctx, &config, OutputFormat::Text).await;

    let outcomes = result.expect("transport failures must not fail the run");
    assert!(matches!(outcomes[0], Outcome::Failed(_)));
    assert_eq!(
        out,
        concat!(
            "Testing anonymous bucket listing...\n",
            "Error listing bucket: failed to send request: dns error: failed to lookup address information\n",
        )
    );
}

#[tokio::test]
async fn test_json_output() {
    let (ctx, mock) = init_mock();
    mock.push_response(StatusCode::OK, "hello");

    let config = Config::new()
        .with_mode("read")
        .with_bucket("b1")
        .with_endpoint("http://localhost:4443");
    let (result, out) = run_with(&ctx, &config, OutputFormat::Json).await;
    result.expect("run must succeed");

    assert_eq!(mock.requests()[0].uri, "http://localhost:4443/b1/test.txt");

    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(
        record,
        serde_json::json!({
            "provider": "gcs",
            "operation": "read",
            "method": "GET",
            "url": "http://localhost:4443/b1/test.txt",
            "resource": "b1/test.txt",
            "status": 200,
            "reason": "OK",
            "body": "hello",
        })
    );
}
