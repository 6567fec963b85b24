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

use std::io::stdout;
use std::process::ExitCode;

use anonprobe_azure_storage::Cli;
use anonprobe_core::cli::{exit_code, init_logging, parse_args};
use anonprobe_core::{Context, Error, Reporter, Result};
use anonprobe_http_send_reqwest::ReqwestHttpSend;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli: Cli = parse_args();
    init_logging(cli.common.verbose);

    let result = probe(&cli).await;
    exit_code(result, &mut stdout())
}

async fn probe(cli: &Cli) -> Result<()> {
    let http = ReqwestHttpSend::unpooled()
        .map_err(|e| Error::unexpected("failed to build http client").with_source(e))?;
    let ctx = Context::new().with_http_send(http);
    let mut reporter = Reporter::new(stdout(), cli.common.format);

    anonprobe_azure_storage::run(&ctx, &cli.config(), &mut reporter).await?;
    Ok(())
}
