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

use std::io::Write;

use log::{debug, warn};

use crate::{Context, ModeTable, Outcome, ProbeOperation, Reporter, Result};

/// Send one operation and capture its outcome.
///
/// Never fails: request construction and transport errors become
/// [`Outcome::Failed`] so the caller can report them and keep going.
pub async fn probe(ctx: &Context, op: &ProbeOperation) -> Outcome {
    let req = match op.to_request() {
        Ok(req) => req,
        Err(err) => return Outcome::Failed(err),
    };

    debug!("sending {} {} for {}", op.method, op.url, op.id);
    match ctx.http_send(req).await {
        Ok(resp) => {
            let (parts, body) = resp.into_parts();
            debug!(
                "{} answered {} with {} body bytes",
                op.id,
                parts.status,
                body.len()
            );
            Outcome::Response {
                status: parts.status,
                body,
            }
        }
        Err(err) => {
            warn!("{} failed: {}", op.id, err.chain());
            Outcome::Failed(err)
        }
    }
}

/// Run `mode` from `table` against `target`, reporting every operation.
///
/// The mode is looked up before its identifiers are validated, and both
/// checks happen before any request is sent. Operations run strictly in
/// plan order; a failed operation doesn't stop the ones after it.
///
/// A report that can't be written is logged and skipped; it never stops the
/// run or changes its result.
///
/// Returns the outcome of every operation that was attempted.
pub async fn run<T: 'static, W: Write>(
    ctx: &Context,
    table: &ModeTable<T>,
    mode: &str,
    target: &T,
    reporter: &mut Reporter<W>,
) -> Result<Vec<Outcome>> {
    let mode = table.lookup(mode)?;
    (mode.validate)(target)?;

    let ops = (mode.plan)(target);
    debug!(
        "running {} mode {} with {} operations",
        table.provider(),
        mode.name,
        ops.len()
    );

    if let Err(err) = reporter.banner(mode.banner) {
        warn!("banner not printed: {}", err.chain());
    }
    let mut outcomes = Vec::with_capacity(ops.len());
    for op in &ops {
        let outcome = probe(ctx, op).await;
        if let Err(err) = reporter.report(table.provider(), op, &outcome) {
            warn!("report for {} not printed: {}", op.id, err.chain());
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
