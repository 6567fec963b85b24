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

//! Command line helpers shared by the probe binaries.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser};

use crate::{Error, ErrorKind, OutputFormat};

/// Options every probe binary accepts on top of its own flags.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Replace the provider base url, e.g. to point at a local emulator
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Log every request to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

/// Parse the process arguments, accepting Go style single-dash long flags.
pub fn parse_args<P: Parser>() -> P {
    P::parse_from(normalize_flags(&P::command(), std::env::args_os()))
}

/// Parse the given arguments, accepting Go style single-dash long flags.
pub fn try_parse_args<P, I, S>(args: I) -> Result<P, clap::Error>
where
    P: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    P::try_parse_from(normalize_flags(&P::command(), args))
}

/// Rewrite `-name` and `-name=value` into `--name` and `--name=value` for
/// every long flag `cmd` knows about.
///
/// The first argument is the program name and is kept as is. A value-taking
/// flag written without `=` is joined with the token after it, so
/// `-container -x` becomes `--container=-x` and clap sees `-x` as the value.
/// Rewriting stops after `--`.
pub fn normalize_flags<I, S>(cmd: &clap::Command, args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut flags: Vec<(&str, bool)> = cmd
        .get_arguments()
        .filter_map(|arg| Some((arg.get_long()?, arg.get_action().takes_values())))
        .collect();
    flags.push(("help", false));
    flags.push(("version", false));

    let mut out = Vec::new();
    let mut args = args.into_iter().map(Into::into);
    if let Some(program) = args.next() {
        out.push(program);
    }

    // Long flag still waiting for its value.
    let mut pending: Option<OsString> = None;
    let mut passthrough = false;
    for arg in args {
        if let Some(mut flag) = pending.take() {
            flag.push("=");
            flag.push(&arg);
            out.push(flag);
            continue;
        }
        if passthrough {
            out.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (name, inline_value) = match s.strip_prefix("--").or_else(|| s.strip_prefix('-')) {
            Some(rest) => match rest.split_once('=') {
                Some((name, _)) => (name, true),
                None => (rest, false),
            },
            None => {
                out.push(arg);
                continue;
            }
        };

        match flags.iter().find(|(long, _)| *long == name) {
            Some((_, takes_value)) => {
                let long = if s.starts_with("--") {
                    arg
                } else {
                    OsString::from(format!("-{s}"))
                };
                if *takes_value && !inline_value {
                    pending = Some(long);
                } else {
                    out.push(long);
                }
            }
            None => out.push(arg),
        }
    }
    // A trailing flag without its value is left for clap to reject.
    out.extend(pending);
    out
}

/// Initialize `env_logger`, honoring `RUST_LOG` and raising to `Debug` when verbose.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Turn the result of a probe run into the process exit code.
pub fn exit_code(result: crate::Result<()>, out: &mut impl Write) -> ExitCode {
    ExitCode::from(exit_status(result, out))
}

/// Print the error of a probe run, if any, to `out` and return the exit status.
///
/// A missing identifier exits with 1. An unknown mode only prints its
/// message and exits with 0.
pub fn exit_status(result: crate::Result<()>, out: &mut impl Write) -> u8 {
    let err = match result {
        Ok(()) => return 0,
        Err(err) => err,
    };
    let _ = writeln!(out, "{}", message_for(&err));
    match err.kind() {
        ErrorKind::ModeInvalid => 0,
        _ => 1,
    }
}

fn message_for(err: &Error) -> String {
    match err.kind() {
        ErrorKind::ConfigInvalid | ErrorKind::ModeInvalid => err.to_string(),
        _ => err.chain(),
    }
}
