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

use crate::{Error, ProbeOperation, Result};

/// One entry of a provider's mode table.
pub struct Mode<T> {
    /// Value accepted by `-mode`.
    pub name: &'static str,
    /// Line printed before the operations run.
    pub banner: &'static str,
    /// Checks the identifiers this mode needs. Runs before any request is sent.
    pub validate: fn(&T) -> Result<()>,
    /// Builds the operations in the order they must be sent.
    pub plan: fn(&T) -> Vec<ProbeOperation>,
}

/// ModeTable maps the recognized modes of one provider to their plans.
pub struct ModeTable<T: 'static> {
    provider: &'static str,
    modes: &'static [Mode<T>],
}

impl<T: 'static> ModeTable<T> {
    /// Create a new table.
    pub const fn new(provider: &'static str, modes: &'static [Mode<T>]) -> Self {
        Self { provider, modes }
    }

    /// Name of the provider, used in structured reports.
    pub fn provider(&self) -> &'static str {
        self.provider
    }

    /// Names of all recognized modes, in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modes.iter().map(|m| m.name)
    }

    /// Find the mode with the given name.
    ///
    /// Returns an [`ErrorKind::ModeInvalid`](crate::ErrorKind::ModeInvalid)
    /// error listing the valid values otherwise.
    pub fn lookup(&self, name: &str) -> Result<&Mode<T>> {
        self.modes.iter().find(|m| m.name == name).ok_or_else(|| {
            Error::mode_invalid(format!(
                "Invalid mode {name:?}. Use {}",
                self.usage()
            ))
        })
    }

    fn usage(&self) -> String {
        let names: Vec<String> = self.names().map(|n| format!("'-mode {n}'")).collect();
        match names.split_last() {
            None => String::new(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        }
    }
}
