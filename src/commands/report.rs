// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::environment::EnvSnapshot;
use crate::error::{EnvProbeError, Result};
use crate::exec::{SystemExecutor, SystemLocator};
use crate::probe::ProbeRunner;
use crate::report;
use log::debug;

pub struct ReportCommand;

impl ReportCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn execute(&self) -> Result<()> {
        let snapshot = EnvSnapshot::capture()?;
        debug!(
            "Probing environment on {} ({})",
            snapshot.platform_name, snapshot.arch
        );

        let executor = SystemExecutor::new();
        let locator = SystemLocator;
        let runner = ProbeRunner::new(&snapshot, &executor, &locator);
        let results = runner.run();

        // The registry always carries unconditional probes.
        if results.is_empty() {
            return Err(EnvProbeError::Internal(
                "probe registry produced no results".to_string(),
            ));
        }

        report::render(&mut std::io::stdout(), &results)?;
        Ok(())
    }
}
