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

//! One-shot snapshot of the local machine.
//!
//! Everything the probe runner needs from global process state is captured
//! here once, so the runner itself is a pure function of its inputs.

use crate::error::{EnvProbeError, Result};
use crate::platform::HostOs;
use log::debug;
use std::env;
use std::path::PathBuf;
use sysinfo::System;

/// The Android SDK home variable, displayed verbatim when set.
pub const ANDROID_HOME_VAR: &str = "ANDROID_HOME";

#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    pub os: HostOs,
    /// OS name as reported by the standard library (e.g. "macos", "linux").
    pub platform_name: String,
    pub arch: String,
    /// Model string of the first CPU, empty when unavailable.
    pub cpu_model: String,
    /// Logical core count.
    pub cpu_cores: usize,
    pub cwd: PathBuf,
    /// envprobe's own version.
    pub cli_version: String,
    /// Absolute path of the running envprobe binary, empty when unavailable.
    pub cli_path: String,
    pub android_home: Option<String>,
}

impl EnvSnapshot {
    /// Capture the current process environment and hardware facts.
    pub fn capture() -> Result<Self> {
        let mut system = System::new();
        system.refresh_cpu_all();

        let cpus = system.cpus();
        let cpu_model = cpus
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default();
        let cpu_cores = cpus.len();

        let cwd = env::current_dir().map_err(|err| {
            EnvProbeError::SystemError(format!("Cannot determine working directory: {err}"))
        })?;

        let cli_path = env::current_exe()
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        let android_home = env::var(ANDROID_HOME_VAR).ok().filter(|v| !v.is_empty());
        debug!(
            "Captured snapshot: os={}, arch={}, {cpu_cores} cores",
            env::consts::OS,
            env::consts::ARCH
        );

        Ok(Self {
            os: HostOs::current(),
            platform_name: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            cpu_model,
            cpu_cores,
            cwd,
            cli_version: env!("CARGO_PKG_VERSION").to_string(),
            cli_path,
            android_home,
        })
    }
}
