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

//! Best-effort subprocess execution.
//!
//! Version commands are spawned against tools that may be broken, missing,
//! or hung, so execution never surfaces an error: spawn failure, non-zero
//! exit, and timeout all come back as a `CommandOutput` with
//! `exit_succeeded` false and whatever output was captured.

use log::debug;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Upper bound for a single version command before the child is killed.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Captured outcome of one subprocess invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_succeeded: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output for a command that could not run at all.
    pub fn failed() -> Self {
        Self::default()
    }

    /// stdout followed by stderr. Some tools (notably `java -version`)
    /// print their version banner to the error stream.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

pub trait CommandExecutor {
    fn execute(&self, program: &Path, args: &[&str]) -> CommandOutput;
}

/// Executor backed by real child processes with an implicit timeout.
pub struct SystemExecutor {
    timeout: Duration,
}

impl SystemExecutor {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for SystemExecutor {
    fn execute(&self, program: &Path, args: &[&str]) -> CommandOutput {
        let mut child = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                debug!("Failed to spawn {}: {err}", program.display());
                return CommandOutput::failed();
            }
        };

        // Drain both pipes off-thread so a chatty child cannot deadlock
        // against a full pipe buffer while we poll for exit.
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let stdout_reader = thread::spawn(move || read_pipe(stdout_pipe));
        let stderr_reader = thread::spawn(move || read_pipe(stderr_pipe));

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break Some(status),
                Ok(None) => {
                    if Instant::now() >= deadline {
                        debug!(
                            "Killing {} after {:?} timeout",
                            program.display(),
                            self.timeout
                        );
                        let _ = child.kill();
                        let _ = child.wait();
                        break None;
                    }
                    thread::sleep(WAIT_POLL_INTERVAL);
                }
                Err(err) => {
                    debug!("Failed to wait for {}: {err}", program.display());
                    let _ = child.kill();
                    let _ = child.wait();
                    break None;
                }
            }
        };

        let stdout = stdout_reader.join().unwrap_or_default();
        let stderr = stderr_reader.join().unwrap_or_default();

        CommandOutput {
            exit_succeeded: status.is_some_and(|s| s.success()),
            stdout,
            stderr,
        }
    }
}

fn read_pipe<R: Read>(pipe: Option<R>) -> String {
    let mut buffer = String::new();
    if let Some(mut reader) = pipe {
        let _ = reader.read_to_string(&mut buffer);
    }
    buffer
}
