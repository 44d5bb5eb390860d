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

//! Walks the probe registry and produces one result per applicable probe.
//!
//! A probe failure of any kind (missing tool, broken version command,
//! unparseable output) degrades that probe's row to a placeholder and the
//! run continues. Results come back in registry order.

use super::extract::{ExtractionRule, extract};
use super::{
    NO_VERSION, NOT_INSTALLED, Probe, ProbeKind, ProbeResult, SystemFact, UNKNOWN_VERSION,
    VersionQuery, registry,
};
use crate::environment::EnvSnapshot;
use crate::exec::{CommandExecutor, Locator};
use log::debug;

pub struct ProbeRunner<'a, E, L> {
    snapshot: &'a EnvSnapshot,
    executor: &'a E,
    locator: &'a L,
}

impl<'a, E: CommandExecutor, L: Locator> ProbeRunner<'a, E, L> {
    pub fn new(snapshot: &'a EnvSnapshot, executor: &'a E, locator: &'a L) -> Self {
        Self {
            snapshot,
            executor,
            locator,
        }
    }

    pub fn run(&self) -> Vec<ProbeResult> {
        registry()
            .iter()
            .filter(|probe| probe.gate.accepts(self.snapshot.os))
            .map(|probe| self.run_probe(probe))
            .collect()
    }

    fn run_probe(&self, probe: &Probe) -> ProbeResult {
        match probe.kind {
            ProbeKind::Fact(fact) => self.resolve_fact(probe, fact),
            ProbeKind::Tool {
                locator_name,
                version,
            } => self.run_tool(probe, locator_name, version),
        }
    }

    fn resolve_fact(&self, probe: &Probe, fact: SystemFact) -> ProbeResult {
        let snapshot = self.snapshot;
        let (located, path, version, detail) = match fact {
            SystemFact::Platform => (true, String::new(), snapshot.platform_name.clone(), String::new()),
            SystemFact::Arch => (true, String::new(), snapshot.arch.clone(), String::new()),
            SystemFact::Cpu => (
                true,
                String::new(),
                format!("{} cores", snapshot.cpu_cores),
                snapshot.cpu_model.clone(),
            ),
            SystemFact::WorkingDirectory => {
                let full = snapshot.cwd.display().to_string();
                let base = snapshot
                    .cwd
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| full.clone());
                (true, full.clone(), base, full)
            }
            SystemFact::CliVersion => (
                true,
                snapshot.cli_path.clone(),
                snapshot.cli_version.clone(),
                snapshot.cli_path.clone(),
            ),
            SystemFact::AndroidHome => match &snapshot.android_home {
                Some(home) => (true, home.clone(), NO_VERSION.to_string(), home.clone()),
                None => (
                    false,
                    String::new(),
                    NO_VERSION.to_string(),
                    "not set".to_string(),
                ),
            },
        };

        ProbeResult {
            name: probe.name,
            section: probe.section,
            located,
            path,
            version,
            detail,
        }
    }

    fn run_tool(
        &self,
        probe: &Probe,
        locator_name: &str,
        version: Option<VersionQuery>,
    ) -> ProbeResult {
        let Some(path) = self.locator.locate(locator_name) else {
            debug!("{locator_name} not found on PATH");
            return ProbeResult {
                name: probe.name,
                section: probe.section,
                located: false,
                path: String::new(),
                version: NOT_INSTALLED.to_string(),
                detail: String::new(),
            };
        };

        let version_text = match version {
            None => NO_VERSION.to_string(),
            Some(query) => {
                let output = self.executor.execute(&path, query.args);
                if !output.exit_succeeded && output.combined().is_empty() {
                    // Could not run at all; indistinguishable from absence.
                    NOT_INSTALLED.to_string()
                } else {
                    let haystack = match query.rule {
                        ExtractionRule::QuotedSubstring => output.combined(),
                        _ => output.stdout.clone(),
                    };
                    match extract(&haystack, query.rule) {
                        Some(token) => token,
                        None => UNKNOWN_VERSION.to_string(),
                    }
                }
            }
        };

        let path_text = path.display().to_string();
        ProbeResult {
            name: probe.name,
            section: probe.section,
            located: true,
            path: path_text.clone(),
            version: version_text,
            detail: path_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::CommandOutput;
    use crate::platform::HostOs;
    use crate::probe::{PlatformGate, Section};
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn snapshot(os: HostOs) -> EnvSnapshot {
        EnvSnapshot {
            os,
            platform_name: "linux".to_string(),
            arch: "x86_64".to_string(),
            cpu_model: "Apple M2".to_string(),
            cpu_cores: 8,
            cwd: PathBuf::from("/home/dev/project"),
            cli_version: "0.1.0".to_string(),
            cli_path: "/usr/local/bin/envprobe".to_string(),
            android_home: None,
        }
    }

    struct StaticLocator {
        paths: HashMap<&'static str, PathBuf>,
    }

    impl StaticLocator {
        fn empty() -> Self {
            Self {
                paths: HashMap::new(),
            }
        }

        fn with(entries: &[(&'static str, &str)]) -> Self {
            Self {
                paths: entries
                    .iter()
                    .map(|(name, path)| (*name, PathBuf::from(path)))
                    .collect(),
            }
        }
    }

    impl Locator for StaticLocator {
        fn locate(&self, name: &str) -> Option<PathBuf> {
            self.paths.get(name).cloned()
        }
    }

    struct ScriptedExecutor {
        outputs: HashMap<String, CommandOutput>,
        calls: Cell<usize>,
    }

    impl ScriptedExecutor {
        fn empty() -> Self {
            Self {
                outputs: HashMap::new(),
                calls: Cell::new(0),
            }
        }

        fn with(entries: &[(&str, CommandOutput)]) -> Self {
            Self {
                outputs: entries
                    .iter()
                    .map(|(path, output)| (path.to_string(), output.clone()))
                    .collect(),
                calls: Cell::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.get()
        }
    }

    impl CommandExecutor for ScriptedExecutor {
        fn execute(&self, program: &Path, _args: &[&str]) -> CommandOutput {
            self.calls.set(self.calls.get() + 1);
            self.outputs
                .get(&program.display().to_string())
                .cloned()
                .unwrap_or_else(CommandOutput::failed)
        }
    }

    fn stdout(text: &str) -> CommandOutput {
        CommandOutput {
            exit_succeeded: true,
            stdout: text.to_string(),
            stderr: String::new(),
        }
    }

    fn find<'r>(results: &'r [ProbeResult], name: &str) -> &'r ProbeResult {
        results
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("no result for {name}"))
    }

    #[test]
    fn located_node_reports_stripped_version_and_path() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::with(&[("node", "/usr/local/bin/node")]);
        let executor = ScriptedExecutor::with(&[("/usr/local/bin/node", stdout("v18.17.0\n"))]);
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        let node = find(&results, "node");

        assert!(node.located);
        assert_eq!(node.version, "18.17.0");
        assert_eq!(node.path, "/usr/local/bin/node");
    }

    #[test]
    fn absent_tool_reports_not_installed_without_running_anything() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::empty();
        let executor = ScriptedExecutor::empty();
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        let npm = find(&results, "npm");

        assert!(!npm.located);
        assert_eq!(npm.version, NOT_INSTALLED);
        assert!(npm.path.is_empty());
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn java_version_is_read_from_the_error_stream() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::with(&[("java", "/usr/bin/java")]);
        let executor = ScriptedExecutor::with(&[(
            "/usr/bin/java",
            CommandOutput {
                exit_succeeded: true,
                stdout: String::new(),
                stderr: "java version \"21.0.2\" 2024-01-16\n".to_string(),
            },
        )]);
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let java = find(&runner.run(), "java").clone();
        assert_eq!(java.version, "21.0.2");
    }

    #[test]
    fn unparseable_output_degrades_to_unknown() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::with(&[("java", "/usr/bin/java")]);
        let executor = ScriptedExecutor::with(&[("/usr/bin/java", stdout("no quotes here\n"))]);
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let java = find(&runner.run(), "java").clone();
        assert!(java.located);
        assert_eq!(java.version, UNKNOWN_VERSION);
    }

    #[test]
    fn failed_command_with_no_output_reads_as_not_installed() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::with(&[("node", "/usr/local/bin/node")]);
        let executor = ScriptedExecutor::with(&[("/usr/local/bin/node", CommandOutput::failed())]);
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let node = find(&runner.run(), "node").clone();
        assert!(node.located);
        assert_eq!(node.version, NOT_INSTALLED);
    }

    #[test]
    fn mac_only_probes_are_skipped_elsewhere() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::empty();
        let executor = ScriptedExecutor::empty();
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        assert!(results.iter().all(|r| r.section != Section::Ios));
        assert!(!results.iter().any(|r| r.name == "xcode"));
    }

    #[test]
    fn mac_only_probes_run_on_macos() {
        let snap = snapshot(HostOs::Macos);
        let locator = StaticLocator::empty();
        let executor = ScriptedExecutor::empty();
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        let xcode = find(&results, "xcode");
        assert_eq!(xcode.version, NOT_INSTALLED);
    }

    #[test]
    fn results_preserve_registry_order() {
        let snap = snapshot(HostOs::Macos);
        let locator = StaticLocator::empty();
        let executor = ScriptedExecutor::empty();
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let result_names: Vec<&str> = runner.run().iter().map(|r| r.name).collect();
        let expected: Vec<&str> = registry()
            .iter()
            .filter(|p| p.gate.accepts(HostOs::Macos))
            .map(|p| p.name)
            .collect();
        assert_eq!(result_names, expected);
    }

    #[test]
    fn every_accepted_probe_yields_exactly_one_result() {
        for os in [HostOs::Macos, HostOs::Windows, HostOs::Linux, HostOs::Other] {
            let snap = snapshot(os);
            let locator = StaticLocator::empty();
            let executor = ScriptedExecutor::empty();
            let runner = ProbeRunner::new(&snap, &executor, &locator);

            let accepted = registry().iter().filter(|p| p.gate.accepts(os)).count();
            assert_eq!(runner.run().len(), accepted);
        }
    }

    #[test]
    fn cpu_fact_reports_core_count_and_model() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::empty();
        let executor = ScriptedExecutor::empty();
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        let cpu = find(&results, "cpu");
        assert_eq!(cpu.version, "8 cores");
        assert_eq!(cpu.detail, "Apple M2");
    }

    #[test]
    fn directory_fact_shows_basename_and_full_path() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::empty();
        let executor = ScriptedExecutor::empty();
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        let directory = find(&results, "directory");
        assert_eq!(directory.version, "project");
        assert_eq!(directory.detail, "/home/dev/project");
    }

    #[test]
    fn android_home_is_shown_verbatim_when_set() {
        let mut snap = snapshot(HostOs::Linux);
        snap.android_home = Some("/opt/android-sdk".to_string());
        let locator = StaticLocator::empty();
        let executor = ScriptedExecutor::empty();
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        let home = find(&results, "android home");
        assert!(home.located);
        assert_eq!(home.version, NO_VERSION);
        assert_eq!(home.detail, "/opt/android-sdk");
    }

    #[test]
    fn unset_android_home_is_marked_not_set() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::empty();
        let executor = ScriptedExecutor::empty();
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        let home = find(&results, "android home");
        assert!(!home.located);
        assert_eq!(home.detail, "not set");
    }

    #[test]
    fn cli_fact_reports_own_version_and_binary_path() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::empty();
        let executor = ScriptedExecutor::empty();
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        let cli = find(&results, "envprobe");
        assert_eq!(cli.version, "0.1.0");
        assert_eq!(cli.path, "/usr/local/bin/envprobe");
    }

    #[test]
    fn one_broken_probe_does_not_affect_the_others() {
        let snap = snapshot(HostOs::Linux);
        let locator = StaticLocator::with(&[
            ("node", "/usr/local/bin/node"),
            ("npm", "/usr/local/bin/npm"),
        ]);
        let executor = ScriptedExecutor::with(&[
            ("/usr/local/bin/node", CommandOutput::failed()),
            ("/usr/local/bin/npm", stdout("10.2.3\n")),
        ]);
        let runner = ProbeRunner::new(&snap, &executor, &locator);

        let results = runner.run();
        assert_eq!(find(&results, "node").version, NOT_INSTALLED);
        assert_eq!(find(&results, "npm").version, "10.2.3");
    }

    #[test]
    fn windows_gate_is_honored_by_the_filter() {
        // No WindowsOnly probes are registered today; the gate still has to
        // hold if one is added.
        let gate = PlatformGate::WindowsOnly;
        assert!(gate.accepts(HostOs::Windows));
        assert!(!gate.accepts(HostOs::Linux));
    }
}
