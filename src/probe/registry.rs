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

//! The static table of checks. Declaration order here is the row order of
//! the rendered report and must not be reordered.

use super::extract::ExtractionRule;
use super::{PlatformGate, Probe, ProbeKind, Section, SystemFact, VersionQuery};

static PROBES: &[Probe] = &[
    // System facts, resolved from the snapshot without subprocesses.
    Probe {
        name: "platform",
        section: Section::System,
        gate: PlatformGate::Always,
        kind: ProbeKind::Fact(SystemFact::Platform),
    },
    Probe {
        name: "arch",
        section: Section::System,
        gate: PlatformGate::Always,
        kind: ProbeKind::Fact(SystemFact::Arch),
    },
    Probe {
        name: "cpu",
        section: Section::System,
        gate: PlatformGate::Always,
        kind: ProbeKind::Fact(SystemFact::Cpu),
    },
    Probe {
        name: "directory",
        section: Section::System,
        gate: PlatformGate::Always,
        kind: ProbeKind::Fact(SystemFact::WorkingDirectory),
    },
    // JavaScript toolchain.
    Probe {
        name: "node",
        section: Section::Runtime,
        gate: PlatformGate::Always,
        kind: ProbeKind::Tool {
            locator_name: "node",
            version: Some(VersionQuery {
                args: &["--version"],
                rule: ExtractionRule::TrimStripPrefix { prefix: "v" },
            }),
        },
    },
    Probe {
        name: "npm",
        section: Section::Runtime,
        gate: PlatformGate::Always,
        kind: ProbeKind::Tool {
            locator_name: "npm",
            version: Some(VersionQuery {
                args: &["--version"],
                rule: ExtractionRule::TrimStripPrefix { prefix: "" },
            }),
        },
    },
    Probe {
        name: "yarn",
        section: Section::Runtime,
        gate: PlatformGate::Always,
        kind: ProbeKind::Tool {
            locator_name: "yarn",
            version: Some(VersionQuery {
                args: &["--version"],
                rule: ExtractionRule::TrimStripPrefix { prefix: "" },
            }),
        },
    },
    // The CLI reports on itself from build-time metadata.
    Probe {
        name: "envprobe",
        section: Section::HostCli,
        gate: PlatformGate::Always,
        kind: ProbeKind::Fact(SystemFact::CliVersion),
    },
    // Android toolchain. The Java banner goes to stderr with the version
    // in quotes, hence the quoted-substring rule over combined output.
    Probe {
        name: "java",
        section: Section::Android,
        gate: PlatformGate::Always,
        kind: ProbeKind::Tool {
            locator_name: "java",
            version: Some(VersionQuery {
                args: &["-version"],
                rule: ExtractionRule::QuotedSubstring,
            }),
        },
    },
    Probe {
        name: "android home",
        section: Section::Android,
        gate: PlatformGate::Always,
        kind: ProbeKind::Fact(SystemFact::AndroidHome),
    },
    // iOS toolchain, meaningful only on macOS.
    Probe {
        name: "xcode",
        section: Section::Ios,
        gate: PlatformGate::MacOnly,
        kind: ProbeKind::Tool {
            locator_name: "xcodebuild",
            version: Some(VersionQuery {
                args: &["-version"],
                rule: ExtractionRule::WhitespaceToken { index: 1 },
            }),
        },
    },
    Probe {
        name: "cocoapods",
        section: Section::Ios,
        gate: PlatformGate::MacOnly,
        kind: ProbeKind::Tool {
            locator_name: "pod",
            version: Some(VersionQuery {
                args: &["--version"],
                rule: ExtractionRule::TrimStripPrefix { prefix: "" },
            }),
        },
    },
];

pub fn registry() -> &'static [Probe] {
    PROBES
}
