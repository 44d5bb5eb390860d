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

//! Renders probe results into sectioned, fixed-width tables.
//!
//! Column widths are constants so output stays visually aligned across
//! machines with different tool names and versions. The renderer never
//! reorders or filters rows; a section simply does not appear when no
//! probe produced a result for it.

use crate::probe::{NO_VERSION, ProbeResult, Section};
use colored::Colorize;
use std::io::Write;

const NAME_WIDTH: usize = 16;
const VERSION_WIDTH: usize = 10;

pub fn render<W: Write>(writer: &mut W, results: &[ProbeResult]) -> std::io::Result<()> {
    let mut first = true;

    for section in Section::all() {
        let rows: Vec<&ProbeResult> = results.iter().filter(|r| r.section == section).collect();
        if rows.is_empty() {
            continue;
        }

        if !first {
            writeln!(writer)?;
        }
        first = false;

        writeln!(writer, "{}", section.to_string().cyan())?;
        for row in rows {
            writeln!(
                writer,
                "  {} {} {}",
                pad_name(row.name),
                pad_version(&row.version).yellow(),
                row.detail.bright_black()
            )?;
        }
    }

    Ok(())
}

fn pad_name(name: &str) -> String {
    let truncated: String = name.chars().take(NAME_WIDTH).collect();
    format!("{truncated:<NAME_WIDTH$}")
}

fn pad_version(version: &str) -> String {
    let text = if version.is_empty() { NO_VERSION } else { version };
    format!("{text:<VERSION_WIDTH$}")
}
