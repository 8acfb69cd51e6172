// Dweve MTX - MatrixMarket Exchange Format Reader
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Inspect command - MatrixMarket structure report

use super::{open_matrix, reader_config, OutputFormat};
use crate::error::CliError;
use colored::Colorize;
use mtx_core::{MatrixMarket, StagingBuffer};
use serde_json::json;

/// Entries listed by `--verbose` in text mode.
const PREVIEW_ENTRIES: usize = 20;

/// Inspect a MatrixMarket file and report its header, storage and comments.
///
/// Comments are always captured. In text mode `verbose` adds a preview of the
/// first entries; in JSON mode it adds the full staging buffer.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or the JSON report cannot be
/// serialized.
///
/// # Examples
///
/// ```no_run
/// use mtx_cli::commands::{inspect, OutputFormat};
///
/// # fn main() -> Result<(), mtx_cli::error::CliError> {
/// inspect("bcsstk01.mtx", OutputFormat::Text, false, None)?;
/// inspect("bcsstk01.mtx", OutputFormat::Json, true, None)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(
    file: &str,
    format: OutputFormat,
    verbose: bool,
    max_entries: Option<usize>,
) -> Result<(), CliError> {
    let config = reader_config(false, true, max_entries)?;
    let mm = open_matrix(file, config)?;

    match format {
        OutputFormat::Text => print_text(file, &mm, verbose),
        OutputFormat::Json => println!("{}", report_json(file, &mm, verbose)?),
    }
    Ok(())
}

/// Build the JSON report.
pub fn report_json(file: &str, mm: &MatrixMarket, verbose: bool) -> Result<String, CliError> {
    let structured: Vec<_> = mm
        .comments
        .structured()
        .map(|c| json!({ "tag": c.tag, "key": c.key, "value": c.value }))
        .collect();

    let mut report = json!({
        "file": file,
        "header": mm.header,
        "stored_entries": mm.header.stored_entries(),
        "index_base": mm.index_base(),
        "storage": mm.storage(),
        "comments": mm.comments,
        "collection": mm.comments.collection(),
        "structured_comments": structured,
    });
    if verbose {
        report["data"] = serde_json::to_value(&mm.data)?;
    }
    Ok(serde_json::to_string_pretty(&report)?)
}

fn print_text(file: &str, mm: &MatrixMarket, verbose: bool) {
    let header = &mm.header;
    println!("{}", "MatrixMarket File".bold().underline());
    println!();
    println!("{}  {}", "File:".cyan(), file);
    println!("{}  {}", "Object:".cyan(), header.object);
    println!("{}  {}", "Format:".cyan(), header.layout);
    println!("{}  {}", "Field:".cyan(), header.value_kind);
    println!("{}  {}", "Symmetry:".cyan(), header.symmetry);
    println!("{}  {} x {}", "Size:".cyan(), header.rows, header.cols);
    println!(
        "{}  {} declared, {} stored",
        "Entries:".cyan(),
        header.nonzeros,
        header.stored_entries()
    );
    println!("{}  {:?}, {:?}", "Storage:".cyan(), mm.index_base(), mm.storage());

    if let Some((min, max)) = value_range(mm.data.values()) {
        println!("{}  min {}, max {}", "Values:".cyan(), min, max);
    }
    if let StagingBuffer::Coordinate(coo) = &mm.data {
        let diagonal = coo.rows.iter().zip(&coo.cols).filter(|(r, c)| r == c).count();
        println!("{}  {}", "Diagonal:".cyan(), diagonal);
    }

    if !mm.comments.is_empty() {
        println!();
        println!("{}", "Comments:".bold());
        if let Some(collection) = mm.comments.collection() {
            println!("  {} {}", "collection".yellow(), collection);
        }
        for comment in mm.comments.structured() {
            println!("  {} {} = {}", comment.tag.yellow(), comment.key, comment.value);
        }
        println!("  ({} lines)", mm.comments.len());
    }

    if verbose {
        println!();
        println!("{}", "Data:".bold());
        for line in preview(mm, PREVIEW_ENTRIES) {
            println!("  {}", line);
        }
        let stored = mm.header.stored_entries();
        if stored > PREVIEW_ENTRIES {
            println!("  ... ({} more)", stored - PREVIEW_ENTRIES);
        }
    }
}

fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Render up to `limit` stored entries, one per line.
fn preview(mm: &MatrixMarket, limit: usize) -> Vec<String> {
    let width = mm.header.value_kind.tokens_per_entry();
    let scalars = |k: usize| -> String {
        let values = mm.data.values();
        let start = k * width;
        values
            .get(start..start + width)
            .map(|s| s.iter().map(f64::to_string).collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    };

    match &mm.data {
        StagingBuffer::Coordinate(coo) => (0..coo.len().min(limit))
            .map(|k| {
                format!("({}, {}) {}", coo.rows[k], coo.cols[k], scalars(k))
                    .trim_end()
                    .to_string()
            })
            .collect(),
        StagingBuffer::Array(arr) => (0..(arr.len() / width.max(1)).min(limit))
            .map(|k| format!("[{}] {}", k + 1, scalars(k)))
            .collect(),
    }
}
