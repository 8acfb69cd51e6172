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

//! Validate command - MatrixMarket header and body validation

use super::{open_matrix, reader_config};
use crate::error::CliError;
use colored::Colorize;

/// Validate a MatrixMarket file.
///
/// Reads the whole file strictly: header, size line, and every declared data
/// line. Unless `lenient` is set, contradictory header qualifiers (a real
/// hermitian matrix, a non-square symmetric one) are rejected too.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or fails any check. The error
/// carries the reader's stable error code.
///
/// # Examples
///
/// ```no_run
/// use mtx_cli::commands::validate;
///
/// # fn main() -> Result<(), mtx_cli::error::CliError> {
/// validate("bcsstk01.mtx", false, None)?;
/// # Ok(())
/// # }
/// ```
///
/// # Output
///
/// Prints a summary to stdout including:
/// - File validation status (✓ or ✗)
/// - The decoded header qualifiers
/// - Dimensions and declared entry count
pub fn validate(file: &str, lenient: bool, max_entries: Option<usize>) -> Result<(), CliError> {
    let config = reader_config(!lenient, false, max_entries)?;

    match open_matrix(file, config) {
        Ok(mm) => {
            let header = &mm.header;
            println!("{} {}", "✓".green().bold(), file);
            println!(
                "  Header: {} {} {} {}",
                header.object, header.layout, header.value_kind, header.symmetry
            );
            println!("  Size: {} x {}", header.rows, header.cols);
            println!("  Entries: {}", header.stored_entries());
            if lenient {
                println!("  Mode: lenient (qualifier consistency not enforced)");
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(e)
        }
    }
}
