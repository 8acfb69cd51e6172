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

//! Codes command - print the error code table

use super::OutputFormat;
use crate::error::CliError;
use colored::Colorize;
use mtx_core::ErrorCode;
use serde_json::json;

/// Print every stable error code with its description.
///
/// # Errors
///
/// Returns `Err` only if the JSON table cannot be serialized.
pub fn codes(format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            println!("{}", "MatrixMarket error codes".bold().underline());
            println!();
            for code in ErrorCode::ALL {
                println!("  {:>4}  {}", code.as_i32().to_string().cyan(), code);
            }
        }
        OutputFormat::Json => println!("{}", codes_json()?),
    }
    Ok(())
}

fn codes_json() -> Result<String, CliError> {
    let table: Vec<_> = ErrorCode::ALL
        .iter()
        .map(|code| {
            json!({
                "code": code.as_i32(),
                "name": format!("{:?}", code),
                "description": code.as_str(),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&table)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_json_covers_table() {
        let table: Vec<serde_json::Value> = serde_json::from_str(&codes_json().unwrap()).unwrap();
        assert_eq!(table.len(), ErrorCode::ALL.len());
        assert_eq!(table[0]["code"], 0);
        assert_eq!(table[8]["code"], -11);
        assert_eq!(table[8]["description"], "EOF before header");
        assert_eq!(table[15]["name"], "TokenCountMismatch");
    }
}
