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

//! CLI command definitions and argument parsing.

use crate::commands::{self, OutputFormat};
use crate::error::CliError;
use clap::Subcommand;

/// MatrixMarket commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use mtx_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a MatrixMarket file
    ///
    /// Reads the header, the size line and every declared data line. Exits
    /// with the magnitude of the reader's error code on failure.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Accept contradictory header qualifiers
        #[arg(short, long)]
        lenient: bool,

        /// Refuse files declaring more stored entries than this
        #[arg(long, value_name = "N")]
        max_entries: Option<usize>,
    },

    /// Print the header, storage and comments of a MatrixMarket file
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Also list the stored entries
        #[arg(short, long)]
        verbose: bool,

        /// Refuse files declaring more stored entries than this
        #[arg(long, value_name = "N")]
        max_entries: Option<usize>,
    },

    /// List the reader's error codes
    Codes {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Validate {
                file,
                lenient,
                max_entries,
            } => commands::validate(&file, lenient, max_entries),
            Commands::Inspect {
                file,
                format,
                verbose,
                max_entries,
            } => commands::inspect(&file, format, verbose, max_entries),
            Commands::Codes { format } => commands::codes(format),
        }
    }
}
