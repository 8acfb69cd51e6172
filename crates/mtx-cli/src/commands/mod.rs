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

//! CLI command implementations

mod codes;
mod inspect;
mod validate;

pub use codes::codes;
pub use inspect::inspect;
pub use validate::validate;

use crate::error::CliError;
use crate::format::FileFormat;
use clap::ValueEnum;
use mtx_core::{Limits, MatrixMarket};
use mtx_stream::{read_path_with_config, ReaderConfig};
use std::path::Path;
use tracing::debug;

/// Environment variable overriding [`Limits::max_entries`].
pub const MAX_ENTRIES_ENV: &str = "MTX_MAX_ENTRIES";

/// Output format for reporting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Read the entry limit from `MTX_MAX_ENTRIES`, if set.
fn max_entries_from_env() -> Result<Option<usize>, CliError> {
    match std::env::var(MAX_ENTRIES_ENV) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| CliError::InvalidEnv {
                name: MAX_ENTRIES_ENV,
                value,
            }),
        Err(_) => Ok(None),
    }
}

/// Build the reader configuration for a command.
///
/// An explicit `max_entries` wins over `MTX_MAX_ENTRIES`, which wins over the
/// default limit.
///
/// # Errors
///
/// Returns `Err` if `MTX_MAX_ENTRIES` is set but not a non-negative integer.
pub fn reader_config(
    strict_header: bool,
    capture_comments: bool,
    max_entries: Option<usize>,
) -> Result<ReaderConfig, CliError> {
    let max_entries = match max_entries {
        Some(n) => Some(n),
        None => max_entries_from_env()?,
    };
    let mut limits = Limits::default();
    if let Some(max) = max_entries {
        limits.max_entries = max;
    }
    Ok(ReaderConfig {
        limits,
        capture_comments,
        strict_header,
        ..ReaderConfig::default()
    })
}

/// Check the file extension, then read the whole matrix.
///
/// # Errors
///
/// Returns `Err` if:
/// - the extension names an unsupported format (`.hb`, `.rb`, `.mat`)
/// - the extension is not recognised
/// - the reader fails; the error keeps its stable code
pub fn open_matrix(file: &str, config: ReaderConfig) -> Result<MatrixMarket, CliError> {
    let path = Path::new(file);
    match FileFormat::from_path(path) {
        Some(format) if format.is_supported() => {
            debug!(file, %format, "detected input format");
        }
        Some(format) => {
            return Err(CliError::UnsupportedFormat {
                path: path.to_path_buf(),
                format,
            })
        }
        None => {
            return Err(CliError::UnrecognizedFormat {
                path: path.to_path_buf(),
            })
        }
    }
    read_path_with_config(path, config).map_err(|e| CliError::matrix(path, e))
}
