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

//! Structured error types for the MTX CLI.
//!
//! All CLI operations return `Result<T, CliError>`. Every variant maps onto a
//! process exit code: reader failures exit with the magnitude of their stable
//! [`ErrorCode`](mtx_core::ErrorCode), CLI-level failures use codes from 64 up.

use crate::format::FileFormat;
use mtx_core::MtxError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for MTX CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The reader rejected the file.
    #[error("'{}': {source} [code {}]", .path.display(), .source.code().as_i32())]
    Matrix {
        path: PathBuf,
        #[source]
        source: MtxError,
    },

    /// The extension names a known format this tool cannot read.
    #[error("'{}': {format} files are not supported", .path.display())]
    UnsupportedFormat { path: PathBuf, format: FileFormat },

    #[error("'{}': unrecognized file extension (expected .mtx)", .path.display())]
    UnrecognizedFormat { path: PathBuf },

    /// An environment variable holds a value that does not parse.
    #[error("invalid value '{value}' for {name}: expected a non-negative integer")]
    InvalidEnv { name: &'static str, value: String },

    /// JSON serialization error.
    #[error("JSON format error: {0}")]
    Json(String),
}

impl CliError {
    pub fn matrix(path: impl Into<PathBuf>, source: MtxError) -> Self {
        CliError::Matrix {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Matrix { source, .. } => {
                u8::try_from(source.code().as_i32().unsigned_abs()).unwrap_or(1)
            }
            CliError::UnsupportedFormat { .. } => 65,
            CliError::UnrecognizedFormat { .. } => 66,
            CliError::InvalidEnv { .. } => 67,
            CliError::Json(_) => 70,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err.to_string())
    }
}
