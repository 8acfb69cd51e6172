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

//! MTX CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: Read a MatrixMarket file end to end and report the first error
//! - **inspect**: Show the decoded header, storage layout and comments
//! - **codes**: List the stable error codes and their descriptions
//!
//! Reader failures exit with the magnitude of their error code, so a short
//! read (`-24`) exits with status 24.
//!
//! # Examples
//!
//! ```no_run
//! use mtx_cli::commands::{inspect, validate, OutputFormat};
//!
//! # fn main() -> Result<(), mtx_cli::error::CliError> {
//! validate("bcsstk01.mtx", false, None)?;
//! inspect("bcsstk01.mtx", OutputFormat::Json, false, None)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod format;
