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

//! Lexical layer: a byte cursor over one line and the numeric converters.
//!
//! Nothing here performs I/O; every function works on a line that is already
//! in memory.
//!
//! - [`cursor`] - character classes and the [`Cursor`] type
//! - [`numeric`] - integer, float, value and indexed-triple converters
//! - [`error`] - [`LexError`], carrying the column of the offending token

pub mod cursor;
pub mod error;
pub mod numeric;

pub use cursor::{is_blank, is_eol, is_space, Cursor};
pub use error::{LexError, LexResult};
pub use numeric::{parse_float, parse_indexed, parse_integer, parse_value};
