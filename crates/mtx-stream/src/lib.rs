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

//! Streaming MatrixMarket Reader
//!
//! This crate reads the MatrixMarket exchange format from any [`std::io::Read`]
//! source. The header is decoded up front; the body is then either streamed
//! entry by entry or collected into a staging buffer.
//!
//! # Features
//!
//! - **Strict**: every line is bounded to 1024 bytes, every numeric token is
//!   checked lexically before conversion, and every data line must carry
//!   exactly the number of values the header declares
//! - **Stable error codes**: each failure maps onto a fixed
//!   [`ErrorCode`](mtx_core::ErrorCode)
//! - **Iterator-based**: [`Entries`] streams [`Entry`] values without buffering
//! - **Comment capture**: optional, including structured `%TAG KEY value`
//!   comments
//!
//! # One-shot Reading
//!
//! ```rust
//! use mtx_stream::parse;
//! use mtx_core::{IndexBase, Layout, Storage};
//!
//! let input = b"%%MatrixMarket matrix array real general\n2 2\n1.0\n2.0\n3.0\n4.0\n";
//! let mm = parse(input).unwrap();
//!
//! assert_eq!(mm.header.layout, Layout::Array);
//! assert_eq!(mm.data.values(), &[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(mm.index_base(), IndexBase::One);
//! assert_eq!(mm.storage(), Storage::Full);
//! ```
//!
//! # Error Codes
//!
//! ```rust
//! use mtx_stream::parse;
//! use mtx_core::ErrorCode;
//!
//! let input = b"%%MatrixMarket matrix coordinate complex general\n1 1 1\n1 1 2.0\n";
//! let err = parse(input).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::TokenCountMismatch);
//! assert_eq!(err.code().as_i32(), -25);
//! ```

mod body;
mod header;
mod parser;
mod preamble;
mod reader;

pub use parser::{
    parse, read, read_path, read_path_with_config, read_with_config, Entries,
    MatrixMarketReader, ReaderConfig,
};
pub use reader::LineReader;

/// Re-export core types for convenience.
pub use mtx_core::{
    Comments, Entry, ErrorCode, HeaderDescriptor, MatrixMarket, MtxError, MtxResult,
    StagingBuffer, Value,
};
