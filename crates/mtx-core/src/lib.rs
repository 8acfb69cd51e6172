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

//! Data model and lexical core for the MatrixMarket exchange format.
//!
//! This crate holds everything about the format that does not touch I/O:
//!
//! - the decoded header ([`HeaderDescriptor`]) and its qualifier enums
//! - the banner [`keyword`] matcher
//! - the strict numeric converters in [`lex`]
//! - the stable error taxonomy ([`ErrorCode`], [`MtxError`])
//! - the staging buffers a reader fills ([`StagingBuffer`])
//! - captured [`Comments`] and resource [`Limits`]
//!
//! Reading from a byte stream lives in the `mtx-stream` crate.

mod comments;
mod error;
mod header;
pub mod keyword;
pub mod lex;
mod limits;
mod staging;
mod value;

pub use comments::{Comments, StructuredComment};
pub use error::{ErrorCode, MtxError, MtxResult};
pub use header::{HeaderDescriptor, Layout, Object, Symmetry, ValueKind};
pub use keyword::HeaderField;
pub use limits::Limits;
pub use staging::{ArrayBuffer, CoordinateBuffer, IndexBase, MatrixMarket, StagingBuffer, Storage};
pub use value::{Entry, Value};
