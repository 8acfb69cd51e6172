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

//! Data body readers.
//!
//! Coordinate bodies hold one `row col [value [value]]` line per entry.
//! Array bodies hold one value group per line in column-major order, the
//! position of each group implied by its index. Either way the body is read
//! strictly: exactly [`HeaderDescriptor::stored_entries`] lines, each with
//! exactly the number of value tokens the value kind demands.

use crate::reader::LineReader;
use mtx_core::lex::{is_space, parse_indexed, parse_value, Cursor};
use mtx_core::{Entry, HeaderDescriptor, Layout, MtxError, MtxResult, Storage};
use std::io::Read;

/// Column-major walk over the stored part of an array.
#[derive(Debug, Clone, Copy)]
struct ArrayPosition {
    row: usize,
    col: usize,
    rows: usize,
    storage: Storage,
}

impl ArrayPosition {
    fn new(rows: usize, storage: Storage) -> Self {
        Self {
            row: Self::first_row(1, storage),
            col: 1,
            rows,
            storage,
        }
    }

    fn first_row(col: usize, storage: Storage) -> usize {
        match storage {
            Storage::Full => 1,
            Storage::Lower => col,
            Storage::StrictlyLower => col + 1,
        }
    }

    /// Current position, then step to the next stored element.
    fn advance(&mut self) -> (usize, usize) {
        let here = (self.row, self.col);
        self.row += 1;
        if self.row > self.rows {
            self.col += 1;
            self.row = Self::first_row(self.col, self.storage);
        }
        here
    }
}

/// Count the blank-separated tokens left on a line.
fn remaining_tokens(cursor: &Cursor<'_>) -> usize {
    cursor
        .rest()
        .split(|&b| is_space(b))
        .filter(|token| !token.is_empty())
        .count()
}

/// Reads the entries of one body, line by line.
#[derive(Debug)]
pub(crate) struct BodyReader {
    header: HeaderDescriptor,
    expected: usize,
    consumed: usize,
    position: ArrayPosition,
}

impl BodyReader {
    pub(crate) fn new(header: HeaderDescriptor) -> Self {
        Self {
            header,
            expected: header.stored_entries(),
            consumed: 0,
            position: ArrayPosition::new(header.rows, Storage::from(header.symmetry)),
        }
    }

    /// Entries consumed so far.
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.consumed == self.expected
    }

    /// Read the next entry, or `None` once every declared entry is read.
    ///
    /// # Errors
    ///
    /// - [`MtxError::ShortRead`] if the input ends early
    /// - [`MtxError::Malformed`] for a bad numeric token
    /// - [`MtxError::TokenCountMismatch`] for the wrong number of values
    pub(crate) fn next_entry<R: Read>(
        &mut self,
        lines: &mut LineReader<R>,
    ) -> MtxResult<Option<Entry>> {
        if self.is_finished() {
            return Ok(None);
        }
        let Some(line) = lines.advance()? else {
            return Err(MtxError::ShortRead {
                expected: self.expected,
                found: self.consumed,
            });
        };

        let mut cursor = Cursor::new(lines.line());
        let entry = match self.header.layout {
            Layout::Coordinate => {
                parse_indexed(&mut cursor).map_err(|e| MtxError::malformed(line, e))?
            }
            Layout::Array => {
                let value = parse_value(&mut cursor).map_err(|e| MtxError::malformed(line, e))?;
                let (row, col) = self.position.advance();
                Entry::new(row, col, value)
            }
        };

        let expected = self.header.value_kind.tokens_per_entry();
        let found = entry.value.token_count() + remaining_tokens(&cursor);
        if found != expected {
            return Err(MtxError::TokenCountMismatch {
                line,
                expected,
                found,
            });
        }

        self.consumed += 1;
        Ok(Some(entry))
    }
}
