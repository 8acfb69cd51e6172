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

//! Bounded line reader.
//!
//! Reads input one line at a time into a reusable byte buffer, tracking the
//! line number for error reporting. Every line, including the last one, must
//! fit in the configured maximum length; a longer line is a hard error rather
//! than being split.
//!
//! This module is primarily an internal implementation detail of the reader,
//! but is exposed for advanced use cases.

use mtx_core::{MtxError, MtxResult};
use std::io::{BufRead, BufReader, ErrorKind, Read};

/// Buffered line reader with a hard line length bound.
///
/// The length bound counts the `\n` terminator. A final line without a
/// terminator may use the full bound. Returned lines exclude the `\n` and a
/// `\r` directly before it.
///
/// # Examples
///
/// ```rust
/// use mtx_stream::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("first\r\nsecond"), 1024);
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, &b"first"[..])));
/// assert_eq!(reader.next_line().unwrap(), Some((2, &b"second"[..])));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
    max_line_length: usize,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R, max_line_length: usize) -> Self {
        Self::with_capacity(reader, 64 * 1024, max_line_length)
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize, max_line_length: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity.max(1), reader),
            line_number: 0,
            buffer: Vec::new(),
            max_line_length,
        }
    }

    /// Number of the line most recently read, 0 before the first read.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The line most recently read.
    #[inline]
    pub fn line(&self) -> &[u8] {
        &self.buffer
    }

    /// Read the next line into the internal buffer.
    ///
    /// Returns its line number, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// - [`MtxError::LineTooLong`] if the line exceeds the bound
    /// - [`MtxError::Io`] if the underlying reader fails
    pub fn advance(&mut self) -> MtxResult<Option<usize>> {
        self.buffer.clear();
        let line = self.line_number + 1;
        let mut terminated = false;

        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(MtxError::Io(e)),
            };
            if chunk.is_empty() {
                break;
            }

            let (take, found) = match memchr::memchr(b'\n', chunk) {
                Some(pos) => (pos + 1, true),
                None => (chunk.len(), false),
            };
            if self.buffer.len().saturating_add(take) > self.max_line_length {
                return Err(MtxError::LineTooLong {
                    line,
                    limit: self.max_line_length,
                });
            }
            self.buffer.extend_from_slice(&chunk[..take]);
            self.reader.consume(take);

            if found {
                terminated = true;
                break;
            }
        }

        if self.buffer.is_empty() && !terminated {
            return Ok(None);
        }
        if terminated {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }
        self.line_number = line;
        Ok(Some(line))
    }

    /// Read the next line and return it with its line number.
    pub fn next_line(&mut self) -> MtxResult<Option<(usize, &[u8])>> {
        match self.advance()? {
            Some(line) => Ok(Some((line, self.buffer.as_slice()))),
            None => Ok(None),
        }
    }
}
