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

//! Byte cursor over a single line.
//!
//! Lines are scanned as raw bytes. Two character classes matter to the
//! format: *blanks* (space and tab) separate tokens on a line, and
//! *end-of-line* characters (`\n`, `\r`, vertical tab, form feed) or the end
//! of the slice terminate it. Together they make up *whitespace*.

/// Space or horizontal tab.
#[inline]
pub const fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// Whitespace that is not a blank.
#[inline]
pub const fn is_eol(b: u8) -> bool {
    matches!(b, b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Blank or end-of-line.
#[inline]
pub const fn is_space(b: u8) -> bool {
    is_blank(b) || is_eol(b)
}

/// Forward-only cursor over one line of input.
///
/// # Examples
///
/// ```
/// use mtx_core::lex::Cursor;
///
/// let mut cursor = Cursor::new(b"  12 34\n");
/// cursor.skip_blanks();
/// assert_eq!(cursor.peek(), Some(b'1'));
/// assert_eq!(cursor.column(), 3);
/// assert!(!cursor.at_eol());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// The byte under the cursor, `None` at the end of the line.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Byte offset from the start of the line.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// 1-based column of the byte under the cursor.
    #[inline]
    pub fn column(&self) -> usize {
        self.pos + 1
    }

    /// Unconsumed part of the line.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    /// Consume a run of space and tab characters.
    pub fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(b) if is_blank(b)) {
            self.pos += 1;
        }
    }

    /// Consume bytes while `pred` holds and return them.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if pred(b)) {
            self.pos += 1;
        }
        &self.bytes[start..self.pos]
    }

    /// `true` at an end-of-line character or the end of the slice.
    #[inline]
    pub fn at_eol(&self) -> bool {
        self.peek().map_or(true, is_eol)
    }

    /// `true` at whitespace or the end of the slice: a valid token boundary.
    #[inline]
    pub fn at_boundary(&self) -> bool {
        self.peek().map_or(true, is_space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_classes() {
        assert!(is_blank(b' '));
        assert!(is_blank(b'\t'));
        assert!(!is_blank(b'\n'));
        assert!(is_eol(b'\n'));
        assert!(is_eol(b'\r'));
        assert!(!is_eol(b' '));
        assert!(is_space(b'\r'));
        assert!(!is_space(b'x'));
    }

    #[test]
    fn test_skip_blanks_stops_at_newline() {
        let mut cursor = Cursor::new(b" \t \nabc");
        cursor.skip_blanks();
        assert_eq!(cursor.peek(), Some(b'\n'));
        assert!(cursor.at_eol());
    }

    #[test]
    fn test_end_of_slice_is_eol_and_boundary() {
        let cursor = Cursor::new(b"");
        assert!(cursor.at_eol());
        assert!(cursor.at_boundary());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_take_while() {
        let mut cursor = Cursor::new(b"1234ab");
        assert_eq!(cursor.take_while(|b| b.is_ascii_digit()), b"1234");
        assert_eq!(cursor.rest(), b"ab");
        assert_eq!(cursor.column(), 5);
    }

    #[test]
    fn test_advance_is_clamped() {
        let mut cursor = Cursor::new(b"ab");
        cursor.advance(10);
        assert_eq!(cursor.position(), 2);
        assert!(cursor.rest().is_empty());
    }
}
