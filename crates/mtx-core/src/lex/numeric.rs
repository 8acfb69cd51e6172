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

//! Strict numeric token converters.
//!
//! Each converter skips leading blanks, checks the token lexically, and only
//! then converts it. A token must be followed by whitespace or the end of the
//! line; anything else glued to it is an error.
//!
//! # Examples
//!
//! ```
//! use mtx_core::lex::{parse_indexed, parse_integer, parse_float, Cursor};
//! use mtx_core::Value;
//!
//! let mut cursor = Cursor::new(b" 42 ");
//! assert_eq!(parse_integer(&mut cursor).unwrap(), 42);
//!
//! // An index must be an integer, a value may be a float
//! assert!(parse_integer(&mut Cursor::new(b"3.14")).is_err());
//! assert_eq!(parse_float(&mut Cursor::new(b"3.25")).unwrap(), 3.25);
//!
//! let entry = parse_indexed(&mut Cursor::new(b"1 2 -1.5e3 2\n")).unwrap();
//! assert_eq!((entry.row, entry.col), (1, 2));
//! assert_eq!(entry.value, Value::Complex(-1500.0, 2.0));
//! ```

use super::cursor::Cursor;
use super::error::{LexError, LexResult};
use crate::value::{Entry, Value};

#[inline]
fn is_float_char(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')
}

fn lexeme(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Scan the bytes from `start` up to the next whitespace, for error messages.
fn offending_token(cursor: &Cursor<'_>, start: &[u8]) -> String {
    let tail = cursor.rest();
    let glued = tail
        .iter()
        .position(|&b| super::cursor::is_space(b))
        .unwrap_or(tail.len());
    let mut token = start.to_vec();
    token.extend_from_slice(&tail[..glued]);
    lexeme(&token)
}

/// Convert an unsigned decimal integer (row, column, or dimension).
///
/// No sign is permitted.
///
/// # Errors
///
/// - [`LexError::NotANumber`] if the token does not start with a digit
/// - [`LexError::InvalidToken`] if the digits run into a non-whitespace
///   character (the token is probably a float)
/// - [`LexError::Conversion`] if the value does not fit in `usize`
pub fn parse_integer(cursor: &mut Cursor<'_>) -> LexResult<usize> {
    cursor.skip_blanks();
    let column = cursor.column();
    if !matches!(cursor.peek(), Some(b) if b.is_ascii_digit()) {
        return Err(LexError::NotANumber { column });
    }

    let digits = cursor.take_while(|b| b.is_ascii_digit());
    if !cursor.at_boundary() {
        return Err(LexError::InvalidToken {
            column,
            token: offending_token(cursor, digits),
            expected: "integer",
        });
    }

    // Digits are ASCII, so the UTF-8 check cannot fail.
    let text = std::str::from_utf8(digits).map_err(|e| LexError::Conversion {
        column,
        token: lexeme(digits),
        reason: e.to_string(),
    })?;
    text.parse::<usize>().map_err(|e| LexError::Conversion {
        column,
        token: text.to_string(),
        reason: e.to_string(),
    })
}

/// Convert a decimal floating-point value, optionally in E-notation.
///
/// The lexical class is permissive (`1-2e` passes it); such tokens are
/// rejected by the conversion step. Values that overflow to infinity are a
/// conversion failure too.
///
/// # Errors
///
/// - [`LexError::NotANumber`] unless the token starts with a digit or sign
/// - [`LexError::InvalidToken`] if other characters are glued to the token
/// - [`LexError::Conversion`] if the token is not a finite `f64`
pub fn parse_float(cursor: &mut Cursor<'_>) -> LexResult<f64> {
    cursor.skip_blanks();
    let column = cursor.column();
    if !matches!(cursor.peek(), Some(b) if b.is_ascii_digit() || b == b'+' || b == b'-') {
        return Err(LexError::NotANumber { column });
    }

    let token = cursor.take_while(is_float_char);
    if !cursor.at_boundary() {
        return Err(LexError::InvalidToken {
            column,
            token: offending_token(cursor, token),
            expected: "floating-point number",
        });
    }

    let text = std::str::from_utf8(token).map_err(|e| LexError::Conversion {
        column,
        token: lexeme(token),
        reason: e.to_string(),
    })?;
    let value = text.parse::<f64>().map_err(|e| LexError::Conversion {
        column,
        token: text.to_string(),
        reason: e.to_string(),
    })?;
    if !value.is_finite() {
        return Err(LexError::Conversion {
            column,
            token: text.to_string(),
            reason: "value out of range".to_string(),
        });
    }
    Ok(value)
}

/// Convert one real value, or a real/imaginary pair.
///
/// The number of tokens actually present decides the result: one float
/// followed by the end of the line is [`Value::Real`], otherwise a second
/// float is read and the result is [`Value::Complex`]. Matching the count
/// against the header is the caller's job.
pub fn parse_value(cursor: &mut Cursor<'_>) -> LexResult<Value> {
    let re = parse_float(cursor)?;
    cursor.skip_blanks();
    if cursor.at_eol() {
        return Ok(Value::Real(re));
    }
    let im = parse_float(cursor)?;
    Ok(Value::Complex(re, im))
}

/// Convert a coordinate data line: row, column, then zero to two values.
///
/// A line that ends right after the column index yields [`Value::Pattern`].
pub fn parse_indexed(cursor: &mut Cursor<'_>) -> LexResult<Entry> {
    let row = parse_integer(cursor)?;
    let col = parse_integer(cursor)?;
    cursor.skip_blanks();
    if cursor.at_eol() {
        return Ok(Entry::new(row, col, Value::Pattern));
    }
    let value = parse_value(cursor)?;
    Ok(Entry::new(row, col, value))
}
