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

//! Error types for MatrixMarket reading.
//!
//! Every failure carries a stable signed [`ErrorCode`] (zero is success) with
//! a fixed human-readable description. [`MtxError`] is the rich error value
//! the reader returns; [`MtxError::code`] maps it onto the code table.

use crate::header::Object;
use crate::keyword::{HeaderField, PartialBanner};
use crate::lex::LexError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Stable numeric error codes.
///
/// The numeric values are part of the public contract and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    AllocationFailure = -1,
    OpenFailure = -2,
    BadObject = -3,
    /// Reserved. An unknown layout keyword is reported as [`ErrorCode::BadHeader`].
    BadLayout = -4,
    BadValueKind = -5,
    InconsistentHeader = -6,
    Io = -7,
    EofBeforeHeader = -11,
    BadHeader = -12,
    LineTooLong = -13,
    NotANumber = -21,
    InvalidToken = -22,
    ConversionFailure = -23,
    ShortRead = -24,
    TokenCountMismatch = -25,
}

impl ErrorCode {
    /// Every code, in table order.
    pub const ALL: [ErrorCode; 16] = [
        ErrorCode::Success,
        ErrorCode::AllocationFailure,
        ErrorCode::OpenFailure,
        ErrorCode::BadObject,
        ErrorCode::BadLayout,
        ErrorCode::BadValueKind,
        ErrorCode::InconsistentHeader,
        ErrorCode::Io,
        ErrorCode::EofBeforeHeader,
        ErrorCode::BadHeader,
        ErrorCode::LineTooLong,
        ErrorCode::NotANumber,
        ErrorCode::InvalidToken,
        ErrorCode::ConversionFailure,
        ErrorCode::ShortRead,
        ErrorCode::TokenCountMismatch,
    ];

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Look up a code by its numeric value.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_i32() == code)
    }

    /// The fixed description of this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Success => "success",
            ErrorCode::AllocationFailure => "memory allocation failure",
            ErrorCode::OpenFailure => "can't open file",
            ErrorCode::BadObject => "unexpected MatrixMarket header object (matrix)",
            ErrorCode::BadLayout => {
                "unrecognized MatrixMarket header format (coordinate or array)"
            }
            ErrorCode::BadValueKind => "unrecognized MatrixMarket header data type",
            ErrorCode::InconsistentHeader => "inconsistent MatrixMarket header qualifiers",
            ErrorCode::Io => "I/O error while reading",
            ErrorCode::EofBeforeHeader => "EOF before header",
            ErrorCode::BadHeader => "not MatrixMarket format, bad header",
            ErrorCode::LineTooLong => "lines exceeding 1024 characters",
            ErrorCode::NotANumber => "not a number",
            ErrorCode::InvalidToken => "invalid numeric token",
            ErrorCode::ConversionFailure => "numeric conversion failure",
            ErrorCode::ShortRead => "short read: fewer data lines than declared",
            ErrorCode::TokenCountMismatch => "number of values does not match the header",
        }
    }

    /// Describe a raw numeric code. Unmapped codes describe as `"unknown"`.
    ///
    /// ```
    /// use mtx_core::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::describe(-11), "EOF before header");
    /// assert_eq!(ErrorCode::describe(42), "unknown");
    /// ```
    pub fn describe(code: i32) -> &'static str {
        Self::from_code(code).map_or("unknown", Self::as_str)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&LexError> for ErrorCode {
    fn from(err: &LexError) -> Self {
        match err {
            LexError::NotANumber { .. } => ErrorCode::NotANumber,
            LexError::InvalidToken { .. } => ErrorCode::InvalidToken,
            LexError::Conversion { .. } => ErrorCode::ConversionFailure,
        }
    }
}

/// Errors raised while reading a MatrixMarket stream.
#[derive(Debug, Error)]
pub enum MtxError {
    /// A buffer could not be reserved, or the declared size exceeds the limit.
    #[error("cannot allocate storage for {requested} entries: {reason}")]
    Allocation { requested: usize, reason: String },

    #[error("can't open file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected MatrixMarket header object '{0}', only 'matrix' is supported")]
    UnsupportedObject(Object),

    #[error("pattern data cannot be stored in array format")]
    PatternArray,

    #[error("inconsistent MatrixMarket header: {0}")]
    InconsistentHeader(String),

    #[error("EOF before header")]
    EofBeforeHeader,

    /// The banner line did not decode. `partial` holds the fields decoded
    /// before `field`; later fields are left unrecognised.
    #[error("not MatrixMarket format: unrecognized {field} at column {column}")]
    UnrecognizedField {
        field: HeaderField,
        column: usize,
        partial: PartialBanner,
    },

    /// The size line is malformed.
    #[error("line {line}: bad size line: {message}")]
    BadHeader { line: usize, message: String },

    #[error("line {line}: exceeds {limit} characters")]
    LineTooLong { line: usize, limit: usize },

    /// Non-blank characters after the size line integers.
    #[error("line {line}: unexpected characters after the size line")]
    TrailingContent { line: usize },

    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: LexError,
    },

    #[error("short read: expected {expected} data entries, found {found}")]
    ShortRead { expected: usize, found: usize },

    #[error("line {line}: expected {expected} value(s), found {found}")]
    TokenCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl MtxError {
    /// The stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MtxError::Allocation { .. } => ErrorCode::AllocationFailure,
            MtxError::Open { .. } => ErrorCode::OpenFailure,
            MtxError::Io(_) => ErrorCode::Io,
            MtxError::UnsupportedObject(_) => ErrorCode::BadObject,
            MtxError::PatternArray => ErrorCode::BadValueKind,
            MtxError::InconsistentHeader(_) => ErrorCode::InconsistentHeader,
            MtxError::EofBeforeHeader => ErrorCode::EofBeforeHeader,
            MtxError::UnrecognizedField { .. } | MtxError::BadHeader { .. } => {
                ErrorCode::BadHeader
            }
            MtxError::LineTooLong { .. } | MtxError::TrailingContent { .. } => {
                ErrorCode::LineTooLong
            }
            MtxError::Malformed { source, .. } => ErrorCode::from(source),
            MtxError::ShortRead { .. } => ErrorCode::ShortRead,
            MtxError::TokenCountMismatch { .. } => ErrorCode::TokenCountMismatch,
        }
    }

    /// 1-based line number where the error was detected, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            MtxError::UnrecognizedField { .. } => Some(1),
            MtxError::BadHeader { line, .. }
            | MtxError::LineTooLong { line, .. }
            | MtxError::TrailingContent { line }
            | MtxError::Malformed { line, .. }
            | MtxError::TokenCountMismatch { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn allocation(requested: usize, reason: impl Into<String>) -> Self {
        MtxError::Allocation {
            requested,
            reason: reason.into(),
        }
    }

    pub fn malformed(line: usize, source: LexError) -> Self {
        MtxError::Malformed { line, source }
    }
}

/// Result type for MatrixMarket operations.
pub type MtxResult<T> = Result<T, MtxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values_are_stable() {
        assert_eq!(ErrorCode::Success.as_i32(), 0);
        assert_eq!(ErrorCode::AllocationFailure.as_i32(), -1);
        assert_eq!(ErrorCode::BadLayout.as_i32(), -4);
        assert_eq!(ErrorCode::EofBeforeHeader.as_i32(), -11);
        assert_eq!(ErrorCode::LineTooLong.as_i32(), -13);
        assert_eq!(ErrorCode::TokenCountMismatch.as_i32(), -25);
    }

    #[test]
    fn test_from_code_round_trips_table() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_code(code.as_i32()), Some(code));
        }
        assert_eq!(ErrorCode::from_code(-8), None);
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for code in ErrorCode::ALL {
            assert!(seen.insert(code.as_str()), "duplicate: {}", code.as_str());
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(ErrorCode::describe(0), "success");
        assert_eq!(ErrorCode::describe(-13), "lines exceeding 1024 characters");
        assert_eq!(ErrorCode::describe(-99), "unknown");
    }

    #[test]
    fn test_lex_error_codes() {
        let err = MtxError::malformed(7, LexError::NotANumber { column: 1 });
        assert_eq!(err.code(), ErrorCode::NotANumber);
        assert_eq!(err.line(), Some(7));

        let err = MtxError::malformed(
            3,
            LexError::InvalidToken {
                column: 1,
                token: "3.5".to_string(),
                expected: "integer",
            },
        );
        assert_eq!(err.code(), ErrorCode::InvalidToken);
    }

    #[test]
    fn test_header_error_codes() {
        let err = MtxError::UnrecognizedField {
            field: HeaderField::Layout,
            column: 23,
            partial: PartialBanner::default(),
        };
        assert_eq!(err.code(), ErrorCode::BadHeader);
        assert_eq!(err.line(), Some(1));
        assert!(err.to_string().contains("format"));

        assert_eq!(
            MtxError::UnsupportedObject(Object::Vector).code(),
            ErrorCode::BadObject
        );
        assert_eq!(
            MtxError::TrailingContent { line: 4 }.code(),
            ErrorCode::LineTooLong
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: MtxError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert_eq!(err.code(), ErrorCode::Io);
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_short_read_display() {
        let err = MtxError::ShortRead {
            expected: 5,
            found: 4,
        };
        assert_eq!(err.code(), ErrorCode::ShortRead);
        assert!(err.to_string().contains("expected 5"));
    }
}
