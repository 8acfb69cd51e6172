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

//! Errors raised by the numeric token converters.

use thiserror::Error;

/// A numeric token failed lexical or conversion checks.
///
/// Columns are 1-based byte offsets into the line being scanned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// The token does not start like a number at all.
    #[error("column {column}: expected a number")]
    NotANumber { column: usize },

    /// The token starts like a number but is followed by characters that do
    /// not belong to the expected form, e.g. `3.14` where an index is due.
    #[error("column {column}: '{token}' is not a valid {expected}")]
    InvalidToken {
        column: usize,
        token: String,
        expected: &'static str,
    },

    /// The token passed the lexical checks but could not be converted.
    #[error("column {column}: cannot convert '{token}': {reason}")]
    Conversion {
        column: usize,
        token: String,
        reason: String,
    },
}

impl LexError {
    /// Column where the offending token starts.
    #[inline]
    pub fn column(&self) -> usize {
        match self {
            LexError::NotANumber { column }
            | LexError::InvalidToken { column, .. }
            | LexError::Conversion { column, .. } => *column,
        }
    }
}

/// Result type for the token converters.
pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_accessor() {
        assert_eq!(LexError::NotANumber { column: 4 }.column(), 4);
        let err = LexError::Conversion {
            column: 9,
            token: "1e999".to_string(),
            reason: "out of range".to_string(),
        };
        assert_eq!(err.column(), 9);
    }

    #[test]
    fn test_display() {
        let err = LexError::InvalidToken {
            column: 3,
            token: "3.14".to_string(),
            expected: "integer",
        };
        let msg = err.to_string();
        assert!(msg.contains("column 3"));
        assert!(msg.contains("3.14"));
        assert!(msg.contains("integer"));
    }
}
