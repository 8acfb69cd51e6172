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

//! Values and entries as they appear on data lines.

use std::fmt;

/// The value tokens found on one data line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// No value tokens (pattern data).
    Pattern,
    /// One value token (real or integer data).
    Real(f64),
    /// Two value tokens: real and imaginary part.
    Complex(f64, f64),
}

impl Value {
    /// How many value tokens the line carried.
    #[inline]
    pub const fn token_count(&self) -> usize {
        match self {
            Value::Pattern => 0,
            Value::Real(_) => 1,
            Value::Complex(..) => 2,
        }
    }

    /// Append the scalars of this value to `out`.
    #[inline]
    pub fn extend_scalars(&self, out: &mut Vec<f64>) {
        match *self {
            Value::Pattern => {}
            Value::Real(x) => out.push(x),
            Value::Complex(re, im) => {
                out.push(re);
                out.push(im);
            }
        }
    }

    /// Returns the real value, if any.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns `(re, im)` for complex values.
    pub fn as_complex(&self) -> Option<(f64, f64)> {
        match self {
            Value::Complex(re, im) => Some((*re, *im)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Pattern => f.write_str("*"),
            Value::Real(x) => write!(f, "{}", x),
            Value::Complex(re, im) => write!(f, "{} {}", re, im),
        }
    }
}

/// One data entry with its 1-based position in the matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: Value,
}

impl Entry {
    #[inline]
    pub const fn new(row: usize, col: usize, value: Value) -> Self {
        Self { row, col, value }
    }

    /// `true` if the entry sits on the main diagonal.
    #[inline]
    pub const fn is_diagonal(&self) -> bool {
        self.row == self.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_count() {
        assert_eq!(Value::Pattern.token_count(), 0);
        assert_eq!(Value::Real(1.0).token_count(), 1);
        assert_eq!(Value::Complex(1.0, 2.0).token_count(), 2);
    }

    #[test]
    fn test_extend_scalars() {
        let mut out = Vec::new();
        Value::Real(1.5).extend_scalars(&mut out);
        Value::Complex(2.0, -3.0).extend_scalars(&mut out);
        Value::Pattern.extend_scalars(&mut out);
        assert_eq!(out, vec![1.5, 2.0, -3.0]);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Real(4.0).as_real(), Some(4.0));
        assert_eq!(Value::Real(4.0).as_complex(), None);
        assert_eq!(Value::Complex(1.0, 2.0).as_complex(), Some((1.0, 2.0)));
        assert_eq!(Value::Pattern.as_real(), None);
    }

    #[test]
    fn test_entry_diagonal() {
        assert!(Entry::new(2, 2, Value::Pattern).is_diagonal());
        assert!(!Entry::new(3, 2, Value::Real(1.0)).is_diagonal());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Real(5.0).to_string(), "5");
        assert_eq!(Value::Complex(1.5, -2.0).to_string(), "1.5 -2");
        assert_eq!(Value::Pattern.to_string(), "*");
    }
}
