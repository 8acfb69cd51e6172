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

//! Decoded MatrixMarket header.
//!
//! The banner line `%%MatrixMarket <object> <layout> <value kind> <symmetry>`
//! decodes into the four qualifier enums below; the size line that follows
//! the comment block supplies the dimensions. Together they form a
//! [`HeaderDescriptor`].

use crate::error::{MtxError, MtxResult};
use std::fmt;

/// The `<object>` qualifier.
///
/// Only [`Object::Matrix`] can be read. The other objects are recognised so
/// that they are reported as an unexpected object rather than a bad header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Object {
    Matrix,
    Vector,
    DirectedGraph,
}

/// The `<format>` qualifier: dense array or sparse coordinate storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Layout {
    /// Dense, column-major, every element listed.
    Array,
    /// Sparse `(row, column, value)` triples.
    Coordinate,
}

/// The `<field>` qualifier: what each stored value looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ValueKind {
    Real,
    Integer,
    Complex,
    /// Structure only, no value tokens.
    Pattern,
}

impl ValueKind {
    /// Number of value tokens every data line must carry.
    #[inline]
    pub const fn tokens_per_entry(self) -> usize {
        match self {
            ValueKind::Real | ValueKind::Integer => 1,
            ValueKind::Complex => 2,
            ValueKind::Pattern => 0,
        }
    }
}

/// The `<symmetry>` qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Symmetry {
    General,
    /// `A(i,j) = A(j,i)`, on or below the diagonal stored.
    Symmetric,
    /// `A(i,j) = -A(j,i)`, strictly below the diagonal stored.
    SkewSymmetric,
    /// `A(i,j) = conj(A(j,i))`, on or below the diagonal stored.
    Hermitian,
}

impl Symmetry {
    /// Returns `true` for every symmetry that implies half storage.
    #[inline]
    pub const fn is_half_stored(self) -> bool {
        !matches!(self, Symmetry::General)
    }
}

macro_rules! keyword_display {
    ($ty:ty { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Lowercase keyword as written in the banner line.
            pub const fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }
    };
}

keyword_display!(Object {
    Matrix => "matrix",
    Vector => "vector",
    DirectedGraph => "directed-graph",
});
keyword_display!(Layout {
    Array => "array",
    Coordinate => "coordinate",
});
keyword_display!(ValueKind {
    Real => "real",
    Integer => "integer",
    Complex => "complex",
    Pattern => "pattern",
});
keyword_display!(Symmetry {
    General => "general",
    Symmetric => "symmetric",
    SkewSymmetric => "skew-symmetric",
    Hermitian => "hermitian",
});

/// The fully decoded header: banner qualifiers plus the size line.
///
/// # Examples
///
/// ```
/// use mtx_core::{HeaderDescriptor, Layout, Object, Symmetry, ValueKind};
///
/// let header = HeaderDescriptor {
///     object: Object::Matrix,
///     layout: Layout::Coordinate,
///     value_kind: ValueKind::Real,
///     symmetry: Symmetry::General,
///     rows: 2,
///     cols: 2,
///     nonzeros: 2,
/// };
/// assert!(header.validate().is_ok());
/// assert_eq!(header.stored_entries(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeaderDescriptor {
    pub object: Object,
    pub layout: Layout,
    pub value_kind: ValueKind,
    pub symmetry: Symmetry,
    pub rows: usize,
    pub cols: usize,
    /// Declared entry count for coordinate data, `rows * cols` for arrays.
    pub nonzeros: usize,
}

impl HeaderDescriptor {
    /// Number of data entries the body is expected to hold.
    ///
    /// Equal to `nonzeros` except for half-stored arrays, which only list the
    /// lower triangle (without the diagonal when skew-symmetric).
    pub fn stored_entries(&self) -> usize {
        match (self.layout, self.symmetry) {
            (Layout::Coordinate, _) | (Layout::Array, Symmetry::General) => self.nonzeros,
            (Layout::Array, Symmetry::SkewSymmetric) => {
                let n = self.rows;
                n.saturating_mul(n.saturating_sub(1)) / 2
            }
            (Layout::Array, Symmetry::Symmetric | Symmetry::Hermitian) => {
                let n = self.rows;
                n.saturating_mul(n.saturating_add(1)) / 2
            }
        }
    }

    /// Number of scalars the staging buffer holds for the values.
    pub fn stored_scalars(&self) -> usize {
        self.stored_entries()
            .saturating_mul(self.value_kind.tokens_per_entry())
    }

    /// Check the cross-field qualifier rules of the exchange format.
    ///
    /// - `pattern` is only valid for `coordinate` data that is `general` or
    ///   `symmetric`
    /// - `hermitian` requires `complex` values
    /// - any symmetry other than `general` requires a square matrix
    ///
    /// # Errors
    ///
    /// [`MtxError::PatternArray`] for pattern arrays,
    /// [`MtxError::InconsistentHeader`] for the other violations.
    pub fn validate(&self) -> MtxResult<()> {
        if self.value_kind == ValueKind::Pattern {
            if self.layout == Layout::Array {
                return Err(MtxError::PatternArray);
            }
            if !matches!(self.symmetry, Symmetry::General | Symmetry::Symmetric) {
                return Err(MtxError::InconsistentHeader(format!(
                    "pattern matrices cannot be {}",
                    self.symmetry
                )));
            }
        }
        if self.symmetry == Symmetry::Hermitian && self.value_kind != ValueKind::Complex {
            return Err(MtxError::InconsistentHeader(format!(
                "hermitian matrices must be complex, not {}",
                self.value_kind
            )));
        }
        if self.symmetry.is_half_stored() && self.rows != self.cols {
            return Err(MtxError::InconsistentHeader(format!(
                "{} matrix must be square, got {}x{}",
                self.symmetry, self.rows, self.cols
            )));
        }
        Ok(())
    }
}

impl fmt::Display for HeaderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}x{} ({} entries)",
            self.object,
            self.layout,
            self.value_kind,
            self.symmetry,
            self.rows,
            self.cols,
            self.nonzeros
        )
    }
}
