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

//! Staging buffers: the reader's output before any format conversion.
//!
//! A coordinate body becomes three parallel sequences (row, column, values);
//! an array body becomes one column-major scalar sequence. Complex data
//! stores two scalars per entry (real, imaginary), pattern data none.
//! Buffers are sized once from the header and never grow while reading.

use crate::comments::Comments;
use crate::error::{MtxError, MtxResult};
use crate::header::{HeaderDescriptor, Layout, Symmetry, ValueKind};
use crate::limits::Limits;
use crate::value::{Entry, Value};

fn reserve<T>(len: usize) -> MtxResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|e| MtxError::allocation(len, e.to_string()))?;
    Ok(buf)
}

/// Sparse triples in file order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoordinateBuffer {
    /// 1-based row indices.
    pub rows: Vec<usize>,
    /// 1-based column indices.
    pub cols: Vec<usize>,
    /// 0, 1 or 2 scalars per entry depending on the value kind.
    pub values: Vec<f64>,
}

impl CoordinateBuffer {
    /// Reserve room for `entries` triples of the given kind.
    ///
    /// # Errors
    ///
    /// [`MtxError::Allocation`] if the memory cannot be reserved.
    pub fn with_capacity(entries: usize, value_kind: ValueKind) -> MtxResult<Self> {
        let scalars = entries
            .checked_mul(value_kind.tokens_per_entry())
            .ok_or_else(|| MtxError::allocation(entries, "value count overflows"))?;
        Ok(Self {
            rows: reserve(entries)?,
            cols: reserve(entries)?,
            values: reserve(scalars)?,
        })
    }

    #[inline]
    pub fn push(&mut self, entry: &Entry) {
        self.rows.push(entry.row);
        self.cols.push(entry.col);
        entry.value.extend_scalars(&mut self.values);
    }

    /// Number of triples stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Dense column-major scalars.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArrayBuffer {
    pub values: Vec<f64>,
}

impl ArrayBuffer {
    pub fn with_capacity(scalars: usize) -> MtxResult<Self> {
        Ok(Self {
            values: reserve(scalars)?,
        })
    }

    #[inline]
    pub fn push(&mut self, value: &Value) {
        value.extend_scalars(&mut self.values);
    }

    /// Number of scalars stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The populated body of one read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "layout", rename_all = "kebab-case"))]
pub enum StagingBuffer {
    Coordinate(CoordinateBuffer),
    Array(ArrayBuffer),
}

impl StagingBuffer {
    /// Reserve a buffer sized for the body `header` describes.
    ///
    /// # Errors
    ///
    /// [`MtxError::Allocation`] if the header declares more entries than
    /// `limits.max_entries`, or the memory cannot be reserved.
    pub fn allocate(header: &HeaderDescriptor, limits: &Limits) -> MtxResult<Self> {
        let entries = header.stored_entries();
        if entries > limits.max_entries {
            return Err(MtxError::allocation(
                entries,
                format!("exceeds limit of {} entries", limits.max_entries),
            ));
        }
        match header.layout {
            Layout::Coordinate => Ok(StagingBuffer::Coordinate(CoordinateBuffer::with_capacity(
                entries,
                header.value_kind,
            )?)),
            Layout::Array => {
                let scalars = entries
                    .checked_mul(header.value_kind.tokens_per_entry())
                    .ok_or_else(|| MtxError::allocation(entries, "value count overflows"))?;
                Ok(StagingBuffer::Array(ArrayBuffer::with_capacity(scalars)?))
            }
        }
    }

    /// Store one entry. Array entries contribute only their value; their
    /// position is implied by order.
    #[inline]
    pub fn push(&mut self, entry: &Entry) {
        match self {
            StagingBuffer::Coordinate(buf) => buf.push(entry),
            StagingBuffer::Array(buf) => buf.push(&entry.value),
        }
    }

    pub fn values(&self) -> &[f64] {
        match self {
            StagingBuffer::Coordinate(buf) => &buf.values,
            StagingBuffer::Array(buf) => &buf.values,
        }
    }

    pub fn as_coordinate(&self) -> Option<&CoordinateBuffer> {
        match self {
            StagingBuffer::Coordinate(buf) => Some(buf),
            StagingBuffer::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayBuffer> {
        match self {
            StagingBuffer::Array(buf) => Some(buf),
            StagingBuffer::Coordinate(_) => None,
        }
    }
}

/// Index base of the stored row and column indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IndexBase {
    Zero,
    One,
}

/// Which part of the matrix the body holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Storage {
    /// Every entry is listed.
    Full,
    /// On or below the diagonal.
    Lower,
    /// Strictly below the diagonal.
    StrictlyLower,
}

impl From<Symmetry> for Storage {
    fn from(symmetry: Symmetry) -> Self {
        match symmetry {
            Symmetry::General => Storage::Full,
            Symmetry::Symmetric | Symmetry::Hermitian => Storage::Lower,
            Symmetry::SkewSymmetric => Storage::StrictlyLower,
        }
    }
}

/// A fully read MatrixMarket file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixMarket {
    pub header: HeaderDescriptor,
    pub data: StagingBuffer,
    /// Empty unless comment capture was enabled.
    pub comments: Comments,
}

impl MatrixMarket {
    /// Indices are always 1-based as written in the file.
    pub const fn index_base(&self) -> IndexBase {
        IndexBase::One
    }

    pub fn storage(&self) -> Storage {
        Storage::from(self.header.symmetry)
    }
}
