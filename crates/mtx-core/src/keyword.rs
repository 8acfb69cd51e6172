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

//! Banner line keyword matching.
//!
//! The banner `%%MatrixMarket matrix coordinate real general` is five fields,
//! each matched against a fixed table of candidates. Every table implements
//! [`Keyword`], and one generic routine ([`match_keyword`]) walks any of them:
//!
//! - candidates are tried in table order
//! - comparison is ASCII case-insensitive over the whole candidate
//! - the input must continue with whitespace (or end) right after the
//!   candidate, so `symmetric` does not match `symmetrical`
//! - on a match the cursor moves past the keyword and the blanks after it
//!
//! [`decode_banner`] runs the five tables in order and stops at the first
//! field that fails.
//!
//! # Examples
//!
//! ```
//! use mtx_core::keyword::decode_banner;
//! use mtx_core::{Layout, Symmetry, ValueKind};
//!
//! let banner = decode_banner(b"%%MatrixMarket MATRIX Coordinate real SKEW-symmetric\n").unwrap();
//! assert_eq!(banner.layout, Layout::Coordinate);
//! assert_eq!(banner.value_kind, ValueKind::Real);
//! assert_eq!(banner.symmetry, Symmetry::SkewSymmetric);
//! ```

use crate::header::{Layout, Object, Symmetry, ValueKind};
use crate::lex::Cursor;
use std::fmt;

/// The five banner fields, in the order they must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    Banner,
    Object,
    Layout,
    ValueKind,
    Symmetry,
}

impl HeaderField {
    /// All fields in banner order.
    pub const ALL: [HeaderField; 5] = [
        HeaderField::Banner,
        HeaderField::Object,
        HeaderField::Layout,
        HeaderField::ValueKind,
        HeaderField::Symmetry,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HeaderField::Banner => "banner",
            HeaderField::Object => "object",
            HeaderField::Layout => "format",
            HeaderField::ValueKind => "data type",
            HeaderField::Symmetry => "symmetry",
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A header field with a fixed, ordered table of lowercase candidates.
pub trait Keyword: Copy + Sized + 'static {
    /// Which banner field this table decodes.
    const FIELD: HeaderField;
    /// Candidates in match order.
    const TABLE: &'static [(&'static str, Self)];
}

/// The `%%MatrixMarket` banner itself. Its table has a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner;

impl Keyword for Banner {
    const FIELD: HeaderField = HeaderField::Banner;
    const TABLE: &'static [(&'static str, Self)] = &[("%%matrixmarket", Banner)];
}

impl Keyword for Object {
    const FIELD: HeaderField = HeaderField::Object;
    const TABLE: &'static [(&'static str, Self)] = &[
        ("matrix", Object::Matrix),
        ("vector", Object::Vector),
        ("directed-graph", Object::DirectedGraph),
    ];
}

impl Keyword for Layout {
    const FIELD: HeaderField = HeaderField::Layout;
    const TABLE: &'static [(&'static str, Self)] =
        &[("array", Layout::Array), ("coordinate", Layout::Coordinate)];
}

impl Keyword for ValueKind {
    const FIELD: HeaderField = HeaderField::ValueKind;
    const TABLE: &'static [(&'static str, Self)] = &[
        ("real", ValueKind::Real),
        ("integer", ValueKind::Integer),
        ("complex", ValueKind::Complex),
        ("pattern", ValueKind::Pattern),
    ];
}

impl Keyword for Symmetry {
    const FIELD: HeaderField = HeaderField::Symmetry;
    const TABLE: &'static [(&'static str, Self)] = &[
        ("general", Symmetry::General),
        ("symmetric", Symmetry::Symmetric),
        ("skew-symmetric", Symmetry::SkewSymmetric),
        ("hermitian", Symmetry::Hermitian),
    ];
}

/// Try every candidate of `K` at the cursor.
///
/// Returns `None` and leaves the cursor untouched if nothing matches.
pub fn match_keyword<K: Keyword>(cursor: &mut Cursor<'_>) -> Option<K> {
    let input = cursor.rest();
    for &(text, value) in K::TABLE {
        let len = text.len();
        if input.len() < len || !input[..len].eq_ignore_ascii_case(text.as_bytes()) {
            continue;
        }
        let mut lookahead = cursor.clone();
        lookahead.advance(len);
        if !lookahead.at_boundary() {
            continue;
        }
        *cursor = lookahead;
        cursor.skip_blanks();
        return Some(value);
    }
    None
}

/// Fields decoded so far. A field stays `None` when it, or an earlier field,
/// was not recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialBanner {
    pub object: Option<Object>,
    pub layout: Option<Layout>,
    pub value_kind: Option<ValueKind>,
    pub symmetry: Option<Symmetry>,
}

/// The banner line did not decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedField {
    /// The first field that matched no candidate.
    pub field: HeaderField,
    /// 1-based column where that field starts.
    pub column: usize,
    /// Fields decoded before the failure.
    pub partial: PartialBanner,
}

/// A fully decoded banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerFields {
    pub object: Object,
    pub layout: Layout,
    pub value_kind: ValueKind,
    pub symmetry: Symmetry,
}

fn expect<K: Keyword>(
    cursor: &mut Cursor<'_>,
    partial: &PartialBanner,
) -> Result<K, UnrecognizedField> {
    match_keyword::<K>(cursor).ok_or(UnrecognizedField {
        field: K::FIELD,
        column: cursor.column(),
        partial: *partial,
    })
}

/// Decode the five banner fields of the first line.
///
/// Anything after the symmetry keyword is left unread.
///
/// # Errors
///
/// [`UnrecognizedField`] names the first field that matched no candidate.
pub fn decode_banner(line: &[u8]) -> Result<BannerFields, UnrecognizedField> {
    let mut cursor = Cursor::new(line);
    let mut partial = PartialBanner::default();

    expect::<Banner>(&mut cursor, &partial)?;
    let object = expect::<Object>(&mut cursor, &partial)?;
    partial.object = Some(object);
    let layout = expect::<Layout>(&mut cursor, &partial)?;
    partial.layout = Some(layout);
    let value_kind = expect::<ValueKind>(&mut cursor, &partial)?;
    partial.value_kind = Some(value_kind);
    let symmetry = expect::<Symmetry>(&mut cursor, &partial)?;

    Ok(BannerFields {
        object,
        layout,
        value_kind,
        symmetry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lowercase() {
        let banner = decode_banner(b"%%matrixmarket matrix coordinate real general\n").unwrap();
        assert_eq!(
            banner,
            BannerFields {
                object: Object::Matrix,
                layout: Layout::Coordinate,
                value_kind: ValueKind::Real,
                symmetry: Symmetry::General,
            }
        );
    }

    #[test]
    fn test_decode_mixed_case_and_tabs() {
        let banner = decode_banner(b"%%MatrixMarket\tMatrix  ARRAY\tComplex   Hermitian").unwrap();
        assert_eq!(banner.layout, Layout::Array);
        assert_eq!(banner.value_kind, ValueKind::Complex);
        assert_eq!(banner.symmetry, Symmetry::Hermitian);
    }

    #[test]
    fn test_decode_ignores_trailing_text() {
        let banner = decode_banner(b"%%MatrixMarket matrix array integer general extra\n").unwrap();
        assert_eq!(banner.value_kind, ValueKind::Integer);
    }

    #[test]
    fn test_prefix_needs_boundary() {
        let err = decode_banner(b"%%MatrixMarket matrix coordinate real symmetrical\n").unwrap_err();
        assert_eq!(err.field, HeaderField::Symmetry);
        assert_eq!(err.partial.value_kind, Some(ValueKind::Real));
    }

    #[test]
    fn test_banner_glued_to_object() {
        let err = decode_banner(b"%%MatrixMarketmatrix coordinate real general").unwrap_err();
        assert_eq!(err.field, HeaderField::Banner);
        assert_eq!(err.column, 1);
        assert_eq!(err.partial, PartialBanner::default());
    }

    #[test]
    fn test_missing_banner() {
        let err = decode_banner(b"matrix coordinate real general").unwrap_err();
        assert_eq!(err.field, HeaderField::Banner);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(decode_banner(b"\n").unwrap_err().field, HeaderField::Banner);
        assert_eq!(decode_banner(b"").unwrap_err().field, HeaderField::Banner);
    }

    #[test]
    fn test_unknown_layout_stops_early() {
        let err = decode_banner(b"%%MatrixMarket matrix elemental real general").unwrap_err();
        assert_eq!(err.field, HeaderField::Layout);
        assert_eq!(err.column, 23);
        assert_eq!(err.partial.object, Some(Object::Matrix));
        assert_eq!(err.partial.layout, None);
        assert_eq!(err.partial.symmetry, None);
    }

    #[test]
    fn test_truncated_banner() {
        let err = decode_banner(b"%%MatrixMarket matrix coordinate\n").unwrap_err();
        assert_eq!(err.field, HeaderField::ValueKind);
    }

    #[test]
    fn test_other_objects_decode() {
        let banner = decode_banner(b"%%MatrixMarket vector array real general").unwrap();
        assert_eq!(banner.object, Object::Vector);
    }

    #[test]
    fn test_match_keyword_leaves_cursor_on_failure() {
        let mut cursor = Cursor::new(b"bogus general");
        assert_eq!(match_keyword::<Symmetry>(&mut cursor), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_match_keyword_skips_trailing_blanks() {
        let mut cursor = Cursor::new(b"real \t pattern");
        assert_eq!(match_keyword::<ValueKind>(&mut cursor), Some(ValueKind::Real));
        assert_eq!(cursor.rest(), b"pattern");
    }

    #[test]
    fn test_field_order() {
        assert_eq!(HeaderField::ALL[0], HeaderField::Banner);
        assert_eq!(HeaderField::ALL[4], HeaderField::Symmetry);
        assert_eq!(HeaderField::Layout.to_string(), "format");
    }
}
