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

//! Header parsing: banner line, preamble, size line.

use crate::preamble::skip_preamble;
use crate::reader::LineReader;
use mtx_core::keyword::decode_banner;
use mtx_core::lex::{parse_integer, Cursor};
use mtx_core::{
    Comments, HeaderDescriptor, Layout, MtxError, MtxResult, Object, ValueKind,
};
use std::io::Read;
use tracing::{debug, trace};

/// Read the header of a MatrixMarket stream.
///
/// On success the reader is positioned right after the size line.
///
/// # Errors
///
/// - [`MtxError::EofBeforeHeader`] on empty input
/// - [`MtxError::UnrecognizedField`] if the banner does not decode
/// - [`MtxError::UnsupportedObject`] for objects other than `matrix`
/// - [`MtxError::BadHeader`] if the size line is missing or malformed
/// - [`MtxError::TrailingContent`] if anything follows the size integers
/// - [`MtxError::PatternArray`] for pattern data in array format
/// - [`MtxError::InconsistentHeader`] when `strict` and the qualifiers clash,
///   or for a non-square packed array in either mode
pub(crate) fn read_header<R: Read>(
    lines: &mut LineReader<R>,
    comments: Option<&mut Comments>,
    strict: bool,
) -> MtxResult<HeaderDescriptor> {
    if lines.advance()?.is_none() {
        return Err(MtxError::EofBeforeHeader);
    }

    let banner = decode_banner(lines.line()).map_err(|e| MtxError::UnrecognizedField {
        field: e.field,
        column: e.column,
        partial: e.partial,
    })?;
    if banner.object != Object::Matrix {
        return Err(MtxError::UnsupportedObject(banner.object));
    }
    trace!(
        layout = %banner.layout,
        value_kind = %banner.value_kind,
        symmetry = %banner.symmetry,
        "decoded banner"
    );

    let Some(line) = skip_preamble(lines, comments)? else {
        return Err(MtxError::BadHeader {
            line: lines.line_number() + 1,
            message: "missing size line".to_string(),
        });
    };

    let mut cursor = Cursor::new(lines.line());
    let size_error = |e: mtx_core::lex::LexError| MtxError::BadHeader {
        line,
        message: e.to_string(),
    };
    let rows = parse_integer(&mut cursor).map_err(size_error)?;
    let cols = parse_integer(&mut cursor).map_err(size_error)?;
    let nonzeros = match banner.layout {
        Layout::Coordinate => parse_integer(&mut cursor).map_err(size_error)?,
        Layout::Array => rows.checked_mul(cols).ok_or_else(|| {
            MtxError::allocation(usize::MAX, format!("{}x{} array overflows", rows, cols))
        })?,
    };
    cursor.skip_blanks();
    if !cursor.at_eol() {
        return Err(MtxError::TrailingContent { line });
    }

    let header = HeaderDescriptor {
        object: banner.object,
        layout: banner.layout,
        value_kind: banner.value_kind,
        symmetry: banner.symmetry,
        rows,
        cols,
        nonzeros,
    };

    if strict {
        header.validate()?;
    } else if header.layout == Layout::Array {
        // Array bodies must stay addressable: values exist and the packed
        // triangle fills the declared shape.
        if header.value_kind == ValueKind::Pattern {
            return Err(MtxError::PatternArray);
        }
        if header.symmetry.is_half_stored() && header.rows != header.cols {
            return Err(MtxError::InconsistentHeader(format!(
                "packed {} array must be square, got {}x{}",
                header.symmetry, header.rows, header.cols
            )));
        }
    }

    debug!(%header, "read MatrixMarket header");
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtx_core::{ErrorCode, Symmetry};
    use std::io::Cursor as IoCursor;

    fn header(input: &str) -> MtxResult<HeaderDescriptor> {
        let mut lines = LineReader::new(IoCursor::new(input.as_bytes().to_vec()), 1024);
        read_header(&mut lines, None, true)
    }

    fn code(input: &str) -> ErrorCode {
        header(input).unwrap_err().code()
    }

    #[test]
    fn test_coordinate_header() {
        let h = header("%%MatrixMarket matrix coordinate real general\n% c\n3 4 5\n").unwrap();
        assert_eq!(h.layout, Layout::Coordinate);
        assert_eq!((h.rows, h.cols, h.nonzeros), (3, 4, 5));
    }

    #[test]
    fn test_array_header_computes_nonzeros() {
        let h = header("%%MatrixMarket matrix array complex general\n2 3\n").unwrap();
        assert_eq!(h.nonzeros, 6);
        assert_eq!(h.value_kind, ValueKind::Complex);
    }

    #[test]
    fn test_zero_sized() {
        let h = header("%%MatrixMarket matrix coordinate real general\n0 0 0\n").unwrap();
        assert_eq!((h.rows, h.cols, h.nonzeros), (0, 0, 0));
    }

    #[test]
    fn test_eof_before_header() {
        assert_eq!(code(""), ErrorCode::EofBeforeHeader);
    }

    #[test]
    fn test_empty_first_line_is_bad_header() {
        assert_eq!(code("\n3 3 3\n"), ErrorCode::BadHeader);
    }

    #[test]
    fn test_unknown_keyword() {
        assert_eq!(
            code("%%MatrixMarket matrix coordinate quaternion general\n1 1 1\n"),
            ErrorCode::BadHeader
        );
    }

    #[test]
    fn test_unsupported_object() {
        assert_eq!(
            code("%%MatrixMarket vector coordinate real general\n3 3\n"),
            ErrorCode::BadObject
        );
    }

    #[test]
    fn test_missing_size_line() {
        let err = header("%%MatrixMarket matrix coordinate real general\n% c\n").unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadHeader);
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_size_line_short() {
        assert_eq!(
            code("%%MatrixMarket matrix coordinate real general\n3 3\n"),
            ErrorCode::BadHeader
        );
    }

    #[test]
    fn test_size_line_float() {
        assert_eq!(
            code("%%MatrixMarket matrix array real general\n3.0 3\n"),
            ErrorCode::BadHeader
        );
    }

    #[test]
    fn test_size_line_trailing_content() {
        assert_eq!(
            code("%%MatrixMarket matrix array real general\n3 3 9\n"),
            ErrorCode::LineTooLong
        );
    }

    #[test]
    fn test_size_line_trailing_blanks() {
        assert!(header("%%MatrixMarket matrix array real general\n3 3 \t \r\n").is_ok());
    }

    #[test]
    fn test_pattern_array() {
        assert_eq!(
            code("%%MatrixMarket matrix array pattern general\n3 3\n"),
            ErrorCode::BadValueKind
        );
    }

    #[test]
    fn test_pattern_array_rejected_when_lenient() {
        let input = "%%MatrixMarket matrix array pattern general\n3 3\n";
        let mut lines = LineReader::new(IoCursor::new(input.as_bytes().to_vec()), 1024);
        let err = read_header(&mut lines, None, false).unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadValueKind);
    }

    #[test]
    fn test_strict_rejects_real_hermitian() {
        let input = "%%MatrixMarket matrix coordinate real hermitian\n3 3 1\n";
        assert_eq!(code(input), ErrorCode::InconsistentHeader);

        let mut lines = LineReader::new(IoCursor::new(input.as_bytes().to_vec()), 1024);
        let h = read_header(&mut lines, None, false).unwrap();
        assert_eq!(h.symmetry, Symmetry::Hermitian);
    }

    #[test]
    fn test_non_square_packed_array_rejected_when_lenient() {
        let input = "%%MatrixMarket matrix array real symmetric\n2 3\n1\n2\n3\n";
        let mut lines = LineReader::new(IoCursor::new(input.as_bytes().to_vec()), 1024);
        let err = read_header(&mut lines, None, false).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InconsistentHeader);
        assert!(err.to_string().contains("2x3"));
    }

    #[test]
    fn test_non_square_general_array_accepted_when_lenient() {
        let input = "%%MatrixMarket matrix array real general\n2 3\n";
        let mut lines = LineReader::new(IoCursor::new(input.as_bytes().to_vec()), 1024);
        let h = read_header(&mut lines, None, false).unwrap();
        assert_eq!(h.stored_entries(), 6);
    }

    #[test]
    fn test_array_dimension_overflow() {
        let input = format!(
            "%%MatrixMarket matrix array real general\n{} {}\n",
            usize::MAX,
            2
        );
        assert_eq!(code(&input), ErrorCode::AllocationFailure);
    }

    #[test]
    fn test_long_banner_line() {
        let input = format!(
            "%%MatrixMarket matrix coordinate real general {}\n1 1 0\n",
            "x".repeat(1000)
        );
        assert_eq!(code(&input), ErrorCode::LineTooLong);
    }

    #[test]
    fn test_captures_comments() {
        let input = "%%MatrixMarket matrix coordinate real general\n% first\n%second\n1 1 0\n";
        let mut lines = LineReader::new(IoCursor::new(input.as_bytes().to_vec()), 1024);
        let mut comments = Comments::new();
        read_header(&mut lines, Some(&mut comments), true).unwrap();
        assert_eq!(comments.lines(), &[" first", "second"]);
    }
}
