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

//! Comment and blank line skipping between the banner and the size line.

use crate::reader::LineReader;
use mtx_core::lex::{is_space, is_blank, is_eol};
use mtx_core::{Comments, MtxResult};
use std::io::Read;
use tracing::trace;

/// `true` for lines the preamble skips: comments and whitespace-only lines.
pub(crate) fn is_preamble_line(line: &[u8]) -> bool {
    match line.first() {
        Some(b'%') => true,
        _ => line.iter().all(|&b| is_space(b)),
    }
}

/// Comment text without the leading `%` and trailing whitespace.
fn comment_text(line: &[u8]) -> String {
    let body = line.strip_prefix(b"%").unwrap_or(line);
    let end = body
        .iter()
        .rposition(|&b| !(is_blank(b) || is_eol(b)))
        .map_or(0, |i| i + 1);
    String::from_utf8_lossy(&body[..end]).into_owned()
}

/// Advance past comment and blank lines.
///
/// Returns the number of the first other line, which is left as the reader's
/// current line, or `None` if the input ends first. With `capture` set, every
/// `%` line is appended to it.
pub(crate) fn skip_preamble<R: Read>(
    lines: &mut LineReader<R>,
    mut capture: Option<&mut Comments>,
) -> MtxResult<Option<usize>> {
    while let Some(number) = lines.advance()? {
        let line = lines.line();
        if !is_preamble_line(line) {
            return Ok(Some(number));
        }
        trace!(line = number, "skipping preamble line");
        if let (Some(comments), Some(b'%')) = (capture.as_deref_mut(), line.first()) {
            comments.push(comment_text(line));
        }
    }
    Ok(None)
}
