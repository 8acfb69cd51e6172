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

//! Comment lines captured between the banner and the size line.
//!
//! Lines are kept in file order with the leading `%` removed and the line
//! terminator stripped. Two conventions are recognised on top of plain text:
//!
//! ```text
//! %%Harwell-Boeing collection      <- collection line
//! %HB FILE_NAME   abcd.mtx          <- structured: tag, key, value
//! %HB DATA_LINES  9
//! % free text
//! ```

use std::fmt;

/// Captured comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Comments {
    lines: Vec<String>,
}

/// One `%<TAG> <KEY> <value>` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredComment<'a> {
    pub tag: &'a str,
    pub key: &'a str,
    /// Remainder of the line with surrounding blanks trimmed; may be empty.
    pub value: &'a str,
}

impl fmt::Display for StructuredComment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.tag, self.key, self.value)
    }
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

fn is_tag(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_tag_char)
}

fn split_word(s: &str) -> (&str, &str) {
    match s.find([' ', '\t']) {
        Some(i) => (&s[..i], s[i..].trim_start_matches([' ', '\t'])),
        None => (s, ""),
    }
}

impl StructuredComment<'_> {
    /// Parse the text of one comment line (leading `%` already removed).
    pub fn parse(text: &str) -> Option<StructuredComment<'_>> {
        let (tag, rest) = split_word(text);
        if !is_tag(tag) {
            return None;
        }
        let (key, value) = split_word(rest);
        if !is_tag(key) {
            return None;
        }
        Some(StructuredComment {
            tag,
            key,
            value: value.trim_end(),
        })
    }
}

impl Comments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one comment line, given without its leading `%`.
    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Name of the collection announced by a leading `%%<name>` line.
    ///
    /// ```
    /// use mtx_core::Comments;
    ///
    /// let mut comments = Comments::new();
    /// comments.push("%Harwell-Boeing collection");
    /// comments.push("");
    /// assert_eq!(comments.collection(), Some("Harwell-Boeing collection"));
    /// ```
    pub fn collection(&self) -> Option<&str> {
        let first = self.lines.first()?;
        let name = first.strip_prefix('%')?.trim();
        (!name.is_empty()).then_some(name)
    }

    /// All structured `%<TAG> <KEY> <value>` comments, in file order.
    pub fn structured(&self) -> impl Iterator<Item = StructuredComment<'_>> {
        self.lines
            .iter()
            .filter_map(|line| StructuredComment::parse(line))
    }

    /// Value of the first structured comment with the given tag and key.
    pub fn get(&self, tag: &str, key: &str) -> Option<&str> {
        self.structured()
            .find(|c| c.tag == tag && c.key == key)
            .map(|c| c.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harwell_boeing() -> Comments {
        let mut comments = Comments::new();
        for line in [
            "%Harwell-Boeing collection",
            "",
            "HB FILE_NAME   abcd.mtx",
            "HB KEY         MMEXMPL1",
            "HB QUALIFIERS  real general",
            "HB DESCRIPTION Unsymmetric matrix from example  ",
            "HB PRECISION",
            "",
            " some more comments",
        ] {
            comments.push(line);
        }
        comments
    }

    #[test]
    fn test_collection() {
        assert_eq!(
            harwell_boeing().collection(),
            Some("Harwell-Boeing collection")
        );
    }

    #[test]
    fn test_collection_absent() {
        let mut comments = Comments::new();
        comments.push(" plain comment");
        comments.push("%late collection line");
        assert_eq!(comments.collection(), None);
        assert_eq!(Comments::new().collection(), None);
    }

    #[test]
    fn test_structured() {
        let comments = harwell_boeing();
        let records: Vec<_> = comments.structured().collect();
        assert_eq!(records.len(), 5);
        assert_eq!(
            records[0],
            StructuredComment {
                tag: "HB",
                key: "FILE_NAME",
                value: "abcd.mtx",
            }
        );
        assert_eq!(records[2].value, "real general");
        assert_eq!(records[3].value, "Unsymmetric matrix from example");
        assert_eq!(records[4].value, "");
    }

    #[test]
    fn test_get() {
        let comments = harwell_boeing();
        assert_eq!(comments.get("HB", "KEY"), Some("MMEXMPL1"));
        assert_eq!(comments.get("HB", "DATE"), None);
    }

    #[test]
    fn test_parse_rejects_free_text() {
        assert_eq!(StructuredComment::parse(" some text"), None);
        assert_eq!(StructuredComment::parse("Hello World"), None);
        assert_eq!(StructuredComment::parse("HB"), None);
        assert_eq!(StructuredComment::parse(""), None);
    }

    #[test]
    fn test_len() {
        let comments = harwell_boeing();
        assert_eq!(comments.len(), 9);
        assert!(!comments.is_empty());
        assert_eq!(comments.lines()[1], "");
    }
}
