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

//! Reader implementation.
//!
//! [`MatrixMarketReader`] reads the header when it is constructed. The body
//! is then streamed one [`Entry`] at a time through [`Entries`], or collected
//! into a [`StagingBuffer`] with [`MatrixMarketReader::read_data`]. The one-shot
//! helpers [`read`], [`parse`] and [`read_path`] do both in a single call.
//!
//! # Basic Usage
//!
//! ```rust
//! use mtx_stream::MatrixMarketReader;
//! use std::io::Cursor;
//!
//! let input = "%%MatrixMarket matrix coordinate real general\n\
//!              % a comment\n\
//!              2 2 2\n\
//!              1 1 5.0\n\
//!              2 2 3.0\n";
//!
//! let reader = MatrixMarketReader::new(Cursor::new(input)).unwrap();
//! assert_eq!(reader.header().nonzeros, 2);
//!
//! let mut sum = 0.0;
//! for entry in reader {
//!     sum += entry.unwrap().value.as_real().unwrap_or(0.0);
//! }
//! assert_eq!(sum, 8.0);
//! ```

use crate::body::BodyReader;
use crate::header::read_header;
use crate::reader::LineReader;
use mtx_core::{
    Comments, Entry, HeaderDescriptor, Limits, MatrixMarket, MtxError, MtxResult, StagingBuffer,
};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Configuration options for the reader.
///
/// # Examples
///
/// ```rust
/// use mtx_stream::ReaderConfig;
///
/// let config = ReaderConfig::default();
/// assert_eq!(config.limits.max_line_length, 1024);
/// assert_eq!(config.buffer_size, 64 * 1024);
/// assert!(!config.capture_comments);
/// assert!(config.strict_header);
/// ```
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Line length and entry count bounds.
    pub limits: Limits,

    /// Buffer size for reading input.
    ///
    /// Default: 64KB
    pub buffer_size: usize,

    /// Keep the `%` lines between the banner and the size line.
    ///
    /// Default: false
    pub capture_comments: bool,

    /// Reject headers whose qualifiers contradict each other, such as a real
    /// hermitian matrix or a non-square symmetric one.
    ///
    /// Pattern data in array format, and non-square packed (symmetric,
    /// skew-symmetric or hermitian) arrays, are rejected either way.
    ///
    /// Default: true
    pub strict_header: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            buffer_size: 64 * 1024,
            capture_comments: false,
            strict_header: true,
        }
    }
}

/// MatrixMarket reader positioned after the header.
///
/// Construction reads and validates the header. The body is then either
/// collected with [`read_data`](Self::read_data) or streamed with
/// [`entries`](Self::entries). Both consume the reader, so a staging buffer is
/// only ever built from the whole body.
///
/// # Examples
///
/// ## Streaming a Dense Array
///
/// ```rust
/// use mtx_stream::MatrixMarketReader;
/// use std::io::Cursor;
///
/// let input = "%%MatrixMarket matrix array real general\n2 2\n1\n2\n3\n4\n";
/// let reader = MatrixMarketReader::new(Cursor::new(input)).unwrap();
///
/// let positions: Vec<_> = reader
///     .entries()
///     .map(|entry| entry.map(|e| (e.row, e.col)))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(positions, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
/// ```
///
/// ## Capturing Comments
///
/// ```rust
/// use mtx_stream::{MatrixMarketReader, ReaderConfig};
/// use std::io::Cursor;
///
/// let input = "%%MatrixMarket matrix coordinate pattern general\n\
///              %%Harwell-Boeing collection\n\
///              %HB KEY MMEXMPL1\n\
///              3 3 0\n";
/// let config = ReaderConfig {
///     capture_comments: true,
///     ..Default::default()
/// };
/// let reader = MatrixMarketReader::with_config(Cursor::new(input), config).unwrap();
/// assert_eq!(reader.comments().collection(), Some("Harwell-Boeing collection"));
/// assert_eq!(reader.comments().get("HB", "KEY"), Some("MMEXMPL1"));
/// ```
pub struct MatrixMarketReader<R: Read> {
    lines: LineReader<R>,
    header: HeaderDescriptor,
    comments: Comments,
    config: ReaderConfig,
}

impl<R: Read> std::fmt::Debug for MatrixMarketReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixMarketReader")
            .field("header", &self.header)
            .field("line", &self.lines.line_number())
            .finish()
    }
}

impl<R: Read> MatrixMarketReader<R> {
    /// Create a reader with default configuration and read the header.
    pub fn new(reader: R) -> MtxResult<Self> {
        Self::with_config(reader, ReaderConfig::default())
    }

    /// Create a reader with custom configuration and read the header.
    pub fn with_config(reader: R, config: ReaderConfig) -> MtxResult<Self> {
        let mut lines =
            LineReader::with_capacity(reader, config.buffer_size, config.limits.max_line_length);
        let mut comments = Comments::new();
        let capture = config.capture_comments.then_some(&mut comments);
        let header = read_header(&mut lines, capture, config.strict_header)?;

        Ok(Self {
            lines,
            header,
            comments,
            config,
        })
    }

    /// The decoded header.
    #[inline]
    pub fn header(&self) -> &HeaderDescriptor {
        &self.header
    }

    /// Comments captured between the banner and the size line. Empty unless
    /// [`ReaderConfig::capture_comments`] is set.
    #[inline]
    pub fn comments(&self) -> &Comments {
        &self.comments
    }

    #[inline]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Number of the line most recently read: the size line.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    /// Stream the body one entry at a time without buffering it.
    pub fn entries(self) -> Entries<R> {
        Entries {
            body: BodyReader::new(self.header),
            lines: self.lines,
            header: self.header,
            comments: self.comments,
            failed: false,
        }
    }

    /// Read the whole body into a staging buffer.
    ///
    /// The buffer is reserved once, sized from the header, before any data
    /// line is read.
    ///
    /// # Errors
    ///
    /// [`MtxError::Allocation`] if the buffer cannot be reserved or exceeds
    /// [`Limits::max_entries`]; otherwise the first body error.
    pub fn read_data(self) -> MtxResult<MatrixMarket> {
        let mut data = StagingBuffer::allocate(&self.header, &self.config.limits)?;
        let mut entries = self.entries();
        while let Some(entry) = entries.next_entry()? {
            data.push(&entry);
        }
        debug!(
            entries = entries.body.consumed(),
            lines = entries.lines.line_number(),
            "read MatrixMarket body"
        );
        Ok(MatrixMarket {
            header: entries.header,
            data,
            comments: entries.comments,
        })
    }
}

impl<R: Read> IntoIterator for MatrixMarketReader<R> {
    type Item = MtxResult<Entry>;
    type IntoIter = Entries<R>;

    fn into_iter(self) -> Entries<R> {
        self.entries()
    }
}

/// Streaming iterator over the body of a MatrixMarket stream.
///
/// Created by [`MatrixMarketReader::entries`]. Implements
/// `Iterator<Item = MtxResult<Entry>>`; iteration ends after the declared
/// number of entries, or after the first error.
///
/// ```rust
/// use mtx_stream::MatrixMarketReader;
/// use std::io::Cursor;
///
/// let input = "%%MatrixMarket matrix coordinate real general\n\
///              2 2 2\n\
///              1 1 5.0\n\
///              2 2 3.0\n";
///
/// let mut sum = 0.0;
/// for entry in MatrixMarketReader::new(Cursor::new(input)).unwrap() {
///     sum += entry.unwrap().value.as_real().unwrap_or(0.0);
/// }
/// assert_eq!(sum, 8.0);
/// ```
pub struct Entries<R: Read> {
    lines: LineReader<R>,
    header: HeaderDescriptor,
    comments: Comments,
    body: BodyReader,
    failed: bool,
}

impl<R: Read> std::fmt::Debug for Entries<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entries")
            .field("header", &self.header)
            .field("line", &self.lines.line_number())
            .field("consumed", &self.body.consumed())
            .finish()
    }
}

impl<R: Read> Entries<R> {
    #[inline]
    pub fn header(&self) -> &HeaderDescriptor {
        &self.header
    }

    #[inline]
    pub fn comments(&self) -> &Comments {
        &self.comments
    }

    /// Number of the line most recently read.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    /// Read the next entry, or `None` after the last declared one.
    pub fn next_entry(&mut self) -> MtxResult<Option<Entry>> {
        if self.failed {
            return Ok(None);
        }
        let result = self.body.next_entry(&mut self.lines);
        if result.is_err() {
            self.failed = true;
        }
        result
    }
}

impl<R: Read> Iterator for Entries<R> {
    type Item = MtxResult<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.header.stored_entries().saturating_sub(self.body.consumed());
        (0, Some(remaining))
    }
}

/// Read a complete MatrixMarket stream with default configuration.
pub fn read<R: Read>(reader: R) -> MtxResult<MatrixMarket> {
    read_with_config(reader, ReaderConfig::default())
}

/// Read a complete MatrixMarket stream.
pub fn read_with_config<R: Read>(reader: R, config: ReaderConfig) -> MtxResult<MatrixMarket> {
    MatrixMarketReader::with_config(reader, config)?.read_data()
}

/// Parse MatrixMarket text held in memory.
///
/// ```rust
/// use mtx_stream::parse;
///
/// let mm = parse(b"%%MatrixMarket matrix coordinate real general\n2 2 2\n1 1 5.0\n2 2 3.0\n").unwrap();
/// let coo = mm.data.as_coordinate().unwrap();
/// assert_eq!(coo.rows, vec![1, 2]);
/// assert_eq!(coo.cols, vec![1, 2]);
/// assert_eq!(coo.values, vec![5.0, 3.0]);
/// ```
pub fn parse(bytes: &[u8]) -> MtxResult<MatrixMarket> {
    read(bytes)
}

/// Open and read a MatrixMarket file with default configuration.
pub fn read_path(path: impl AsRef<Path>) -> MtxResult<MatrixMarket> {
    read_path_with_config(path, ReaderConfig::default())
}

/// Open and read a MatrixMarket file.
///
/// # Errors
///
/// [`MtxError::Open`] if the file cannot be opened, otherwise as [`read`].
pub fn read_path_with_config(
    path: impl AsRef<Path>,
    config: ReaderConfig,
) -> MtxResult<MatrixMarket> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MtxError::Open {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), "opened MatrixMarket file");
    read_with_config(file, config)
}
