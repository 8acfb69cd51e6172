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

//! Input format detection by file extension.

use std::fmt;
use std::path::Path;

/// Sparse matrix file formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.mtx`
    MatrixMarket,
    /// `.hb`
    HarwellBoeing,
    /// `.rb`
    RutherfordBoeing,
    /// `.mat`
    Matlab,
}

impl FileFormat {
    /// Identify the format from the extension of `path`.
    ///
    /// Matching is ASCII case-insensitive. Returns `None` for files without
    /// an extension or with an unknown one.
    ///
    /// ```
    /// use mtx_cli::format::FileFormat;
    ///
    /// assert_eq!(FileFormat::from_path("bcsstk01.mtx"), Some(FileFormat::MatrixMarket));
    /// assert_eq!(FileFormat::from_path("west0479.RB"), Some(FileFormat::RutherfordBoeing));
    /// assert_eq!(FileFormat::from_path("notes.txt"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "mtx" => Some(FileFormat::MatrixMarket),
            "hb" => Some(FileFormat::HarwellBoeing),
            "rb" => Some(FileFormat::RutherfordBoeing),
            "mat" => Some(FileFormat::Matlab),
            _ => None,
        }
    }

    /// Only MatrixMarket files can be read.
    pub fn is_supported(self) -> bool {
        self == FileFormat::MatrixMarket
    }

    pub fn name(self) -> &'static str {
        match self {
            FileFormat::MatrixMarket => "MatrixMarket",
            FileFormat::HarwellBoeing => "Harwell-Boeing",
            FileFormat::RutherfordBoeing => "Rutherford-Boeing",
            FileFormat::Matlab => "MATLAB",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(FileFormat::from_path("a.mtx"), Some(FileFormat::MatrixMarket));
        assert_eq!(FileFormat::from_path("dir/a.MTX"), Some(FileFormat::MatrixMarket));
        assert_eq!(FileFormat::from_path("a.hb"), Some(FileFormat::HarwellBoeing));
        assert_eq!(FileFormat::from_path("a.rb"), Some(FileFormat::RutherfordBoeing));
        assert_eq!(FileFormat::from_path("a.mat"), Some(FileFormat::Matlab));
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(FileFormat::from_path("a"), None);
        assert_eq!(FileFormat::from_path("a.mtx.gz"), None);
        assert_eq!(FileFormat::from_path(".mtx"), None);
    }

    #[test]
    fn test_supported() {
        assert!(FileFormat::MatrixMarket.is_supported());
        assert!(!FileFormat::Matlab.is_supported());
        assert!(!FileFormat::HarwellBoeing.is_supported());
    }
}
