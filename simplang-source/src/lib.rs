//! Source code representation and position lookup.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Represents source code.
pub struct Source {
    /// Name used when reporting positions (usually the file path).
    pub name: String,
    /// Original source code.
    pub content: String,
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
}

impl Source {
    /// Create a new `Source` named `name` with the specified `content`.
    pub fn new(name: impl ToString, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            name: name.to_string(),
            content,
            line_starts,
        }
    }

    /// Reads the file at `path` into a new `Source`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.display(), content))
    }

    /// Maps a byte `offset` into a 1-based line and column.
    /// Offsets past the end of the content are clamped to the end.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        Position {
            line: line + 1,
            column: column + 1,
        }
    }
}

impl From<&str> for Source {
    fn from(content: &str) -> Self {
        Source::new("<input>", content)
    }
}

/// A 1-based line and column in a [`Source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The source file could not be read.
#[derive(Debug, Error)]
#[error("cannot read `{}`: {source}", path.display())]
pub struct IoError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_first_line() {
        let source: Source = "1 + 2".into();
        assert_eq!(source.position(0), Position { line: 1, column: 1 });
        assert_eq!(source.position(4), Position { line: 1, column: 5 });
    }

    #[test]
    fn test_position_multiline() {
        let source: Source = "1 +\n  2\n".into();
        assert_eq!(source.position(3), Position { line: 1, column: 4 });
        assert_eq!(source.position(4), Position { line: 2, column: 1 });
        assert_eq!(source.position(6), Position { line: 2, column: 3 });
        assert_eq!(source.position(8), Position { line: 3, column: 1 });
    }

    #[test]
    fn test_position_clamped() {
        let source: Source = "12".into();
        assert_eq!(source.position(100), Position { line: 1, column: 3 });
    }

    #[test]
    fn test_load_missing_file() {
        let err = Source::load("/this/path/does/not/exist.simp")
            .err()
            .expect("loading a missing file must fail");
        assert_eq!(err.path, PathBuf::from("/this/path/does/not/exist.simp"));
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("cannot read `/this/path/does/not/exist.simp`"));
    }
}
