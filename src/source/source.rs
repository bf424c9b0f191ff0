use std::{borrow::Cow, fmt::Display, rc::Rc};

/// A 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCoordinates {
    pub line: usize,
    pub column: usize,
}

impl Display for SourceCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The text of one compilation unit (a file or a single REPL line).
///
/// `newline_offsets` is filled in by the lexer as it consumes `'\n'` bytes,
/// so coordinates are only accurate for text the lexer has already passed.
#[derive(Debug, Clone)]
pub struct SourceFile {
    filename: Rc<str>,
    source: String,
    newline_offsets: Vec<usize>,
}

impl SourceFile {
    pub fn new(filename: impl Into<String>, source: impl Into<String>) -> Self {
        let filename: String = filename.into();
        SourceFile {
            filename: Rc::from(filename),
            source: source.into(),
            newline_offsets: Vec::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Shared handle to the filename, stored in every `SourceRange`.
    pub fn name_handle(&self) -> Rc<str> {
        Rc::clone(&self.filename)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn newline_offsets(&self) -> &[usize] {
        &self.newline_offsets
    }

    /// Records a consumed newline. Offsets arrive in increasing order because
    /// the lexer cursor only moves forward.
    pub(crate) fn record_newline(&mut self, offset: usize) {
        debug_assert!(self.newline_offsets.last().map_or(true, |&last| last < offset));
        self.newline_offsets.push(offset);
    }

    /// Resolves a byte offset to its line and column.
    ///
    /// `offset` may equal `len()` so that zero-length ranges at end of file
    /// still resolve to a position one past the last byte.
    pub fn find_coordinates(&self, offset: usize) -> SourceCoordinates {
        debug_assert!(offset <= self.source.len());

        // Index of the first newline at or after the offset.
        let newline_after = self.newline_offsets.partition_point(|&newline| newline < offset);
        let line = newline_after + 1;

        let column = if newline_after == 0 {
            offset + 1
        } else {
            offset - self.newline_offsets[newline_after - 1]
        };

        SourceCoordinates { line, column }
    }

    /// Returns the text of a 1-based line, without its terminating newline.
    pub fn get_line(&self, line: usize) -> &str {
        debug_assert!(line > 0 && line <= self.newline_offsets.len() + 1);

        let newline_after = line - 1;

        let start = if newline_after == 0 {
            0
        } else {
            self.newline_offsets[newline_after - 1] + 1
        };

        let end = if newline_after == self.newline_offsets.len() {
            self.source.len()
        } else {
            self.newline_offsets[newline_after]
        };

        &self.source[start..end]
    }
}

/// A half-open byte range `[start, end)` into a named source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRange {
    pub file: Rc<str>,
    pub start: usize,
    pub end: usize,
}

impl SourceRange {
    pub fn new(file: Rc<str>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        SourceRange { file, start, end }
    }

    /// A zero-length range, as used for the EOF token.
    pub fn empty(file: Rc<str>, offset: usize) -> Self {
        SourceRange::new(file, offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest range covering both `self` and `other`.
    pub fn to(&self, other: &SourceRange) -> SourceRange {
        SourceRange::new(
            Rc::clone(&self.file),
            self.start.min(other.start),
            self.end.max(other.end),
        )
    }

    pub fn start_coordinates(&self, file: &SourceFile) -> SourceCoordinates {
        file.find_coordinates(self.start)
    }

    pub fn bytes<'a>(&self, file: &'a SourceFile) -> &'a [u8] {
        &file.bytes()[self.start..self.end]
    }

    /// The covered text. A range may split a multi-byte character (invalid
    /// tokens are always one byte), so the slice is decoded lossily.
    pub fn text<'a>(&self, file: &'a SourceFile) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes(file))
    }
}
