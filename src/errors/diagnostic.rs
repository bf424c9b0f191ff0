use std::fmt::Display;

use crate::source::source::{SourceFile, SourceRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Fatal,
    Error,
    Warning,
    Info,
}

impl Level {
    pub fn name(&self) -> &'static str {
        match self {
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
        }
    }

    /// Fatal and error diagnostics stop a unit before code generation.
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Fatal | Level::Error)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A leveled compiler message tied to a source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub location: SourceRange,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, location: SourceRange) -> Self {
        Diagnostic {
            level,
            message: message.into(),
            location,
        }
    }

    pub fn error(message: impl Into<String>, location: SourceRange) -> Self {
        Diagnostic::new(Level::Error, message, location)
    }

    /// Renders the diagnostic against the file it points into:
    ///
    /// ```text
    /// main.sp:1:10: error: expected expression, found ')'
    /// fn f() { ) }
    ///          ^
    /// ```
    ///
    /// The file must have been scanned at least up to the diagnostic's
    /// location, otherwise the line number is computed from stale newline
    /// offsets.
    pub fn render(&self, file: &SourceFile) -> String {
        let coords = self.location.start_coordinates(file);
        format!(
            "{}:{}:{}: {}: {}\n{}\n{:>column$}\n",
            file.filename(),
            coords.line,
            coords.column,
            self.level,
            self.message,
            file.get_line(coords.line),
            "^",
            column = coords.column
        )
    }
}

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|diagnostic| diagnostic.level.is_error())
}
