//! Source text and location tracking.
//!
//! This module owns the text of a compilation unit and maps byte offsets
//! back to human-readable coordinates for diagnostics:
//!
//! - `SourceFile` holds the filename, the text, and the newline offsets
//!   recorded by the lexer as it scans
//! - `SourceRange` is a half-open byte span into a file
//! - `SourceCoordinates` is a 1-based (line, column) pair

pub mod source;

#[cfg(test)]
mod tests;
