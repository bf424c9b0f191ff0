//! Unit tests for error messages and diagnostic rendering.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    source::source::{SourceFile, SourceRange},
};

use super::{
    diagnostic::{has_errors, Diagnostic, Level},
    errors::{CodegenError, LexError, ParseError},
};

fn scanned(text: &str) -> SourceFile {
    let mut file = SourceFile::new("main.sp", text);
    Lexer::new(&mut file).scan_to_end(&mut vec![]);
    file
}

fn range(start: usize, end: usize) -> SourceRange {
    SourceRange::new(Rc::from("main.sp"), start, end)
}

#[test]
fn test_error_messages() {
    assert_eq!(LexError::InvalidCharacter(b'$').to_string(), "invalid character '$'");
    assert_eq!(LexError::InvalidCharacter(0x07).to_string(), "invalid character '\\x07'");
    assert_eq!(
        ParseError::UnexpectedToken {
            expected: TokenKind::BraceLeft,
            found: TokenKind::EOF,
        }
        .to_string(),
        "expected '{', found end of file"
    );
    assert_eq!(
        CodegenError::UnexpectedArguments {
            expected: 1,
            received: 3,
        }
        .to_string(),
        "unexpected arguments: expected 1, received 3"
    );
    assert_eq!(
        CodegenError::backend("bad").to_string(),
        "backend error: bad"
    );
}

#[test]
fn test_render_points_at_column() {
    let file = scanned("fn main() {\n  1 + )\n}\n");
    let diagnostic = Diagnostic::error("expected expression, found ')'", range(18, 19));

    assert_eq!(
        diagnostic.render(&file),
        "main.sp:2:7: error: expected expression, found ')'\n  1 + )\n      ^\n"
    );
}

#[test]
fn test_render_first_column_and_levels() {
    let file = scanned("x");
    let diagnostic = Diagnostic::new(Level::Warning, "unused", range(0, 1));

    assert_eq!(diagnostic.render(&file), "main.sp:1:1: warning: unused\nx\n^\n");
    assert_eq!(Level::Fatal.to_string(), "fatal");
    assert_eq!(Level::Info.to_string(), "info");
}

#[test]
fn test_render_at_end_of_file() {
    let file = scanned("f(");
    let diagnostic = Diagnostic::error("unexpected end of file", range(2, 2));

    assert_eq!(
        diagnostic.render(&file),
        "main.sp:1:3: error: unexpected end of file\nf(\n  ^\n"
    );
}

#[test]
fn test_has_errors() {
    let warning = Diagnostic::new(Level::Warning, "w", range(0, 0));
    let info = Diagnostic::new(Level::Info, "i", range(0, 0));
    let fatal = Diagnostic::new(Level::Fatal, "f", range(0, 0));

    assert!(!has_errors(&[]));
    assert!(!has_errors(&[warning.clone(), info]));
    assert!(has_errors(&[warning, fatal]));
    assert!(has_errors(&[Diagnostic::error("e", range(0, 0))]));
}
