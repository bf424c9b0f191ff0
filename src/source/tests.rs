use pretty_assertions::assert_eq;

use crate::lexer::lexer::Lexer;

use super::source::{SourceCoordinates, SourceFile, SourceRange};

/// Builds a file whose newline offsets are fully recorded.
fn scanned(source: &str) -> SourceFile {
    let mut file = SourceFile::new("test.sp", source);
    Lexer::new(&mut file).scan_to_end(&mut vec![]);
    file
}

#[test]
fn test_find_coordinates() {
    let file = scanned("ab\ncd");

    assert_eq!(file.find_coordinates(0), SourceCoordinates { line: 1, column: 1 });
    assert_eq!(file.find_coordinates(1), SourceCoordinates { line: 1, column: 2 });
    assert_eq!(file.find_coordinates(3), SourceCoordinates { line: 2, column: 1 });
    assert_eq!(file.find_coordinates(4), SourceCoordinates { line: 2, column: 2 });
}

#[test]
fn test_newline_belongs_to_its_line() {
    let file = scanned("ab\ncd");

    assert_eq!(file.find_coordinates(2), SourceCoordinates { line: 1, column: 3 });
}

#[test]
fn test_find_coordinates_at_end_of_file() {
    let file = scanned("ab\ncd");
    assert_eq!(file.find_coordinates(5), SourceCoordinates { line: 2, column: 3 });

    let empty = scanned("");
    assert_eq!(empty.find_coordinates(0), SourceCoordinates { line: 1, column: 1 });
}

#[test]
fn test_get_line() {
    let file = scanned("ab\ncd");

    assert_eq!(file.get_line(1), "ab");
    assert_eq!(file.get_line(2), "cd");
}

#[test]
fn test_get_line_with_blank_and_trailing_lines() {
    let file = scanned("one\n\nthree\n");

    assert_eq!(file.get_line(1), "one");
    assert_eq!(file.get_line(2), "");
    assert_eq!(file.get_line(3), "three");
    assert_eq!(file.get_line(4), "");
}

#[test]
fn test_coordinates_only_cover_scanned_text() {
    let mut file = SourceFile::new("test.sp", "a\nb");
    assert_eq!(file.find_coordinates(2).line, 1);

    Lexer::new(&mut file).scan_to_end(&mut vec![]);
    assert_eq!(file.find_coordinates(2).line, 2);
}

#[test]
fn test_range_text_and_merge() {
    let file = scanned("let me in");
    let name = file.name_handle();
    let first = SourceRange::new(name.clone(), 0, 3);
    let last = SourceRange::new(name, 7, 9);

    assert_eq!(first.text(&file), "let");
    assert_eq!(first.to(&last).text(&file), "let me in");
    assert!(SourceRange::empty(file.name_handle(), 4).is_empty());
}
