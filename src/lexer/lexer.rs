use std::rc::Rc;

use crate::{
    errors::{diagnostic::Diagnostic, errors::LexError},
    source::source::{SourceFile, SourceRange},
};

use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP};

const OPERATOR_CHARS: &[u8] = b"~!@#$%^&*-+=|/?<>.";

fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_operator_char(c: u8) -> bool {
    OPERATOR_CHARS.contains(&c)
}

fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n')
}

/// A byte cursor over a borrowed `SourceFile`, producing one token per call.
///
/// The lexer keeps no diagnostics of its own; callers pass the list to
/// report into. It is the only writer of the file's newline offsets.
pub struct Lexer<'a> {
    file: &'a mut SourceFile,
    name: Rc<str>,
    byte_offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(file: &'a mut SourceFile) -> Self {
        let name = file.name_handle();
        Lexer {
            file,
            name,
            byte_offset: 0,
        }
    }

    pub fn source_file(&self) -> &SourceFile {
        &*self.file
    }

    pub fn offset(&self) -> usize {
        self.byte_offset
    }

    pub fn next_token(&mut self, diagnostics: &mut Vec<Diagnostic>) -> Token {
        self.scan_chars(is_whitespace);
        let token_start = self.byte_offset;
        let mut int_value = 0;

        let kind = match self.curr_char() {
            None => TokenKind::EOF,
            Some(c) if is_digit(c) => {
                self.scan_chars(is_identifier_char);
                int_value = self.scan_int(token_start, diagnostics);
                TokenKind::Integer
            }
            Some(c) if is_identifier_char(c) => {
                self.scan_chars(is_identifier_char);
                let text = &self.file.source()[token_start..self.byte_offset];
                KEYWORD_LOOKUP
                    .get(text)
                    .copied()
                    .unwrap_or(TokenKind::Identifier)
            }
            Some(c) if is_operator_char(c) => {
                self.scan_chars(is_operator_char);
                TokenKind::Operator
            }
            Some(c) => {
                self.consume_char();
                match c {
                    b'(' => TokenKind::ParenLeft,
                    b')' => TokenKind::ParenRight,
                    b'{' => TokenKind::BraceLeft,
                    b'}' => TokenKind::BraceRight,
                    b'[' => TokenKind::BracketLeft,
                    b']' => TokenKind::BracketRight,
                    b',' => TokenKind::Comma,
                    b';' => TokenKind::Semicolon,
                    b':' => TokenKind::Colon,
                    _ => {
                        self.report(diagnostics, LexError::InvalidCharacter(c), token_start);
                        TokenKind::Invalid
                    }
                }
            }
        };

        let location = SourceRange::new(Rc::clone(&self.name), token_start, self.byte_offset);
        let raw = location.bytes(&*self.file).to_vec();
        Token {
            kind,
            value: String::from_utf8_lossy(&raw).into_owned(),
            raw,
            location,
            int_value,
        }
    }

    /// Lexes the rest of the input, discarding tokens. This records every
    /// remaining newline (and lexical diagnostic) so that diagnostics anywhere
    /// in the file can be rendered.
    pub fn scan_to_end(&mut self, diagnostics: &mut Vec<Diagnostic>) {
        while self.next_token(diagnostics).is_not(TokenKind::EOF) {}
    }

    /// Decodes the integer token spanning `start..byte_offset`.
    // TODO: report overflow instead of wrapping.
    fn scan_int(&mut self, start: usize, diagnostics: &mut Vec<Diagnostic>) -> i64 {
        let mut value: i64 = 0;
        for offset in start..self.byte_offset {
            let c = self.file.bytes()[offset];
            if !is_digit(c) {
                self.report(diagnostics, LexError::NonDecimalDigit, offset);
                return 0;
            }
            value = value.wrapping_mul(10).wrapping_add(i64::from(c - b'0'));
        }
        value
    }

    fn scan_chars(&mut self, pred: fn(u8) -> bool) {
        while let Some(c) = self.curr_char() {
            if !pred(c) {
                break;
            }
            self.consume_char();
        }
    }

    fn curr_char(&self) -> Option<u8> {
        self.file.bytes().get(self.byte_offset).copied()
    }

    /// Every byte the lexer moves past goes through here, which is what keeps
    /// the file's newline offsets complete up to the cursor.
    fn consume_char(&mut self) {
        if self.curr_char() == Some(b'\n') {
            self.file.record_newline(self.byte_offset);
        }
        self.byte_offset += 1;
    }

    fn report(&self, diagnostics: &mut Vec<Diagnostic>, error: LexError, offset: usize) {
        diagnostics.push(Diagnostic::error(
            error.to_string(),
            SourceRange::new(Rc::clone(&self.name), offset, offset + 1),
        ));
    }
}

/// Lexes a whole file, returning every token up to and including EOF.
pub fn tokenize(file: &mut SourceFile, diagnostics: &mut Vec<Diagnostic>) -> Vec<Token> {
    let mut lexer = Lexer::new(file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token(diagnostics);
        let at_end = token.is(TokenKind::EOF);
        tokens.push(token);
        if at_end {
            break;
        }
    }

    tokens
}
