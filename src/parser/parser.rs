//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct: a single-token-lookahead
//! recursive descent parser driving the lexer on demand. Grammar rules live
//! in `decl`, `expr`, and `types` as free functions over `&mut Parser`.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{ast::Module, expressions::Expr},
    errors::{
        diagnostic::{Diagnostic, Level},
        errors::{ParseError, ParseResult},
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    source::source::{SourceFile, SourceRange},
};

use super::{decl::parse_item, expr::parse_expr};

/// The main parser structure that maintains parsing state.
///
/// Owns the diagnostics of the unit being parsed; the lexer reports into the
/// same list.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    diagnostics: Vec<Diagnostic>,
    /// The lookahead token.
    curr_token: Token,
    /// Location of the most recently consumed token.
    prev_location: SourceRange,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `file` and lexes the first lookahead token.
    pub fn new(file: &'a mut SourceFile) -> Self {
        let mut diagnostics = vec![];
        let mut lexer = Lexer::new(file);
        let curr_token = lexer.next_token(&mut diagnostics);
        trace!(token = %curr_token, "lookahead");
        let prev_location = SourceRange::empty(Rc::clone(&curr_token.location.file), 0);

        Parser {
            lexer,
            diagnostics,
            curr_token,
            prev_location,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.curr_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.curr_token.kind
    }

    /// Advances to the next token and returns the previous one. At end of
    /// file this keeps returning EOF.
    pub fn consume_token(&mut self) -> Token {
        let next = self.lexer.next_token(&mut self.diagnostics);
        trace!(token = %next, "lookahead");
        self.prev_location = self.curr_token.location.clone();
        std::mem::replace(&mut self.curr_token, next)
    }

    /// Location of the token consumed last, where a finished construct ends.
    pub fn previous_location(&self) -> &SourceRange {
        &self.prev_location
    }

    pub fn at_end(&self) -> bool {
        self.curr_token.is(TokenKind::EOF)
    }

    /// Consumes the current token if it has the expected kind. Otherwise
    /// reports the mismatch and fails without consuming anything.
    pub fn expect(&mut self, expected: TokenKind) -> ParseResult<Token> {
        let found = self.current_token_kind();
        if found != expected {
            return self.fail_here(ParseError::UnexpectedToken { expected, found });
        }
        Ok(self.consume_token())
    }

    pub fn report(&mut self, level: Level, message: impl Into<String>, location: SourceRange) {
        self.diagnostics
            .push(Diagnostic::new(level, message, location));
    }

    /// Records `error` as a diagnostic at `location` and returns it.
    pub fn fail<T>(&mut self, error: ParseError, location: SourceRange) -> ParseResult<T> {
        self.report(Level::Error, error.to_string(), location);
        Err(error)
    }

    /// Records `error` at the current token and returns it.
    pub fn fail_here<T>(&mut self, error: ParseError) -> ParseResult<T> {
        let location = self.curr_token.location.clone();
        self.fail(error, location)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn source_file(&self) -> &SourceFile {
        self.lexer.source_file()
    }

    /// Lexes whatever input the parser did not reach, so every line of the
    /// file is indexed before diagnostics are rendered.
    pub fn scan_to_end(&mut self) {
        self.lexer.scan_to_end(&mut self.diagnostics);
        self.curr_token = self.lexer.next_token(&mut self.diagnostics);
    }

    /// Parses functions until end of file.
    ///
    /// Parsing stops at the first item that fails; the functions collected
    /// so far are returned and the failure is left in the diagnostics.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_module(&mut self) -> Module {
        let mut functions = vec![];

        while !self.at_end() {
            match parse_item(self) {
                Ok(func) => functions.push(func),
                Err(error) => {
                    debug!(%error, parsed = functions.len(), "stopping at failed item");
                    break;
                }
            }
        }

        debug!(count = functions.len(), "parsed module");
        Module::new(functions)
    }

    /// Parses a single expression starting at the current token. Whatever
    /// follows the expression is left unconsumed.
    pub fn parse_expr_to_end(&mut self) -> ParseResult<Expr> {
        parse_expr(self)
    }
}

/// Parses a whole file into a module.
///
/// This is the main entry point for parsing. The rest of the file is always
/// lexed afterwards so that the returned diagnostics can be rendered.
///
/// # Returns
///
/// A tuple containing:
/// - The (possibly partial) module
/// - Every diagnostic reported while lexing and parsing, in emission order
pub fn parse(file: &mut SourceFile) -> (Module, Vec<Diagnostic>) {
    let mut parser = Parser::new(file);
    let module = parser.parse_module();
    parser.scan_to_end();

    (module, parser.into_diagnostics())
}
