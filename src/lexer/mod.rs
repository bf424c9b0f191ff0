//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens for parsing. It handles:
//!
//! - Byte-by-byte scanning with a single forward cursor
//! - Recognition of keywords, identifiers, integers, and operator runs
//! - Newline tracking for source coordinates
//! - Lexical diagnostics (invalid characters, malformed integers)

pub mod lexer;
pub mod tokens;
