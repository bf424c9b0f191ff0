//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from the lexer one at
//! a time and builds a `Module` of function declarations and definitions.
//! It handles:
//!
//! - Function prototypes, extern declarations, and definitions
//! - Expressions, using precedence climbing for binary operators
//! - Call and block expressions
//! - Type annotations (syntax only)
//! - Error reporting and the recovery policy for invalid tokens
//!
//! Every grammar function returns a `ParseResult`; a failure means no node
//! was produced and a diagnostic has already been recorded.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod types;
