//! Error types and diagnostics for the compiler.
//!
//! Nothing in the front end is thrown: problems are either recorded as a
//! `Diagnostic` in an ordered list or returned as a typed error value.
//!
//! - `diagnostic` defines leveled, located messages and their text rendering
//! - `errors` defines the lexer, parser, and code generation error enums

pub mod diagnostic;
pub mod errors;

#[cfg(test)]
mod tests;
