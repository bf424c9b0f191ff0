#![allow(clippy::module_inception)]

use std::sync::Once;

use ast::ast::Module;
use errors::diagnostic::{has_errors, Diagnostic};
use source::source::SourceFile;
use tracing::debug;

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod source;

/// File name given to units read from the interactive prompt.
pub const REPL_UNIT_NAME: &str = "<repl>";

static TRACING_INIT: Once = Once::new();

/// Installs the tracing subscriber. Does nothing unless `RUST_LOG` is set,
/// and only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// A parsed source file together with everything reported about it.
pub struct CompilationUnit {
    pub file: SourceFile,
    /// Possibly partial when `diagnostics` contains errors.
    pub module: Module,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationUnit {
    /// Lexes and parses `source` as a unit named `filename`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(filename: impl Into<String>, source: impl Into<String>) -> Self {
        let mut file = SourceFile::new(filename, source);
        let (module, diagnostics) = parser::parser::parse(&mut file);
        debug!(
            file = file.filename(),
            functions = module.functions.len(),
            diagnostics = diagnostics.len(),
            "parsed unit"
        );

        CompilationUnit {
            file,
            module,
            diagnostics,
        }
    }

    /// True when the unit must not be passed to code generation.
    pub fn has_errors(&self) -> bool {
        has_errors(&self.diagnostics)
    }

    /// Every diagnostic rendered against the unit's file, in emission order.
    pub fn render_diagnostics(&self) -> String {
        self.diagnostics
            .iter()
            .map(|diagnostic| diagnostic.render(&self.file))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_unit() {
        let unit = CompilationUnit::parse("ok.sp", "fn one() -> i32 { 1 }");

        assert!(!unit.has_errors());
        assert_eq!(unit.render_diagnostics(), "");
        assert_eq!(unit.module.functions.len(), 1);
    }

    #[test]
    fn test_unit_with_errors() {
        let unit = CompilationUnit::parse(REPL_UNIT_NAME, "fn f() { 1 + }");

        assert!(unit.has_errors());
        assert_eq!(
            unit.render_diagnostics(),
            "<repl>:1:14: error: expected expression, found '}'\nfn f() { 1 + }\n             ^\n"
        );
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
