/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Modules, function prototypes, extern declarations and definitions
/// - expressions: The expression tree
/// - types: Syntactic type annotations
///
/// Every node implements `Display`, which is the debug dump used by tests
/// and tracing output.
pub mod ast;
pub mod expressions;
pub mod types;

#[cfg(test)]
mod tests;
