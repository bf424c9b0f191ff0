//! Module-level code generation driver.
//!
//! The driver walks a parsed `Module` and hands every construct to a
//! `Backend`. It owns name resolution: functions are bound globally in a
//! first pass so that bodies can call functions defined later, and each
//! body runs inside a `Scope` holding its parameters.

use tracing::debug;

use crate::{
    ast::ast::{Func, FuncDef, FuncProto, Module},
    errors::errors::{CodegenError, CodegenResult},
};

use super::{expr::gen_expression, scope::SymbolTable};

/// A code generation target.
///
/// Values are opaque handles owned by the backend: function handles, integer
/// values and whatever the backend uses for unit. The driver only clones and
/// passes them back.
pub trait Backend {
    type Value: Clone;

    /// Creates the function for `proto` and returns its handle.
    fn declare_function(&mut self, proto: &FuncProto) -> CodegenResult<Self::Value>;

    /// Starts the body of a declared function and returns one value per
    /// parameter, in order.
    fn begin_function(
        &mut self,
        function: &Self::Value,
        proto: &FuncProto,
    ) -> CodegenResult<Vec<Self::Value>>;

    /// Completes a function body whose result is `body`.
    fn finish_function(&mut self, function: &Self::Value, body: Self::Value) -> CodegenResult<()>;

    fn build_int(&mut self, value: i64) -> CodegenResult<Self::Value>;

    /// The value of an empty block.
    fn build_unit(&mut self) -> CodegenResult<Self::Value>;

    fn build_binop(
        &mut self,
        op: &str,
        lhs: Self::Value,
        rhs: Self::Value,
    ) -> CodegenResult<Self::Value>;

    fn build_call(
        &mut self,
        callee: Self::Value,
        args: Vec<Self::Value>,
    ) -> CodegenResult<Self::Value>;
}

/// Generates every function of `module` through `backend`.
///
/// Each function name is pushed onto `symbols` and left there, so a caller
/// can keep one table across several units. Parameter bindings are always
/// popped again, also when a body fails.
///
/// # Returns
///
/// The declared `(name, handle)` pairs in declaration order.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate<B: Backend>(
    module: &Module,
    backend: &mut B,
    symbols: &mut SymbolTable<B::Value>,
) -> CodegenResult<Vec<(String, B::Value)>> {
    let mut functions = Vec::with_capacity(module.functions.len());

    for func in &module.functions {
        let proto = func.proto();
        let handle = backend.declare_function(proto)?;
        symbols.push(proto.name.clone(), handle.clone());
        functions.push((proto.name.clone(), handle));
    }
    debug!(count = functions.len(), "declared functions");

    for (func, (name, handle)) in module.functions.iter().zip(&functions) {
        if let Func::Def(def) = func {
            gen_function(backend, symbols, def, handle)?;
            debug!(%name, "generated function body");
        }
    }

    Ok(functions)
}

/// Runs `generate` with an empty symbol table.
pub fn codegen_module<B: Backend>(
    module: &Module,
    backend: &mut B,
) -> CodegenResult<Vec<(String, B::Value)>> {
    let mut symbols = SymbolTable::new();
    generate(module, backend, &mut symbols)
}

fn gen_function<B: Backend>(
    backend: &mut B,
    symbols: &mut SymbolTable<B::Value>,
    def: &FuncDef,
    handle: &B::Value,
) -> CodegenResult<()> {
    let params = backend.begin_function(handle, &def.proto)?;
    if params.len() != def.proto.arg_names.len() {
        return Err(CodegenError::UnexpectedArguments {
            expected: def.proto.arg_names.len(),
            received: params.len(),
        });
    }

    let mut scope = symbols.scope();
    for (name, value) in def.proto.arg_names.iter().zip(params) {
        scope.bind(name.clone(), value);
    }

    let body = gen_expression(backend, &scope, &def.body)?;
    backend.finish_function(handle, body)
}
