use crate::{
    ast::expressions::{Expr, ExprKind},
    errors::errors::{CodegenError, CodegenResult},
};

use super::{compiler::Backend, scope::SymbolTable};

/// Lowers one expression, returning the backend value it evaluates to.
///
/// Names resolve to their innermost binding. A block evaluates to its last
/// expression, or to the backend's unit value when it is empty.
pub fn gen_expression<B: Backend>(
    backend: &mut B,
    symbols: &SymbolTable<B::Value>,
    expression: &Expr,
) -> CodegenResult<B::Value> {
    match &expression.kind {
        ExprKind::Int(value) => backend.build_int(*value),
        ExprKind::Var(name) => {
            symbols
                .lookup(name)
                .cloned()
                .ok_or_else(|| CodegenError::UndefinedName {
                    name: name.clone(),
                })
        }
        ExprKind::BinOp { op, lhs, rhs } => {
            let lhs = gen_expression(backend, symbols, lhs)?;
            let rhs = gen_expression(backend, symbols, rhs)?;
            backend.build_binop(op, lhs, rhs)
        }
        ExprKind::Call { callee, args } => {
            let callee = gen_expression(backend, symbols, callee)?;

            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(gen_expression(backend, symbols, arg)?);
            }

            backend.build_call(callee, values)
        }
        ExprKind::Block(exprs) => {
            let mut last = None;
            for expr in exprs {
                last = Some(gen_expression(backend, symbols, expr)?);
            }

            match last {
                Some(value) => Ok(value),
                None => backend.build_unit(),
            }
        }
    }
}
