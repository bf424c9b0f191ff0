//! Unit tests for the AST dump format.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::source::source::SourceRange;

use super::{
    ast::{ExternFunc, Func, FuncDef, FuncProto, Module},
    expressions::{Expr, ExprKind},
    types::Type,
};

fn at() -> SourceRange {
    SourceRange::empty(Rc::from("test.sp"), 0)
}

fn int(value: i64) -> Expr {
    Expr::new(ExprKind::Int(value), at())
}

fn var(name: &str) -> Expr {
    Expr::new(ExprKind::Var(name.to_string()), at())
}

fn proto(name: &str, args: &[(&str, Option<Type>)], return_type: Type) -> FuncProto {
    FuncProto {
        name: name.to_string(),
        arg_names: args.iter().map(|(name, _)| name.to_string()).collect(),
        arg_types: args.iter().map(|(_, ty)| ty.clone()).collect(),
        return_type,
        location: at(),
    }
}

#[test]
fn test_dump_leaves() {
    assert_eq!(int(42).to_string(), "Int(42)");
    assert_eq!(int(-7).to_string(), "Int(-7)");
    assert_eq!(var("x").to_string(), "Var(x)");
}

#[test]
fn test_dump_nested_binop() {
    let expr = Expr::new(
        ExprKind::BinOp {
            op: "+".to_string(),
            lhs: Box::new(int(1)),
            rhs: Box::new(Expr::new(
                ExprKind::BinOp {
                    op: "*".to_string(),
                    lhs: Box::new(int(2)),
                    rhs: Box::new(var("y")),
                },
                at(),
            )),
        },
        at(),
    );

    assert_eq!(expr.to_string(), "BinOp(+, Int(1), BinOp(*, Int(2), Var(y)))");
}

#[test]
fn test_dump_call_and_block() {
    let call = Expr::new(
        ExprKind::Call {
            callee: Box::new(var("f")),
            args: vec![int(3), var("z")],
        },
        at(),
    );
    let block = Expr::new(ExprKind::Block(vec![int(1), call]), at());

    assert_eq!(
        block.to_string(),
        "Block{Int(1); Call(func = Var(f), args = {Int(3), Var(z)})}"
    );
    assert_eq!(Expr::new(ExprKind::Block(vec![]), at()).to_string(), "Block{}");
}

#[test]
fn test_dump_types() {
    assert_eq!(Type::Name("i32".to_string()).to_string(), "Type(i32)");
    assert_eq!(Type::Unit.to_string(), "()");
}

#[test]
fn test_dump_module() {
    let module = Module::new(vec![
        Func::Extern(ExternFunc {
            proto: proto("putchar", &[("c", Some(Type::Name("i32".to_string())))], Type::Unit),
        }),
        Func::Def(FuncDef {
            proto: proto("id", &[("x", None)], Type::Name("i32".to_string())),
            body: Expr::new(ExprKind::Block(vec![var("x")]), at()),
        }),
    ]);

    assert_eq!(
        module.to_string(),
        "Module{\n\
         \x20 ExternFunc(proto = FuncProto(name = putchar, args = {c: Type(i32)}, returnType = ()));\n\
         \x20 FuncDef(proto = FuncProto(name = id, args = {x}, returnType = Type(i32)), body = Block{Var(x)});\n\
         }\n"
    );
    assert_eq!(module.functions[1].name(), "id");
}
