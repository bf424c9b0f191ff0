//! Integration tests for the end-to-end pipeline.
//!
//! These tests go from source text through lexing and parsing to code
//! generation, using only the public API of the crate.

use pretty_assertions::assert_eq;
use sprig::{
    ast::ast::FuncProto,
    compiler::{
        compiler::{codegen_module, generate, Backend},
        scope::SymbolTable,
    },
    errors::errors::{CodegenError, CodegenResult},
    lexer::{lexer::tokenize, tokens::TokenKind},
    source::source::SourceFile,
    CompilationUnit, REPL_UNIT_NAME,
};

/// Evaluates integer programs directly instead of emitting code. Function
/// handles are indices into `protos`; calls are recorded, not executed.
#[derive(Default)]
struct Evaluator {
    protos: Vec<FuncProto>,
    results: Vec<(String, i64)>,
    calls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Function(usize),
    Int(i64),
}

impl Evaluator {
    fn int(&self, value: Value) -> CodegenResult<i64> {
        match value {
            Value::Int(value) => Ok(value),
            Value::Function(index) => Err(CodegenError::backend(format!(
                "function `{}` used as a value",
                self.protos[index].name
            ))),
        }
    }
}

impl Backend for Evaluator {
    type Value = Value;

    fn declare_function(&mut self, proto: &FuncProto) -> CodegenResult<Value> {
        self.protos.push(proto.clone());
        Ok(Value::Function(self.protos.len() - 1))
    }

    fn begin_function(&mut self, _function: &Value, proto: &FuncProto) -> CodegenResult<Vec<Value>> {
        Ok((1..=proto.arg_names.len() as i64).map(Value::Int).collect())
    }

    fn finish_function(&mut self, function: &Value, body: Value) -> CodegenResult<()> {
        let Value::Function(index) = function else {
            return Err(CodegenError::backend("not a function"));
        };
        let name = self.protos[*index].name.clone();
        let body = self.int(body)?;
        self.results.push((name, body));
        Ok(())
    }

    fn build_int(&mut self, value: i64) -> CodegenResult<Value> {
        Ok(Value::Int(value))
    }

    fn build_unit(&mut self) -> CodegenResult<Value> {
        Ok(Value::Int(0))
    }

    fn build_binop(&mut self, op: &str, lhs: Value, rhs: Value) -> CodegenResult<Value> {
        let (lhs, rhs) = (self.int(lhs)?, self.int(rhs)?);
        let value = match op {
            "+" => lhs + rhs,
            "-" => lhs - rhs,
            "*" => lhs * rhs,
            "/" => lhs / rhs,
            _ => {
                return Err(CodegenError::UnknownOperator {
                    operator: op.to_string(),
                })
            }
        };
        Ok(Value::Int(value))
    }

    fn build_call(&mut self, callee: Value, args: Vec<Value>) -> CodegenResult<Value> {
        let Value::Function(index) = callee else {
            return Err(CodegenError::NotCallable {
                name: String::from("<int>"),
            });
        };

        let expected = self.protos[index].arg_names.len();
        if expected != args.len() {
            return Err(CodegenError::UnexpectedArguments {
                expected,
                received: args.len(),
            });
        }

        self.calls.push(self.protos[index].name.clone());
        Ok(Value::Int(0))
    }
}

fn result_of(evaluator: &Evaluator, name: &str) -> i64 {
    evaluator
        .results
        .iter()
        .find(|(function, _)| function == name)
        .map(|(_, value)| *value)
        .unwrap()
}

#[test]
fn test_tokenize_reconstructs_source() {
    let text = "extern fn putchar(c: i32) -> i32;\n\nfn main() {\n\tputchar(72) * (1 + 2)\n}\n";
    let mut file = SourceFile::new("main.sp", text);
    let mut diagnostics = vec![];
    let tokens = tokenize(&mut file, &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));

    let mut rebuilt = vec![];
    let mut offset = 0;
    for token in &tokens {
        rebuilt.extend_from_slice(&text.as_bytes()[offset..token.location.start]);
        rebuilt.extend_from_slice(token.text());
        offset = token.location.end;
    }

    assert_eq!(rebuilt, text.as_bytes());
    assert_eq!(file.newline_offsets().len(), text.matches('\n').count());
}

#[test]
fn test_compile_and_evaluate() {
    let unit = CompilationUnit::parse(
        "main.sp",
        "fn main() { sq(3) + 1 * 2 }\n\
         fn sq(x) { x * x }\n\
         fn args(a, b: i32, c) -> i32 { a + b * c - 10 / (2 + 3) }\n",
    );
    assert!(!unit.has_errors(), "{}", unit.render_diagnostics());

    let mut evaluator = Evaluator::default();
    let functions = codegen_module(&unit.module, &mut evaluator).unwrap();

    let names: Vec<&str> = functions.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["main", "sq", "args"]);
    // Parameters are bound to 1, 2, 3 in order.
    assert_eq!(result_of(&evaluator, "sq"), 1);
    assert_eq!(result_of(&evaluator, "args"), 1 + 2 * 3 - 2);
    assert_eq!(result_of(&evaluator, "main"), 2);
    assert_eq!(evaluator.calls, vec!["sq"]);
}

#[test]
fn test_globals_survive_across_units() {
    let library = CompilationUnit::parse("lib.sp", "fn helper(n) { n }");
    let program = CompilationUnit::parse("main.sp", "fn main() { helper(1) }");

    let mut evaluator = Evaluator::default();
    let mut symbols = SymbolTable::new();

    generate(&library.module, &mut evaluator, &mut symbols).unwrap();
    generate(&program.module, &mut evaluator, &mut symbols).unwrap();

    assert_eq!(evaluator.calls, vec!["helper"]);
    assert_eq!(symbols.depth("helper"), 1);
    assert_eq!(symbols.depth("n"), 0);
}

#[test]
fn test_arity_mismatch_is_reported() {
    let unit = CompilationUnit::parse("main.sp", "extern fn f(a, b);\nfn main() { f(1) }");
    let mut evaluator = Evaluator::default();

    assert_eq!(
        codegen_module(&unit.module, &mut evaluator).err(),
        Some(CodegenError::UnexpectedArguments {
            expected: 2,
            received: 1,
        })
    );
}

#[test]
fn test_diagnostics_are_rendered_in_order() {
    let unit = CompilationUnit::parse("main.sp", "fn main() {\n  1 ` 2\n}\nfn 9() {}\n");

    assert!(unit.has_errors());
    assert_eq!(unit.module.functions.len(), 1);
    assert_eq!(
        unit.render_diagnostics(),
        "main.sp:2:5: error: invalid character '`'\n  1 ` 2\n    ^\n\
         main.sp:4:4: error: expected function name after 'fn' keyword\nfn 9() {}\n   ^\n"
    );
}

#[test]
fn test_repl_unit_name() {
    let unit = CompilationUnit::parse(REPL_UNIT_NAME, "extern fn f(");

    assert_eq!(unit.file.filename(), "<repl>");
    assert_eq!(
        unit.render_diagnostics(),
        "<repl>:1:13: error: expected argument name in fn argument list\nextern fn f(\n            ^\n"
    );
}
