use std::{
    env, fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use sprig::{init_tracing, CompilationUnit, REPL_UNIT_NAME};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    match args.as_slice() {
        [_] => run_repl(),
        [_, path] => run_file(path),
        _ => {
            eprintln!("usage: sprig [FILE]");
            ExitCode::FAILURE
        }
    }
}

fn run_file(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: could not read {}: {}", path, error);
            return ExitCode::FAILURE;
        }
    };

    let unit = CompilationUnit::parse(path, source);
    if report(&unit) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Each line read from stdin is compiled as its own unit.
fn run_repl() -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("sprig> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => {
                eprintln!("error: {}", error);
                return ExitCode::FAILURE;
            }
            None => {
                println!();
                return ExitCode::SUCCESS;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        report(&CompilationUnit::parse(REPL_UNIT_NAME, line));
    }
}

/// Prints the unit's diagnostics, then its module dump when it is free of
/// errors. Returns whether the unit compiled.
fn report(unit: &CompilationUnit) -> bool {
    eprint!("{}", unit.render_diagnostics());
    if unit.has_errors() {
        return false;
    }

    print!("{}", unit.module);
    emit_ir(unit)
}

#[cfg(feature = "llvm")]
fn emit_ir(unit: &CompilationUnit) -> bool {
    use inkwell::context::Context;
    use sprig::compiler::{compiler::codegen_module, llvm::LlvmBackend};

    let context = Context::create();
    let mut backend = LlvmBackend::new(&context, unit.file.filename());

    match codegen_module(&unit.module, &mut backend).and_then(|_| backend.verify()) {
        Ok(()) => {
            print!("{}", backend.print_to_string());
            true
        }
        Err(error) => {
            eprintln!("{}: error: {}", unit.file.filename(), error);
            false
        }
    }
}

#[cfg(not(feature = "llvm"))]
fn emit_ir(_unit: &CompilationUnit) -> bool {
    true
}
