mod args;

use std::fs;
use std::process::ExitCode;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use args::Args;
use vm::{InterpretError, Vm};

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    match args::parse_args(&argv) {
        Args::Usage => {
            eprintln!("Usage: clox [path]");
            ExitCode::from(exitcode::USAGE as u8)
        }
        Args::Repl => {
            run_repl();
            ExitCode::SUCCESS
        }
        Args::File { path, dump } => run_file(&path, dump),
    }
}

fn run_repl() {
    let mut vm = Vm::new();
    let mut editor = DefaultEditor::new().expect("failed to initialize line editor");
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                report_errors(vm.interpret(&line));
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                eprintln!("{err}");
                break;
            }
        }
    }
}

fn run_file(path: &str, dump: bool) -> ExitCode {
    let source = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            eprintln!("Could not read file \"{path}\": {err}");
            return ExitCode::from(exitcode::IOERR as u8);
        }
    };

    if dump {
        dump_chunk(&source);
    }

    let mut vm = Vm::new();
    match vm.interpret(&source) {
        Ok(()) => ExitCode::from(exitcode::OK as u8),
        Err(InterpretError::Compile(errors)) => {
            for error in &errors {
                eprintln!("{error}");
            }
            ExitCode::from(exitcode::DATAERR as u8)
        }
        Err(InterpretError::Runtime(error)) => {
            eprintln!("{error}");
            ExitCode::from(exitcode::SOFTWARE as u8)
        }
    }
}

/// `--dump` compiles the source a second time into a throwaway heap purely
/// to print its bytecode; the real run below recompiles into the VM's own
/// heap, so dumping never perturbs execution.
fn dump_chunk(source: &str) {
    let mut heap = compiler::heap::Heap::new();
    match compiler::compile(source, &mut heap) {
        Ok(function) => eprint!("{:?}", function.chunk),
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
        }
    }
}

fn report_errors(result: Result<(), InterpretError>) {
    match result {
        Ok(()) => {}
        Err(InterpretError::Compile(errors)) => {
            for error in &errors {
                eprintln!("{error}");
            }
        }
        Err(InterpretError::Runtime(error)) => eprintln!("{error}"),
    }
}
