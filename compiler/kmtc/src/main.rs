//! The `kmt` command-line driver.

use std::process::ExitCode;

use kmtc::commands::{self, CliError};

fn main() -> ExitCode {
    kmtc::tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::FAILURE;
    };
    let rest = &args[2..];

    let result = match command.as_str() {
        "run" => commands::parse_run_args("run", rest)
            .and_then(|(path, options)| commands::run_file(&path, options)),
        "check" => single_path("check", rest).and_then(commands::check_file),
        "lex" => single_path("lex", rest).and_then(commands::lex_file),
        "parse" => single_path("parse", rest).and_then(commands::parse_file),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("kmt {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        // `kmt prog.kmt` is shorthand for `kmt run prog.kmt`.
        path if std::path::Path::new(path).extension().is_some_and(|e| e == "kmt") => {
            commands::parse_run_args("run", &args[1..])
                .and_then(|(path, options)| commands::run_file(&path, options))
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.is_reported() {
                eprintln!("error: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn single_path<'a>(command: &'static str, rest: &'a [String]) -> Result<&'a str, CliError> {
    rest.first()
        .map(String::as_str)
        .ok_or(CliError::MissingPath(command))
}

fn print_usage() {
    eprintln!("kmt - parallel numeric sequence language");
    eprintln!();
    eprintln!("Usage: kmt <command> [options] <file>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file>      Evaluate a program and print its output");
    eprintln!("  check <file>    Report lexer, parser and binder errors without running");
    eprintln!("  lex <file>      Print the token stream");
    eprintln!("  parse <file>    Print the syntax tree");
    eprintln!("  help            Show this message");
    eprintln!("  version         Show the version");
    eprintln!();
    eprintln!("Run options:");
    eprintln!("  --chunk-size=N  Elements per parallel work unit (default 10000)");
    eprintln!("  --threads=N     Use a dedicated pool of N worker threads");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  KMT_LOG         Tracing filter, e.g. KMT_LOG=debug");
}
