//! Lox interpreter CLI.

use std::io;

use lox_diagnostic::console_reporter;
use loxc::{
    init_tracing, lex_file, parse_file, run_file, run_repl, DriverError, RunStatus, Session,
};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        None => repl(),
        Some("run") => file_arg(&args, "run").and_then(|path| run_file(path, console_reporter())),
        Some("lex") => file_arg(&args, "lex").and_then(|path| lex_file(path, console_reporter())),
        Some("parse") => {
            file_arg(&args, "parse").and_then(|path| parse_file(path, console_reporter()))
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(RunStatus::Ok)
        }
        Some("version" | "--version" | "-V") => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            Ok(RunStatus::Ok)
        }
        Some(path) if !path.starts_with('-') && args.len() == 2 => {
            run_file(path, console_reporter())
        }
        Some(command) => Err(DriverError::usage(format!("Unknown command: {command}"))),
    };

    match result {
        Ok(RunStatus::Ok) => {}
        Ok(status) => std::process::exit(status.exit_code()),
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, DriverError::Usage(_)) {
                eprintln!();
                print_usage();
            }
            std::process::exit(err.exit_code());
        }
    }
}

fn file_arg<'a>(args: &'a [String], command: &str) -> Result<&'a str, DriverError> {
    match args {
        [_, _, path] => Ok(path.as_str()),
        _ => Err(DriverError::usage(format!("Usage: lox {command} <file.lox>"))),
    }
}

fn repl() -> Result<RunStatus, DriverError> {
    let mut session = Session::new(console_reporter());
    run_repl(&mut session, io::stdin().lock(), io::stdout())?;
    Ok(RunStatus::Ok)
}

fn print_usage() {
    eprintln!("Usage: lox [command] [file]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  (none)              Start the interactive prompt");
    eprintln!("  <file.lox>          Run a Lox program");
    eprintln!("  run <file.lox>      Run a Lox program");
    eprintln!("  lex <file.lox>      Print the token stream");
    eprintln!("  parse <file.lox>    Print the parsed program");
    eprintln!("  help                Show this help message");
    eprintln!("  version             Show version information");
    eprintln!();
    eprintln!("Prompt commands: :env, :globals, :quit");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG=<filter>   Enable tracing (e.g. lox_eval=debug)");
    eprintln!("  LOX_LOG_TREE=1      Render traces as an indented tree");
}
