//! Foundations front-end CLI.

use fndc::commands::{lex_file, parse_args, parse_file, Command};

fn main() {
    fndc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let result = match command {
        Command::Help => {
            print_usage();
            return;
        }
        Command::Version => {
            println!("fnd {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Command::Lex { path } => lex_file(&path),
        Command::Parse { path, options } => parse_file(&path, options),
    };

    match result {
        Ok(summary) => std::process::exit(summary.exit_code()),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!("Foundations front end");
    eprintln!();
    eprintln!("Usage: fnd <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file>              Print the token stream");
    eprintln!("  parse <file> [--tree]   Print one tree per expression");
    eprintln!("  help                    Show this message");
    eprintln!("  version                 Show the version");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=fnd_parse=trace) for debug tracing.");
}
