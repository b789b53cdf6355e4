//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write;
use std::path::Path;

use fnd_diagnostic::DiagnosticList;
use fnd_lexer::lex;
use fnd_parse::Parser;
use tracing::debug;

use super::{read_source, ParseOptions, Summary};
use crate::DriverError;

/// Rendered command output plus every diagnostic, lexer's first.
#[derive(Clone, Debug)]
pub struct Report {
    pub output: String,
    pub diagnostics: DiagnosticList,
    pub summary: Summary,
}

impl Report {
    /// Print the output to stdout and diagnostics to stderr.
    pub fn emit(&self) {
        print!("{}", self.output);
        for diagnostic in &self.diagnostics {
            eprintln!("{diagnostic}");
        }
    }
}

/// Render the token stream of `source`, one token per line.
pub fn lex_source(source: &str) -> Report {
    let lexed = lex(source);
    let mut output = String::new();
    for token in &lexed.tokens {
        let _ = writeln!(output, "{token}");
    }
    let summary = Summary::from_diagnostics(&lexed.diagnostics);
    Report {
        output,
        diagnostics: lexed.diagnostics,
        summary,
    }
}

/// Parse every expression in `source` and render one tree per expression.
///
/// Terminators between expressions are skipped here; the parser stops at
/// each one.
pub fn parse_source(source: &str, options: ParseOptions) -> Report {
    let lexed = lex(source);
    let mut parser = Parser::new(&lexed.tokens);
    let mut output = String::new();
    let mut failed = 0;

    loop {
        while parser.peek().kind.is_terminator() && !parser.is_at_end() {
            parser.eat();
        }
        if parser.is_at_end() {
            break;
        }
        match parser.parse_expression() {
            Ok(root) if options.tree => {
                let _ = write!(output, "{}", root.dump());
            }
            Ok(root) => {
                let _ = writeln!(output, "{} {root}", root.position);
            }
            Err(failure) => {
                failed += 1;
                let _ = writeln!(output, "{} <error {}>", failure.start, failure.code());
            }
        }
    }

    let mut diagnostics = lexed.diagnostics;
    diagnostics.extend(parser.into_diagnostics());
    let mut summary = Summary::from_diagnostics(&diagnostics);
    summary.failed_expressions = failed;
    debug!(
        expressions_failed = failed,
        errors = summary.errors,
        warnings = summary.warnings,
        "parse finished"
    );
    Report {
        output,
        diagnostics,
        summary,
    }
}

/// Lex a file and print its token stream.
pub fn lex_file(path: &Path) -> Result<Summary, DriverError> {
    let source = read_source(path)?;
    let report = lex_source(&source);
    report.emit();
    Ok(report.summary)
}

/// Parse a file and print its expression trees.
pub fn parse_file(path: &Path, options: ParseOptions) -> Result<Summary, DriverError> {
    let source = read_source(path)?;
    let report = parse_source(&source, options);
    report.emit();
    Ok(report.summary)
}
