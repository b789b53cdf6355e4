//! Command handlers for the `fnd` CLI.
//!
//! Argument parsing and file loading live here; the `lex` and `parse`
//! commands are in [`debug`].

mod debug;


use std::path::{Path, PathBuf};

use fnd_diagnostic::DiagnosticList;

use crate::DriverError;

pub use debug::{lex_file, lex_source, parse_file, parse_source, Report};

/// Options for `fnd parse`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Print indented trees instead of S-expressions.
    pub tree: bool,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Lex { path: PathBuf },
    Parse { path: PathBuf, options: ParseOptions },
    Help,
    Version,
}

/// Parse `args` (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, DriverError> {
    let Some(command) = args.first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),
        "lex" => {
            let path = single_path(&args[1..], "lex")?;
            Ok(Command::Lex { path })
        }
        "parse" => {
            let mut options = ParseOptions::default();
            let mut path = None;
            for arg in &args[1..] {
                if arg == "--tree" || arg == "-t" {
                    options.tree = true;
                } else if arg.starts_with('-') {
                    return Err(DriverError::Usage(format!("unknown option `{arg}` for `parse`")));
                } else if path.is_none() {
                    path = Some(PathBuf::from(arg));
                } else {
                    return Err(DriverError::Usage("`parse` takes one file".to_owned()));
                }
            }
            let Some(path) = path else {
                return Err(DriverError::Usage("missing file path for `parse`".to_owned()));
            };
            Ok(Command::Parse { path, options })
        }
        other => Err(DriverError::Usage(format!("unknown command `{other}`"))),
    }
}

fn single_path(rest: &[String], command: &str) -> Result<PathBuf, DriverError> {
    match rest {
        [path] if !path.starts_with('-') => Ok(PathBuf::from(path)),
        [] => Err(DriverError::Usage(format!("missing file path for `{command}`"))),
        _ => Err(DriverError::Usage(format!("`{command}` takes exactly one file"))),
    }
}

/// Read a source file and normalize its line endings.
pub fn read_source(path: &Path) -> Result<String, DriverError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_line_endings(&raw))
}

/// Convert `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Counts that decide the process exit status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub failed_expressions: usize,
}

impl Summary {
    pub(crate) fn from_diagnostics(diagnostics: &DiagnosticList) -> Self {
        Summary {
            errors: diagnostics.error_count(),
            warnings: diagnostics.warning_count(),
            failed_expressions: 0,
        }
    }

    /// `0` when nothing failed, `1` otherwise. Warnings never fail a run.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.errors > 0 || self.failed_expressions > 0)
    }
}
