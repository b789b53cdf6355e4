//! Structured diagnostics for the Foundations front end.
//!
//! Diagnostics are values: the lexer and parser append them to a
//! [`DiagnosticList`] and keep going. Nothing here is used for control flow.
//!
//! Each diagnostic carries:
//! - a numeric [`ErrorCode`] (`0x1xxx` errors, `0x2xxx` warnings)
//! - a [`Severity`]
//! - the source [`Position`](fnd_ir::Position) it refers to
//! - a message

mod diagnostic;
mod error_code;
mod list;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use list::DiagnosticList;
