//! The diagnostic record.


use std::fmt;

use fnd_ir::Position;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// The offending literal or expression was abandoned.
    Error,
    /// A substitute value was used; processing continued unchanged.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A located, coded problem report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub position: Position,
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
}

impl Diagnostic {
    /// A diagnostic with the code's default severity.
    pub fn new(code: ErrorCode, position: Position, message: impl Into<String>) -> Self {
        Diagnostic {
            position,
            severity: code.severity(),
            code,
            message: message.into(),
        }
    }

    /// A diagnostic whose message is the code's description.
    pub fn from_code(code: ErrorCode, position: Position) -> Self {
        Self::new(code, position, code.description())
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} at {}",
            self.severity, self.code, self.message, self.position
        )
    }
}
