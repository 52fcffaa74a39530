//! Calculation error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a consuming operation can produce.
///
/// Every variant is caught by the engine and converted into the error
/// transition; none escape to the caller. The `Display` impl carries the
/// diagnostic message used in traces, while [`CalcError::display_text`]
/// is the literal string shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// The pending entry is not a finite decimal number.
    #[error("cannot parse {entry:?} as a finite number")]
    Parse { entry: String },

    /// Division or modulo where the second operand is exactly zero.
    #[error("division or modulo by zero")]
    DivideByZero,

    /// A scientific function applied outside its mathematical domain.
    #[error("{function} is undefined for this input")]
    Domain { function: String },
}

impl CalcError {
    /// The literal string shown on the calculator display.
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::DivideByZero => "Divide by 0",
            Self::Parse { .. } | Self::Domain { .. } => "Error",
        }
    }
}
