//! Error types for expression construction and solving.

use spatium_intervals::DivisionByZero;
use thiserror::Error;

/// Errors produced while building or solving expressions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// The variable name does not match the identifier grammar
    /// (letters and digits, starting with a letter). Recoverable: retry
    /// with a corrected name.
    #[error("invalid variable name: {0:?}")]
    InvalidVariableName(String),

    /// A divisor folded to an interval with a zero bound during solve.
    /// Fatal for the solve in progress.
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZero),
}
