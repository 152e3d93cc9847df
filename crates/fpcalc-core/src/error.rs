//! Calculator Error Types
//!
//! Defines all error conditions produced while parsing calculator input.
//! Every error is fatal to the invocation; the Display text is the exact
//! diagnostic sentence the binaries print before exiting.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    // Operand errors
    UnsupportedPrecision,
    InconsistentOperandSize(u32, u32),
    MalformedNumericLiteral(String),

    // Token errors
    InvalidRoundingMode(String),
    InvalidOperatorToken(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::UnsupportedPrecision =>
                write!(f, "Error: only half, single, and double precision supported"),
            CalcError::InconsistentOperandSize(new, established) =>
                write!(f, "Error: inconsistent operand sizes {} and {}", new, established),
            CalcError::MalformedNumericLiteral(text) =>
                write!(f, "Error: {} is not a hexadecimal number", text),

            CalcError::InvalidRoundingMode(token) =>
                write!(f, "Rounding mode of {} is not known", token),
            CalcError::InvalidOperatorToken(token) =>
                write!(f, "Bad op {} must be 1 character", token),
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
