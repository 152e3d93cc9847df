//! Exception Flag Reporting
//!
//! The five IEEE-754 exception indicators accumulated over one run,
//! printed as labeled 0/1 values in the fixed order Inexact, Underflow,
//! Overflow, DivideZero, Invalid.

use std::fmt;

use rustc_apfloat::Status;

/// Accumulated exception indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionFlags {
    status: Status,
}

impl ExceptionFlags {
    /// All clear
    pub fn new() -> Self {
        ExceptionFlags { status: Status::OK }
    }

    /// Fold in the status of one engine operation
    pub fn record(&mut self, status: Status) {
        self.status = self.status | status;
    }

    pub fn inexact(&self) -> bool {
        self.status.intersects(Status::INEXACT)
    }

    pub fn underflow(&self) -> bool {
        self.status.intersects(Status::UNDERFLOW)
    }

    pub fn overflow(&self) -> bool {
        self.status.intersects(Status::OVERFLOW)
    }

    pub fn divide_by_zero(&self) -> bool {
        self.status.intersects(Status::DIV_BY_ZERO)
    }

    pub fn invalid(&self) -> bool {
        self.status.intersects(Status::INVALID_OP)
    }
}

impl Default for ExceptionFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExceptionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exceptions: Inexact {} Underflow {} Overflow {} DivideZero {} Invalid {}",
            self.inexact() as u8,
            self.underflow() as u8,
            self.overflow() as u8,
            self.divide_by_zero() as u8,
            self.invalid() as u8
        )
    }
}
