//! Calculation Context
//!
//! Per-invocation state: the established operand precision, the active
//! rounding mode, and the accumulated exception flags. A fresh context is
//! built at every program start and never shared across invocations.

use rustc_apfloat::{Round, Status};

use crate::error::{CalcError, CalcResult};
use crate::flags::ExceptionFlags;
use crate::formats::Precision;

/// Mutable state of one calculator run
#[derive(Debug, Clone)]
pub struct CalcContext {
    established: Option<Precision>,
    rounding: Round,
    flags: ExceptionFlags,
}

impl Default for CalcContext {
    fn default() -> Self {
        CalcContext {
            established: None,
            rounding: Round::NearestTiesToEven,
            flags: ExceptionFlags::new(),
        }
    }
}

impl CalcContext {
    /// Fresh context: round-to-nearest-even, no established precision,
    /// flags clear
    pub fn new() -> Self {
        Self::default()
    }

    /// Active rounding mode
    pub fn rounding(&self) -> Round {
        self.rounding
    }

    /// Replace the rounding mode
    pub fn set_rounding(&mut self, round: Round) {
        self.rounding = round;
    }

    /// Established operand precision, if an operand has been parsed
    pub fn established(&self) -> Option<Precision> {
        self.established
    }

    /// Apply the operand-size consistency rule
    ///
    /// The first operand of a run fixes the precision; later operands must
    /// match it.
    pub fn establish(&mut self, precision: Precision) -> CalcResult<()> {
        match self.established {
            Some(existing) if existing != precision => Err(CalcError::InconsistentOperandSize(
                precision.bytes(),
                existing.bytes(),
            )),
            _ => {
                self.established = Some(precision);
                Ok(())
            }
        }
    }

    /// Fold one engine operation's status into the accumulated flags
    pub fn record(&mut self, status: Status) {
        self.flags.record(status);
    }

    /// Snapshot of the accumulated exception flags
    pub fn flags(&self) -> ExceptionFlags {
        self.flags
    }
}
