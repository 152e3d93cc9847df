//! Precision Formats
//!
//! Field layout constants for the three supported IEEE-754 binary formats.
//! This layer describes encodings only; it performs no arithmetic.

use crate::error::{CalcError, CalcResult};

/// Supported encoding precisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// binary16
    Half,
    /// binary32
    Single,
    /// binary64
    Double,
}

/// Per-precision field geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Total encoding width in bits
    pub total_bits: u32,

    /// Exponent field width in bits
    pub exponent_bits: u32,

    /// Fraction field width in bits
    pub fraction_bits: u32,

    /// Bias subtracted from the stored exponent
    pub exponent_bias: i32,
}

impl Precision {
    /// Field layout for this precision
    pub const fn layout(self) -> FieldLayout {
        match self {
            Precision::Half => FieldLayout {
                total_bits: 16,
                exponent_bits: 5,
                fraction_bits: 10,
                exponent_bias: 15,
            },
            Precision::Single => FieldLayout {
                total_bits: 32,
                exponent_bits: 8,
                fraction_bits: 23,
                exponent_bias: 127,
            },
            Precision::Double => FieldLayout {
                total_bits: 64,
                exponent_bits: 11,
                fraction_bits: 52,
                exponent_bias: 1023,
            },
        }
    }

    /// Operand size in bytes (2, 4, or 8)
    pub const fn bytes(self) -> u32 {
        self.layout().total_bits / 8
    }

    /// Infer a precision from the digit count of a hex literal
    ///
    /// Fewer than 8 digits selects Half, fewer than 16 Single, fewer than
    /// 19 Double. Anything longer has no supported width.
    pub fn from_hex_len(len: usize) -> CalcResult<Precision> {
        if len < 8 {
            Ok(Precision::Half)
        } else if len < 16 {
            Ok(Precision::Single)
        } else if len < 19 {
            Ok(Precision::Double)
        } else {
            Err(CalcError::UnsupportedPrecision)
        }
    }
}

impl FieldLayout {
    /// All-ones exponent field value
    pub const fn max_exponent(self) -> u64 {
        (1u64 << self.exponent_bits) - 1
    }

    /// Mask covering the fraction field
    pub const fn fraction_mask(self) -> u64 {
        (1u64 << self.fraction_bits) - 1
    }

    /// Fixed exponent of subnormal values (1 - bias)
    pub const fn subnormal_exponent(self) -> i32 {
        1 - self.exponent_bias
    }
}
