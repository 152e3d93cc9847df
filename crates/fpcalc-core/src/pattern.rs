//! Bit Pattern Representation
//!
//! A raw IEEE-754 encoding tagged with its precision. The tag fixes which
//! field layout may decode the value, so a width mismatch cannot be
//! constructed.

use crate::formats::{FieldLayout, Precision};

/// Raw encoding tagged with its precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitPattern {
    /// 16-bit encoding
    Half(u16),

    /// 32-bit encoding
    Single(u32),

    /// 64-bit encoding
    Double(u64),
}

impl BitPattern {
    /// Tag a raw value with a precision, truncating to the encoding width
    pub fn new(precision: Precision, raw: u64) -> Self {
        match precision {
            Precision::Half => BitPattern::Half(raw as u16),
            Precision::Single => BitPattern::Single(raw as u32),
            Precision::Double => BitPattern::Double(raw),
        }
    }

    /// Precision tag
    pub fn precision(self) -> Precision {
        match self {
            BitPattern::Half(_) => Precision::Half,
            BitPattern::Single(_) => Precision::Single,
            BitPattern::Double(_) => Precision::Double,
        }
    }

    /// Field layout matching the tag
    pub fn layout(self) -> FieldLayout {
        self.precision().layout()
    }

    /// Raw bits widened to 64
    pub fn raw(self) -> u64 {
        match self {
            BitPattern::Half(v) => v as u64,
            BitPattern::Single(v) => v as u64,
            BitPattern::Double(v) => v,
        }
    }

    /// Re-tag at a fixed width, truncating high bits if the width shrinks
    ///
    /// The converter programs take operands at one width regardless of the
    /// digit count the literal happened to have.
    pub fn with_precision(self, precision: Precision) -> Self {
        BitPattern::new(precision, self.raw())
    }
}
