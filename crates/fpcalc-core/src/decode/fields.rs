//! Field Extraction
//!
//! Splits a raw encoding into sign, biased exponent, and fraction by
//! shift and mask. No interpretation of the fields happens here.

use crate::formats::FieldLayout;
use crate::pattern::BitPattern;

/// Decoded sign/exponent/fraction triple
///
/// Ephemeral: recomputed from the pattern on every format request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedFields {
    /// Sign bit is set (value is negative)
    pub sign: bool,

    /// Exponent field as stored, before bias removal
    pub biased_exponent: u64,

    /// Fraction field; the NaN payload when the exponent is all ones
    pub fraction: u64,
}

/// Extract the three fields under the pattern's own layout
pub fn extract(pattern: BitPattern) -> DecodedFields {
    let layout = pattern.layout();
    let bits = pattern.raw();
    DecodedFields {
        sign: (bits >> (layout.total_bits - 1)) & 1 == 1,
        biased_exponent: (bits >> layout.fraction_bits) & layout.max_exponent(),
        fraction: bits & layout.fraction_mask(),
    }
}

impl DecodedFields {
    /// Sign character used by every printed form
    pub fn sign_char(&self) -> char {
        if self.sign {
            '-'
        } else {
            '+'
        }
    }

    /// Stored exponent with the bias removed
    pub fn true_exponent(&self, layout: FieldLayout) -> i64 {
        self.biased_exponent as i64 - layout.exponent_bias as i64
    }
}
