//! Report Lines
//!
//! The full decomposition line printed for one value: grouped hex,
//! approximate decimal, scientific form, biased exponent, fraction hex.
//! The report is built once per request and owns no state.

use std::fmt;

use half::f16;

use crate::decode::{classify, extract};
use crate::pattern::BitPattern;

use super::sci::scientific_form;

/// Fully rendered decomposition of one encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReport {
    /// Raw bits as `0x`-prefixed hex, underscore between 4-nibble groups
    pub hex: String,

    /// Approximate decimal value, rendered at the encoding's own width
    pub approx: String,

    /// Class-dependent scientific form
    pub sci: String,

    /// Exponent field as stored
    pub biased_exponent: u64,

    /// Fraction field
    pub fraction: u64,
}

/// Decompose and render one encoding
pub fn format_pattern(pattern: BitPattern) -> FormattedReport {
    let layout = pattern.layout();
    let fields = extract(pattern);
    let class = classify(fields, layout);
    FormattedReport {
        hex: grouped_hex(pattern),
        approx: approx_decimal(pattern),
        sci: scientific_form(fields, layout, class),
        biased_exponent: fields.biased_exponent,
        fraction: fields.fraction,
    }
}

impl fmt::Display for FormattedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} = {}: Biased Exp {} Fract 0x{:x}",
            self.hex, self.approx, self.sci, self.biased_exponent, self.fraction
        )
    }
}

/// Raw bits in 4-nibble groups, most significant group first
fn grouped_hex(pattern: BitPattern) -> String {
    let bits = pattern.raw();
    let groups = pattern.layout().total_bits / 16;
    let mut out = String::from("0x");
    for i in (0..groups).rev() {
        out.push_str(&format!("{:04x}", (bits >> (16 * i)) & 0xffff));
        if i != 0 {
            out.push('_');
        }
    }
    out
}

/// The encoding viewed as its native value; a view change, never arithmetic
fn approx_decimal(pattern: BitPattern) -> String {
    match pattern {
        BitPattern::Half(v) => format!("{}", f16::from_bits(v).to_f32()),
        BitPattern::Single(v) => format!("{}", f32::from_bits(v)),
        BitPattern::Double(v) => format!("{}", f64::from_bits(v)),
    }
}
