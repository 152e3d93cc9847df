//! Operand and Token Parsing
//!
//! Hex operand parsing with length-based precision inference, plus the
//! rounding-mode token map. Failures are returned to the caller; the
//! binaries decide how to terminate.

use rustc_apfloat::Round;

use crate::context::CalcContext;
use crate::error::{CalcError, CalcResult};
use crate::formats::Precision;
use crate::pattern::BitPattern;

/// Parse a hex operand, inferring its precision from the digit count
///
/// The inferred precision is checked against the context's established one
/// and then becomes established. 17 and 18 digit literals can exceed 64
/// bits; those saturate to the all-ones value.
pub fn parse_num(text: &str, ctx: &mut CalcContext) -> CalcResult<BitPattern> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CalcError::MalformedNumericLiteral(text.to_string()));
    }
    let precision = Precision::from_hex_len(text.len())?;
    ctx.establish(precision)?;
    let raw = u64::from_str_radix(text, 16).unwrap_or(u64::MAX);
    Ok(BitPattern::new(precision, raw))
}

/// Map a rounding-mode token to the engine's rounding enum
pub fn parse_round(token: &str) -> CalcResult<Round> {
    match token {
        "RNE" => Ok(Round::NearestTiesToEven),
        "RZ" => Ok(Round::TowardZero),
        "RP" => Ok(Round::TowardPositive),
        "RM" => Ok(Round::TowardNegative),
        _ => Err(CalcError::InvalidRoundingMode(token.to_string())),
    }
}
