//! IEEE-754 Decomposition Core
//!
//! Public API surface for the floating-point calculator core.

pub mod error;
pub mod formats;
pub mod pattern;
pub mod decode;
pub mod render;
pub mod flags;
pub mod context;
pub mod parse;
pub mod convert;
pub mod arith;

// Re-export commonly used types
pub use error::{CalcError, CalcResult};
pub use formats::{FieldLayout, Precision};
pub use pattern::BitPattern;
pub use decode::{classify, extract, DecodedFields, ValueClass};
pub use render::{format_pattern, FormattedReport};
pub use flags::ExceptionFlags;
pub use context::CalcContext;
pub use parse::{parse_num, parse_round};
pub use convert::convert;
pub use arith::{evaluate, ArithOp};
pub use rustc_apfloat::Round;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_one_widens_to_single_exactly() {
        let mut ctx = CalcContext::new();
        let input = parse_num("3c00", &mut ctx).expect("parse failed");
        let output = convert(input, Precision::Single, &mut ctx);

        assert_eq!(
            format_pattern(input).to_string(),
            "0x3c00 = 1 = +1.0 x 2^0: Biased Exp 15 Fract 0x0"
        );
        assert_eq!(
            format_pattern(output).to_string(),
            "0x3f80_0000 = 1 = +1.0 x 2^0: Biased Exp 127 Fract 0x0"
        );
        assert_eq!(
            ctx.flags().to_string(),
            "exceptions: Inexact 0 Underflow 0 Overflow 0 DivideZero 0 Invalid 0"
        );
    }

    #[test]
    fn calculator_division_by_zero_reports_infinity() {
        let mut ctx = CalcContext::new();
        let x = parse_num("3c00", &mut ctx).expect("parse failed");
        let y = parse_num("0000", &mut ctx).expect("parse failed");
        let out = evaluate(ArithOp::Div, x, y, &mut ctx);

        assert_eq!(
            format_pattern(out).to_string(),
            "0x7c00 = inf = +inf: Biased Exp 31 Fract 0x0"
        );
        assert!(ctx.flags().divide_by_zero());
    }

    #[test]
    fn requested_rounding_mode_reaches_the_engine() {
        let mut ctx = CalcContext::new();
        ctx.set_rounding(parse_round("RP").expect("parse failed"));
        let input = parse_num("3f801000", &mut ctx).expect("parse failed");
        let output = convert(input, Precision::Half, &mut ctx);

        assert_eq!(output, BitPattern::Half(0x3c01));
        assert!(ctx.flags().inexact());
    }
}
