//! Arithmetic Evaluation
//!
//! Binary arithmetic over same-precision encodings, delegated to the
//! soft-float engine under the context's rounding mode. Raised exception
//! flags fold into the context alongside those from conversions.

use rustc_apfloat::ieee::{Double, Half, Single};
use rustc_apfloat::{Float, Round};

use crate::context::CalcContext;
use crate::error::{CalcError, CalcResult};
use crate::formats::Precision;
use crate::pattern::BitPattern;

/// Arithmetic operation selected by a single-character token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    /// Addition, token `+`
    Add,

    /// Subtraction, token `-`
    Sub,

    /// Multiplication, token `*`
    Mul,

    /// Division, token `/`
    Div,
}

impl ArithOp {
    /// Map an operator token to its operation
    pub fn from_token(token: &str) -> CalcResult<Self> {
        match token {
            "+" => Ok(ArithOp::Add),
            "-" => Ok(ArithOp::Sub),
            "*" => Ok(ArithOp::Mul),
            "/" => Ok(ArithOp::Div),
            _ => Err(CalcError::InvalidOperatorToken(token.to_string())),
        }
    }
}

/// Evaluate `x op y` at the operands' shared precision
pub fn evaluate(op: ArithOp, x: BitPattern, y: BitPattern, ctx: &mut CalcContext) -> BitPattern {
    let round = ctx.rounding();
    let (xb, yb) = (x.raw() as u128, y.raw() as u128);
    match x.precision() {
        Precision::Half => BitPattern::Half(apply::<Half>(op, xb, yb, round, ctx) as u16),
        Precision::Single => BitPattern::Single(apply::<Single>(op, xb, yb, round, ctx) as u32),
        Precision::Double => BitPattern::Double(apply::<Double>(op, xb, yb, round, ctx) as u64),
    }
}

fn apply<F: Float>(op: ArithOp, x: u128, y: u128, round: Round, ctx: &mut CalcContext) -> u128 {
    let x = F::from_bits(x);
    let y = F::from_bits(y);
    let result = match op {
        ArithOp::Add => x.add_r(y, round),
        ArithOp::Sub => x.sub_r(y, round),
        ArithOp::Mul => x.mul_r(y, round),
        ArithOp::Div => x.div_r(y, round),
    };
    ctx.record(result.status);
    result.value.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{classify, extract, ValueClass};
    use yare::parameterized;

    const CLEAR: &str = "exceptions: Inexact 0 Underflow 0 Overflow 0 DivideZero 0 Invalid 0";

    #[parameterized(
        plus = { "+", ArithOp::Add },
        minus = { "-", ArithOp::Sub },
        star = { "*", ArithOp::Mul },
        slash = { "/", ArithOp::Div },
    )]
    fn token_maps_to_operation(token: &str, expected: ArithOp) {
        assert_eq!(ArithOp::from_token(token), Ok(expected));
    }

    #[parameterized(
        doubled = { "++" },
        unknown_single = { "%" },
        word = { "plus" },
        empty = { "" },
    )]
    fn bad_token_is_rejected(token: &str) {
        assert_eq!(
            ArithOp::from_token(token),
            Err(CalcError::InvalidOperatorToken(token.to_string()))
        );
    }

    #[test]
    fn half_addition_is_exact() {
        let mut ctx = CalcContext::new();
        let one = BitPattern::Half(0x3c00);
        let out = evaluate(ArithOp::Add, one, one, &mut ctx);
        assert_eq!(out, BitPattern::Half(0x4000));
        assert_eq!(ctx.flags().to_string(), CLEAR);
    }

    #[test]
    fn half_subtraction_is_exact() {
        let mut ctx = CalcContext::new();
        let two = BitPattern::Half(0x4000);
        let one = BitPattern::Half(0x3c00);
        assert_eq!(evaluate(ArithOp::Sub, two, one, &mut ctx), one);
    }

    #[test]
    fn single_addition_is_exact() {
        let mut ctx = CalcContext::new();
        let one = BitPattern::Single(0x3f80_0000);
        let out = evaluate(ArithOp::Add, one, one, &mut ctx);
        assert_eq!(out, BitPattern::Single(0x4000_0000));
    }

    #[test]
    fn double_multiplication_matches_hardware() {
        let mut ctx = CalcContext::new();
        let x = BitPattern::Double(1.5f64.to_bits());
        let y = BitPattern::Double(2.25f64.to_bits());
        let out = evaluate(ArithOp::Mul, x, y, &mut ctx);
        assert_eq!(out, BitPattern::Double((1.5f64 * 2.25f64).to_bits()));
    }

    #[test]
    fn division_by_zero_raises_flag() {
        let mut ctx = CalcContext::new();
        let one = BitPattern::Half(0x3c00);
        let zero = BitPattern::Half(0x0000);
        let out = evaluate(ArithOp::Div, one, zero, &mut ctx);
        assert_eq!(out, BitPattern::Half(0x7c00));
        assert!(ctx.flags().divide_by_zero());
        assert!(!ctx.flags().invalid());
    }

    #[test]
    fn zero_over_zero_is_invalid() {
        let mut ctx = CalcContext::new();
        let zero = BitPattern::Half(0x0000);
        let out = evaluate(ArithOp::Div, zero, zero, &mut ctx);
        assert!(ctx.flags().invalid());
        assert_eq!(classify(extract(out), out.layout()), ValueClass::NaN);
    }

    #[test]
    fn overflow_saturates_and_flags() {
        let mut ctx = CalcContext::new();
        let max = BitPattern::Half(0x7bff);
        let out = evaluate(ArithOp::Mul, max, max, &mut ctx);
        assert_eq!(out, BitPattern::Half(0x7c00));
        assert!(ctx.flags().overflow());
        assert!(ctx.flags().inexact());
    }

    // 1 + 2^-24 is inexact at half precision; the rounding mode picks
    // which neighbour survives.
    #[parameterized(
        ties_to_even = { Round::NearestTiesToEven, 0x3c00 },
        toward_positive = { Round::TowardPositive, 0x3c01 },
        toward_zero = { Round::TowardZero, 0x3c00 },
    )]
    fn inexact_sum_respects_rounding(round: Round, expected: u16) {
        let mut ctx = CalcContext::new();
        ctx.set_rounding(round);
        let one = BitPattern::Half(0x3c00);
        let tiny = BitPattern::Half(0x0001);
        assert_eq!(evaluate(ArithOp::Add, one, tiny, &mut ctx), BitPattern::Half(expected));
        assert!(ctx.flags().inexact());
    }
}
