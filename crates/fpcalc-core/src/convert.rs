//! Precision Conversion
//!
//! Converts an encoding between the three precisions through the
//! soft-float engine, folding any raised exception flags into the context.
//! The engine is a black box; nothing here inspects the value.

use rustc_apfloat::ieee::{Double, Half, Single};
use rustc_apfloat::{Float, FloatConvert, Round};

use crate::context::CalcContext;
use crate::formats::Precision;
use crate::pattern::BitPattern;

/// Convert `input` to `target` precision under the context's rounding mode
pub fn convert(input: BitPattern, target: Precision, ctx: &mut CalcContext) -> BitPattern {
    let round = ctx.rounding();
    let bits = input.raw() as u128;
    match (input.precision(), target) {
        (Precision::Half, Precision::Single) => {
            BitPattern::Single(step::<Half, Single>(bits, round, ctx) as u32)
        }
        (Precision::Half, Precision::Double) => {
            BitPattern::Double(step::<Half, Double>(bits, round, ctx) as u64)
        }
        (Precision::Single, Precision::Half) => {
            BitPattern::Half(step::<Single, Half>(bits, round, ctx) as u16)
        }
        (Precision::Single, Precision::Double) => {
            BitPattern::Double(step::<Single, Double>(bits, round, ctx) as u64)
        }
        (Precision::Double, Precision::Half) => {
            BitPattern::Half(step::<Double, Half>(bits, round, ctx) as u16)
        }
        (Precision::Double, Precision::Single) => {
            BitPattern::Single(step::<Double, Single>(bits, round, ctx) as u32)
        }
        // Same width: nothing to convert
        _ => input,
    }
}

fn step<F, T>(bits: u128, round: Round, ctx: &mut CalcContext) -> u128
where
    F: Float + FloatConvert<T>,
    T: Float,
{
    let mut loses_info = false;
    let converted = F::from_bits(bits).convert_r(round, &mut loses_info);
    ctx.record(converted.status);
    converted.value.to_bits()
}
