//! Scientific Form
//!
//! Composes the class-dependent scientific notation string from the sign
//! character, the binary fraction digits, and the exponent term.

use crate::decode::class::ValueClass;
use crate::decode::fields::DecodedFields;
use crate::formats::FieldLayout;

use super::binary::binary_digits;

/// Render the scientific form of already-classified fields
pub fn scientific_form(fields: DecodedFields, layout: FieldLayout, class: ValueClass) -> String {
    let sign = fields.sign_char();
    let fraction = binary_digits(fields.fraction, layout.fraction_bits);
    match class {
        ValueClass::Zero => format!("{}zero", sign),
        ValueClass::Subnormal => format!(
            "Denorm: {}0.{} x 2^{}",
            sign,
            fraction,
            layout.subnormal_exponent()
        ),
        ValueClass::Infinity => format!("{}inf", sign),
        ValueClass::NaN => format!("NaN Payload: {}{}", sign, fraction),
        ValueClass::Normal => format!(
            "{}1.{} x 2^{}",
            sign,
            fraction,
            fields.true_exponent(layout)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{classify, extract};
    use crate::pattern::BitPattern;
    use yare::parameterized;

    fn render(pattern: BitPattern) -> String {
        let fields = extract(pattern);
        let class = classify(fields, pattern.layout());
        scientific_form(fields, pattern.layout(), class)
    }

    #[parameterized(
        half_pos_zero = { BitPattern::Half(0x0000), "+zero" },
        half_neg_zero = { BitPattern::Half(0x8000), "-zero" },
        half_min_subnormal = { BitPattern::Half(0x0001), "Denorm: +0.0000000001 x 2^-14" },
        half_one = { BitPattern::Half(0x3c00), "+1.0 x 2^0" },
        half_three_halves = { BitPattern::Half(0x3e00), "+1.1 x 2^0" },
        half_neg_inf = { BitPattern::Half(0xfc00), "-inf" },
        half_quiet_nan = { BitPattern::Half(0x7e00), "NaN Payload: +1" },
        single_pos_inf = { BitPattern::Single(0x7f80_0000), "+inf" },
        single_subnormal = { BitPattern::Single(0x8040_0000), "Denorm: -0.1 x 2^-126" },
        single_neg_pi = { BitPattern::Single(0xc049_0fdb), "-1.10010010000111111011011 x 2^1" },
        double_min_normal = { BitPattern::Double(0x0010_0000_0000_0000), "+1.0 x 2^-1022" },
        double_nan_payload = { BitPattern::Double(0x7ff0_0000_0000_0003), "NaN Payload: +0000000000000000000000000000000000000000000000000011" },
    )]
    fn forms(pattern: BitPattern, expected: &str) {
        assert_eq!(render(pattern), expected);
    }

    #[test]
    fn subnormal_label_is_per_precision() {
        assert!(render(BitPattern::Half(0x0001)).ends_with("2^-14"));
        assert!(render(BitPattern::Single(0x0000_0001)).ends_with("2^-126"));
        assert!(render(BitPattern::Double(0x0000_0000_0000_0001)).ends_with("2^-1022"));
    }
}
