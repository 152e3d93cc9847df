//! Value Classification
//!
//! The five-way split of an encoding that every printed form depends on.
//! Total over all field combinations; there is no error path.

use crate::formats::FieldLayout;

use super::fields::DecodedFields;

/// Encoding class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// Zero exponent field, zero fraction
    Zero,

    /// Zero exponent field, nonzero fraction
    Subnormal,

    /// All-ones exponent field, zero fraction
    Infinity,

    /// All-ones exponent field, nonzero fraction (the payload)
    NaN,

    /// Any other exponent field
    Normal,
}

/// Classify decoded fields under their layout
pub fn classify(fields: DecodedFields, layout: FieldLayout) -> ValueClass {
    let max = layout.max_exponent();
    if fields.biased_exponent == 0 && fields.fraction == 0 {
        ValueClass::Zero
    } else if fields.biased_exponent == 0 {
        ValueClass::Subnormal
    } else if fields.biased_exponent == max && fields.fraction == 0 {
        ValueClass::Infinity
    } else if fields.biased_exponent == max {
        ValueClass::NaN
    } else {
        ValueClass::Normal
    }
}
