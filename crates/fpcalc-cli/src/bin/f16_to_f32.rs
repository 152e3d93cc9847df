//! Widen a half-precision encoding to single precision.

use fpcalc_cli::run_converter;
use fpcalc_core::Precision;

fn main() {
    run_converter(Precision::Half, Precision::Single);
}
