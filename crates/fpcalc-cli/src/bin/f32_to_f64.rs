//! Widen a single-precision encoding to double precision.

use fpcalc_cli::run_converter;
use fpcalc_core::Precision;

fn main() {
    run_converter(Precision::Single, Precision::Double);
}
