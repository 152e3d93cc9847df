//! Narrow a double-precision encoding to single precision.

use fpcalc_cli::run_converter;
use fpcalc_core::Precision;

fn main() {
    run_converter(Precision::Double, Precision::Single);
}
