//! Four-function calculator over same-width hex encodings.

use fpcalc_cli::run_calculator;

fn main() {
    run_calculator();
}
