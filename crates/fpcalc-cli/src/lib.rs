//! IEEE-754 Calculator Drivers
//!
//! Shared argument handling for the precision converter binaries and the
//! four-function calculator. Each binary is one thin main over these
//! drivers; every diagnostic and report line goes through here.

use std::env;
use std::process;

use fpcalc_core::{
    convert, evaluate, format_pattern, parse_num, parse_round, ArithOp, CalcContext, CalcResult,
    Precision,
};

/// Run one `<hex value> [<rounding mode>]` converter between fixed widths
pub fn run_converter(from: Precision, to: Precision) {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 && args.len() != 3 {
        print_usage(&args[0], "<hex value> [<rounding mode>]");
        process::exit(1);
    }

    if let Err(e) = convert_once(&args, from, to) {
        println!("{}", e);
        process::exit(1);
    }
}

/// Run the `<hex value> <op> <hex value> [<rounding mode>]` calculator
pub fn run_calculator() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 && args.len() != 5 {
        print_usage(&args[0], "<hex value> <op> <hex value> [<rounding mode>]");
        process::exit(1);
    }

    if let Err(e) = evaluate_once(&args) {
        println!("{}", e);
        process::exit(1);
    }
}

fn convert_once(args: &[String], from: Precision, to: Precision) -> CalcResult<()> {
    let mut ctx = CalcContext::new();

    // Rounding mode is settled before any operand is read
    if let Some(token) = args.get(2) {
        ctx.set_rounding(parse_round(token)?);
    }

    // The literal's inferred width only feeds the consistency check; the
    // stored bits are re-tagged at the converter's own input width
    let input = parse_num(&args[1], &mut ctx)?.with_precision(from);
    let output = convert(input, to, &mut ctx);

    println!("Input:  {}", format_pattern(input));
    println!("Output: {}", format_pattern(output));
    println!("{}", ctx.flags());
    Ok(())
}

fn evaluate_once(args: &[String]) -> CalcResult<()> {
    let mut ctx = CalcContext::new();

    if let Some(token) = args.get(4) {
        ctx.set_rounding(parse_round(token)?);
    }

    let x = parse_num(&args[1], &mut ctx)?;
    let op = ArithOp::from_token(&args[2])?;
    let y = parse_num(&args[3], &mut ctx)?;
    let output = evaluate(op, x, y, &mut ctx);

    println!("Input:  {}", format_pattern(x));
    println!("Input:  {}", format_pattern(y));
    println!("Output: {}", format_pattern(output));
    println!("{}", ctx.flags());
    Ok(())
}

fn print_usage(program: &str, grammar: &str) {
    eprintln!("IEEE-754 bit-level calculator");
    eprintln!("Usage: {} {}", program, grammar);
}
