use std::time::Instant;

use matmul_demo::{demo_operands, multiply, N};

fn main() {
    println!("N={}", N);
    let (a, b) = demo_operands(N);

    let start = Instant::now();
    let m = multiply(&a, &b, N);
    let elapsed = start.elapsed();

    // integer-valued operands keep every product exact
    println!("M[{}][{}] = {}", N - 1, N - 1, m[(N - 1) * N + (N - 1)] as i64);
    println!("multiply took {:?}", elapsed);
}
