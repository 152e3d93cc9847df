//! Naive Dense Matrix Multiply
//!
//! Row-major square matrices multiplied with the textbook triple loop,
//! which is fast enough for the small sizes the demo exercises.

/// Demo matrix dimension
pub const N: usize = 40;

/// Multiply two row-major `n` x `n` matrices
pub fn multiply(a: &[f64], b: &[f64], n: usize) -> Vec<f64> {
    let mut m = vec![0.0; n * n];
    for row in 0..n {
        for col in 0..n {
            let mut sum = 0.0;
            for i in 0..n {
                sum += a[row * n + i] * b[i * n + col];
            }
            m[row * n + col] = sum;
        }
    }
    m
}

/// Operand pair whose product has a closed form, for checking results
pub fn demo_operands(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut a = vec![0.0; n * n];
    let mut b = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            a[i * n + j] = (i + i * j) as f64;
            b[i * n + j] = (j + i * j) as f64;
        }
    }
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three_by_hand() {
        // A = [[0,0,0],[1,2,3],[2,4,6]], B = [[0,1,2],[0,2,4],[0,3,6]]
        let (a, b) = demo_operands(3);
        let m = multiply(&a, &b, 3);
        let expected = [0.0, 0.0, 0.0, 0.0, 14.0, 28.0, 0.0, 28.0, 56.0];
        assert_eq!(m, expected);
    }

    #[test]
    fn identity_leaves_operand_unchanged() {
        let n = 4;
        let (a, _) = demo_operands(n);
        let mut id = vec![0.0; n * n];
        for i in 0..n {
            id[i * n + i] = 1.0;
        }
        assert_eq!(multiply(&a, &id, n), a);
        assert_eq!(multiply(&id, &a, n), a);
    }
}
