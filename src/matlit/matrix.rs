//! Square matrix shape

/// Parsed values together with the dimension they are emitted under.
///
/// The dimension is the integer square root (floor) of the value count. A
/// count that is not a perfect square is kept as-is: every value still ends
/// up in the literal.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    dimension: usize,
    values: Vec<f64>,
}

impl SquareMatrix {
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            dimension: isqrt(values.len()),
            values,
        }
    }

    /// Rows and columns both.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_perfect_square(&self) -> bool {
        self.dimension * self.dimension == self.values.len()
    }
}

/// Floor of the square root, exact for every `usize`.
fn isqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    // Newton's iteration from above; the f64 estimate only seeds it
    let mut x = (n as f64).sqrt() as usize + 1;
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_small() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, root) in expected.iter().enumerate() {
            assert_eq!(isqrt(n), *root, "isqrt({})", n);
        }
    }

    #[test]
    fn test_isqrt_boundaries() {
        for root in [15usize, 16, 1_000, 65_535, 4_294_967_295] {
            let square = root * root;
            assert_eq!(isqrt(square), root);
            assert_eq!(isqrt(square - 1), root - 1);
            assert_eq!(isqrt(square + 1), root);
        }
        assert_eq!(isqrt(usize::MAX), 4_294_967_295);
    }

    #[test]
    fn test_square_matrix_4x4() {
        let matrix = SquareMatrix::from_values((1..=16).map(f64::from).collect());
        assert_eq!(matrix.dimension(), 4);
        assert_eq!(matrix.len(), 16);
        assert!(matrix.is_perfect_square());
    }

    #[test]
    fn test_square_matrix_non_square_count() {
        let matrix = SquareMatrix::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(!matrix.is_perfect_square());
    }

    #[test]
    fn test_square_matrix_empty() {
        let matrix = SquareMatrix::from_values(Vec::new());
        assert_eq!(matrix.dimension(), 0);
        assert!(matrix.is_empty());
        assert!(matrix.is_perfect_square());
    }
}
