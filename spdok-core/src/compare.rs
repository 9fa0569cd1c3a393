//! Element-wise comparison through the read contract
//!
//! Two matrices compare equal when their dimensions match and every
//! coordinate reads the same, regardless of storage format or the order
//! a format keeps its entries in.

use crate::{Matrix, MatrixElement};

/// Exact element-wise equality of two matrices of the same element type
///
/// O(rows * cols) reads. Use it to compare across formats; two values of
/// the same format can also be compared with `==`, which is layout
/// sensitive.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
{
    all_cells(a, b, |x, y| x == y)
}

/// Element-wise equality within `epsilon`, compared as `f64`
pub fn equal_approx<A, B>(a: &A, b: &B, epsilon: f64) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    all_cells(a, b, |x, y| {
        let diff = x.to_f64() - y.to_f64();
        // no `f64::abs` without std
        diff <= epsilon && -diff <= epsilon
    })
}

fn all_cells<A, B, F>(a: &A, b: &B, mut same: F) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
    F: FnMut(A::Element, B::Element) -> bool,
{
    let (rows, cols) = a.dimensions();
    if b.dimensions() != (rows, cols) {
        return false;
    }
    (0..rows).all(|row| {
        (0..cols).all(|col| match (a.try_at(row, col), b.try_at(row, col)) {
            (Ok(x), Ok(y)) => same(x, y),
            _ => false,
        })
    })
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::storage::{Dense, Dok};
    use alloc::vec;

    #[test]
    fn test_equal_across_formats() {
        let mut dok = Dok::new(2, 3);
        dok.set(0, 2, 4);
        dok.set(1, 0, -1);
        let dense = Dense::from_row_major(2, 3, vec![0, 0, 4, -1, 0, 0]);

        assert!(equal(&dok, &dense));
        assert!(equal(&dok.to_csr(), &dok.to_csc()));

        dok.set(1, 1, 2);
        assert!(!equal(&dok, &dense));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Dok::<f64>::new(2, 3);
        let b = Dok::<f64>::new(3, 2);
        assert!(!equal(&a, &b));
        assert!(equal(&a, &b.t()));
        assert!(equal(&Dok::<f64>::new(0, 4), &Dok::<f64>::new(0, 4)));
        assert!(!equal(&Dok::<f64>::new(0, 4), &Dok::<f64>::new(4, 0)));
    }

    #[test]
    fn test_equal_approx() {
        let a = Dense::from_row_major(1, 2, vec![0.1 + 0.2, 1.0]);
        let b = Dense::from_row_major(1, 2, vec![0.3, 1.0]);
        assert!(!equal(&a, &b));
        assert!(equal_approx(&a, &b, 1e-12));

        let ints = Dense::from_row_major(1, 2, vec![0i64, 1]);
        assert!(equal_approx(&ints, &b, 0.5));
        assert!(!equal_approx(&ints, &b, 0.1));
    }
}
