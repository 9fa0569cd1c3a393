//! Scalar types a matrix can hold

/// Values storable in any format
///
/// Zero is the implicit value of every coordinate a sparse format does not
/// store, so stores test each written value against `ZERO`. `Debug` lets
/// values appear in panic and log messages.
pub trait MatrixElement: Copy + PartialEq + core::fmt::Debug + Sized {
    /// The additive identity
    const ZERO: Self;

    /// Whether this value is zero and therefore not stored
    ///
    /// For floats `-0.0` counts as zero; NaN does not.
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Sum of two values; duplicate coordinates are merged with it
    fn add(self, other: Self) -> Self;

    /// Widen to f64 for tolerance comparisons
    fn to_f64(self) -> f64;
}

macro_rules! impl_matrix_element {
    ($ty:ty, $zero:expr, |$a:ident, $b:ident| $add:expr) => {
        impl MatrixElement for $ty {
            const ZERO: Self = $zero;

            fn add(self, other: Self) -> Self {
                let ($a, $b) = (self, other);
                $add
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_matrix_element!(f32, 0.0, |a, b| a + b);
impl_matrix_element!(f64, 0.0, |a, b| a + b);
// Integer sums wrap rather than panic in debug builds
impl_matrix_element!(i32, 0, |a, b| a.wrapping_add(b));
impl_matrix_element!(i64, 0, |a, b| a.wrapping_add(b));
impl_matrix_element!(u32, 0, |a, b| a.wrapping_add(b));
impl_matrix_element!(u64, 0, |a, b| a.wrapping_add(b));
