use super::ApproxEq;

macro_rules! float_approx_eq {
    ($($ty:ty),+) => {
        $(
            impl ApproxEq for $ty {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    if self.is_infinite() || other.is_infinite() {
                        return self == other;
                    }
                    // NaN fails this comparison.
                    (self - other).abs() <= tolerance
                }

                fn rel_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    if self.is_infinite() || other.is_infinite() {
                        return self == other;
                    }
                    (self - other).abs() <= self.abs().max(other.abs()) * tolerance
                }
            }
        )+
    };
}
float_approx_eq!(f32, f64);

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &[U; N], tolerance: Self::Tolerance) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }
}
