use std::{
    fmt,
    ops::{Mul, MulAssign, Neg},
};

use crate::{approx::ApproxEq, traits::Float, Number, One, Quat, Vec3, Zero};

/// The Hamilton product.
///
/// `a * b` rotates by `b` first, then by `a`. See [`Quat::then`] for the reverse reading.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.vec.into_array();
        let [bx, by, bz, bw] = rhs.vec.into_array();

        #[rustfmt::skip]
        let product = Quat::from_components(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        );
        product
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector (see [`Quat::rotate`]).
impl<T: Float> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.rotate(rhs)
    }
}

/// Negates all components. The result describes the same rotation.
impl<T: Neg> Neg for Quat<T> {
    type Output = Quat<T::Output>;

    fn neg(self) -> Self::Output {
        Quat { vec: -self.vec }
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, tolerance)
    }
}

/// Defaults to [`Quat::IDENTITY`].
impl<T: Zero + One> Default for Quat<T> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}
