use crate::{traits::Float, Quat};

/// Above this dot product, slerp falls back to a normalized lerp, since `sin(theta0)` approaches
/// zero.
const SLERP_LINEAR_THRESHOLD: f64 = 0.9995;

impl<T: Float> Quat<T> {
    /// Spherical linear interpolation between `self` and `to`.
    ///
    /// `t` is the interpolation factor: `0` yields `self`, `1` yields `to` (possibly negated).
    /// Both quaternions should be unit quaternions. The interpolation always takes the shorter of
    /// the two possible arcs: if `self` and `to` lie on opposite hemispheres, `to` is negated
    /// first. The result then moves at constant angular velocity as `t` changes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
    ///
    /// let a = Quatf::IDENTITY;
    /// let b = Quatf::from_rotation_z(FRAC_PI_2);
    /// assert_approx_eq!(a.slerp(b, 0.5), Quatf::from_rotation_z(FRAC_PI_4)).abs(1e-6);
    /// ```
    #[doc(alias = "spherical_linear_interpolation")]
    pub fn slerp(self, to: Self, t: T) -> Self {
        let (to, dot) = match self.dot(to) {
            dot if dot < T::ZERO => (-to, -dot),
            dot => (to, dot),
        };

        if dot > T::from_f64(SLERP_LINEAR_THRESHOLD) {
            return Self {
                vec: self.vec + (to.vec - self.vec) * t,
            }
            .normalize();
        }

        let dot = dot.clamp(-T::ONE, T::ONE);
        let theta0 = dot.acos().unwrap_or(T::ZERO);
        let theta = theta0 * t;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let sin_theta0 = theta0.sin();

        let s1 = cos_theta - dot * sin_theta / sin_theta0;
        let s2 = sin_theta / sin_theta0;
        Self {
            vec: self.vec * s1 + to.vec * s2,
        }
    }

    /// Linear interpolation between the components of `self` and `to`, followed by
    /// normalization.
    ///
    /// Cheaper than [`Quat::slerp`], but the angular velocity is not constant and no shortest-path
    /// correction is performed: interpolating between `q` and `-q` passes through zero (and thus
    /// [`Quat::IDENTITY`]).
    #[doc(alias = "linear_interpolation", alias = "nlerp")]
    pub fn lerp(self, to: Self, t: T) -> Self {
        Self {
            vec: self.vec + (to.vec - self.vec) * t,
        }
        .normalize()
    }
}
