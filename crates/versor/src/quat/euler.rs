//! Conversion between quaternions and Euler angles.
//!
//! Euler angles are stored in a [`Vec3`] as `(roll, pitch, yaw)`: `x` holds the rotation around the
//! X axis, `y` the one around the Y axis, and `z` the one around the Z axis. They are applied in
//! X-Y-Z order, each around the axis of the fixed (world) frame.

use crate::{traits::Float, vec3, Quat, Vec3};

impl<T: Float> Quat<T> {
    /// Creates a rotation from Euler angles `(roll, pitch, yaw)`, in radians.
    ///
    /// The roll around X is applied first, then the pitch around Y, then the yaw around Z. This
    /// order is part of the contract: any other order gives different results as soon as two or
    /// more angles are non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let q = Quatf::from_euler(vec3(FRAC_PI_2, 0.0, FRAC_PI_2));
    /// let expected = Quatf::from_rotation_x(FRAC_PI_2).then(Quatf::from_rotation_z(FRAC_PI_2));
    /// assert_approx_eq!(q, expected).abs(1e-6);
    ///
    /// // The roll turns Y onto Z, the yaw leaves Z alone.
    /// assert_approx_eq!(q.rotate(Vec3f::Y), Vec3f::Z).abs(1e-6);
    /// ```
    #[doc(alias = "from_rotation_xyz")]
    pub fn from_euler(euler: Vec3<T>) -> Self {
        Self::from_rotation_x(euler.x)
            .then(Self::from_rotation_y(euler.y))
            .then(Self::from_rotation_z(euler.z))
    }

    /// Converts this rotation to Euler angles `(roll, pitch, yaw)`, in radians.
    ///
    /// This is the inverse of [`Quat::from_euler`]. Roll and yaw are in `[-π, π]`, pitch is in
    /// `[-π/2, π/2]`.
    ///
    /// When the pitch reaches ±π/2 (*gimbal lock*), roll and yaw rotate around the same axis and
    /// only their combination is meaningful. The round trip `from_euler(to_euler(q))` therefore
    /// only reproduces `q` up to sign, not necessarily the original angles.
    pub fn to_euler(self) -> Vec3<T> {
        let [x, y, z, w] = self.vec.into_array();
        let two = T::ONE + T::ONE;

        let roll = (two * (w * x + y * z)).atan2(T::ONE - two * (x * x + y * y));

        let sin_pitch = two * (w * y - z * x);
        let pitch = if sin_pitch >= T::ONE {
            T::FRAC_PI_2
        } else if sin_pitch <= -T::ONE {
            -T::FRAC_PI_2
        } else {
            sin_pitch.asin().unwrap_or(T::ZERO)
        };

        let yaw = (two * (w * z + x * y)).atan2(T::ONE - two * (y * y + z * z));

        vec3(roll, pitch, yaw)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, assert_approx_ne, vec3, Quatf, Vec3f};

    #[test]
    fn single_axes() {
        assert_approx_eq!(Quatf::from_euler(vec3(0.6, 0.0, 0.0)), Quatf::from_rotation_x(0.6))
            .abs(1e-6);
        assert_approx_eq!(Quatf::from_euler(vec3(0.0, 0.6, 0.0)), Quatf::from_rotation_y(0.6))
            .abs(1e-6);
        assert_approx_eq!(Quatf::from_euler(vec3(0.0, 0.0, 0.6)), Quatf::from_rotation_z(0.6))
            .abs(1e-6);
        assert_eq!(Quatf::from_euler(Vec3f::ZERO), Quatf::IDENTITY);
    }

    #[test]
    fn order() {
        let euler = vec3(0.3, -0.7, 1.2);
        let q = Quatf::from_euler(euler);

        let v = vec3(1.0, 2.0, 3.0);
        let step_by_step = Quatf::from_rotation_z(euler.z)
            .rotate(Quatf::from_rotation_y(euler.y).rotate(Quatf::from_rotation_x(euler.x).rotate(v)));
        assert_approx_eq!(q.rotate(v), step_by_step).abs(1e-5);

        // Composing in the opposite order gives a different rotation.
        let reversed = Quatf::from_rotation_z(euler.z)
            .then(Quatf::from_rotation_y(euler.y))
            .then(Quatf::from_rotation_x(euler.x));
        assert_approx_ne!(q, reversed).abs(1e-3);
    }

    #[test]
    fn to_euler() {
        for euler in [
            vec3(0.0, 0.0, 0.0),
            vec3(0.3, -0.7, 1.2),
            vec3(-2.5, 1.1, -0.4),
            vec3(3.0, 0.2, 3.0),
            vec3(-1.0, -1.4, 0.5),
        ] {
            let q = Quatf::from_euler(euler);
            assert_approx_eq!(q.to_euler(), euler, "{euler:?}").abs(1e-4);
        }
    }

    #[test]
    fn gimbal_lock() {
        let q = Quatf::from_euler(vec3(0.4, FRAC_PI_2, -0.3));
        assert_approx_eq!(q.to_euler().y, FRAC_PI_2).abs(2e-3);

        // Pitch is exactly ±π/2 whenever the sine term leaves the domain of `asin`.
        let locked_up = Quatf::from_components(0.0, 0.7072, 0.0, 0.7072);
        assert_eq!(locked_up.to_euler().y, FRAC_PI_2);
        let locked_down = Quatf::from_components(0.0, -0.7072, 0.0, 0.7072);
        assert_eq!(locked_down.to_euler().y, -FRAC_PI_2);
    }

    #[test]
    fn near_gimbal_lock_round_trip() {
        let q = Quatf::from_euler(vec3(0.4, 1.5, -0.3));
        let back = Quatf::from_euler(q.to_euler());
        assert_approx_eq!(back.dot(q).abs(), 1.0).abs(1e-5);
    }

    #[test]
    fn half_turns() {
        let q = Quatf::from_euler(vec3(PI, 0.0, 0.0));
        assert_approx_eq!(q.to_euler().x.abs(), PI).abs(1e-5);
        assert_approx_eq!(q.rotate(Vec3f::Y), -Vec3f::Y).abs(1e-6);
    }
}
