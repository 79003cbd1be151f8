mod align;
mod euler;
mod interp;
mod ops;
mod view;

use crate::{traits::Float, vec4, Number, One, Sqrt, Vec3, Vector, Zero};

/// Magnitudes (and squared magnitudes) at or below this value are treated as degenerate.
///
/// This also bounds `1 - w²` in [`Quat::axis`], below which a rotation has no usable axis.
const DEGENERATE_EPSILON: f64 = 0.0001;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space. Every operation in this
/// crate that applies or composes rotations expects unit quaternions, and every constructor that
/// produces a rotation returns one. `q` and `-q` describe the same rotation.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component, accessible as fields:
///
/// ```
/// # use versor::*;
/// let q = Quatf::from_components(1.0, 2.0, 3.0, 4.0);
/// assert_eq!((q.x, q.y, q.z, q.w), (1.0, 2.0, 3.0, 4.0));
/// ```
///
/// # Composition order
///
/// Quaternion multiplication is not commutative, and libraries disagree about which operand is
/// applied first. This crate offers both readings explicitly:
///
/// - `a * b` is the plain Hamilton product. Applied to a vector, it rotates by `b` first and by `a`
///   second (like matrices in column-vector convention).
/// - [`a.then(b)`][Quat::then] rotates by `a` first and by `b` second. It is equal to `b * a`.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity, `(0, 0, 0, 1)`.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its raw components.
    ///
    /// No normalization is performed.
    pub const fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the imaginary (vector) part `(x, y, z)`.
    pub fn xyz(self) -> Vec3<T> {
        self.vec.truncate()
    }
}

impl<T: Number> Quat<T> {
    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Sqrt,
    {
        self.vec.length()
    }

    /// Computes the 4-dimensional dot product of two quaternions.
    ///
    /// For unit quaternions, a result of `1` or `-1` means that both describe the same rotation.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate `(-x, -y, -z, w)`.
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Composes two rotations: the result rotates by `self` first, then by `next`.
    ///
    /// This is the Hamilton product `next * self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let yaw = Quatf::from_axis_angle(Vec3f::Y, FRAC_PI_2);
    /// let roll = Quatf::from_axis_angle(Vec3f::Z, FRAC_PI_2);
    ///
    /// // Z is turned onto X by the yaw, then X is turned onto Y by the roll.
    /// let v = yaw.then(roll).rotate(Vec3f::Z);
    /// assert_approx_eq!(v, Vec3f::Y).abs(1e-6);
    /// ```
    #[doc(alias = "multiply")]
    pub fn then(self, next: Self) -> Self {
        next * self
    }
}

impl<T: Float> Quat<T> {
    fn two() -> T {
        T::ONE + T::ONE
    }

    fn one_half() -> T {
        T::ONE / Self::two()
    }

    /// Creates a rotation of `radians` around `axis`.
    ///
    /// `axis` is normalized first. A zero-length axis does not describe a rotation, the result is
    /// then not a unit quaternion. A zero angle results in [`Quat::IDENTITY`] regardless of `axis`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2};
    ///
    /// let q = Quatf::from_axis_angle(Vec3f::Y, FRAC_PI_2);
    /// assert_approx_eq!(q, Quatf::from_components(0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2)).abs(1e-6);
    /// assert_approx_eq!(q.rotate(Vec3f::X), -Vec3f::Z).abs(1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        let imag = axis.normalize() * sin;
        Self::from_components(imag.x, imag.y, imag.z, cos)
    }

    /// Creates a rotation of `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a rotation of `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a rotation of `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// Quaternions with a length of at most `0.0001` do not describe a rotation. Instead of
    /// dividing by (nearly) zero, [`Quat::IDENTITY`] is returned for them.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length <= T::from_f64(DEGENERATE_EPSILON) {
            log::trace!("normalizing degenerate quaternion {:?}, using identity", self);
            return Self::IDENTITY;
        }
        Self {
            vec: self.vec / length,
        }
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// For unit quaternions, this is the same as the [conjugate][Quat::conjugate]. Quaternions
    /// with a squared length of at most `0.0001` have no usable inverse and yield
    /// [`Quat::IDENTITY`].
    pub fn inverse(self) -> Self {
        let length2 = self.length2();
        if length2 <= T::from_f64(DEGENERATE_EPSILON) {
            log::trace!("inverting degenerate quaternion {:?}, using identity", self);
            return Self::IDENTITY;
        }
        Self {
            vec: self.conjugate().vec / length2,
        }
    }

    /// Rotates `v` by this quaternion.
    ///
    /// This computes the sandwich product `q * (x, y, z, 0) * q⁻¹` in its expanded form, which
    /// needs two cross products instead of two full quaternion products. `self` must be a unit
    /// quaternion; the length of `v` is then preserved.
    ///
    /// Also available as `q * v`.
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T> {
        let imag = self.xyz();
        let t = imag.cross(v) * Self::two();
        v + t * self.w + imag.cross(t)
    }

    /// Returns the rotation angle in radians.
    ///
    /// This is `2 * acos(w)`, with `w` clamped to `[-1, 1]` first. Rotations constructed by this
    /// crate have a non-negative `w` and thus an angle in `[0, π]`; their negation `-q` reports the
    /// complementary angle `2π - angle`. The identity rotation has an angle of 0.
    pub fn angle(self) -> T {
        let w = self.w.clamp(-T::ONE, T::ONE);
        w.acos().unwrap_or(T::ZERO) * Self::two()
    }

    /// Returns the normalized rotation axis.
    ///
    /// Rotations by (nearly) zero have no well-defined axis. This method returns [`None`] for them
    /// (specifically, when `1 - w²` is below `0.0001`), which callers have to handle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// assert_eq!(Quatf::IDENTITY.axis(), None);
    ///
    /// let q = Quatf::from_axis_angle(Vec3f::X, 2.0);
    /// assert_approx_eq!(q.axis().unwrap(), Vec3f::X).abs(1e-6);
    /// ```
    pub fn axis(self) -> Option<Vec3<T>> {
        let sin2 = T::ONE - self.w * self.w;
        if sin2 < T::from_f64(DEGENERATE_EPSILON) {
            return None;
        }
        let sin = sin2.checked_sqrt()?;
        Some(self.xyz() / sin)
    }
}
