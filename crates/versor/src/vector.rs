use std::fmt;

use crate::{
    traits::{Float, Number, Sqrt},
    One, Zero,
};

mod ops;
mod view;

/// Vector with 3 elements, the kind rotated by a [`Quat`][crate::Quat].
pub type Vec3<T> = Vector<T, 3>;
/// [`Vec3`] of [`f32`]s.
pub type Vec3f = Vec3<f32>;
/// Vector with 4 elements, the storage of a [`Quat`][crate::Quat].
pub type Vec4<T> = Vector<T, 4>;
/// [`Vec4`] of [`f32`]s.
pub type Vec4f = Vec4<f32>;

/// Vectors at most this long are treated as having no direction by [`Vector::normalize`].
const MIN_NORMALIZE_LENGTH: f64 = 0.0001;

/// A fixed-size vector of `N` elements of type `T`.
///
/// Only the 3- and 4-element forms ([`Vec3`] and [`Vec4`]) have a purpose in this crate: [`Vec3`]
/// is a point or direction that quaternions rotate, [`Vec4`] holds the components of a quaternion.
///
/// Build vectors with [`vec3`] and [`vec4`], from arrays via [`From`], or use the constants
/// [`Vector::ZERO`] and the per-axis unit vectors `X`, `Y`, `Z` (and `W`). Elements are reachable
/// as fields (`v.x`, `v.y`, ...) and by index (`v[0]`).
///
/// With a [`bytemuck::Pod`] element type, vectors are [`bytemuck::Pod`] themselves and can be cast
/// to and from bytes.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// All elements zero.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// `(1, 0, 0)`
    pub const X: Self = vec3(T::ONE, T::ZERO, T::ZERO);
    /// `(0, 1, 0)`
    pub const Y: Self = vec3(T::ZERO, T::ONE, T::ZERO);
    /// `(0, 0, 1)`
    pub const Z: Self = vec3(T::ZERO, T::ZERO, T::ONE);
}

impl<T: Zero + One> Vector<T, 4> {
    /// `(1, 0, 0, 0)`
    pub const X: Self = vec4(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// `(0, 1, 0, 0)`
    pub const Y: Self = vec4(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// `(0, 0, 1, 0)`
    pub const Z: Self = vec4(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    /// `(0, 0, 0, 1)`, the components of [`Quat::IDENTITY`][crate::Quat::IDENTITY].
    pub const W: Self = vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE);
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with `f` applied to every element.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut others = other.0.into_iter();
        self.map(|elem| match others.next() {
            Some(other) => (elem, other),
            None => unreachable!(),
        })
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns the elements as an array.
    ///
    /// ```
    /// # use versor::*;
    /// let [x, y, z] = vec3(0.5, -1.0, 2.0).into_array();
    /// assert_eq!((x, y, z), (0.5, -1.0, 2.0));
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Sum of the squared elements. Cheaper than [`Vector::length`] when only comparing lengths.
    ///
    /// ```
    /// # use versor::*;
    /// assert_eq!(vec3(2, -3, 6).length2(), 49);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Euclidean length.
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Scales this vector to unit length, keeping its direction.
    ///
    /// Vectors of length `0.0001` or less have no usable direction, and [`Vector::ZERO`] is
    /// returned for them instead of dividing by (almost) zero.
    ///
    /// ```
    /// # use versor::*;
    /// assert_eq!(vec3(0.0, -3.0, 0.0).normalize(), -Vec3f::Y);
    /// assert_eq!(vec3(0.00005, 0.0, 0.0).normalize(), Vec3f::ZERO);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        let length = self.length();
        if length <= T::from_f64(MIN_NORMALIZE_LENGTH) {
            return Self::ZERO;
        }
        self / length
    }

    /// Dot (inner) product.
    ///
    /// Between unit vectors, this is the cosine of the angle between them, so `1` means "same
    /// direction", `0` means "perpendicular" and `-1` means "opposite directions".
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.zip(other)
            .into_array()
            .into_iter()
            .fold(T::ZERO, |sum, (a, b)| sum + a * b)
    }

    /// Angle between the directions of `self` and `other`, in radians (`0` to `π`).
    ///
    /// Neither vector may be of zero length.
    ///
    /// ```
    /// # use versor::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(vec3(0.0, 3.0, 0.0).abs_angle_to(vec3(0.0, 0.0, -1.0)), FRAC_PI_2);
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Float,
    {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-T::ONE, T::ONE).acos().unwrap_or(T::ZERO)
    }
}

impl<T> Vector<T, 3> {
    /// Adds a fourth element.
    pub fn extend(self, w: T) -> Vec4<T> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// Cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs, and follows the right-hand rule: `X × Y = Z`.
    /// Its length is the product of both lengths and the sine of the angle between them, so it
    /// vanishes for parallel inputs.
    ///
    /// ```
    /// # use versor::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::Y * 2.0), Vec3f::ZERO);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T> Vector<T, 4> {
    /// Drops the fourth element.
    pub fn truncate(self) -> Vec3<T> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.0
    }
}

/// Prints the elements like a tuple: `(1.0, 2.0, 3.0)`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("");
        self.0.iter().for_each(|elem| {
            tuple.field(elem);
        });
        tuple.finish()
    }
}

/// Prints the elements like a tuple: `(1, 2, 3)`. Formatting options apply to each element.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

/// Creates a [`Vec3`].
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Creates a [`Vec4`].
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
