//! Approximate ("loose") equality of floating-point values, vectors and quaternions.
//!
//! Almost nothing computed with rotations is bit-exact: composing two quarter turns does not give
//! precisely a half turn, and normalizing a quaternion twice may change its last digits. This
//! module provides the comparisons used throughout the test suite to check such results.
//!
//! Two values are *loosely equal* with tolerance `tol` if
//!
//! - their absolute difference is at most `tol` (an *absolute comparison*), or
//! - their absolute difference is at most `tol` times the larger magnitude (a *relative
//!   comparison*).
//!
//! Infinities are only equal to themselves, and `NaN` is equal to nothing.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types (vectors, quaternions, arrays) are approximately equal if every element is.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar type tolerances are expressed in ([`f32`] or [`f64`]).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns whether `self` and `other` differ by at most `tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Returns whether `self` and `other` differ by at most `tolerance` times the larger of their
    /// magnitudes.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// The *loosely-equal* comparison: an absolute *or* a relative comparison with `tolerance`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::{approx::ApproxEq, *};
    /// let q = Quatf::from_axis_angle(Vec3f::Y, 0.5).then(Quatf::from_axis_angle(Vec3f::Y, 0.5));
    /// assert!(q.loosely_eq(&Quatf::from_axis_angle(Vec3f::Y, 1.0), 1e-5));
    /// ```
    fn loosely_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool {
        self.abs_diff_eq(other, tolerance) || self.rel_diff_eq(other, tolerance)
    }
}

/// Tolerances used by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne] when none are given explicitly.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = f32::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = f32::EPSILON;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = f64::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = f64::EPSILON;
}

/// Pending approximate-equality assertion, created by [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// Nothing is checked until the value is dropped (at the end of the statement). Until then,
/// [`Asserter::abs`] and [`Asserter::rel`] select the comparisons to perform; the values are equal
/// if any selected comparison says so. Without either, both comparisons are performed with the
/// [`DefaultTolerances`] of the type, which only forgive a few rounding errors. Results of longer
/// computations usually need an explicit `.abs(..)`.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Compares the absolute difference against `tolerance`.
    ///
    /// This is the right choice for quaternion and unit-vector components, which are all close to
    /// or below 1 and frequently change sign near zero.
    pub fn abs(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.abs = Some(tolerance);
        self
    }

    /// Compares the absolute difference against `tolerance` times the larger magnitude.
    pub fn rel(&mut self, tolerance: T::Tolerance) -> &mut Self {
        self.rel = Some(tolerance);
        self
    }

    fn equal(&self) -> bool {
        let (abs, rel) = match (self.abs, self.rel) {
            (None, None) => (
                Some(T::Tolerance::DEFAULT_ABS_TOLERANCE),
                Some(T::Tolerance::DEFAULT_REL_TOLERANCE),
            ),
            configured => configured,
        };
        abs.map_or(false, |tol| self.left.abs_diff_eq(self.right, tol))
            || rel.map_or(false, |tol| self.left.rel_diff_eq(self.right, tol))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        let failed = match self.kind {
            AssertionKind::Eq => !self.equal(),
            AssertionKind::Ne => self.equal(),
        };
        if failed {
            fail(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // The panic itself is raised from `drop`, so the assertion's location is part of the message.
    match msg {
        Some(msg) => panic!(
            "assertion `left {op} right` failed at {location}: {msg}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (see [`ApproxEq`]).
///
/// Takes the same arguments as [`assert_eq!`], including an optional message. The returned
/// [`Asserter`] selects the tolerance.
///
/// # Examples
///
/// ```
/// # use versor::*;
/// use std::f32::consts::PI;
///
/// let half_turn = Quatf::from_axis_angle(Vec3f::Z, PI);
/// assert_approx_eq!(half_turn.angle(), PI).abs(1e-5);
/// assert_approx_eq!(half_turn.rotate(Vec3f::X), -Vec3f::X, "half turn").abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (see [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use versor::*;
/// let a = Quatf::from_axis_angle(Vec3f::X, 0.1);
/// let b = Quatf::from_axis_angle(Vec3f::X, 0.2);
/// assert_approx_ne!(a, b).abs(1e-3);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "quarter turn")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "quarter turn");
    }

    #[test]
    fn loosely_eq() {
        assert!(1.0f32.loosely_eq(&1.00001, 1e-4));
        assert!(1000.0f64.loosely_eq(&1000.1, 1e-3));
        assert!(!1.0f32.loosely_eq(&1.1, 1e-4));
        assert!(!f32::NAN.loosely_eq(&f32::NAN, 1.0));
    }

    #[test]
    fn sign() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(-0.0, 0.0).abs(0.0);
    }

    #[test]
    fn epsilon() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_ne!(1.0, 1.0 + 4.0 * f32::EPSILON);
        // One ULP apart.
        assert_approx_eq!(1024.0, 1024.0 + 1024.0 * f32::EPSILON);
        assert_approx_eq!(1024.0, 1024.0 + 1024.0 * f32::EPSILON).rel(f32::EPSILON);
        assert_approx_ne!(1024.0, 1024.0 + 1024.0 * f32::EPSILON).abs(f32::EPSILON);
    }

    #[test]
    fn nan_and_inf() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, 0.0).rel(1.0);

        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).abs(1.0);
        assert_approx_ne!(f32::INFINITY, f32::MAX).rel(10000.0);
    }

    #[test]
    fn compound() {
        assert_approx_eq!([1.0, 2.0], [1.0, 2.0 + 1e-7]).abs(1e-6);
        assert_approx_ne!([1.0, 2.0], [1.0, 2.1]).abs(1e-6);
    }
}
