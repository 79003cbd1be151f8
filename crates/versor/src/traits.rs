// FIXME: renaming to `ConstZero`/`ConstOne` and introducing non-const `Zero`/`One` traits might be useful

use std::{fmt, ops};

/// Types that support the trigonometric functions.
///
/// The inverse functions [`Trig::asin`] and [`Trig::acos`] are partial: they return [`None`] when
/// their argument lies outside of `[-1, 1]` instead of producing `NaN`. Callers are expected to
/// clamp the argument or pick an explicit fallback.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes sine and cosine of the angle `self` (in radians) at the same time.
    fn sin_cos(self) -> (Self, Self);
    /// Computes the arcsine of `self`, or [`None`] if `self` is not in `[-1, 1]`.
    fn asin(self) -> Option<Self>;
    /// Computes the arccosine of `self`, or [`None`] if `self` is not in `[-1, 1]`.
    fn acos(self) -> Option<Self>;
    /// Four-quadrant arctangent of `self` (the *y* coordinate) and `other` (the *x* coordinate).
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt: Sized {
    fn sqrt(self) -> Self;

    /// Computes the square root of `self`, or returns [`None`] if `self` is negative or `NaN`.
    fn checked_sqrt(self) -> Option<Self>;
}

/// Types that have an absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively).
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point scalars that rotations can be computed with.
///
/// Implemented for [`f32`] and [`f64`].
pub trait Float: Number + Trig + Sqrt + Abs + MinMax + PartialOrd + fmt::Debug {
    /// Archimedes' constant (π).
    const PI: Self;
    /// π/2, a quarter turn.
    const FRAC_PI_2: Self;

    /// Converts an [`f64`] constant to `Self`, rounding if necessary.
    fn from_f64(value: f64) -> Self;
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }

                fn asin(self) -> Option<Self> {
                    if (-1.0..=1.0).contains(&self) {
                        Some(self.asin())
                    } else {
                        None
                    }
                }

                fn acos(self) -> Option<Self> {
                    if (-1.0..=1.0).contains(&self) {
                        Some(self.acos())
                    } else {
                        None
                    }
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }

                fn checked_sqrt(self) -> Option<Self> {
                    if self >= 0.0 {
                        Some(self.sqrt())
                    } else {
                        None
                    }
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Float for $types {
                const PI: Self = std::$types::consts::PI;
                const FRAC_PI_2: Self = std::$types::consts::FRAC_PI_2;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $types
                }
            }
        )+
    };
}
float_impls!(f32, f64);
