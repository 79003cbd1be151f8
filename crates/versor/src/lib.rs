//! Quaternions and 3D rotations.
//!
//! This library provides [`Quat`], a quaternion type generic over its scalar type, together with
//! the small fixed-size [`Vector`] type it rotates. Unit quaternions represent orientations and
//! rotations; they can be constructed from an axis and angle, from Euler angles, from a pair of
//! directions, or from a "look at" target, and can be composed, inverted, interpolated and applied
//! to vectors.
//!
//! # Goals & Non-Goals
//!
//! - Be generic over the scalar type, but only support [`f32`] and [`f64`] for rotations (see
//!   [`Float`]).
//! - Never panic on numeric input. Degenerate input (zero-length quaternions, zero-length axes,
//!   antiparallel directions) is handled by falling back to a well-defined result, and those
//!   fallbacks are logged at *trace* level. Queries that have no meaningful answer, like the axis
//!   of the identity rotation, return an [`Option`].
//! - Spell out conventions instead of leaving them implicit: composition order (see [`Quat`]),
//!   Euler angle order (see [`Quat::from_euler`]) and handedness (right-handed, counterclockwise
//!   rotations for positive angles).
//! - Don't provide matrices, SIMD, or dual quaternions.
//!
//! # Logging
//!
//! Diagnostics are emitted via the [`log`] crate. Applications that don't set up a logger of
//! their own can use [`init_logger!`].

pub mod approx;
mod quat;
mod traits;
mod vector;

use log::LevelFilter;

pub use quat::*;
pub use traits::*;
pub use vector::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level. The `RUST_LOG` environment
/// variable can be used to override this (for example, `RUST_LOG=versor=trace` shows every
/// degenerate-input fallback).
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
