//! Rotations that align one direction with another.

use crate::{traits::Float, Quat, Vec3};

use super::DEGENERATE_EPSILON;

/// Directions whose normalized dot product exceeds this (in magnitude) are treated as parallel.
const PARALLEL_THRESHOLD: f64 = 0.999999;

/// When the X component of a direction is at least this large (in magnitude), the direction is too
/// close to the X axis to derive a perpendicular axis from it.
const X_AXIS_LIMIT: f64 = 0.99;

impl<T: Float> Quat<T> {
    /// Creates the shortest rotation that turns the direction `from` onto the direction `to`.
    ///
    /// Neither vector has to be normalized. If they point in the same direction, the result is
    /// [`Quat::IDENTITY`]. If they point in opposite directions, there is no unique shortest
    /// rotation; a half turn around an arbitrary axis perpendicular to `from` is returned instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// let q = Quatf::from_to_rotation(Vec3f::X, vec3(0.0, 2.0, 0.0));
    /// assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
    /// assert_approx_eq!(q.axis().unwrap(), Vec3f::Z).abs(1e-6);
    /// ```
    #[doc(alias = "rotation_between", alias = "from_rotation_arc")]
    pub fn from_to_rotation(from: Vec3<T>, to: Vec3<T>) -> Self {
        let from = from.normalize();
        let to = to.normalize();
        let dot = from.dot(to);

        let threshold = T::from_f64(PARALLEL_THRESHOLD);
        if dot > threshold {
            return Self::IDENTITY;
        }
        if dot < -threshold {
            let axis = perpendicular(from);
            log::trace!(
                "{:?} and {:?} are antiparallel, rotating around {:?}",
                from,
                to,
                axis
            );
            return Self::from_axis_angle(axis, T::PI);
        }

        let axis = from.cross(to);
        Self::from_components(axis.x, axis.y, axis.z, T::ONE + dot).normalize()
    }

    /// Creates a rotation that turns an object's `forward` direction towards `target`, keeping
    /// its up direction as close to `up` as possible.
    ///
    /// `forward` is the direction the object faces when unrotated, `up` is the world's up
    /// direction. First, the shortest rotation from `forward` to `target` is computed (see
    /// [`Quat::from_to_rotation`]). That rotation alone can leave the object arbitrarily rolled
    /// around `target`, so a second rotation around `target` is applied that turns the object's
    /// up direction (the part of `up` perpendicular to `forward`) onto the part of `up`
    /// perpendicular to `target`.
    ///
    /// Only the direction of `up` matters, not its length. If `forward` or `target` is parallel
    /// to `up` (or `up` is zero), the roll is not constrained by `up` and the second step is
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use versor::*;
    /// let forward = -Vec3f::Z;
    /// let target = vec3(1.0, 0.0, -1.0);
    /// let q = Quatf::look_at(forward, target, Vec3f::Y);
    ///
    /// assert_approx_eq!(q.rotate(forward), target.normalize()).abs(1e-6);
    /// assert_approx_eq!(q.rotate(Vec3f::Y), Vec3f::Y).abs(1e-6);
    /// ```
    pub fn look_at(forward: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        let forward = forward.normalize();
        let target = target.normalize();
        let up = up.normalize();
        let turn = Self::from_to_rotation(forward, target);

        let rest_up = reject(up, forward);
        let desired_up = reject(up, target);
        let epsilon = T::from_f64(DEGENERATE_EPSILON);
        if rest_up.length2() <= epsilon || desired_up.length2() <= epsilon {
            log::trace!(
                "up direction {:?} is parallel to {:?} or {:?}, roll is left unconstrained",
                up,
                forward,
                target
            );
            return turn;
        }

        let current_up = turn.rotate(rest_up);
        let roll = target
            .dot(current_up.cross(desired_up))
            .atan2(current_up.dot(desired_up));
        turn.then(Self::from_axis_angle(target, roll))
    }
}

/// Returns a unit vector perpendicular to the unit vector `v`.
fn perpendicular<T: Float>(v: Vec3<T>) -> Vec3<T> {
    let reference = if v.x.abs() < T::from_f64(X_AXIS_LIMIT) {
        Vec3::X
    } else {
        Vec3::Y
    };
    v.cross(reference).normalize()
}

/// Removes the component of `v` along the unit vector `normal`.
fn reject<T: Float>(v: Vec3<T>, normal: Vec3<T>) -> Vec3<T> {
    v - normal * v.dot(normal)
}
