//! Randomized checks of the algebraic properties every rotation has to satisfy.

use std::f64::consts::PI;

use versor::{assert_approx_eq, vec3, Quat, Vec3};

const ITERATIONS: usize = 1000;

fn rng() -> fastrand::Rng {
    versor::init_logger!();
    fastrand::Rng::with_seed(0x5eed_0f_0e1e_f00d)
}

/// A random vector with elements in `[-scale, scale)`.
fn random_vector(rng: &mut fastrand::Rng, scale: f64) -> Vec3<f64> {
    let mut next = || (rng.f64() * 2.0 - 1.0) * scale;
    vec3(next(), next(), next())
}

/// A random direction, not necessarily of unit length but far enough from zero to have one.
fn random_direction(rng: &mut fastrand::Rng) -> Vec3<f64> {
    loop {
        let v = random_vector(rng, 1.0);
        if v.length() > 0.1 {
            return v;
        }
    }
}

fn random_angle(rng: &mut fastrand::Rng) -> f64 {
    (rng.f64() * 2.0 - 1.0) * PI
}

fn random_rotation(rng: &mut fastrand::Rng) -> Quat<f64> {
    let axis = random_direction(rng);
    Quat::from_axis_angle(axis, random_angle(rng))
}

#[test]
fn axis_angle_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let axis = random_direction(&mut rng);
        let angle = random_angle(&mut rng);
        let q = Quat::from_axis_angle(axis, angle);

        assert_approx_eq!(q.length(), 1.0).abs(1e-12);
        assert_approx_eq!(q.angle(), angle.abs(), "axis={axis:?} angle={angle}").abs(1e-6);
        if let Some(recovered) = q.axis() {
            let expected = axis.normalize() * angle.signum();
            assert_approx_eq!(recovered, expected, "axis={axis:?} angle={angle}").abs(1e-6);
        } else {
            assert!(angle.abs() < 0.03, "no axis for angle {angle}");
        }
        assert_eq!(Quat::from_axis_angle(axis, 0.0), Quat::IDENTITY);
    }
}

#[test]
fn euler_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = random_rotation(&mut rng);
        let euler = q.to_euler();
        assert!(euler.y.abs() <= PI / 2.0, "{euler:?}");

        let back = Quat::from_euler(euler);
        assert_approx_eq!(q.dot(back).abs(), 1.0, "q={q:?}").abs(1e-9);
        let v = random_vector(&mut rng, 10.0);
        assert_approx_eq!(back.rotate(v), q.rotate(v), "q={q:?}").abs(1e-6);
    }
}

#[test]
fn identity_is_neutral() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = random_rotation(&mut rng);
        assert_eq!(q * Quat::IDENTITY, q);
        assert_eq!(Quat::IDENTITY * q, q);
        assert_eq!(q.then(Quat::IDENTITY), q);

        let v = random_vector(&mut rng, 100.0);
        assert_eq!(Quat::IDENTITY.rotate(v), v);
    }
}

#[test]
fn inverse_undoes_rotation() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = random_rotation(&mut rng);
        assert_approx_eq!(q * q.inverse(), Quat::IDENTITY, "q={q:?}").abs(1e-12);
        assert_approx_eq!(q.inverse(), q.conjugate(), "q={q:?}").abs(1e-12);

        let v = random_vector(&mut rng, 10.0);
        assert_approx_eq!(q.inverse().rotate(q.rotate(v)), v).abs(1e-9);
    }
}

#[test]
fn rotation_preserves_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = random_rotation(&mut rng);
        let v = random_vector(&mut rng, 10.0);
        assert_approx_eq!(q.rotate(v).length(), v.length()).abs(1e-9);
        assert_eq!(q * v, q.rotate(v));
    }
}

#[test]
fn composition_order() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_rotation(&mut rng);
        let b = random_rotation(&mut rng);
        let v = random_vector(&mut rng, 10.0);

        assert_approx_eq!(a.then(b).rotate(v), b.rotate(a.rotate(v))).abs(1e-9);
        assert_approx_eq!((a * b).rotate(v), a.rotate(b.rotate(v))).abs(1e-9);
        assert_eq!(a.then(b), b * a);
        assert_approx_eq!((a * b).length(), 1.0).abs(1e-12);
    }
}

#[test]
fn slerp_endpoints_and_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_rotation(&mut rng);
        let b = random_rotation(&mut rng);

        assert_approx_eq!(a.slerp(b, 0.0), a, "a={a:?} b={b:?}").abs(1e-9);
        assert_approx_eq!(a.slerp(b, 1.0).dot(b).abs(), 1.0, "a={a:?} b={b:?}").abs(1e-9);

        let t = rng.f64();
        let mid = a.slerp(b, t);
        assert_approx_eq!(mid.length(), 1.0, "a={a:?} b={b:?} t={t}").abs(1e-9);
        // Never further from either end than the two ends are from each other.
        let ends = a.dot(b).abs();
        assert!(mid.dot(a).abs() >= ends - 1e-9);
        assert!(mid.dot(b).abs() >= ends - 1e-9);
    }
}

#[test]
fn lerp_is_normalized() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_rotation(&mut rng);
        let b = random_rotation(&mut rng);
        let t = rng.f64();
        if a.dot(b) < -0.999 {
            continue;
        }
        assert_approx_eq!(a.lerp(b, t).length(), 1.0, "a={a:?} b={b:?} t={t}").abs(1e-9);
    }
}

#[test]
fn from_to_rotation_aligns() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let from = random_direction(&mut rng);
        let to = random_direction(&mut rng);
        let q = Quat::from_to_rotation(from, to);

        assert_approx_eq!(q.length(), 1.0).abs(1e-9);
        assert_approx_eq!(q.rotate(from.normalize()), to.normalize(), "{from:?} -> {to:?}")
            .abs(1e-6);
        assert_approx_eq!(q.angle(), from.abs_angle_to(to), "{from:?} -> {to:?}").abs(1e-6);

        let back = Quat::from_to_rotation(from, -from);
        assert_approx_eq!(back.rotate(from), -from, "{from:?}").abs(1e-9);
    }
}

#[test]
fn look_at_faces_target() {
    let mut rng = rng();
    let up: Vec3<f64> = Vec3::Y;
    for _ in 0..ITERATIONS {
        let forward = random_direction(&mut rng);
        let target = random_direction(&mut rng);
        let q = Quat::look_at(forward, target, up);

        let (forward, target) = (forward.normalize(), target.normalize());
        assert_approx_eq!(q.length(), 1.0).abs(1e-9);
        assert_approx_eq!(q.rotate(forward), target, "{forward:?} -> {target:?}").abs(1e-6);

        // The object's up direction ends up in the plane spanned by `up` and `target`, on the
        // same side as `up`.
        let rest_up = up - forward * up.dot(forward);
        let desired_up = up - target * up.dot(target);
        if rest_up.length2() > 0.01 && desired_up.length2() > 0.01 {
            let actual_up = q.rotate(rest_up).normalize();
            assert_approx_eq!(actual_up, desired_up.normalize(), "{forward:?} -> {target:?}")
                .abs(1e-6);
        }
    }
}
