//! Turns a camera from one target to another and prints its orientation along the way.
//!
//! Usage: `orbit [steps]`. Set `RUST_LOG=versor=trace` to see degenerate-input fallbacks.

use anyhow::Context;
use versor::{vec3, Quatf, Vec3f};

const DEFAULT_STEPS: usize = 8;

fn main() -> anyhow::Result<()> {
    versor::init_logger!();

    let steps = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid step count '{}'", arg))?,
        None => DEFAULT_STEPS,
    };
    anyhow::ensure!(steps > 0, "usage: orbit [steps], with steps > 0");

    // Cameras look down -Z when unrotated.
    let forward = -Vec3f::Z;
    let up = Vec3f::Y;
    let start = Quatf::look_at(forward, vec3(-1.0, 0.2, -1.0), up);
    let end = Quatf::look_at(forward, vec3(1.0, -0.5, 0.3), up);
    log::debug!("start={:?} end={:?}", start, end);

    println!("{:>5}  {:>24}  {:>26}", "t", "roll/pitch/yaw (deg)", "looking at");
    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let q = start.slerp(end, t);
        let euler = q.to_euler().map(f32::to_degrees);
        let dir = q.rotate(forward);
        println!(
            "{:>5.2}  {:>7.1} {:>7.1} {:>7.1}  ({:>6.3}, {:>6.3}, {:>6.3})",
            t, euler.x, euler.y, euler.z, dir.x, dir.y, dir.z,
        );
    }

    let total = start.conjugate().then(end);
    println!(
        "total turn: {:.1} deg around {}",
        total.angle().to_degrees(),
        total
            .axis()
            .map_or_else(|| "<none>".to_string(), |axis| axis.to_string()),
    );

    Ok(())
}
