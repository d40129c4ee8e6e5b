use serde::{Deserialize, Serialize};

use crate::geodesy::LonLat;

/// Movement features derived for one trajectory point, relative to its
/// predecessor within the same burst.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    /// Meters per second, >= 0
    pub velocity: f64,
    /// Degrees in [0, 360), 0 = north
    pub bearing: f64,
    /// Degrees in [0, 180], magnitude only
    pub turn_angle: f64,
}

impl Kinematics {
    /// The default for points with no predecessor relationship: the first
    /// point of every burst, and every point of a dropped trailing burst.
    pub fn zero() -> Kinematics {
        Kinematics {
            velocity: 0.0,
            bearing: 0.0,
            turn_angle: 0.0,
        }
    }
}

/// Speed in m/s over one step. A non-positive time delta has no defined
/// speed; it yields 0 rather than letting Inf/NaN leak into stored output.
pub fn velocity(dist_meters: f64, delta_secs: f64) -> f64 {
    if delta_secs <= 0.0 {
        return 0.0;
    }
    dist_meters / delta_secs
}

/// Unsigned angular difference between two bearings, in degrees [0, 180].
/// Clockwise and counterclockwise turns are indistinguishable. The clamp
/// keeps floating-point drift from escaping acos's domain.
pub fn turn_angle(bearing: f64, prev_bearing: f64) -> f64 {
    let delta = (bearing - prev_bearing).to_radians();
    delta.cos().clamp(-1.0, 1.0).acos().to_degrees()
}

/// Per-step kinematics for one burst, excluding the burst's first point.
///
/// `positions` are the burst's points in order; `step_dist` and `step_secs`
/// describe each consecutive pair, so both have length `positions.len() - 1`.
/// The result is index-aligned with the steps: entry `k` belongs to
/// `positions[k + 1]`. The first step has no previous bearing to turn from,
/// so its turn angle is 0.
pub fn for_burst(positions: &[LonLat], step_dist: &[f64], step_secs: &[f64]) -> Vec<Kinematics> {
    let mut result = Vec::new();
    let mut prev_bearing: Option<f64> = None;
    for k in 0..step_dist.len() {
        let bearing = positions[k].bearing_to(positions[k + 1]);
        let turn = match prev_bearing {
            Some(prev) => turn_angle(bearing, prev),
            None => 0.0,
        };
        prev_bearing = Some(bearing);
        result.push(Kinematics {
            velocity: velocity(step_dist[k], step_secs[k]),
            bearing,
            turn_angle: turn,
        });
    }
    result
}
