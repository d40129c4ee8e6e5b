use anyhow::Result;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::burst::identify_bursts;
use crate::geodesy::LonLat;
use crate::kinematics::{self, Kinematics};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub pos: LonLat,
    pub time: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Trajectory {
    inner: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn new(raw: Vec<TrajectoryPoint>) -> Result<Self> {
        for pair in raw.windows(2) {
            if pair[0].time > pair[1].time {
                bail!(
                    "Trajectory input out-of-order: {} then {}",
                    pair[0].time,
                    pair[1].time
                );
            }
        }
        if raw.is_empty() {
            bail!("Trajectory has no points");
        }
        Ok(Self { inner: raw })
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.inner[0].time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.inner.last().unwrap().time
    }

    /// Velocity, bearing and turn angle for every point, index-aligned with
    /// the trajectory. Points with no predecessor within their burst -- the
    /// first point of each burst, and the entire trailing burst, which is
    /// deliberately left unprocessed -- get `Kinematics::zero()`.
    pub fn derive_kinematics(&self, burst_time_threshold: Duration) -> Vec<Kinematics> {
        // Positions in the Vec are the dense 0-based ordering that all the
        // offset arithmetic below relies on; any upstream filtering has
        // already collapsed into it.
        let n = self.inner.len();

        // dist[i] and secs[i] describe the step from point i-1 to point i.
        // Slot 0 has no predecessor and stays 0.
        let mut dist = vec![0.0; n];
        let mut secs = vec![0.0; n];
        for i in 1..n {
            dist[i] = self.inner[i - 1].pos.gps_dist(self.inner[i].pos);
            secs[i] =
                (self.inner[i].time - self.inner[i - 1].time).num_milliseconds() as f64 / 1000.0;
        }

        let times: Vec<NaiveDateTime> = self.inner.iter().map(|pt| pt.time).collect();
        let starts = identify_bursts(&times, burst_time_threshold);

        let mut result = vec![Kinematics::zero(); n];
        for pair in starts.windows(2) {
            // The burst runs up to (not including) the next start. Writing
            // each burst into its own index range keeps bursts from aliasing
            // at their boundary.
            let start = pair[0];
            let end = pair[1] - 1;
            let positions: Vec<LonLat> = self.inner[start..=end].iter().map(|pt| pt.pos).collect();
            let steps =
                kinematics::for_burst(&positions, &dist[start + 1..=end], &secs[start + 1..=end]);
            for (offset, step) in steps.into_iter().enumerate() {
                result[start + 1 + offset] = step;
            }
        }

        // The burst from the last start through the end of the data is never
        // processed; its points keep the zero default. Flag it rather than
        // papering over it.
        if let Some(last) = starts.last() {
            warn!(
                "Dropping trailing burst of {} points (positions {}..={})",
                n - last,
                last,
                n - 1
            );
        }

        result
    }
}
