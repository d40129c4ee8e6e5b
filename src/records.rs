use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::geodesy::LonLat;
use crate::kinematics::Kinematics;
use crate::trajectory::{Trajectory, TrajectoryPoint};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads raw GPS records, ordered by timestamp, from CSV with `latitude`,
/// `longitude` and `timestamp` columns. A missing column or unparseable
/// timestamp fails the whole load.
pub fn load<R: std::io::Read>(reader: R) -> Result<Trajectory> {
    let mut points = Vec::new();
    for rec in csv::Reader::from_reader(reader).deserialize() {
        let rec: RawRecord = rec?;
        let time = NaiveDateTime::parse_from_str(&rec.timestamp, TIMESTAMP_FORMAT)?;
        points.push(TrajectoryPoint {
            pos: LonLat::new(rec.longitude, rec.latitude),
            time,
        });
    }
    info!("Read {} GPS records", points.len());
    Trajectory::new(points)
}

#[derive(Deserialize)]
struct RawRecord {
    latitude: f64,
    longitude: f64,
    timestamp: String,
}

/// Writes the trajectory back out with its derived feature columns.
/// `kinematics` must be index-aligned with the trajectory, as produced by
/// `Trajectory::derive_kinematics`.
pub fn export_csv(trajectory: &Trajectory, kinematics: &[Kinematics]) -> Result<String> {
    if trajectory.len() != kinematics.len() {
        bail!(
            "{} trajectory points, but {} kinematics rows",
            trajectory.len(),
            kinematics.len()
        );
    }

    let mut out = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut out);
        for (pt, k) in trajectory.points().iter().zip(kinematics) {
            writer.serialize(EnrichedRow {
                latitude: pt.pos.latitude,
                longitude: pt.pos.longitude,
                timestamp: pt.time.format(TIMESTAMP_FORMAT).to_string(),
                velocity: k.velocity,
                bearing: k.bearing,
                turn_angle: k.turn_angle,
            })?;
        }
        writer.flush()?;
    }
    let out = String::from_utf8(out)?;
    Ok(out)
}

#[derive(Serialize)]
struct EnrichedRow {
    latitude: f64,
    longitude: f64,
    timestamp: String,
    velocity: f64,
    bearing: f64,
    turn_angle: f64,
}
