use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

// Feature names keying the persisted config. The non-kinematic columns are
// produced elsewhere; their keys are reserved here so one config covers the
// whole table.
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const MONTH: &str = "month";
pub const DAY: &str = "day";
pub const SIN_TIME: &str = "sin_time";
pub const COS_TIME: &str = "cos_time";
pub const VELOCITY: &str = "velocity";
pub const BEARING: &str = "bearing";
pub const TURN_ANGLE: &str = "turn_angle";

/// Affine min-max scaler over a fixed domain range, mapping onto [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeScaler {
    pub min: f64,
    pub max: f64,
}

impl RangeScaler {
    pub fn new(min: f64, max: f64) -> RangeScaler {
        RangeScaler { min, max }
    }

    /// Maps the domain range onto [0, 1]. A zero-width range (constant
    /// column) maps everything to 0 instead of dividing by zero.
    pub fn scale(&self, x: f64) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        (x - self.min) / (self.max - self.min)
    }

    /// Exact inverse of `scale`, up to floating-point rounding. A zero-width
    /// range inverts to the constant itself.
    pub fn inverse(&self, y: f64) -> f64 {
        if self.max == self.min {
            return self.min;
        }
        y * (self.max - self.min) + self.min
    }
}

/// Per-feature (min, max) domain ranges, persisted as JSON. Built once from a
/// reference dataset and reloaded unchanged for both the forward and the
/// inverse pass -- never recomputed from already-normalized data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureRanges(BTreeMap<String, (f64, f64)>);

impl FeatureRanges {
    pub fn empty() -> FeatureRanges {
        FeatureRanges(BTreeMap::new())
    }

    /// Fixed physical bounds for every feature except velocity, which has no
    /// physical ceiling and is measured from the reference data. An empty
    /// reference pins velocity to (0, 0), the degenerate constant range.
    pub fn from_reference(velocities: &[f64]) -> FeatureRanges {
        let mut ranges = FeatureRanges::empty();
        ranges.set(LATITUDE, -90.0, 90.0);
        ranges.set(LONGITUDE, -180.0, 180.0);
        ranges.set(MONTH, 1.0, 12.0);
        ranges.set(DAY, 1.0, 31.0);
        ranges.set(SIN_TIME, -1.0, 1.0);
        ranges.set(COS_TIME, -1.0, 1.0);
        if velocities.is_empty() {
            ranges.set(VELOCITY, 0.0, 0.0);
        } else {
            let min = velocities.iter().copied().fold(f64::INFINITY, f64::min);
            let max = velocities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            ranges.set(VELOCITY, min, max);
        }
        ranges.set(BEARING, 0.0, 360.0);
        ranges.set(TURN_ANGLE, -180.0, 180.0);
        ranges
    }

    pub fn set(&mut self, feature: &str, min: f64, max: f64) {
        self.0.insert(feature.to_string(), (min, max));
    }

    pub fn scaler(&self, feature: &str) -> Option<RangeScaler> {
        self.0
            .get(feature)
            .map(|(min, max)| RangeScaler::new(*min, *max))
    }

    pub fn features(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn to_json_string(&self) -> Result<String> {
        let out = serde_json::to_string_pretty(&self.0)?;
        Ok(out)
    }

    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<FeatureRanges> {
        let ranges = serde_json::from_reader(reader)?;
        Ok(FeatureRanges(ranges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_45_scales_to_0_75() {
        let scaler = RangeScaler::new(-90.0, 90.0);
        assert!((scaler.scale(45.0) - 0.75).abs() < 1e-9);
        assert!((scaler.inverse(0.75) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip_across_the_domain() {
        let scaler = RangeScaler::new(-180.0, 180.0);
        let mut x = -180.0;
        while x <= 180.0 {
            let back = scaler.inverse(scaler.scale(x));
            assert!((back - x).abs() < 1e-9, "{x} came back as {back}");
            x += 1.7;
        }
    }

    #[test]
    fn degenerate_range_never_divides_by_zero() {
        let scaler = RangeScaler::new(3.0, 3.0);
        assert_eq!(scaler.scale(3.0), 0.0);
        assert_eq!(scaler.inverse(0.0), 3.0);
        // Round-trip still holds for the only value in the domain
        assert_eq!(scaler.inverse(scaler.scale(3.0)), 3.0);
    }

    #[test]
    fn reference_velocity_range_is_measured() {
        let ranges = FeatureRanges::from_reference(&[3.0, 0.5, 12.25, 7.0]);
        let scaler = ranges.scaler(VELOCITY).unwrap();
        assert_eq!(scaler.min, 0.5);
        assert_eq!(scaler.max, 12.25);
        // And the physical bounds are fixed
        assert_eq!(ranges.scaler(LATITUDE).unwrap(), RangeScaler::new(-90.0, 90.0));
        assert_eq!(ranges.scaler(BEARING).unwrap(), RangeScaler::new(0.0, 360.0));
    }

    #[test]
    fn empty_reference_pins_velocity_constant() {
        let ranges = FeatureRanges::from_reference(&[]);
        let scaler = ranges.scaler(VELOCITY).unwrap();
        assert_eq!(scaler.scale(0.0), 0.0);
        assert_eq!(scaler.inverse(0.0), 0.0);
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let ranges = FeatureRanges::from_reference(&[1.0, 99.5]);
        let json = ranges.to_json_string().unwrap();
        let reloaded = FeatureRanges::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(ranges, reloaded);
        // All nine feature keys survive
        assert_eq!(reloaded.features().count(), 9);
    }

    #[test]
    fn missing_feature_has_no_scaler() {
        assert!(FeatureRanges::empty().scaler(VELOCITY).is_none());
    }
}
