#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod burst;
mod geodesy;
mod kinematics;
mod normalize;
mod records;
mod trajectory;

pub use self::burst::identify_bursts;
pub use self::geodesy::{LonLat, EARTH_RADIUS};
pub use self::kinematics::{for_burst, turn_angle, velocity, Kinematics};
pub use self::normalize::{
    FeatureRanges, RangeScaler, BEARING, COS_TIME, DAY, LATITUDE, LONGITUDE, MONTH, SIN_TIME,
    TURN_ANGLE, VELOCITY,
};
pub use self::records::{export_csv, load};
pub use self::trajectory::{Trajectory, TrajectoryPoint};
