use chrono::{Duration, NaiveDateTime};

/// Indices into the trajectory where a new burst begins. Always starts with
/// index 0. A point opens a new burst when the time gap behind it exceeds the
/// threshold.
///
/// The gap behind the very last point is never examined, so the last point
/// can't open a burst of its own; together with the pipeline dropping the
/// trailing burst, this reproduces the reference segmentation exactly.
pub fn identify_bursts(times: &[NaiveDateTime], burst_time_threshold: Duration) -> Vec<usize> {
    let mut starts = vec![0];
    if times.len() < 2 {
        return starts;
    }
    let dt: Vec<Duration> = times.windows(2).map(|pair| pair[1] - pair[0]).collect();
    for i in 1..dt.len() {
        if dt[i - 1] > burst_time_threshold {
            starts.push(i);
        }
    }
    starts
}
