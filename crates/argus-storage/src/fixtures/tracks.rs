//! Synthetic detection generators: straight-line aircraft tracks, a
//! stationary weather cluster and hand-placed clutter.

use argus_core::models::{Position, RadarDetection};
use chrono::{Duration, NaiveDateTime};

/// A straight-line track sampled at a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct TrackSpec {
    pub radar_id: u32,
    pub start: Position,
    /// Displacement per sample.
    pub step: Position,
    pub samples: usize,
    /// Offset of the first sample from the fixture epoch, in seconds.
    pub offset_secs: i64,
    pub interval_secs: i64,
    pub reflection: f64,
    /// Added to `reflection` cyclically, sample by sample.
    pub flicker: [f64; 3],
}

/// A grid of returns around a fixed centre, typical of precipitation.
#[derive(Debug, Clone, Copy)]
pub struct ClusterSpec {
    pub radar_id: u32,
    pub centre: Position,
    pub columns: usize,
    pub rows: usize,
    pub spacing: f64,
    pub offset_secs: i64,
    pub interval_secs: i64,
    pub reflection: f64,
    /// Reflection increase per point.
    pub reflection_step: f64,
}

/// One hand-placed clutter return.
#[derive(Debug, Clone, Copy)]
pub struct Clutter {
    pub radar_id: u32,
    pub offset_secs: i64,
    pub position: Position,
    pub reflection: f64,
}

impl Clutter {
    pub const fn new(radar_id: u32, offset_secs: i64, position: Position, reflection: f64) -> Self {
        Self {
            radar_id,
            offset_secs,
            position,
            reflection,
        }
    }
}

/// Accumulates detections with consecutive ids starting at 1.
#[derive(Debug)]
pub struct DetectionLog {
    epoch: NaiveDateTime,
    rows: Vec<RadarDetection>,
}

impl DetectionLog {
    pub fn new(epoch: NaiveDateTime) -> Self {
        Self {
            epoch,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, radar_id: u32, offset_secs: i64, position: Position, reflection: f64) {
        let id = self.rows.len() as i64 + 1;
        self.rows.push(RadarDetection {
            id,
            radar_id,
            timestamp: self.epoch + Duration::seconds(offset_secs),
            position,
            reflection_rate: round2(reflection),
        });
    }

    pub fn track(&mut self, spec: &TrackSpec) -> &mut Self {
        for k in 0..spec.samples {
            let position = spec.start.advanced(spec.step, k as f64);
            let reflection = spec.reflection + spec.flicker[k % spec.flicker.len()];
            let at = spec.offset_secs + spec.interval_secs * k as i64;
            self.push(spec.radar_id, at, position, reflection);
        }
        self
    }

    pub fn cluster(&mut self, spec: &ClusterSpec) -> &mut Self {
        let half_w = (spec.columns as f64 - 1.0) / 2.0;
        let half_h = (spec.rows as f64 - 1.0) / 2.0;
        for row in 0..spec.rows {
            for col in 0..spec.columns {
                let n = row * spec.columns + col;
                // Alternate altitude so the cells do not sit on one plane.
                let dz = if n % 2 == 0 { 100.0 } else { -100.0 };
                let position = Position::new(
                    spec.centre.x + (col as f64 - half_w) * spec.spacing,
                    spec.centre.y + (row as f64 - half_h) * spec.spacing,
                    spec.centre.z + dz,
                );
                let reflection = spec.reflection + spec.reflection_step * n as f64;
                let at = spec.offset_secs + spec.interval_secs * n as i64;
                self.push(spec.radar_id, at, position, reflection);
            }
        }
        self
    }

    pub fn clutter(&mut self, points: &[Clutter]) -> &mut Self {
        for p in points {
            self.push(p.radar_id, p.offset_secs, p.position, p.reflection);
        }
        self
    }

    pub fn finish(&mut self) -> Vec<RadarDetection> {
        std::mem::take(&mut self.rows)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixture_time;

    const SPEC: TrackSpec = TrackSpec {
        radar_id: 2,
        start: Position::new(0.0, 0.0, 1000.0),
        step: Position::new(100.0, -50.0, 0.0),
        samples: 4,
        offset_secs: 10,
        interval_secs: 5,
        reflection: 10.0,
        flicker: [0.0, 0.333, -0.25],
    };

    #[test]
    fn track_samples_advance_linearly() {
        let rows = DetectionLog::new(fixture_time(8, 0, 0)).track(&SPEC).finish();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].position, Position::new(300.0, -150.0, 1000.0));
        assert_eq!(rows[3].timestamp, fixture_time(8, 0, 25));
        assert!(rows.iter().all(|r| r.radar_id == 2));
    }

    #[test]
    fn reflection_is_rounded_to_two_places() {
        let rows = DetectionLog::new(fixture_time(8, 0, 0)).track(&SPEC).finish();
        let rates: Vec<f64> = rows.iter().map(|r| r.reflection_rate).collect();
        assert_eq!(rates, [10.0, 10.33, 9.75, 10.0]);
    }

    #[test]
    fn ids_continue_across_generators() {
        let cluster = ClusterSpec {
            radar_id: 1,
            centre: Position::new(0.0, 0.0, 2000.0),
            columns: 2,
            rows: 2,
            spacing: 200.0,
            offset_secs: 0,
            interval_secs: 1,
            reflection: 2.0,
            reflection_step: 0.1,
        };
        let rows = DetectionLog::new(fixture_time(8, 0, 0))
            .track(&SPEC)
            .cluster(&cluster)
            .clutter(&[Clutter::new(3, 0, Position::default(), 0.5)])
            .finish();
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        assert_eq!(rows[4].position, Position::new(-100.0, -100.0, 2100.0));
    }
}
