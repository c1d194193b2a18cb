//! RadarDetection: one timestamped 3D observation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise `self + step * k`.
    pub fn advanced(&self, step: Position, k: f64) -> Self {
        Self {
            x: self.x + step.x * k,
            y: self.y + step.y * k,
            z: self.z + step.z * k,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDetection {
    pub id: i64,
    /// Bare tag of the radar that produced the observation; not a reference.
    pub radar_id: u32,
    pub timestamp: NaiveDateTime,
    pub position: Position,
    /// Signal strength, a proxy for radar cross-section.
    pub reflection_rate: f64,
}
