//! Gesture values: transient drag samples and derived offsets.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A drag sample as reported by the embedder's gesture system.
///
/// `dx`/`dy` are the displacement since gesture start, in screen points.
/// `vx` is the horizontal velocity in points per millisecond (the unit the
/// mobile gesture responders report). Samples exist only between gesture
/// start and release and are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureSample {
    pub dx: f64,
    pub dy: f64,
    pub vx: f64,
}

impl GestureSample {
    pub fn new(dx: f64, dy: f64, vx: f64) -> Self {
        Self { dx, dy, vx }
    }
}

/// Card offset from its resting center, in screen points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Displacement {
    pub x: f64,
    pub y: f64,
}

impl Displacement {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Displacement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Screen geometry the classifier and feedback math depend on.
///
/// Only the width matters: commit thresholds and card poses are all
/// horizontal fractions of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub width: f64,
}

impl ScreenMetrics {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}
