//! Gesture tracker: baseline and live offset for the top card.

use crate::domain::{Displacement, GestureSample};

/// Tracks one drag at a time against an offset baseline.
///
/// Design:
/// - `base` is the card's resting offset (normally zero, or the release
///   point while an exit animation runs).
/// - `live` is the displacement of the current drag since its start.
/// - `start` captures the baseline, `release` folds the final sample into
///   it, mirroring the set-offset / flatten-offset dance of the mobile
///   gesture responders this feeds.
///
/// The tracker observes; it never classifies and never buffers samples.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    armed: bool,
    base: Displacement,
    live: Displacement,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for a new drag. Refused (false) while a drag is in flight.
    pub fn start(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        self.live = Displacement::ZERO;
        true
    }

    /// Observe a move sample. Ignored unless armed.
    pub fn on_move(&mut self, dx: f64, dy: f64) {
        if self.armed {
            self.live = Displacement::new(dx, dy);
        }
    }

    /// Disarm and fold the final sample into the baseline.
    ///
    /// After this the card sits at the release point until `reset` (return
    /// to center) or the next deal zeroes it.
    pub fn release(&mut self, sample: GestureSample) -> GestureSample {
        self.base = self.base + Displacement::new(sample.dx, sample.dy);
        self.live = Displacement::ZERO;
        self.armed = false;
        sample
    }

    /// Total offset from center: baseline plus the live drag.
    pub fn displacement(&self) -> Displacement {
        self.base + self.live
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Zero everything (card back at center, nothing in flight).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
