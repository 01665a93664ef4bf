//! Release classifier: turns a final gesture sample into a verdict.

use crate::domain::{GestureSample, ScreenMetrics, SwipeAction};

/// Threshold configuration for release classification.
///
/// All fractions are of the screen width. The indicator fraction is
/// advisory: it drives the like/pass hint opacity and must never commit
/// a decision on its own.
#[derive(Debug, Clone)]
pub struct SwipeThresholds {
    /// Horizontal travel beyond which a release commits, as a width fraction.
    pub commit_fraction: f64,

    /// Horizontal velocity (points/ms) beyond which a release commits
    /// regardless of distance.
    pub fling_velocity: f64,

    /// Width fraction at which the like/pass indicator reaches full opacity.
    pub indicator_fraction: f64,
}

impl SwipeThresholds {
    pub const DEFAULT_COMMIT_FRACTION: f64 = 0.15;
    pub const DEFAULT_FLING_VELOCITY: f64 = 0.5;
    pub const DEFAULT_INDICATOR_FRACTION: f64 = 0.10;
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            commit_fraction: Self::DEFAULT_COMMIT_FRACTION,
            fling_velocity: Self::DEFAULT_FLING_VELOCITY,
            indicator_fraction: Self::DEFAULT_INDICATOR_FRACTION,
        }
    }
}

/// What a release means for the top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseVerdict {
    /// The decision is final; the card exits in the action's direction.
    Commit(SwipeAction),

    /// Under threshold; the card returns to center, nothing advances.
    Return,
}

impl ReleaseVerdict {
    pub fn is_commit(self) -> bool {
        matches!(self, ReleaseVerdict::Commit(_))
    }
}

/// Classify a release sample.
///
/// A release commits when the travel clears the distance threshold or the
/// fling clears the velocity threshold (both strictly greater-than).
/// Direction comes from the sign of `dx`: rightward is Like, everything
/// else is Pass. Same sample in, same verdict out; there is no hysteresis
/// and no gesture history.
pub fn classify(
    sample: &GestureSample,
    screen: ScreenMetrics,
    thresholds: &SwipeThresholds,
) -> ReleaseVerdict {
    let over_distance = sample.dx.abs() > thresholds.commit_fraction * screen.width;
    let over_velocity = sample.vx.abs() > thresholds.fling_velocity;

    if over_distance || over_velocity {
        let action = if sample.dx > 0.0 {
            SwipeAction::Like
        } else {
            SwipeAction::Pass
        };
        ReleaseVerdict::Commit(action)
    } else {
        ReleaseVerdict::Return
    }
}
