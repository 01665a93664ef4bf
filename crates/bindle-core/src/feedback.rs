//! Presentation feedback: pure functions from gesture state to render values.
//!
//! Everything here is arithmetic over the current card offset. No phase
//! machine access, no side effects; the embedder samples these every frame
//! and feeds the results straight into its animation layer.

use serde::Serialize;

use crate::deck::SwipeThresholds;
use crate::domain::{Displacement, ScreenMetrics, SwipeAction};

/// How long the committed card's exit animation runs, in milliseconds.
pub const EXIT_ANIMATION_MS: u64 = 300;

/// The exit target overshoots the screen edge by half a width.
const EXIT_OVERSHOOT: f64 = 1.5;

/// Fraction of the released vertical drift the exit animation keeps.
const EXIT_VERTICAL_CARRY: f64 = 0.5;

/// Scale of the top card at a full screen width of horizontal travel.
const SCALE_FLOOR: f64 = 0.8;

/// Rotation of the top card at a full screen width of horizontal travel.
const MAX_ROTATION_DEG: f64 = 10.0;

/// Render values for the top card at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardPose {
    /// Offset from the resting center, 1:1 with the drag.
    pub translate_x: f64,
    pub translate_y: f64,

    /// Tilt in degrees, positive clockwise, linear in the horizontal
    /// travel and clamped at full deflection.
    pub rotation_deg: f64,

    /// Shrink factor, 1.0 at rest down to the floor at a full width.
    pub scale: f64,

    /// Like hint opacity in [0, 1]. Full at the indicator threshold.
    pub like_opacity: f64,

    /// Pass hint opacity in [0, 1]. Mirror of the like hint.
    pub pass_opacity: f64,
}

/// Compute the top card's pose for the given offset.
pub fn card_pose(
    offset: Displacement,
    screen: ScreenMetrics,
    thresholds: &SwipeThresholds,
) -> CardPose {
    let progress = (offset.x / screen.width).clamp(-1.0, 1.0);
    let indicator_span = thresholds.indicator_fraction * screen.width;

    CardPose {
        translate_x: offset.x,
        translate_y: offset.y,
        rotation_deg: MAX_ROTATION_DEG * progress,
        scale: 1.0 - (1.0 - SCALE_FLOOR) * progress.abs(),
        like_opacity: (offset.x / indicator_span).clamp(0.0, 1.0),
        pass_opacity: (-offset.x / indicator_span).clamp(0.0, 1.0),
    }
}

/// Where the committed card flies to.
///
/// Horizontally it overshoots the edge on the action's side; vertically it
/// keeps half of whatever drift the release had, so the card leaves along
/// the gesture's own line instead of snapping level.
pub fn exit_target(action: SwipeAction, release: Displacement, screen: ScreenMetrics) -> Displacement {
    let direction = match action {
        SwipeAction::Like => 1.0,
        SwipeAction::Pass => -1.0,
    };
    Displacement::new(
        direction * EXIT_OVERSHOOT * screen.width,
        release.y * EXIT_VERTICAL_CARRY,
    )
}
