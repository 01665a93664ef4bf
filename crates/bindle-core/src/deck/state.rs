//! Deck phase machine.

use serde::{Deserialize, Serialize};

use crate::domain::SwipeAction;

/// Interaction phase of the top card.
///
/// Phase transitions:
/// - Idle -> Dragging -> Idle (released under threshold, card returns)
/// - Idle -> Dragging -> Animating (released over threshold, decision committed)
/// - Idle -> Animating (like/pass button, same commit path)
/// - Animating -> Idle (exit finished, next candidate) or -> Exhausted (deck drained)
/// - Exhausted -> Idle (refresh with a non-empty list)
///
/// Design note: the committed action rides inside `Animating` so the
/// embedder can derive the exit direction from the phase alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckPhase {
    /// Top card at rest, ready for a gesture or button press.
    Idle,

    /// A gesture is in flight; the card follows the finger.
    Dragging,

    /// A decision has been committed; the exit animation is running.
    Animating(SwipeAction),

    /// No candidates remain. Only `refresh` leaves this phase.
    Exhausted,
}

impl DeckPhase {
    /// Can a new gesture or button press begin in this phase?
    pub fn accepts_input(self) -> bool {
        matches!(self, DeckPhase::Idle)
    }

    pub fn is_dragging(self) -> bool {
        matches!(self, DeckPhase::Dragging)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, DeckPhase::Animating(_))
    }

    pub fn is_exhausted(self) -> bool {
        matches!(self, DeckPhase::Exhausted)
    }
}
