//! Deck module: candidate ordering, gesture tracking, and the phase machine.

mod builder;
mod classifier;
mod controller;
mod state;
mod tracker;

pub use builder::{DeckBuilder, MountError};
pub use classifier::{ReleaseVerdict, SwipeThresholds, classify};
pub use controller::DeckController;
pub use state::DeckPhase;
pub use tracker::GestureTracker;

use crate::domain::CandidateProfile;

/// The ordered candidate queue plus its consumption cursor.
///
/// Design intent:
/// - The cursor only ever moves forward, and only when a decision commits.
/// - A refresh builds a new `Deck` with a bumped generation; it is a new
///   queue, never a rewind of the old one.
#[derive(Debug, Clone)]
pub struct Deck {
    candidates: Vec<CandidateProfile>,
    cursor: usize,
    generation: u32,
}

impl Deck {
    /// First deck of a mounted controller.
    pub fn first_generation(candidates: Vec<CandidateProfile>) -> Self {
        Self {
            candidates,
            cursor: 0,
            generation: 1,
        }
    }

    /// Successor deck after a refresh.
    pub fn next_generation(&self, candidates: Vec<CandidateProfile>) -> Self {
        Self {
            candidates,
            cursor: 0,
            generation: self.generation + 1,
        }
    }

    /// The candidate under the cursor, if any remain.
    pub fn current(&self) -> Option<&CandidateProfile> {
        self.candidates.get(self.cursor)
    }

    /// Move the cursor past the current candidate.
    pub fn advance(&mut self) {
        if self.cursor < self.candidates.len() {
            self.cursor += 1;
        }
    }

    /// True once every candidate has been consumed.
    pub fn is_drained(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.candidates.len().saturating_sub(self.cursor)
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}
