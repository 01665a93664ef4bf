//! Candidate profile: the card content shown to the swiping user.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::ProfileId;

/// Monthly budget range in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}-{}", self.min, self.max)
    }
}

/// A roommate candidate as presented on a card.
///
/// Immutable for the lifetime of a deck: the engine never edits profiles,
/// it only orders and consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: ProfileId,
    pub name: String,
    pub age: u8,
    pub bio: String,
    pub budget: BudgetRange,
    pub location: String,
    pub interests: Vec<String>,
    pub image_url: String,
}
