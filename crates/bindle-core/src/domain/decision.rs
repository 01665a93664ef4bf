//! Decision model: the discrete outcome of a swipe.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::ProfileId;
use super::session::Session;

/// The two possible verdicts on a candidate.
///
/// We intentionally serialize as lowercase to match the store's wire
/// contract: "like" / "pass".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Pass,
}

impl SwipeAction {
    pub fn is_like(self) -> bool {
        matches!(self, SwipeAction::Like)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwipeAction::Like => "like",
            SwipeAction::Pass => "pass",
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finalized verdict on one candidate.
///
/// Produced exactly once per committed candidate, in deck order. The
/// `actor` is captured at commit time so recording never re-reads
/// session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub candidate_id: ProfileId,
    pub action: SwipeAction,
    pub actor: Session,
}

impl Decision {
    pub fn new(candidate_id: ProfileId, action: SwipeAction, actor: Session) -> Self {
        Self {
            candidate_id,
            action,
            actor,
        }
    }
}
