use serde::{Deserialize, Serialize};

/// Deck progress snapshot. `liked`/`passed` are totals since mount and
/// survive refreshes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckCounts {
    pub generation: u32,
    pub cursor: usize,
    pub total: usize,
    pub remaining: usize,
    pub liked: u64,
    pub passed: u64,
}

/// Recorder dispatch snapshot. `dispatched` counts spawned writes;
/// `recorded` and `failed` lag it while writes are in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecorderCounts {
    pub dispatched: u64,
    pub recorded: u64,
    pub failed: u64,
    pub skipped_anonymous: u64,
}
