//! SwipeStore port - 確定した判定の永続化先
//!
//! The store is remote and unreliable. Every error variant gets the same
//! treatment from the engine: a log line and a counter bump, nothing else.
//! Nothing on the swipe path ever waits for or surfaces a store error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ProfileId, SwipeAction, SwipeId, UserId};

/// One swipe write, exactly as it goes over the wire.
///
/// Field names are the store's JSON contract; do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeRecord {
    pub swiper_user_id: UserId,
    pub target_profile_id: ProfileId,
    pub action: SwipeAction,
}

impl SwipeRecord {
    pub fn new(swiper_user_id: UserId, target_profile_id: ProfileId, action: SwipeAction) -> Self {
        Self {
            swiper_user_id,
            target_profile_id,
            action,
        }
    }
}

/// The stored row echoed back on a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeReceipt {
    pub id: SwipeId,
    pub swiper_user_id: UserId,
    pub target_profile_id: ProfileId,
    pub action: SwipeAction,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum SwipeStoreError {
    #[error("transport: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("store rejected swipe: status={status} {message}")]
    Rejected { status: u16, message: String },
}

/// Records one swipe. At most one call is made per committed decision.
#[async_trait]
pub trait SwipeStore: Send + Sync {
    async fn record_swipe(&self, record: SwipeRecord) -> Result<SwipeReceipt, SwipeStoreError>;
}
