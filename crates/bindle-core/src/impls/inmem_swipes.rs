//! InMemorySwipeStore - 追記ログ + 失敗注入つきのスワイプストア
//!
//! # 実装詳細
//! - 受け取った record に行 ID と created_at を付けて追記する
//! - `failing(n)` で最初の n 回を失敗させ、送信経路の隔離を検証できる
//! - `with_latency` で書き込みを遅らせ、settle の挙動を検証できる

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::SwipeId;
use crate::ports::{SwipeReceipt, SwipeRecord, SwipeStore, SwipeStoreError};

struct SwipeLog {
    rows: Vec<SwipeReceipt>,
    next_id: i64,
}

/// Append-only swipe store for development and tests.
pub struct InMemorySwipeStore {
    log: Mutex<SwipeLog>,
    remaining_failures: AtomicU32,
    latency: Option<Duration>,
}

impl InMemorySwipeStore {
    pub fn new() -> Self {
        Self {
            log: Mutex::new(SwipeLog {
                rows: Vec::new(),
                next_id: 1,
            }),
            remaining_failures: AtomicU32::new(0),
            latency: None,
        }
    }

    /// Fail the first `n` writes, then behave normally.
    pub fn failing(n: u32) -> Self {
        let store = Self::new();
        store.remaining_failures.store(n, Ordering::Relaxed);
        store
    }

    /// Delay every write, successful or not.
    pub fn with_latency(latency: Duration) -> Self {
        let mut store = Self::new();
        store.latency = Some(latency);
        store
    }

    /// Everything successfully written, in arrival order.
    pub async fn recorded(&self) -> Vec<SwipeReceipt> {
        self.log.lock().await.rows.clone()
    }
}

impl Default for InMemorySwipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwipeStore for InMemorySwipeStore {
    async fn record_swipe(&self, record: SwipeRecord) -> Result<SwipeReceipt, SwipeStoreError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let left = self.remaining_failures.load(Ordering::Relaxed);
        if left > 0 {
            self.remaining_failures.fetch_sub(1, Ordering::Relaxed);
            return Err(SwipeStoreError::Transport(format!(
                "intentional failure (left={left})"
            )));
        }

        let mut log = self.log.lock().await;
        let receipt = SwipeReceipt {
            id: SwipeId::new(log.next_id),
            swiper_user_id: record.swiper_user_id,
            target_profile_id: record.target_profile_id,
            action: record.action,
            created_at: Utc::now(),
        };
        log.next_id += 1;
        log.rows.push(receipt);
        Ok(receipt)
    }
}
