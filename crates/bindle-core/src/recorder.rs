//! Decision recorder: best-effort transmission of committed decisions.
//!
//! # 設計原則
//! - 送信はデタッチした task で行い、デッキ進行は一切待たない
//! - 1 判定につき最大 1 回の書き込み（リトライもキューもしない）
//! - 失敗はログとカウンタに残すだけ（ユーザーには見せない）
//! - セッションは入口で一度だけ照合する（Anonymous は送信自体をスキップ）

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tokio::sync::Notify;
use tracing::{debug, warn};

use crate::domain::{Decision, Session};
use crate::observability::RecorderCounts;
use crate::ports::{SwipeRecord, SwipeStore};

/// What happened at the dispatch boundary (not the write itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDispatch {
    /// A write task was spawned. Its outcome lands in the counters only.
    Dispatched,

    /// No session, so nothing was transmitted. The deck advances anyway.
    SkippedAnonymous,
}

/// Shared counters, updated by the detached write tasks.
#[derive(Debug, Default)]
struct RecorderStats {
    dispatched: AtomicU64,
    recorded: AtomicU64,
    failed: AtomicU64,
    skipped_anonymous: AtomicU64,
    in_flight: AtomicUsize,
    settled: Notify,
}

/// Sends committed decisions to the swipe store, fire-and-forget.
///
/// Must live inside a tokio runtime: `record` spawns the write task.
pub struct DecisionRecorder {
    store: Arc<dyn SwipeStore>,
    session: Session,
    stats: Arc<RecorderStats>,
}

impl DecisionRecorder {
    pub fn new(store: Arc<dyn SwipeStore>, session: Session) -> Self {
        Self {
            store,
            session,
            stats: Arc::new(RecorderStats::default()),
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// Dispatch one committed decision.
    ///
    /// Returns immediately in both arms; the caller must not treat either
    /// result as an error. Spawn order follows call order, but completion
    /// order is up to the store.
    pub fn record(&self, decision: &Decision) -> RecordDispatch {
        let swiper = match decision.actor {
            Session::Authenticated(user_id) => user_id,
            Session::Anonymous => {
                self.stats.skipped_anonymous.fetch_add(1, Ordering::Relaxed);
                debug!(
                    candidate = %decision.candidate_id,
                    action = %decision.action,
                    "no active session, swipe not transmitted"
                );
                return RecordDispatch::SkippedAnonymous;
            }
        };

        let record = SwipeRecord::new(swiper, decision.candidate_id, decision.action);
        let store = Arc::clone(&self.store);
        let stats = Arc::clone(&self.stats);

        stats.dispatched.fetch_add(1, Ordering::Relaxed);
        stats.in_flight.fetch_add(1, Ordering::AcqRel);

        tokio::spawn(async move {
            match store.record_swipe(record).await {
                Ok(receipt) => {
                    stats.recorded.fetch_add(1, Ordering::Relaxed);
                    debug!(swipe = %receipt.id, candidate = %record.target_profile_id, "swipe recorded");
                }
                Err(err) => {
                    stats.failed.fetch_add(1, Ordering::Relaxed);
                    warn!(
                        candidate = %record.target_profile_id,
                        action = %record.action,
                        error = %err,
                        "swipe record failed, not retrying"
                    );
                }
            }

            if stats.in_flight.fetch_sub(1, Ordering::AcqRel) == 1 {
                stats.settled.notify_waiters();
            }
        });

        RecordDispatch::Dispatched
    }

    /// Wait until no write task is in flight.
    ///
    /// For graceful teardown and deterministic tests; the deck state
    /// machine never calls this.
    pub async fn settle(&self) {
        loop {
            let notified = self.stats.settled.notified();
            tokio::pin!(notified);
            // 待機登録してから in_flight を読む（通知の取りこぼし防止）
            notified.as_mut().enable();
            if self.stats.in_flight.load(Ordering::Acquire) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Counter snapshot.
    pub fn counts(&self) -> RecorderCounts {
        RecorderCounts {
            dispatched: self.stats.dispatched.load(Ordering::Relaxed),
            recorded: self.stats.recorded.load(Ordering::Relaxed),
            failed: self.stats.failed.load(Ordering::Relaxed),
            skipped_anonymous: self.stats.skipped_anonymous.load(Ordering::Relaxed),
        }
    }
}
