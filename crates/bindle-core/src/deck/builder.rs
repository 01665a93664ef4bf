//! DeckBuilder - デッキの構築とワイヤリング
//!
//! # 使用例
//! ```ignore
//! let deck = DeckBuilder::new()
//!     .candidate_source(source)
//!     .swipe_store(swipes)
//!     .session_store(sessions)
//!     .screen(ScreenMetrics::new(390.0))
//!     .mount()
//!     .await?;
//! ```
//!
//! # Fail-fast 設計
//! - mount() 時にコラボレータと設定を全て検証する
//! - 不足・不正があれば MountError を返す（スワイプ経路と違い、
//!   構成エラーは埋め込み側に見せる）
//! - セッションはここで一度だけ読む（以後は再取得しない）

use std::sync::Arc;

use crate::domain::{ScreenMetrics, Session};
use crate::ports::{CandidateSource, SessionStore, SourceError, SwipeStore};
use crate::recorder::DecisionRecorder;

use super::classifier::SwipeThresholds;
use super::controller::DeckController;

/// MountError はデッキ構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("missing collaborator: {0}")]
    Missing(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// DeckBuilder wires a controller from its collaborators.
pub struct DeckBuilder {
    source: Option<Arc<dyn CandidateSource>>,
    swipes: Option<Arc<dyn SwipeStore>>,
    sessions: Option<Arc<dyn SessionStore>>,
    screen: Option<ScreenMetrics>,
    thresholds: SwipeThresholds,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            swipes: None,
            sessions: None,
            screen: None,
            thresholds: SwipeThresholds::default(),
        }
    }

    pub fn candidate_source(mut self, source: Arc<dyn CandidateSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn swipe_store(mut self, store: Arc<dyn SwipeStore>) -> Self {
        self.swipes = Some(store);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(store);
        self
    }

    pub fn screen(mut self, screen: ScreenMetrics) -> Self {
        self.screen = Some(screen);
        self
    }

    pub fn thresholds(mut self, thresholds: SwipeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Validate, read the session once, fetch the deck, and hand over a
    /// ready controller.
    ///
    /// # 検証
    /// - コラボレータ 3 つが揃っていること
    /// - 画面幅が正の有限値であること
    /// - しきい値が正であり、インジケータがコミットを超えないこと
    ///   （ヒントは判定点までに飽和する）
    pub async fn mount(self) -> Result<DeckController, MountError> {
        let source = self.source.ok_or(MountError::Missing("candidate_source"))?;
        let swipes = self.swipes.ok_or(MountError::Missing("swipe_store"))?;
        let sessions = self.sessions.ok_or(MountError::Missing("session_store"))?;
        let screen = self.screen.ok_or(MountError::Missing("screen"))?;

        if !screen.width.is_finite() || screen.width <= 0.0 {
            return Err(MountError::InvalidConfig(format!(
                "screen width must be positive and finite, got {}",
                screen.width
            )));
        }

        let t = &self.thresholds;
        if !t.commit_fraction.is_finite() || t.commit_fraction <= 0.0 {
            return Err(MountError::InvalidConfig(format!(
                "commit_fraction must be positive, got {}",
                t.commit_fraction
            )));
        }
        if !t.fling_velocity.is_finite() || t.fling_velocity <= 0.0 {
            return Err(MountError::InvalidConfig(format!(
                "fling_velocity must be positive, got {}",
                t.fling_velocity
            )));
        }
        if !t.indicator_fraction.is_finite() || t.indicator_fraction <= 0.0 {
            return Err(MountError::InvalidConfig(format!(
                "indicator_fraction must be positive, got {}",
                t.indicator_fraction
            )));
        }
        if t.indicator_fraction > t.commit_fraction {
            return Err(MountError::InvalidConfig(format!(
                "indicator_fraction ({}) must not exceed commit_fraction ({})",
                t.indicator_fraction, t.commit_fraction
            )));
        }

        let session = Session::from_user_id(sessions.current_user_id().await);
        let candidates = source.fetch().await?;

        Ok(DeckController::new(
            candidates,
            DecisionRecorder::new(swipes, session),
            screen,
            self.thresholds,
        ))
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::deck::DeckPhase;
    use crate::domain::{BudgetRange, CandidateProfile, ProfileId, UserId};
    use crate::impls::{InMemorySessionStore, InMemorySwipeStore, StaticCandidates};

    fn one_profile() -> Vec<CandidateProfile> {
        vec![CandidateProfile {
            id: ProfileId::new(1),
            name: "Alex Johnson".to_string(),
            age: 24,
            bio: String::new(),
            budget: BudgetRange::new(800, 1200),
            location: "Downtown".to_string(),
            interests: vec![],
            image_url: String::new(),
        }]
    }

    fn full_builder() -> DeckBuilder {
        DeckBuilder::new()
            .candidate_source(Arc::new(StaticCandidates::new(one_profile())))
            .swipe_store(Arc::new(InMemorySwipeStore::new()))
            .session_store(Arc::new(InMemorySessionStore::signed_in(UserId::new(1))))
            .screen(ScreenMetrics::new(390.0))
    }

    #[tokio::test]
    async fn mount_succeeds_with_everything_wired() {
        let deck = full_builder().mount().await.unwrap();
        assert_eq!(deck.phase(), DeckPhase::Idle);
        assert_eq!(deck.cursor(), 0);
        assert!(deck.session().is_authenticated());
    }

    #[tokio::test]
    async fn mount_fails_on_missing_collaborator() {
        let result = DeckBuilder::new()
            .swipe_store(Arc::new(InMemorySwipeStore::new()))
            .session_store(Arc::new(InMemorySessionStore::anonymous()))
            .screen(ScreenMetrics::new(390.0))
            .mount()
            .await;

        assert!(matches!(
            result,
            Err(MountError::Missing("candidate_source"))
        ));
    }

    #[tokio::test]
    async fn mount_fails_on_nonpositive_width() {
        let result = full_builder().screen(ScreenMetrics::new(0.0)).mount().await;
        assert!(matches!(result, Err(MountError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn mount_fails_when_indicator_exceeds_commit() {
        let result = full_builder()
            .thresholds(SwipeThresholds {
                commit_fraction: 0.15,
                fling_velocity: 0.5,
                indicator_fraction: 0.2,
            })
            .mount()
            .await;
        assert!(matches!(result, Err(MountError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn mount_with_empty_source_starts_exhausted() {
        let deck = full_builder()
            .candidate_source(Arc::new(StaticCandidates::new(vec![])))
            .mount()
            .await
            .unwrap();
        assert_eq!(deck.phase(), DeckPhase::Exhausted);
    }

    #[tokio::test]
    async fn mount_propagates_source_errors() {
        struct BrokenSource;

        #[async_trait]
        impl CandidateSource for BrokenSource {
            async fn fetch(&self) -> Result<Vec<CandidateProfile>, SourceError> {
                Err(SourceError::Unavailable("api down".to_string()))
            }
        }

        let result = full_builder()
            .candidate_source(Arc::new(BrokenSource))
            .mount()
            .await;
        assert!(matches!(result, Err(MountError::Source(_))));
    }

    #[tokio::test]
    async fn session_is_read_exactly_once() {
        struct CountingSessions {
            reads: AtomicU32,
        }

        #[async_trait]
        impl SessionStore for CountingSessions {
            async fn current_user_id(&self) -> Option<UserId> {
                self.reads.fetch_add(1, Ordering::Relaxed);
                Some(UserId::new(7))
            }
        }

        let sessions = Arc::new(CountingSessions {
            reads: AtomicU32::new(0),
        });
        let mut deck = full_builder()
            .session_store(sessions.clone())
            .mount()
            .await
            .unwrap();

        // Swipe through; nothing re-reads the session.
        deck.press_like();
        deck.exit_animation_complete();
        deck.settle().await;

        assert_eq!(sessions.reads.load(Ordering::Relaxed), 1);
        assert_eq!(deck.session().user_id(), Some(UserId::new(7)));
    }
}
