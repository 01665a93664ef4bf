//! Deck controller: the phase machine that turns gestures into decisions.

use tracing::debug;

use super::classifier::{ReleaseVerdict, SwipeThresholds, classify};
use super::state::DeckPhase;
use super::tracker::GestureTracker;
use super::Deck;
use crate::domain::{CandidateProfile, Decision, GestureSample, ScreenMetrics, Session, SwipeAction};
use crate::feedback::{self, CardPose};
use crate::observability::{DeckCounts, RecorderCounts};
use crate::recorder::DecisionRecorder;

/// Owns the candidate deck and drives gestures through the commit path.
///
/// Design:
/// - Single-threaded by construction: every operation takes `&mut self`
///   and the embedder serializes calls on its event loop. Wrap it in a
///   mutex or an actor if the embedder is multi-threaded.
/// - No operation can fail. Invalid inputs for the current phase are
///   refused with a `false`/`None` and a debug log, and remote trouble
///   stays inside the recorder.
/// - The cursor advances on commit, never on anything else, so every
///   candidate gets exactly one decision, in deck order.
pub struct DeckController {
    deck: Deck,
    phase: DeckPhase,
    tracker: GestureTracker,
    recorder: DecisionRecorder,
    screen: ScreenMetrics,
    thresholds: SwipeThresholds,
    liked: u64,
    passed: u64,
}

impl DeckController {
    /// Assemble a controller from already-resolved parts.
    ///
    /// Most embedders should go through `DeckBuilder::mount`, which also
    /// reads the session and fetches the candidates.
    pub fn new(
        candidates: Vec<CandidateProfile>,
        recorder: DecisionRecorder,
        screen: ScreenMetrics,
        thresholds: SwipeThresholds,
    ) -> Self {
        let deck = Deck::first_generation(candidates);
        let phase = if deck.is_drained() {
            DeckPhase::Exhausted
        } else {
            DeckPhase::Idle
        };
        Self {
            deck,
            phase,
            tracker: GestureTracker::new(),
            recorder,
            screen,
            thresholds,
            liked: 0,
            passed: 0,
        }
    }

    /// Begin a drag on the top card. Refused outside `Idle`.
    pub fn gesture_start(&mut self) -> bool {
        if !self.phase.accepts_input() {
            debug!(phase = ?self.phase, "gesture start refused");
            return false;
        }
        self.tracker.start();
        self.phase = DeckPhase::Dragging;
        true
    }

    /// Observe a drag sample. Ignored outside `Dragging`.
    pub fn gesture_move(&mut self, dx: f64, dy: f64) {
        if self.phase.is_dragging() {
            self.tracker.on_move(dx, dy);
        }
    }

    /// End the drag and classify it.
    ///
    /// `None` means no drag was in flight. On `Return` the card snaps back
    /// to center and nothing advances; on `Commit` the decision is final
    /// and dispatched before this method returns.
    pub fn gesture_release(&mut self, sample: GestureSample) -> Option<ReleaseVerdict> {
        if !self.phase.is_dragging() {
            debug!(phase = ?self.phase, "gesture release ignored");
            return None;
        }

        let sample = self.tracker.release(sample);
        let verdict = classify(&sample, self.screen, &self.thresholds);

        match verdict {
            ReleaseVerdict::Return => {
                self.tracker.reset();
                self.phase = DeckPhase::Idle;
            }
            ReleaseVerdict::Commit(action) => {
                self.commit(action);
            }
        }
        Some(verdict)
    }

    /// Like button. Same commit path as a completed gesture.
    pub fn press_like(&mut self) -> bool {
        self.press(SwipeAction::Like)
    }

    /// Pass button. Same commit path as a completed gesture.
    pub fn press_pass(&mut self) -> bool {
        self.press(SwipeAction::Pass)
    }

    fn press(&mut self, action: SwipeAction) -> bool {
        if !self.phase.accepts_input() {
            debug!(phase = ?self.phase, action = %action, "button press refused");
            return false;
        }
        self.commit(action);
        true
    }

    /// One code path for "the decision became final".
    ///
    /// Dispatches the recorder now, against the candidate under the cursor
    /// at this instant, then hands the card to the exit animation. The
    /// cursor itself moves in `exit_animation_complete`.
    fn commit(&mut self, action: SwipeAction) {
        let Some(candidate) = self.deck.current() else {
            // Idle/Dragging の間は cursor が範囲内に保たれている
            debug!("commit with no current candidate ignored");
            return;
        };

        let decision = Decision::new(candidate.id, action, self.recorder.session());
        match action {
            SwipeAction::Like => self.liked += 1,
            SwipeAction::Pass => self.passed += 1,
        }
        self.recorder.record(&decision);
        self.phase = DeckPhase::Animating(action);
    }

    /// The embedder finished the exit animation; deal the next card.
    ///
    /// Returns false (and changes nothing) unless an exit was in flight.
    pub fn exit_animation_complete(&mut self) -> bool {
        if !self.phase.is_animating() {
            debug!(phase = ?self.phase, "exit completion ignored");
            return false;
        }
        self.deck.advance();
        self.tracker.reset();
        self.phase = if self.deck.is_drained() {
            DeckPhase::Exhausted
        } else {
            DeckPhase::Idle
        };
        true
    }

    /// Replace the drained deck with a fresh candidate list.
    ///
    /// Only legal from `Exhausted`; anywhere else it is refused, because a
    /// live deck is never rewound or reshuffled. An empty list is accepted
    /// and lands straight back in `Exhausted`.
    pub fn refresh(&mut self, candidates: Vec<CandidateProfile>) -> bool {
        if !self.phase.is_exhausted() {
            debug!(phase = ?self.phase, "refresh refused");
            return false;
        }
        self.deck = self.deck.next_generation(candidates);
        self.tracker.reset();
        self.phase = if self.deck.is_drained() {
            DeckPhase::Exhausted
        } else {
            DeckPhase::Idle
        };
        true
    }

    // ----- accessors -----

    pub fn phase(&self) -> DeckPhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.deck.cursor()
    }

    pub fn current_candidate(&self) -> Option<&CandidateProfile> {
        self.deck.current()
    }

    pub fn session(&self) -> Session {
        self.recorder.session()
    }

    /// Render values for the top card at this instant.
    pub fn card_pose(&self) -> CardPose {
        feedback::card_pose(self.tracker.displacement(), self.screen, &self.thresholds)
    }

    pub fn counts(&self) -> DeckCounts {
        DeckCounts {
            generation: self.deck.generation(),
            cursor: self.deck.cursor(),
            total: self.deck.len(),
            remaining: self.deck.remaining(),
            liked: self.liked,
            passed: self.passed,
        }
    }

    pub fn recorder_counts(&self) -> RecorderCounts {
        self.recorder.counts()
    }

    /// Wait for in-flight swipe writes. See `DecisionRecorder::settle`.
    pub async fn settle(&self) {
        self.recorder.settle().await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{BudgetRange, ProfileId, UserId};
    use crate::impls::InMemorySwipeStore;

    const WIDTH: f64 = 400.0;

    fn profiles(n: usize) -> Vec<CandidateProfile> {
        (1..=n as i64)
            .map(|i| CandidateProfile {
                id: ProfileId::new(i),
                name: format!("Candidate {i}"),
                age: 25,
                bio: String::new(),
                budget: BudgetRange::new(800, 1200),
                location: "Fremont".to_string(),
                interests: vec![],
                image_url: String::new(),
            })
            .collect()
    }

    fn controller_with(
        n: usize,
        session: Session,
        store: Arc<InMemorySwipeStore>,
    ) -> DeckController {
        DeckController::new(
            profiles(n),
            DecisionRecorder::new(store, session),
            ScreenMetrics::new(WIDTH),
            SwipeThresholds::default(),
        )
    }

    fn signed_in() -> Session {
        Session::Authenticated(UserId::new(1))
    }

    fn drag_release(deck: &mut DeckController, dx: f64, vx: f64) -> Option<ReleaseVerdict> {
        assert!(deck.gesture_start());
        deck.gesture_move(dx, 0.0);
        deck.gesture_release(GestureSample::new(dx, 0.0, vx))
    }

    #[tokio::test]
    async fn commit_right_records_a_like_and_advances() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(3, signed_in(), store.clone());

        let verdict = drag_release(&mut deck, 0.2 * WIDTH, 0.0);
        assert_eq!(verdict, Some(ReleaseVerdict::Commit(SwipeAction::Like)));
        assert_eq!(deck.phase(), DeckPhase::Animating(SwipeAction::Like));
        // Commit alone does not move the cursor; the exit animation does.
        assert_eq!(deck.cursor(), 0);

        assert!(deck.exit_animation_complete());
        assert_eq!(deck.phase(), DeckPhase::Idle);
        assert_eq!(deck.cursor(), 1);

        deck.settle().await;
        let rows = store.recorded().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].target_profile_id, ProfileId::new(1));
        assert_eq!(rows[0].action, SwipeAction::Like);
    }

    #[tokio::test]
    async fn release_under_threshold_returns_the_card() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(3, signed_in(), store.clone());

        let verdict = drag_release(&mut deck, 0.05 * WIDTH, 0.1);
        assert_eq!(verdict, Some(ReleaseVerdict::Return));
        assert_eq!(deck.phase(), DeckPhase::Idle);
        assert_eq!(deck.cursor(), 0);

        // Card is back at center, same candidate on top.
        assert_eq!(deck.card_pose().translate_x, 0.0);
        assert_eq!(
            deck.current_candidate().map(|c| c.id),
            Some(ProfileId::new(1))
        );

        deck.settle().await;
        assert!(store.recorded().await.is_empty());
    }

    #[tokio::test]
    async fn fling_left_commits_a_pass() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(3, signed_in(), store.clone());

        let verdict = drag_release(&mut deck, -0.05 * WIDTH, -0.9);
        assert_eq!(verdict, Some(ReleaseVerdict::Commit(SwipeAction::Pass)));
        assert_eq!(deck.phase(), DeckPhase::Animating(SwipeAction::Pass));
    }

    #[tokio::test]
    async fn gesture_start_refused_while_animating() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(3, signed_in(), store.clone());

        drag_release(&mut deck, 0.2 * WIDTH, 0.0);
        assert!(deck.phase().is_animating());

        // No new gesture, no button, no second decision while the card exits.
        assert!(!deck.gesture_start());
        assert!(!deck.press_like());
        assert!(deck.gesture_release(GestureSample::default()).is_none());

        assert!(deck.exit_animation_complete());
        assert_eq!(deck.cursor(), 1);

        deck.settle().await;
        assert_eq!(store.recorded().await.len(), 1);
    }

    #[tokio::test]
    async fn exit_completion_outside_animating_changes_nothing() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(3, signed_in(), store);

        assert!(!deck.exit_animation_complete());
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.phase(), DeckPhase::Idle);
    }

    #[tokio::test]
    async fn buttons_share_the_gesture_commit_path() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(2, signed_in(), store.clone());

        assert!(deck.press_like());
        assert_eq!(deck.phase(), DeckPhase::Animating(SwipeAction::Like));
        deck.exit_animation_complete();

        assert!(deck.press_pass());
        assert_eq!(deck.phase(), DeckPhase::Animating(SwipeAction::Pass));
        deck.exit_animation_complete();

        deck.settle().await;
        let rows = store.recorded().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].action, SwipeAction::Like);
        assert_eq!(rows[1].action, SwipeAction::Pass);
    }

    #[tokio::test]
    async fn button_refused_mid_drag() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(2, signed_in(), store.clone());

        assert!(deck.gesture_start());
        assert!(!deck.press_like());
        assert_eq!(deck.phase(), DeckPhase::Dragging);

        deck.settle().await;
        assert!(store.recorded().await.is_empty());
    }

    #[tokio::test]
    async fn decisions_come_in_deck_order_for_the_active_candidate() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(3, signed_in(), store.clone());

        drag_release(&mut deck, 0.2 * WIDTH, 0.0);
        deck.exit_animation_complete();
        drag_release(&mut deck, -0.2 * WIDTH, 0.0);
        deck.exit_animation_complete();

        deck.settle().await;
        let rows = store.recorded().await;
        let targets: Vec<_> = rows.iter().map(|r| r.target_profile_id).collect();
        assert_eq!(targets, vec![ProfileId::new(1), ProfileId::new(2)]);
        assert_eq!(rows[0].action, SwipeAction::Like);
        assert_eq!(rows[1].action, SwipeAction::Pass);
    }

    #[tokio::test]
    async fn cursor_never_decreases() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(3, signed_in(), store);
        let mut high_water = 0;

        let mut check = |deck: &DeckController| {
            assert!(deck.cursor() >= high_water);
            high_water = deck.cursor();
        };

        drag_release(&mut deck, 0.05 * WIDTH, 0.0); // return
        check(&deck);
        drag_release(&mut deck, 0.2 * WIDTH, 0.0); // commit
        check(&deck);
        deck.gesture_start(); // refused mid-animation
        check(&deck);
        deck.exit_animation_complete();
        check(&deck);
        deck.press_pass();
        deck.exit_animation_complete();
        check(&deck);
        assert_eq!(deck.cursor(), 2);
    }

    #[tokio::test]
    async fn draining_the_deck_exhausts_it() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(5, signed_in(), store.clone());

        for _ in 0..5 {
            assert!(deck.press_like());
            assert!(deck.exit_animation_complete());
        }

        assert_eq!(deck.phase(), DeckPhase::Exhausted);
        assert!(deck.current_candidate().is_none());
        assert!(!deck.gesture_start());
        assert!(!deck.press_like());

        deck.settle().await;
        assert_eq!(store.recorded().await.len(), 5);

        let counts = deck.counts();
        assert_eq!(counts.cursor, 5);
        assert_eq!(counts.remaining, 0);
        assert_eq!(counts.liked, 5);
    }

    #[tokio::test]
    async fn refresh_restarts_from_exhausted_only() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(1, signed_in(), store);

        // Refused while the deck still has candidates.
        assert!(!deck.refresh(profiles(2)));
        assert_eq!(deck.counts().generation, 1);

        deck.press_pass();
        deck.exit_animation_complete();
        assert_eq!(deck.phase(), DeckPhase::Exhausted);

        assert!(deck.refresh(profiles(2)));
        assert_eq!(deck.phase(), DeckPhase::Idle);
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.counts().generation, 2);
        assert_eq!(deck.counts().remaining, 2);
        // Totals survive the refresh.
        assert_eq!(deck.counts().passed, 1);
    }

    #[tokio::test]
    async fn empty_refresh_stays_exhausted() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(1, signed_in(), store);

        deck.press_pass();
        deck.exit_animation_complete();

        assert!(deck.refresh(vec![]));
        assert_eq!(deck.phase(), DeckPhase::Exhausted);
        assert_eq!(deck.counts().generation, 2);
    }

    #[tokio::test]
    async fn empty_deck_mounts_exhausted() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(0, signed_in(), store);

        assert_eq!(deck.phase(), DeckPhase::Exhausted);
        assert!(!deck.gesture_start());
        assert!(!deck.press_like());
    }

    #[tokio::test]
    async fn anonymous_deck_advances_without_writing() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(2, Session::Anonymous, store.clone());

        assert!(deck.press_like());
        assert!(deck.exit_animation_complete());
        assert_eq!(deck.cursor(), 1);

        deck.settle().await;
        assert!(store.recorded().await.is_empty());

        let counts = deck.recorder_counts();
        assert_eq!(counts.skipped_anonymous, 1);
        assert_eq!(counts.dispatched, 0);
    }

    #[tokio::test]
    async fn failed_write_never_blocks_or_rewinds() {
        let store = Arc::new(InMemorySwipeStore::failing(1));
        let mut deck = controller_with(2, signed_in(), store.clone());

        assert!(deck.press_like());
        assert!(deck.exit_animation_complete());
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.phase(), DeckPhase::Idle);

        assert!(deck.press_pass());
        assert!(deck.exit_animation_complete());

        deck.settle().await;
        let counts = deck.recorder_counts();
        assert_eq!(counts.dispatched, 2);
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.recorded, 1);

        // The failed like is simply gone; only the pass landed.
        let rows = store.recorded().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].action, SwipeAction::Pass);
    }

    #[tokio::test]
    async fn pose_follows_the_drag_and_resets_on_return() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(1, signed_in(), store);

        deck.gesture_start();
        deck.gesture_move(0.05 * WIDTH, -4.0);
        let pose = deck.card_pose();
        assert_eq!(pose.translate_x, 0.05 * WIDTH);
        assert_eq!(pose.translate_y, -4.0);
        assert!((pose.like_opacity - 0.5).abs() < 1e-9);

        deck.gesture_release(GestureSample::new(0.05 * WIDTH, -4.0, 0.0));
        assert_eq!(deck.card_pose().translate_x, 0.0);
    }

    #[tokio::test]
    async fn moves_outside_a_drag_do_not_move_the_card() {
        let store = Arc::new(InMemorySwipeStore::new());
        let mut deck = controller_with(1, signed_in(), store);

        deck.gesture_move(120.0, 0.0);
        assert_eq!(deck.card_pose().translate_x, 0.0);
    }
}
