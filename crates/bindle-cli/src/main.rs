use std::sync::Arc;

use tokio::time::{Duration, sleep};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bindle_core::deck::{DeckBuilder, DeckController, DeckPhase};
use bindle_core::domain::{
    BudgetRange, CandidateProfile, Displacement, GestureSample, ProfileId, ScreenMetrics, UserId,
};
use bindle_core::feedback::{self, EXIT_ANIMATION_MS};
use bindle_core::impls::{InMemorySessionStore, InMemorySwipeStore, StaticCandidates};
use bindle_core::ports::CandidateSource;

/// iPhone 相当の幅。ポーズ計算はすべてこの幅に対する比率
const SCREEN_WIDTH: f64 = 390.0;

fn roster() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile {
            id: ProfileId::new(1),
            name: "Alex Johnson".to_string(),
            age: 24,
            bio: "Software engineer who loves hiking and cooking. Looking for a clean, quiet roommate.".to_string(),
            budget: BudgetRange::new(800, 1200),
            location: "Downtown".to_string(),
            interests: vec!["Coding".into(), "Hiking".into(), "Cooking".into(), "Photography".into()],
            image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=600&fit=crop".to_string(),
        },
        CandidateProfile {
            id: ProfileId::new(2),
            name: "Sarah Chen".to_string(),
            age: 22,
            bio: "Art student passionate about sustainability. Prefers eco-friendly living.".to_string(),
            budget: BudgetRange::new(600, 900),
            location: "Midtown".to_string(),
            interests: vec!["Art".into(), "Sustainability".into(), "Yoga".into(), "Reading".into()],
            image_url: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=600&fit=crop".to_string(),
        },
        CandidateProfile {
            id: ProfileId::new(3),
            name: "Marcus Rodriguez".to_string(),
            age: 26,
            bio: "Musician and part-time barista. Night owl who loves hosting small gatherings.".to_string(),
            budget: BudgetRange::new(700, 1000),
            location: "East Side".to_string(),
            interests: vec!["Music".into(), "Coffee".into(), "Socializing".into(), "Gaming".into()],
            image_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=600&fit=crop".to_string(),
        },
        CandidateProfile {
            id: ProfileId::new(4),
            name: "Emma Wilson".to_string(),
            age: 23,
            bio: "Graduate student in psychology. Values quiet study time and good communication.".to_string(),
            budget: BudgetRange::new(650, 950),
            location: "University District".to_string(),
            interests: vec!["Psychology".into(), "Studying".into(), "Meditation".into(), "Coffee".into()],
            image_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=600&fit=crop".to_string(),
        },
        CandidateProfile {
            id: ProfileId::new(5),
            name: "David Kim".to_string(),
            age: 25,
            bio: "Fitness enthusiast and early bird. Looking for someone who respects morning routines.".to_string(),
            budget: BudgetRange::new(800, 1100),
            location: "West Side".to_string(),
            interests: vec!["Fitness".into(), "Early Rising".into(), "Healthy Eating".into(), "Running".into()],
            image_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=600&fit=crop".to_string(),
        },
    ]
}

fn show_top_card(deck: &DeckController) {
    match deck.current_candidate() {
        Some(c) => println!(
            "top card: {} ({}, {}) budget={} [{}]",
            c.name, c.age, c.location, c.budget, c.id
        ),
        None => println!("top card: (none, deck exhausted)"),
    }
}

fn show_pose(deck: &DeckController) {
    let pose = deck.card_pose();
    println!(
        "  pose: x={:+.1} y={:+.1} rot={:+.2}deg scale={:.3} like={:.2} pass={:.2}",
        pose.translate_x,
        pose.translate_y,
        pose.rotation_deg,
        pose.scale,
        pose.like_opacity,
        pose.pass_opacity
    );
}

/// コミット後の退出をまねる（埋め込み側のアニメーション層の代役）
async fn play_exit(deck: &mut DeckController) {
    if let DeckPhase::Animating(action) = deck.phase() {
        let pose = deck.card_pose();
        let target = feedback::exit_target(
            action,
            Displacement::new(pose.translate_x, pose.translate_y),
            ScreenMetrics::new(SCREEN_WIDTH),
        );
        println!(
            "  exit animation: {action} toward ({:+.0}, {:+.0}) over {EXIT_ANIMATION_MS}ms",
            target.x, target.y
        );
        sleep(Duration::from_millis(EXIT_ANIMATION_MS)).await;
        deck.exit_animation_complete();
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // (A) コラボレータを用意
    //     スワイプストアは最初の 1 回をわざと失敗させる
    let source = Arc::new(StaticCandidates::new(roster()));
    let swipes = Arc::new(InMemorySwipeStore::failing(1));
    let sessions = Arc::new(InMemorySessionStore::signed_in(UserId::new(1)));

    // (B) デッキを mount
    let mut deck = DeckBuilder::new()
        .candidate_source(source.clone())
        .swipe_store(swipes.clone())
        .session_store(sessions)
        .screen(ScreenMetrics::new(SCREEN_WIDTH))
        .mount()
        .await
        .expect("deck mounts");
    info!(candidates = deck.counts().total, "deck mounted");

    // (C) カード 1: ゆっくり右へドラッグしてコミット（この書き込みは失敗するが、デッキは進む）
    show_top_card(&deck);
    deck.gesture_start();
    for dx in [20.0, 45.0, 70.0, 90.0] {
        deck.gesture_move(dx, -6.0);
        show_pose(&deck);
    }
    let verdict = deck.gesture_release(GestureSample::new(90.0, -6.0, 0.3));
    println!("  release at dx=+90 -> {verdict:?}");
    play_exit(&mut deck).await;

    // (D) カード 2: 浅いドラッグは中央に戻る。その後フリングで pass
    show_top_card(&deck);
    deck.gesture_start();
    deck.gesture_move(19.0, 0.0);
    show_pose(&deck);
    let verdict = deck.gesture_release(GestureSample::new(19.0, 0.0, 0.1));
    println!("  release at dx=+19 -> {verdict:?}");
    show_pose(&deck);

    deck.gesture_start();
    deck.gesture_move(-30.0, 4.0);
    let verdict = deck.gesture_release(GestureSample::new(-30.0, 4.0, -0.9));
    println!("  fling release at vx=-0.9 -> {verdict:?}");
    play_exit(&mut deck).await;

    // (E) カード 3: ボタンで like。退出中のジェスチャは拒否される
    show_top_card(&deck);
    println!("  press like -> {}", deck.press_like());
    println!(
        "  gesture during exit accepted? {}",
        deck.gesture_start()
    );
    play_exit(&mut deck).await;

    // (F) 残りはボタンで消化して exhausted へ
    println!("  press pass -> {}", deck.press_pass());
    play_exit(&mut deck).await;
    println!("  press like -> {}", deck.press_like());
    play_exit(&mut deck).await;
    println!("deck phase: {:?}", deck.phase());

    // (G) refresh で新しい世代を積み直す
    let next_batch = source.fetch().await.expect("candidates fetch");
    println!("refresh accepted? {}", deck.refresh(next_batch));
    show_top_card(&deck);

    // (H) 送信が終わるのを待ってから集計を表示
    deck.settle().await;
    println!(
        "deck counts: {}",
        serde_json::to_string(&deck.counts()).expect("counts serialize")
    );
    println!(
        "recorder counts: {}",
        serde_json::to_string(&deck.recorder_counts()).expect("counts serialize")
    );
    println!("stored swipes: {}", swipes.recorded().await.len());
}
