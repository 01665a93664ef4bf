//! bindle-core
//!
//! Core building blocks for the Bindle swipe deck.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, profile, gesture, decision, session）
//! - **ports**: 抽象化レイヤー（CandidateSource, SwipeStore, SessionStore）
//! - **deck**: デッキの状態機械（state, tracker, classifier, controller, builder）
//! - **feedback**: カード表示値の純粋計算（translation / rotation / scale / opacity）
//! - **recorder**: 確定した判定の best-effort 送信
//! - **observability**: デッキとレコーダーのカウンタスナップショット
//! - **impls**: 開発用・テスト用のインメモリ実装
//!
//! The engine is presentation-agnostic: it owns deck order, gesture state and
//! commit classification, and hands the embedder plain values to render.

pub mod domain;
pub mod ports;
pub mod deck;
pub mod feedback;
pub mod recorder;
pub mod observability;
pub mod impls;
