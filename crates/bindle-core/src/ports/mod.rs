//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部システム（候補 API, スワイプ API, 認証ストレージ）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - エンジンはポート越しにしか外界に触れない
//! - スワイプ書き込みは best-effort（結果はログとカウンタのみ）
//! - セッションは読み取り専用（エンジンは認証状態を変更しない）

pub mod candidate_source;
pub mod session_store;
pub mod swipe_store;

// 主要な trait を再エクスポート
pub use self::candidate_source::{CandidateSource, SourceError};
pub use self::session_store::SessionStore;
pub use self::swipe_store::{SwipeReceipt, SwipeRecord, SwipeStore, SwipeStoreError};
