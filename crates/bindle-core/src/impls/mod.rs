//! Impls - 実装（開発用・テスト用）
//!
//! このモジュールには ports のインメモリ実装を含めます。
//!
//! # 含まれる実装
//! - **StaticCandidates**: 注入されたリストをそのまま返す候補ソース
//! - **InMemorySwipeStore**: 追記ログ + 失敗注入つきのスワイプストア
//! - **InMemorySessionStore**: Option<UserId> を保持するだけのセッション
//!
//! # 本番用実装
//! HTTP 実装はこの crate には置きません。エンジンはポート越しにしか
//! ストアを知らないので、トランスポートは埋め込み側の crate で。

pub mod inmem_session;
pub mod inmem_swipes;
pub mod static_candidates;

// 主要な型を再エクスポート
pub use self::inmem_session::InMemorySessionStore;
pub use self::inmem_swipes::InMemorySwipeStore;
pub use self::static_candidates::StaticCandidates;
