//! CandidateSource port - デッキに積む候補の取得元
//!
//! The engine never embeds candidate data; a deck is always built from an
//! injected source. One `fetch` fills one deck generation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CandidateProfile;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("candidate source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed candidate data: {0}")]
    Malformed(String),
}

/// Supplies the ordered, finite candidate list for a deck.
///
/// # 設計原則
/// - 返る順序がそのままデッキ順（エンジンは並べ替えない）
/// - refresh 時は再度 fetch され、新しい世代のデッキになる
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<CandidateProfile>, SourceError>;
}
