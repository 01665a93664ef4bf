//! StaticCandidates - 注入されたリストを返すだけの候補ソース

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::CandidateProfile;
use crate::ports::{CandidateSource, SourceError};

/// Serves a fixed candidate list, in the order it was given.
///
/// `replace` swaps the list for the next fetch, which is enough to drive
/// refresh flows in demos and tests.
pub struct StaticCandidates {
    profiles: Mutex<Vec<CandidateProfile>>,
}

impl StaticCandidates {
    pub fn new(profiles: Vec<CandidateProfile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
        }
    }

    /// Swap the list served by subsequent fetches.
    pub async fn replace(&self, profiles: Vec<CandidateProfile>) {
        *self.profiles.lock().await = profiles;
    }
}

#[async_trait]
impl CandidateSource for StaticCandidates {
    async fn fetch(&self) -> Result<Vec<CandidateProfile>, SourceError> {
        Ok(self.profiles.lock().await.clone())
    }
}
