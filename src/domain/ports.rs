use crate::domain::model::{Classement, Match};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view over the results API. One HTTP GET per operation, no
/// caching, no retries; each call resolves or rejects independently.
#[async_trait]
pub trait ScoreboardApi: Send + Sync {
    async fn fetch_matches(&self) -> Result<Vec<Match>>;
    async fn fetch_match_by_id(&self, id: &str) -> Result<Match>;
    async fn fetch_classement_by_poule(&self, code: &str) -> Result<Classement>;
    async fn fetch_classement_by_match(&self, id: &str) -> Result<Classement>;
}
