use serde::{Deserialize, Serialize};

/// A match as returned by the results API. Read-only snapshot, never mutated
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(rename = "teamA")]
    pub team_a: String,
    #[serde(rename = "teamB")]
    pub team_b: String,
    /// Kept as the API's raw string, its format is not contractual.
    pub date: String,
    pub status: MatchStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Planned,
    /// Any status the API introduces later still deserializes.
    #[serde(other)]
    Other,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Planned => "prévu",
            MatchStatus::Other => "-",
        }
    }
}

/// Classement payloads are passed through as parsed JSON; their shape belongs
/// to the API.
pub type Classement = serde_json::Value;
