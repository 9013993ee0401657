pub mod client;
pub mod display;

pub use crate::domain::model::{Classement, Match, MatchStatus};
pub use crate::domain::ports::ScoreboardApi;
pub use crate::utils::error::Result;
