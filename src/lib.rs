pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{BaseUrl, CliConfig};
pub use core::client::ApiClient;
pub use domain::model::{Classement, Match, MatchStatus};
pub use domain::ports::ScoreboardApi;
pub use utils::error::{Result, TdmError};
