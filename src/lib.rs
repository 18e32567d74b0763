//! Match History - ranked win/loss lookups
//!
//! Queries the Riot match API for a summoner's recent ranked games and the
//! form of their teammates. Every response is memoized in a JSON file so
//! repeated lookups cost no API quota.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod match_view;
pub mod report;

// Re-export commonly used items
pub use api::{Endpoint, FetchPolicy, RiotApi, StatusClass};
pub use cache::ResponseCache;
pub use config::{read_api_key, ClientConfig, Region, RetryPolicy, MAX_QUEUE_DEPTH};
pub use error::{ApiError, ApiResult};
pub use match_view::{AccountId, MatchId, MatchRecord, MatchView, ParticipantId, TeamId};
pub use report::{history_line, outcome_symbol, write_report};
