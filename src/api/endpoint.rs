//! Remote endpoints and cache-key derivation

use crate::match_view::{AccountId, MatchId};
use std::fmt;

/// Ranked solo queue
pub const RANKED_SOLO_QUEUE: u32 = 420;

/// Season filter applied to match lists
pub const SEASON: u32 = 13;

/// One logical request against the LoL API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    AccountByName(String),
    MatchList(AccountId),
    MatchDetail(MatchId),
}

impl Endpoint {
    /// Path relative to the regional API root
    pub fn path(&self) -> String {
        match self {
            Endpoint::AccountByName(name) => {
                format!("summoner/v4/summoners/by-name/{}", urlencoding::encode(name))
            }
            Endpoint::MatchList(account_id) => format!(
                "match/v4/matchlists/by-account/{}",
                urlencoding::encode(account_id)
            ),
            Endpoint::MatchDetail(match_id) => format!("match/v4/matches/{}", match_id),
        }
    }

    /// Query parameters, excluding the credential
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::MatchList(_) => vec![
                ("season", SEASON.to_string()),
                ("queue", RANKED_SOLO_QUEUE.to_string()),
            ],
            _ => Vec::new(),
        }
    }

    /// Cache key: path plus the sorted non-secret query
    ///
    /// Region and API key are deliberately absent.
    pub fn cache_key(&self) -> String {
        let mut query = self.query();
        if query.is_empty() {
            return self.path();
        }
        query.sort();
        let query = query
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path(), query)
    }

    /// Whether responses get participant stats and timelines stripped
    pub fn is_match_detail(&self) -> bool {
        matches!(self, Endpoint::MatchDetail(_))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cache_key())
    }
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
