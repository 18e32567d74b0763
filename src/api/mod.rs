//! Riot API client
//!
//! Every request goes through the [`ResponseCache`] first; only misses reach
//! the [`FetchPolicy`].

pub mod endpoint;
pub mod fetch;

pub use endpoint::Endpoint;
pub use fetch::{strip_match_detail, FetchPolicy, StatusClass};

use crate::cache::ResponseCache;
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::match_view::{AccountId, MatchId, MatchRecord};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

/// Summoner lookup response; only the account id is consumed
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Summoner {
    account_id: AccountId,
}

/// One page of a match list
#[derive(Debug, Deserialize)]
struct MatchList {
    #[serde(default)]
    matches: Vec<MatchReference>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchReference {
    game_id: MatchId,
    /// Epoch milliseconds
    timestamp: i64,
}

/// Match-history client bound to one region, credential and cache
pub struct RiotApi<'c> {
    fetcher: FetchPolicy,
    cache: &'c mut ResponseCache,
    queue_depth: usize,
}

impl<'c> RiotApi<'c> {
    pub fn new(config: &ClientConfig, api_key: &str, cache: &'c mut ResponseCache) -> Self {
        log::info!("Creating Riot API client for region {}", config.region);
        log::debug!("API key length: {}", api_key.len());
        Self::with_client(Client::new(), config, api_key, cache)
    }

    pub fn with_client(
        client: Client,
        config: &ClientConfig,
        api_key: &str,
        cache: &'c mut ResponseCache,
    ) -> Self {
        Self {
            fetcher: FetchPolicy::new(client, &config.base_url, api_key, config.retry.clone()),
            cache,
            queue_depth: config.queue_depth,
        }
    }

    /// Cached fetch; not-found is stored and returned as `Value::Null`
    fn execute(&mut self, endpoint: &Endpoint) -> ApiResult<Value> {
        let fetcher = &self.fetcher;
        self.cache.get_or_compute(&endpoint.cache_key(), || {
            Ok(fetcher.fetch(endpoint)?.unwrap_or(Value::Null))
        })
    }

    /// Account id for a summoner name, `None` if the name does not exist
    pub fn resolve_account(&mut self, name: &str) -> ApiResult<Option<AccountId>> {
        let data = self.execute(&Endpoint::AccountByName(name.to_string()))?;
        if data.is_null() {
            log::info!("Summoner '{}' not found", name);
            return Ok(None);
        }
        let summoner: Summoner = serde_json::from_value(data)?;
        Ok(Some(summoner.account_id))
    }

    /// Ids of up to `max_count` matches that started strictly before `since`
    ///
    /// `since` is epoch milliseconds and defaults to now; `max_count` defaults
    /// to the configured queue depth. The API's ordering is preserved.
    pub fn list_recent_matches(
        &mut self,
        account_id: &str,
        max_count: Option<usize>,
        since: Option<i64>,
    ) -> ApiResult<Vec<MatchId>> {
        let data = self.execute(&Endpoint::MatchList(account_id.to_string()))?;
        if data.is_null() {
            return Ok(Vec::new());
        }
        let list: MatchList = serde_json::from_value(data)?;

        let since = since.unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
        let depth = max_count.unwrap_or(self.queue_depth);
        Ok(select_recent(&list.matches, since, depth))
    }

    /// Resolve `name` and list its recent matches; unknown names give no matches
    pub fn matches_for_name(
        &mut self,
        name: &str,
        max_count: Option<usize>,
        since: Option<i64>,
    ) -> ApiResult<Vec<MatchId>> {
        match self.resolve_account(name)? {
            Some(account_id) => self.list_recent_matches(&account_id, max_count, since),
            None => Ok(Vec::new()),
        }
    }

    /// Filtered match record, `None` if the match does not exist
    pub fn get_match_detail(&mut self, match_id: MatchId) -> ApiResult<Option<MatchRecord>> {
        let data = self.execute(&Endpoint::MatchDetail(match_id))?;
        if data.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(data)?))
    }
}

fn select_recent(matches: &[MatchReference], since: i64, depth: usize) -> Vec<MatchId> {
    matches
        .iter()
        .filter(|reference| reference.timestamp < since)
        .take(depth)
        .map(|reference| reference.game_id)
        .collect()
}
