//! HTTP fetch policy
//!
//! Issues one logical request and turns the status code into an outcome:
//! success bodies are parsed (and filtered for match details), 404 becomes
//! `None`, 429 is retried according to the [`RetryPolicy`], and anything
//! else is a [`ApiError::RemoteApi`].

use super::endpoint::Endpoint;
use crate::config::RetryPolicy;
use crate::error::{ApiError, ApiResult};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

/// Per-participant sub-objects dropped from match details
const STRIPPED_PARTICIPANT_FIELDS: [&str; 2] = ["stats", "timeline"];

/// How a response status is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    RateLimited,
    NotFound,
    Failure,
}

impl StatusClass {
    pub fn of(status: StatusCode) -> Self {
        if status.is_success() {
            StatusClass::Success
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            StatusClass::RateLimited
        } else if status == StatusCode::NOT_FOUND {
            StatusClass::NotFound
        } else {
            StatusClass::Failure
        }
    }
}

/// Executes requests against one API root with one credential
#[derive(Clone)]
pub struct FetchPolicy {
    client: Client,
    base_url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl FetchPolicy {
    pub fn new(client: Client, base_url: &str, api_key: &str, retry: RetryPolicy) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            retry,
        }
    }

    /// Fetch `endpoint`, returning `None` when the resource does not exist
    pub fn fetch(&self, endpoint: &Endpoint) -> ApiResult<Option<Value>> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            log::debug!("GET {} (attempt {})", endpoint, attempts);

            let response = self
                .client
                .get(&url)
                .query(&endpoint.query())
                .query(&[("api_key", self.api_key.as_str())])
                .send()?;

            let status = response.status();
            match StatusClass::of(status) {
                StatusClass::Success => {
                    let mut body: Value = response.json()?;
                    if endpoint.is_match_detail() {
                        strip_match_detail(&mut body);
                    }
                    return Ok(Some(body));
                }
                StatusClass::NotFound => {
                    log::debug!("{} not found", endpoint);
                    return Ok(None);
                }
                StatusClass::RateLimited => {
                    if !self.retry.should_retry(attempts) {
                        return Err(ApiError::RateLimitExceeded {
                            endpoint: endpoint.to_string(),
                        });
                    }
                    log::warn!(
                        "Rate limited on {}, retrying in {:?}",
                        endpoint,
                        self.retry.backoff
                    );
                    std::thread::sleep(self.retry.backoff);
                }
                StatusClass::Failure => {
                    return Err(ApiError::RemoteApi {
                        status,
                        endpoint: endpoint.to_string(),
                    });
                }
            }
        }
    }
}

/// Drop the bulky per-participant stats and timeline objects
pub fn strip_match_detail(body: &mut Value) {
    let Some(participants) = body.get_mut("participants").and_then(Value::as_array_mut) else {
        return;
    };
    for participant in participants {
        if let Some(fields) = participant.as_object_mut() {
            for field in STRIPPED_PARTICIPANT_FIELDS {
                fields.remove(field);
            }
        }
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
