//! Tests for client configuration.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn region_base_url() {
    assert_eq!(Region::Na1.base_url(), "https://na1.api.riotgames.com/lol/");
    assert_eq!(Region::Kr.base_url(), "https://kr.api.riotgames.com/lol/");
}

#[test]
fn region_parses_from_cli_value() {
    use clap::ValueEnum;
    for region in Region::value_variants() {
        let parsed = Region::from_str(region.as_str(), false).unwrap();
        assert_eq!(parsed, *region);
    }
    assert!(Region::from_str("xx9", false).is_err());
}

#[test]
fn default_retry_policy_waits_forever() {
    let policy = RetryPolicy::default();
    assert!(policy.wait_on_limit);
    assert_eq!(policy.backoff, Duration::from_secs(2));
    assert!(policy.should_retry(1_000_000));
}

#[test]
fn no_wait_policy_never_retries() {
    assert!(!RetryPolicy::no_wait().should_retry(0));
}

#[test]
fn bounded_policy_stops_at_max_attempts() {
    let policy = RetryPolicy {
        max_attempts: Some(3),
        ..RetryPolicy::default()
    };
    assert!(policy.should_retry(1));
    assert!(policy.should_retry(2));
    assert!(!policy.should_retry(3));
}

#[test]
fn max_retries_counts_attempts_after_the_first() {
    let policy = RetryPolicy::default().with_max_retries(Some(1));
    assert_eq!(policy.max_attempts, Some(2));
    assert!(policy.should_retry(1));
    assert!(!policy.should_retry(2));
}

#[test]
fn zero_max_retries_gives_up_on_first_rate_limit() {
    let policy = RetryPolicy::default().with_max_retries(Some(0));
    assert_eq!(policy.max_attempts, Some(1));
    assert!(!policy.should_retry(1));
}

#[test]
fn unset_max_retries_waits_forever() {
    let policy = RetryPolicy::default().with_max_retries(None);
    assert_eq!(policy.max_attempts, None);
    assert!(policy.should_retry(u32::MAX));
}

#[test]
fn client_config_defaults() {
    let config = ClientConfig::new(Region::Euw1);
    assert_eq!(config.queue_depth, MAX_QUEUE_DEPTH);
    assert_eq!(config.base_url, "https://euw1.api.riotgames.com/lol/");
    assert_eq!(config.retry, RetryPolicy::default());
}

#[test]
fn with_base_url_appends_slash() {
    let config = ClientConfig::new(Region::Na1).with_base_url("http://127.0.0.1:8080");
    assert_eq!(config.base_url, "http://127.0.0.1:8080/");

    let config = ClientConfig::new(Region::Na1).with_base_url("http://localhost/lol/");
    assert_eq!(config.base_url, "http://localhost/lol/");
}

#[test]
fn read_api_key_trims_whitespace() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "  RGAPI-secret  ").unwrap();

    let key = read_api_key(file.path()).unwrap();
    assert_eq!(key, "RGAPI-secret");
}

#[test]
fn read_api_key_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_api_key(&dir.path().join(".api_key"));
    assert!(matches!(result, Err(ApiError::Config(_))));
}

#[test]
fn read_api_key_empty_file_is_config_error() {
    let file = NamedTempFile::new().unwrap();
    let result = read_api_key(file.path());
    assert!(matches!(result, Err(ApiError::Config(_))));
}

#[test]
fn default_cache_path_ends_with_file_name() {
    assert!(default_cache_path().ends_with("responses.json"));
}
