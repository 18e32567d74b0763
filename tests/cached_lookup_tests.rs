//! End-to-end lookups through the on-disk response cache.

use match_history::{history_line, ClientConfig, Region, ResponseCache, RiotApi};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Test fixtures

fn summoner_json() -> serde_json::Value {
    json!({ "id": "s-1", "accountId": "acc-1", "name": "ioki", "summonerLevel": 120 })
}

fn match_list_json() -> serde_json::Value {
    json!({
        "matches": [
            { "gameId": 2, "timestamp": 2_000, "queue": 420, "season": 13 },
            { "gameId": 1, "timestamp": 1_000, "queue": 420, "season": 13 }
        ],
        "startIndex": 0,
        "endIndex": 2,
        "totalGames": 2
    })
}

fn match_json(game_id: u64, ioki_team: u32) -> serde_json::Value {
    let other_team = if ioki_team == 100 { 200 } else { 100 };
    json!({
        "gameId": game_id,
        "gameCreation": game_id * 1_000,
        "teams": [{ "teamId": 100, "win": "Win" }, { "teamId": 200, "win": "Fail" }],
        "participants": [
            {
                "participantId": 1,
                "teamId": ioki_team,
                "stats": { "win": ioki_team == 100 },
                "timeline": { "role": "SOLO" }
            },
            {
                "participantId": 2,
                "teamId": other_team,
                "stats": { "win": ioki_team != 100 },
                "timeline": { "role": "SOLO" }
            }
        ],
        "participantIdentities": [
            { "participantId": 1, "player": { "summonerName": "ioki", "accountId": "acc-1" } },
            { "participantId": 2, "player": { "summonerName": "foe", "accountId": "acc-2" } }
        ]
    })
}

async fn mount_all(server: &MockServer, expected_calls: u64) {
    let mocks = [
        ("/lol/summoner/v4/summoners/by-name/ioki", summoner_json()),
        ("/lol/match/v4/matchlists/by-account/acc-1", match_list_json()),
        ("/lol/match/v4/matches/2", match_json(2, 100)),
        ("/lol/match/v4/matches/1", match_json(1, 200)),
    ];
    for (url_path, body) in mocks {
        Mock::given(method("GET"))
            .and(path(url_path))
            .and(query_param("api_key", "RGAPI-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(expected_calls)
            .mount(server)
            .await;
    }
}

fn lookup(base_url: String, cache_path: std::path::PathBuf) -> String {
    let config = ClientConfig::new(Region::Na1).with_base_url(&base_url);
    let mut cache = ResponseCache::load(cache_path);
    let mut api = RiotApi::new(&config, "RGAPI-test", &mut cache);
    history_line(&mut api, "ioki", Some(10_000)).unwrap()
}

#[tokio::test]
async fn second_run_is_served_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("responses.json");

    // First run hits every endpoint exactly once.
    let first_server = MockServer::start().await;
    mount_all(&first_server, 1).await;
    let base_url = format!("{}/lol", first_server.uri());
    let path_for_run = cache_path.clone();
    let first = tokio::task::spawn_blocking(move || lookup(base_url, path_for_run))
        .await
        .unwrap();
    assert_eq!(first, "_ X");

    // Second run against a server that must not be called at all.
    let second_server = MockServer::start().await;
    mount_all(&second_server, 0).await;
    let base_url = format!("{}/lol", second_server.uri());
    let path_for_run = cache_path.clone();
    let second = tokio::task::spawn_blocking(move || lookup(base_url, path_for_run))
        .await
        .unwrap();
    assert_eq!(second, first);
}

#[tokio::test]
async fn persisted_cache_is_filtered_and_credential_free() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("responses.json");

    let server = MockServer::start().await;
    mount_all(&server, 1).await;
    let base_url = format!("{}/lol", server.uri());
    let path_for_run = cache_path.clone();
    tokio::task::spawn_blocking(move || lookup(base_url, path_for_run))
        .await
        .unwrap();

    let content = std::fs::read_to_string(&cache_path).unwrap();
    let persisted: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&content).unwrap();

    let keys: Vec<&str> = persisted.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "match/v4/matches/1",
            "match/v4/matches/2",
            "match/v4/matchlists/by-account/acc-1?queue=420&season=13",
            "summoner/v4/summoners/by-name/ioki",
        ]
    );
    assert!(!content.contains("RGAPI-test"));
    assert!(!content.contains("\"stats\""));
    assert!(!content.contains("\"timeline\""));
}

#[tokio::test]
async fn corrupt_cache_file_is_recovered() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("responses.json");
    std::fs::write(&cache_path, "{\"truncated\": ").unwrap();

    let server = MockServer::start().await;
    mount_all(&server, 1).await;
    let base_url = format!("{}/lol", server.uri());
    let path_for_run = cache_path.clone();
    let line = tokio::task::spawn_blocking(move || lookup(base_url, path_for_run))
        .await
        .unwrap();

    assert_eq!(line, "_ X");
    let reloaded = ResponseCache::load(&cache_path);
    assert_eq!(reloaded.len(), 4);
}
