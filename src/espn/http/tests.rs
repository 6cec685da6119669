//! Tests for the ESPN source against a mock server

use super::*;
use crate::cli::types::Season;
use serde_json::json;
use wiremock::{
    matchers::{header, header_exists, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn settings() -> FetchSettings {
    FetchSettings {
        season: Season::new(2024),
        max_players: 50,
        ..FetchSettings::default()
    }
}

fn player_response() -> Value {
    json!([
        {
            "id": 4262921,
            "fullName": "Justin Jefferson",
            "defaultPositionId": 3,
            "proTeamId": 16,
            "ownership": {"percentOwned": 99.9}
        },
        {
            "id": 3139477,
            "fullName": "Patrick Mahomes",
            "defaultPositionId": 1,
            "proTeamId": 12,
            "ownership": {"percentOwned": 98.1}
        }
    ])
}

fn schedule_response() -> Value {
    json!({
        "settings": {
            "proTeams": [
                {"id": 16, "abbrev": "MIN", "proGamesByScoringPeriod": {"9": [{"homeProTeamId": 16, "awayProTeamId": 6}]}}
            ]
        }
    })
}

async fn mount_players(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/seasons/2024/players"))
        .and(query_param("view", "players_wl"))
        .and(query_param("scoringPeriodId", "0"))
        .and(header_exists("x-fantasy-filter"))
        .and(header("accept", "application/json"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_schedule(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/seasons/2024"))
        .and(query_param("view", "proTeamSchedules_wl"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_players_and_schedule() {
    let server = MockServer::start().await;
    mount_players(&server, ResponseTemplate::new(200).set_body_json(player_response())).await;
    mount_schedule(&server, ResponseTemplate::new(200).set_body_json(schedule_response())).await;

    let source = EspnSource::with_base_url(server.uri(), settings()).unwrap();
    let feed = source.fetch().await.unwrap();

    assert_eq!(feed.players.len(), 2);
    assert_eq!(feed.players[0]["fullName"], "Justin Jefferson");
    assert_eq!(feed.schedule, vec![schedule_response()]);
}

#[tokio::test]
async fn test_player_request_carries_filter_header() {
    let server = MockServer::start().await;
    mount_players(&server, ResponseTemplate::new(200).set_body_json(player_response())).await;
    mount_schedule(&server, ResponseTemplate::new(200).set_body_json(schedule_response())).await;

    let source = EspnSource::with_base_url(server.uri(), settings()).unwrap();
    source.fetch_players().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let filter = requests[0].headers.get("x-fantasy-filter").unwrap();
    assert_eq!(
        filter.to_str().unwrap(),
        r#"{"players":{"limit":50},"filterActive":{"value":true}}"#
    );
}

#[tokio::test]
async fn test_wrapped_players_object() {
    let server = MockServer::start().await;
    mount_players(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"players": player_response()})),
    )
    .await;
    mount_schedule(&server, ResponseTemplate::new(200).set_body_json(schedule_response())).await;

    let source = EspnSource::with_base_url(server.uri(), settings()).unwrap();
    assert_eq!(source.fetch_players().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_schedule_failure_degrades_to_empty_schedule() {
    let server = MockServer::start().await;
    mount_players(&server, ResponseTemplate::new(200).set_body_json(player_response())).await;
    mount_schedule(&server, ResponseTemplate::new(503)).await;

    let source = EspnSource::with_base_url(server.uri(), settings()).unwrap();
    let feed = source.fetch().await.unwrap();

    assert_eq!(feed.players.len(), 2);
    assert!(feed.schedule.is_empty());
}

#[tokio::test]
async fn test_player_failure_is_upstream_unavailable() {
    let server = MockServer::start().await;
    mount_players(&server, ResponseTemplate::new(500)).await;
    mount_schedule(&server, ResponseTemplate::new(200).set_body_json(schedule_response())).await;

    let source = EspnSource::with_base_url(server.uri(), settings()).unwrap();
    match source.fetch().await {
        Err(EngineError::UpstreamUnavailable { reason }) => assert!(reason.contains("500")),
        other => panic!("Expected UpstreamUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_player_body_is_upstream_unavailable() {
    let server = MockServer::start().await;
    mount_players(&server, ResponseTemplate::new(200).set_body_string("<html>down</html>")).await;
    mount_schedule(&server, ResponseTemplate::new(200).set_body_json(schedule_response())).await;

    let source = EspnSource::with_base_url(server.uri(), settings()).unwrap();
    assert!(matches!(
        source.fetch().await,
        Err(EngineError::UpstreamUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_cookies_are_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/seasons/2024/players"))
        .and(header("cookie", "SWID={SWID}; espn_s2=s2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    mount_schedule(&server, ResponseTemplate::new(404)).await;

    let source = EspnSource::with_base_url(
        server.uri(),
        FetchSettings {
            swid: Some("{SWID}".to_string()),
            espn_s2: Some("s2".to_string()),
            ..settings()
        },
    )
    .unwrap();
    let feed = source.fetch().await.unwrap();
    assert!(feed.players.is_empty());
}

#[test]
fn test_trailing_slash_is_trimmed() {
    let source = EspnSource::with_base_url("http://localhost:9/", settings()).unwrap();
    assert_eq!(source.players_url(), "http://localhost:9/seasons/2024/players");
    assert_eq!(source.describe(), "ESPN season 2024");
}
