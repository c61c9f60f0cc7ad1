//! Integration tests for `HttpTournamentClient` against a mock service.

use std::time::Duration;

use serde_json::json;
use tournament_client::{
    ClientError, ClientOptions, HttpTournamentClient, NewGroup, NewTeam, NewTournament, Score,
    ScoreUpdate, StatusCode, TeamRef, TournamentApi,
};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpTournamentClient {
    HttpTournamentClient::new(ClientOptions {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        user_agent: "tournament-client-tests".to_string(),
    })
    .expect("client should build")
}

#[tokio::test]
async fn create_team_returns_location_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(201).insert_header("location", "team-42"))
        .expect(1)
        .mount(&server)
        .await;

    let id = client_for(&server)
        .create_team(&NewTeam::generated())
        .await
        .unwrap();
    assert_eq!(id, "team-42");
}

#[tokio::test]
async fn create_team_without_location_header_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_team(&NewTeam::generated())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MissingLocation { .. }));
}

#[tokio::test]
async fn create_team_rejects_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_team(&NewTeam::generated())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn create_tournament_sends_year_and_finished_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tournaments"))
        .and(body_partial_json(json!({"year": 2025, "finished": "no"})))
        .respond_with(ResponseTemplate::new(201).insert_header("location", "tourn-1"))
        .expect(1)
        .mount(&server)
        .await;

    let id = client_for(&server)
        .create_tournament(&NewTournament::generated(2025))
        .await
        .unwrap();
    assert_eq!(id, "tourn-1");
}

#[tokio::test]
async fn create_group_posts_under_the_tournament() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tournaments/tourn-1/groups"))
        .and(body_partial_json(json!({"conference": "AFC"})))
        .respond_with(ResponseTemplate::new(200).insert_header("location", "group-1"))
        .expect(1)
        .mount(&server)
        .await;

    let id = client_for(&server)
        .create_group("tourn-1", &NewGroup::generated("AFC"))
        .await
        .unwrap();
    assert_eq!(id, "group-1");
}

#[tokio::test]
async fn assign_teams_patches_the_group_with_an_id_array() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/tournaments/tourn-1/groups/group-3/teams"))
        .and(body_partial_json(json!([{"id": "team-7"}])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .assign_teams(
            "tourn-1",
            "group-3",
            &[TeamRef {
                id: "team-7".to_string(),
            }],
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn get_tournament_parses_the_finished_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tournaments/tourn-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "t", "year": 2025, "finished": "yes"})),
        )
        .mount(&server)
        .await;

    let status = client_for(&server).get_tournament("tourn-1").await.unwrap();
    assert!(status.is_finished());
}

#[tokio::test]
async fn get_tournament_rejects_a_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tournaments/tourn-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_tournament("tourn-1").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidBody { .. }));
}

#[tokio::test]
async fn pending_matches_sends_the_filter_and_parses_slots() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tournaments/tourn-1/matches"))
        .and(query_param("showMatches", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "m-1",
                "home": {"id": "team-1", "name": "A"},
                "visitor": {"id": "team-2", "name": "B"},
                "round": "regular"
            },
            {
                "id": "m-2",
                "home": {"id": "team-3", "name": "C"},
                "visitor": {"id": "", "name": ""}
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let matches = client_for(&server).pending_matches("tourn-1").await.unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches[0].is_ready());
    assert!(!matches[1].is_ready());
}

#[tokio::test]
async fn update_score_accepts_only_204() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/tournaments/tourn-1/matches/m-1"))
        .and(body_partial_json(json!({"score": {"home": 6, "visitor": 7}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/tournaments/tourn-1/matches/m-2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = ScoreUpdate {
        score: Score { home: 6, visitor: 7 },
    };

    client.update_score("tourn-1", "m-1", &update).await.unwrap();

    let err = client
        .update_score("tourn-1", "m-2", &update)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::OK));
}

#[tokio::test]
async fn transport_failures_are_classified() {
    // Nothing listens on this port.
    let client = HttpTournamentClient::new(ClientOptions {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_secs(1),
        user_agent: "tournament-client-tests".to_string(),
    })
    .unwrap();

    let err = client.create_team(&NewTeam::generated()).await.unwrap_err();
    assert!(err.is_transport());
}
