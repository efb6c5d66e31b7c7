//! Contract tests for EventClient against the festival REST backend shape.
//!
//! wiremock simulates the backend; every path and payload shape matches the
//! `/api/events` contract the frontend core depends on.

use std::sync::Arc;

use festreg_client::events::{CreateEventRequest, EventUpdate};
use festreg_client::{FestApiConfig, FestApiError, FestClient, NoopNotifier, Session};
use festreg_core::{EventKind, SubFest, SubmissionGate};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn event_body(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Robo Race",
        "description": "Line-follower robotics race",
        "sub_fest": "technology",
        "event_type": "team",
        "coordinators": ["Priya S"],
        "timing": "10:00 AM",
        "venue": "Main Block",
        "registration_deadline": "2026-03-01T18:00:00Z",
        "capacity": 20,
        "registered_count": 5,
        "min_team_size": 2,
        "max_team_size": 4,
        "is_registration_open": true,
        "is_active": true
    })
}

fn test_client(mock_server: &MockServer) -> FestClient {
    let config = FestApiConfig::local_mock(mock_server.uri().parse().unwrap());
    FestClient::new(config).unwrap()
}

#[tokio::test]
async fn list_events_hits_api_path_and_deserializes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([event_body("robo-race")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let events = client.events().list().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id.as_str(), "robo-race");
    assert_eq!(events[0].kind, EventKind::Team);
    assert_eq!(events[0].sub_fest, SubFest::Technology);
    assert_eq!(events[0].submission_gate(), SubmissionGate::Open);
}

#[tokio::test]
async fn get_event_returns_none_on_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "Event not found"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let id = "ghost".parse().unwrap();
    let event = client.events().get(&id).await.unwrap();
    assert!(event.is_none());
}

#[tokio::test]
async fn get_event_rejects_malformed_payload_at_boundary() {
    let mock_server = MockServer::start().await;

    // Inverted team bounds must be refused by the domain constructor, not
    // accepted into the registration flow.
    let mut body = event_body("broken");
    body["min_team_size"] = serde_json::json!(5);
    body["max_team_size"] = serde_json::json!(2);

    Mock::given(method("GET"))
        .and(path("/api/events/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let id = "broken".parse().unwrap();
    let result = client.events().get(&id).await;
    assert!(matches!(
        result.unwrap_err(),
        FestApiError::Deserialization { .. }
    ));
}

#[tokio::test]
async fn requests_attach_bearer_token_from_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FestApiConfig::local_mock(mock_server.uri().parse().unwrap());
    let session = Arc::new(Session::with_token("jwt-abc"));
    let client = FestClient::with_parts(config, session, Arc::new(NoopNotifier)).unwrap();

    client.events().list().await.unwrap();
}

#[tokio::test]
async fn anonymous_session_sends_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.events().list().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn create_event_posts_payload_and_parses_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_body("robo-race")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = CreateEventRequest {
        name: "Robo Race".into(),
        description: "Line-follower robotics race".into(),
        sub_fest: SubFest::Technology,
        event_type: EventKind::Team,
        coordinators: vec!["Priya S".into()],
        timing: "10:00 AM".into(),
        venue: "Main Block".into(),
        registration_deadline: "2026-03-01T18:00:00Z".parse().unwrap(),
        capacity: 20,
        min_team_size: 2,
        max_team_size: 4,
        max_events_per_student: 3,
    };
    let event = client.events().create(&req).await.unwrap();
    assert_eq!(event.id.as_str(), "robo-race");

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["name"], "Robo Race");
    assert_eq!(body["event_type"], "team");
    assert_eq!(body["min_team_size"], 2);
}

#[tokio::test]
async fn set_registration_open_sends_only_the_flag() {
    let mock_server = MockServer::start().await;

    let mut reopened = event_body("robo-race");
    reopened["is_registration_open"] = serde_json::json!(true);

    // Opening registration must not smuggle a deadline change along.
    Mock::given(method("PUT"))
        .and(path("/api/events/robo-race"))
        .and(body_json(serde_json::json!({"is_registration_open": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(reopened))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let id = "robo-race".parse().unwrap();
    let event = client.events().set_registration_open(&id, true).await.unwrap();
    assert!(event.is_registration_open);
}

#[tokio::test]
async fn extend_deadline_sends_only_the_deadline() {
    let mock_server = MockServer::start().await;

    let mut extended = event_body("robo-race");
    extended["registration_deadline"] = serde_json::json!("2026-03-10T18:00:00Z");

    Mock::given(method("PUT"))
        .and(path("/api/events/robo-race"))
        .and(body_json(serde_json::json!({
            "registration_deadline": "2026-03-10T18:00:00Z"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(extended))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let id = "robo-race".parse().unwrap();
    let new_deadline = "2026-03-10T18:00:00Z".parse().unwrap();
    let event = client.events().extend_deadline(&id, new_deadline).await.unwrap();
    assert_eq!(
        event.registration_deadline,
        "2026-03-10T18:00:00Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap()
    );
}

#[tokio::test]
async fn update_surfaces_backend_detail_on_4xx() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/events/robo-race"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "detail": "Admin access required"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let id = "robo-race".parse().unwrap();
    let err = client
        .events()
        .update(&id, &EventUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.user_message(), "Admin access required");
}

#[tokio::test]
async fn disable_event_succeeds_on_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/events/robo-race"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Event disabled successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let id = "robo-race".parse().unwrap();
    client.events().disable(&id).await.unwrap();
}
