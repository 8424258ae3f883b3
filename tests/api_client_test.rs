//! Integration tests for the notes API client against a mock server.
//!
//! The client is blocking (it owns its runtime per call), so the mock
//! server runs on a separate runtime kept alive for the test body.

use keepnotes::egui_app::config::Config;
use keepnotes::egui_app::notes::NotesApiClient;
use keepnotes::shared::config::AppConfig;
use keepnotes::shared::note::{CreateNoteRequest, DeleteNoteRequest, UpdateNoteRequest};
use keepnotes::shared::ApiError;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server_uri: &str, max_retries: u32) -> NotesApiClient {
    let config = Config::with_builder(
        AppConfig::builder()
            .api_url(server_uri.to_string())
            .request_timeout(Duration::from_secs(5))
            .max_retries(max_retries),
    )
    .expect("valid test config");
    NotesApiClient::new(config)
}

fn start_server(rt: &Runtime) -> MockServer {
    rt.block_on(MockServer::start())
}

fn note_body(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "content": "<b>content</b>",
        "color": "#fee2e2",
        "createdAt": "2024-01-15T10:30:00Z"
    })
}

#[test]
fn list_notes_returns_parsed_notes() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([note_body("1", "a"), note_body("2", "b")])),
            )
            .mount(&server),
    );

    let client = test_client(&server.uri(), 1);
    let notes = client.list_notes().expect("list should succeed");

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, "1");
    assert_eq!(notes[1].title, "b");
    assert_eq!(notes[0].created_at, "2024-01-15T10:30:00Z");
}

#[test]
fn list_notes_retries_transient_failure_then_succeeds() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    // First attempt hits a 500, the retry gets the real list
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([note_body("1", "a")])),
            )
            .mount(&server),
    );

    let client = test_client(&server.uri(), 3);
    let notes = client.list_notes().expect("retry should recover");
    assert_eq!(notes.len(), 1);
}

#[test]
fn list_notes_does_not_retry_client_errors() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server),
    );

    let client = test_client(&server.uri(), 3);
    let err = client.list_notes().expect_err("404 should fail fast");
    match err {
        ApiError::Http { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Http error, got {:?}", other),
    }

    rt.block_on(server.verify());
}

#[test]
fn list_notes_exhausts_retry_budget() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server),
    );

    let client = test_client(&server.uri(), 3);
    let err = client.list_notes().expect_err("all attempts fail");
    match err {
        ApiError::Http { status, .. } => assert_eq!(status, 503),
        other => panic!("expected Http error, got {:?}", other),
    }

    rt.block_on(server.verify());
}

#[test]
fn save_note_posts_payload_and_decodes_response() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    let request = CreateNoteRequest {
        title: "Groceries".into(),
        content: "<b>milk</b>".into(),
        color: "#dcfce7".into(),
    };

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/notes/save"))
            .and(body_json(serde_json::json!({
                "title": "Groceries",
                "content": "<b>milk</b>",
                "color": "#dcfce7"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(note_body("42", "Groceries")),
            )
            .mount(&server),
    );

    let client = test_client(&server.uri(), 1);
    let saved = client.save_note(&request).expect("save should succeed");

    assert_eq!(saved.id, "42");
    assert_eq!(saved.title, "Groceries");
}

#[test]
fn update_note_posts_id_with_fields() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    let request = UpdateNoteRequest {
        id: "42".into(),
        title: "Groceries".into(),
        content: "eggs".into(),
        color: "#dbeafe".into(),
    };

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/notes/update"))
            .and(body_json(serde_json::json!({
                "id": "42",
                "title": "Groceries",
                "content": "eggs",
                "color": "#dbeafe"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(note_body("42", "Groceries")),
            )
            .mount(&server),
    );

    let client = test_client(&server.uri(), 1);
    let updated = client.update_note(&request).expect("update should succeed");
    assert_eq!(updated.id, "42");
}

#[test]
fn update_note_surfaces_server_error() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/notes/update"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server),
    );

    let request = UpdateNoteRequest {
        id: "42".into(),
        title: "t".into(),
        content: "c".into(),
        color: "#fee2e2".into(),
    };

    let client = test_client(&server.uri(), 1);
    let err = client.update_note(&request).expect_err("500 should fail");
    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[test]
fn delete_note_succeeds_on_ok_status() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/notes/delete"))
            .and(body_json(serde_json::json!({ "id": "42" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "deleted": true
            })))
            .mount(&server),
    );

    let client = test_client(&server.uri(), 1);
    let request = DeleteNoteRequest { id: "42".into() };
    client.delete_note(&request).expect("delete should succeed");
}

#[test]
fn delete_note_surfaces_server_error() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/notes/delete"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server),
    );

    let client = test_client(&server.uri(), 1);
    let request = DeleteNoteRequest { id: "missing".into() };
    let err = client.delete_note(&request).expect_err("404 should fail");
    assert!(matches!(err, ApiError::Http { status: 404, .. }));
}

#[test]
fn list_notes_rejects_malformed_body() {
    let rt = Runtime::new().unwrap();
    let server = start_server(&rt);

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server),
    );

    let client = test_client(&server.uri(), 1);
    let err = client.list_notes().expect_err("bad body should fail");
    assert!(matches!(err, ApiError::Serialization { .. }));
}
