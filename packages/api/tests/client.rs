//! Integration tests for [`api::ApiClient`] against an in-process stub of the
//! notes backend, bound to an ephemeral port per test.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use api::{sign_out, ApiClient, ApiError, Note};
use session::{MemoryStore, SessionStore};

const GOOD_TOKEN: &str = "test-token";

#[derive(Clone, Default)]
struct Backend {
    notes: Arc<Mutex<Vec<Note>>>,
    next_id: Arc<AtomicUsize>,
    /// Raw JSON bodies received on note create/update, for payload assertions.
    received: Arc<Mutex<Vec<Value>>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(&format!("Bearer {GOOD_TOKEN}"))
}

async fn register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    for field in ["username", "email", "password"] {
        if body.get(field).and_then(Value::as_str).is_none() {
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({})));
        }
    }
    (StatusCode::OK, Json(json!({"access_token": GOOD_TOKEN})))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body.get("password").and_then(Value::as_str) == Some("secret") {
        (StatusCode::OK, Json(json!({"access_token": GOOD_TOKEN})))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Incorrect email or password"})))
    }
}

async fn list_notes(State(backend): State<Backend>, headers: HeaderMap) -> Result<Json<Vec<Note>>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(backend.notes.lock().unwrap().clone()))
}

async fn create_note(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Note>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    backend.received.lock().unwrap().push(body.clone());
    let id = backend.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let note = Note {
        id: id.to_string(),
        title: body["title"].as_str().unwrap_or_default().to_string(),
        description: body["description"].as_str().unwrap_or_default().to_string(),
        user_id: "alice".to_string(),
    };
    backend.notes.lock().unwrap().push(note.clone());
    Ok(Json(note))
}

async fn update_note(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    backend.received.lock().unwrap().push(body.clone());
    let mut notes = backend.notes.lock().unwrap();
    match notes.iter_mut().find(|n| n.id == id) {
        Some(note) => {
            note.title = body["title"].as_str().unwrap_or_default().to_string();
            note.description = body["description"].as_str().unwrap_or_default().to_string();
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_note(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    let mut notes = backend.notes.lock().unwrap();
    let before = notes.len();
    notes.retain(|n| n.id != id);
    if notes.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

fn stub_router(backend: Backend) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(|| async { StatusCode::OK }))
        .route("/notes/", get(list_notes).post(create_note))
        .route("/notes/{id}", put(update_note).delete(delete_note))
        .with_state(backend)
}

/// Serve `router` on an ephemeral port and return the base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn register_returns_a_session_token() {
    let base = serve(stub_router(Backend::default())).await;
    let client = ApiClient::new(base);

    let token = client.register("alice", "alice@example.com", "secret").await.unwrap();
    assert_eq!(token, GOOD_TOKEN);
}

#[tokio::test]
async fn login_with_valid_credentials_yields_a_token() {
    let base = serve(stub_router(Backend::default())).await;
    let client = ApiClient::new(base);
    let store = MemoryStore::new();

    let token = client.login("alice@example.com", "secret").await.unwrap();
    assert!(!token.is_empty());
    store.set(&token, session::SESSION_TTL_DAYS);
    assert_eq!(store.get(), Some(GOOD_TOKEN.into()));
}

#[tokio::test]
async fn login_with_bad_credentials_leaves_session_absent() {
    let base = serve(stub_router(Backend::default())).await;
    let client = ApiClient::new(base);
    let store = MemoryStore::new();

    let err = client.login("alice@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    // The caller only persists on success.
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn stale_token_maps_to_unauthorized() {
    let base = serve(stub_router(Backend::default())).await;
    let client = ApiClient::new(base);

    let err = client.list_notes("expired-token").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn other_server_errors_collapse_to_status() {
    let router = Router::new().route(
        "/notes/",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(router).await;
    let client = ApiClient::new(base);

    let err = client.list_notes(GOOD_TOKEN).await.unwrap_err();
    match err {
        ApiError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_list_update_delete_flow() {
    let backend = Backend::default();
    let base = serve(stub_router(backend.clone())).await;
    let client = ApiClient::new(base);

    // Create
    let note = client.create_note(GOOD_TOKEN, "Buy milk", "2%").await.unwrap();
    assert_eq!(note.title, "Buy milk");
    assert_eq!(note.description, "2%");
    assert!(!note.id.is_empty());

    // List reflects the create
    let notes = client.list_notes(GOOD_TOKEN).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0], note);

    // Update replaces title and description
    client
        .update_note(GOOD_TOKEN, &note.id, "Buy milk", "whole")
        .await
        .unwrap();
    let notes = client.list_notes(GOOD_TOKEN).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Buy milk");
    assert_eq!(notes[0].description, "whole");

    // Delete removes it
    client.delete_note(GOOD_TOKEN, &note.id).await.unwrap();
    assert!(client.list_notes(GOOD_TOKEN).await.unwrap().is_empty());
}

#[tokio::test]
async fn note_payloads_do_not_carry_an_owner_field() {
    let backend = Backend::default();
    let base = serve(stub_router(backend.clone())).await;
    let client = ApiClient::new(base);

    let note = client.create_note(GOOD_TOKEN, "t", "d").await.unwrap();
    client.update_note(GOOD_TOKEN, &note.id, "t2", "d2").await.unwrap();

    let received = backend.received.lock().unwrap();
    assert_eq!(received.len(), 2);
    for body in received.iter() {
        assert!(body.get("user_id").is_none(), "unexpected owner field: {body}");
        assert!(body.get("title").is_some());
        assert!(body.get("description").is_some());
    }
}

#[tokio::test]
async fn logout_ignores_server_refusal() {
    let router = Router::new().route(
        "/logout",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(router).await;
    let client = ApiClient::new(base);

    // Fire-and-forget: a 500 from the server is not an error.
    client.logout(GOOD_TOKEN).await.unwrap();
}

#[tokio::test]
async fn sign_out_clears_session_on_success() {
    let base = serve(stub_router(Backend::default())).await;
    let client = ApiClient::new(base);
    let store = MemoryStore::new();
    store.set(GOOD_TOKEN, session::SESSION_TTL_DAYS);

    sign_out(&client, &store).await;
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn sign_out_clears_session_when_server_refuses() {
    let router = Router::new().route(
        "/logout",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(router).await;
    let client = ApiClient::new(base);
    let store = MemoryStore::new();
    store.set(GOOD_TOKEN, session::SESSION_TTL_DAYS);

    sign_out(&client, &store).await;
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn sign_out_clears_session_when_server_is_unreachable() {
    // Nothing listens here; the logout request fails at the transport level.
    let client = ApiClient::new("http://127.0.0.1:9");
    let store = MemoryStore::new();
    store.set(GOOD_TOKEN, session::SESSION_TTL_DAYS);

    sign_out(&client, &store).await;
    assert_eq!(store.get(), None);
}
