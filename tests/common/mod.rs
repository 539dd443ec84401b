//! A fake MediChat backend served by axum on a random local port.

#![allow(dead_code, clippy::unwrap_used)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

use medichat::api::ApiClient;
use medichat::store::{KeyValueStore, MemoryStore};

pub const TOKEN: &str = "token-123";
pub const PASSWORD: &str = "secret";
pub const SESSION_ID: i64 = 7;

#[derive(Default)]
pub struct Recorded {
    pub chat_requests: Vec<Value>,
    pub translate_requests: Vec<Value>,
    pub deleted: Vec<i64>,
    next_message_id: i64,
}

#[derive(Clone, Default)]
pub struct FakeServer {
    pub recorded: Arc<Mutex<Recorded>>,
}

type Reply = (StatusCode, Json<Value>);

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn error(status: StatusCode, detail: &str) -> Reply {
    (status, Json(json!({ "detail": detail })))
}

fn authorized(headers: &HeaderMap) -> Result<(), Reply> {
    let expected = format!("Bearer {TOKEN}");
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(error(
            StatusCode::UNAUTHORIZED,
            "Could not validate credentials",
        )),
    }
}

fn user() -> Value {
    json!({
        "id": 1,
        "email": "ada@example.com",
        "full_name": "Ada Nkolo",
        "phone": null,
        "date_of_birth": null,
        "preferred_language": "french"
    })
}

async fn login(Json(body): Json<Value>) -> Reply {
    if body["password"] == PASSWORD {
        ok(json!({ "access_token": TOKEN, "token_type": "bearer", "user": user() }))
    } else {
        error(StatusCode::UNAUTHORIZED, "Incorrect email or password")
    }
}

async fn register(Json(body): Json<Value>) -> Reply {
    if body["email"] == "taken@example.com" {
        return error(StatusCode::BAD_REQUEST, "Email already registered");
    }
    ok(json!({ "access_token": TOKEN, "token_type": "bearer", "user": user() }))
}

async fn me(headers: HeaderMap) -> Reply {
    if let Err(reply) = authorized(&headers) {
        return reply;
    }
    ok(user())
}

async fn health() -> Reply {
    ok(json!({ "status": "healthy" }))
}

async fn chat(
    State(server): State<FakeServer>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    if let Err(reply) = authorized(&headers) {
        return reply;
    }
    if body["message"] == "crash" {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Error processing chat");
    }

    let mut recorded = server.recorded.lock();
    recorded.chat_requests.push(body.clone());
    recorded.next_message_id += 1;

    ok(json!({
        "response": format!("Echo: {}", body["message"].as_str().unwrap_or_default()),
        "session_id": body["session_id"].as_i64().unwrap_or(SESSION_ID),
        "message_id": 200 + recorded.next_message_id,
    }))
}

async fn history(State(server): State<FakeServer>, headers: HeaderMap) -> Reply {
    if let Err(reply) = authorized(&headers) {
        return reply;
    }
    if server.recorded.lock().deleted.contains(&SESSION_ID) {
        return ok(json!([]));
    }
    ok(json!([{
        "id": SESSION_ID,
        "session_name": "Headache",
        "created_at": "2024-03-01T10:15:30.123456",
        "message_count": 2
    }]))
}

async fn session(
    State(server): State<FakeServer>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply {
    if let Err(reply) = authorized(&headers) {
        return reply;
    }
    if id != SESSION_ID || server.recorded.lock().deleted.contains(&id) {
        return error(StatusCode::NOT_FOUND, "Session not found");
    }
    ok(json!({
        "session": { "id": id, "name": "Headache", "created_at": "2024-03-01T10:15:30" },
        "messages": [
            {
                "id": 71, "content": "J'ai mal à la tête", "sender": "user",
                "language": "french", "created_at": "2024-03-01T10:15:31"
            },
            {
                "id": 72, "content": "Rest and drink water.", "sender": "bot",
                "language": "english", "created_at": "2024-03-01T10:15:35"
            }
        ]
    }))
}

async fn delete_session(
    State(server): State<FakeServer>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply {
    if let Err(reply) = authorized(&headers) {
        return reply;
    }
    if id != SESSION_ID {
        return error(StatusCode::NOT_FOUND, "Session not found");
    }
    server.recorded.lock().deleted.push(id);
    ok(json!({ "message": "Session deleted successfully" }))
}

async fn translate(State(server): State<FakeServer>, Json(body): Json<Value>) -> Reply {
    server.recorded.lock().translate_requests.push(body.clone());
    if body["text"] == "fail" {
        return error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Translation service unavailable",
        );
    }

    let target = body["target_language"].as_str().unwrap_or_default();
    ok(json!({
        "translated_text": format!("[{target}] {}", body["text"].as_str().unwrap_or_default()),
        "source_language": body["source_language"],
        "target_language": target,
        "cached": false
    }))
}

async fn languages() -> Reply {
    ok(json!({
        "languages": [
            { "code": "english", "name": "English" },
            { "code": "french", "name": "Français" },
            { "code": "fulfulde", "name": "Fulfulde" }
        ]
    }))
}

impl FakeServer {
    fn router(&self) -> Router {
        Router::new()
            .route("/api/health", get(health))
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/auth/me", get(me))
            .route("/api/chat/", post(chat))
            .route("/api/chat/history", get(history))
            .route(
                "/api/chat/history/{id}",
                get(session).delete(delete_session),
            )
            .route("/api/translate/", post(translate))
            .route("/api/translate/languages", get(languages))
            .with_state(self.clone())
    }

    /// Serves the fake backend and returns its base URL.
    pub async fn start(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

/// A client for `base_url` with an in-memory token store.
pub fn client(base_url: &str, signed_in: bool) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    if signed_in {
        store.set(medichat::api::TOKEN_KEY, TOKEN).unwrap();
    }
    let api = ApiClient::new(base_url, Duration::from_secs(5), store.clone()).unwrap();
    (api, store)
}
