#![allow(clippy::unwrap_used)]
//! API client tests against a local fake backend.

mod common;

use common::{FakeServer, PASSWORD, SESSION_ID, TOKEN, client};
use medichat::api::{ApiError, ChatRequest, ErrorKind, RegisterRequest, TOKEN_KEY};
use medichat::chat::{ChatBackend, Sender};
use medichat::i18n::Language;
use medichat::store::KeyValueStore;

#[tokio::test]
async fn test_login_stores_token() {
    let base_url = FakeServer::default().start().await;
    let (api, store) = client(&base_url, false);
    assert!(!api.is_authenticated());

    let auth = api.login("ada@example.com", PASSWORD).await.unwrap();

    assert_eq!(auth.user.full_name, "Ada Nkolo");
    assert_eq!(store.get(TOKEN_KEY), Some(TOKEN.to_string()));
    assert!(api.is_authenticated());
    assert_eq!(api.current_user().await.unwrap().email, "ada@example.com");
}

#[tokio::test]
async fn test_wrong_password_is_auth_error() {
    let base_url = FakeServer::default().start().await;
    let (api, store) = client(&base_url, false);

    let err = api.login("ada@example.com", "nope").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::AuthFailure);
    assert!(err.to_string().contains("Incorrect email or password"));
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[tokio::test]
async fn test_register_rejection_carries_detail() {
    let base_url = FakeServer::default().start().await;
    let (api, _store) = client(&base_url, false);

    let request = RegisterRequest {
        email: "taken@example.com".to_string(),
        password: "pw".to_string(),
        full_name: "Someone".to_string(),
        date_of_birth: None,
        phone: None,
        preferred_language: Language::Bassa,
    };
    let err = api.register(&request).await.unwrap_err();

    match err {
        ApiError::Http { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Email already registered");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_logout_forgets_token() {
    let base_url = FakeServer::default().start().await;
    let (api, store) = client(&base_url, true);

    api.logout().unwrap();

    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(matches!(
        api.current_user().await.unwrap_err(),
        ApiError::Auth(_)
    ));
}

#[tokio::test]
async fn test_send_chat_wire_format() {
    let server = FakeServer::default();
    let base_url = server.start().await;
    let (api, _store) = client(&base_url, true);

    let reply = api
        .send_chat(&ChatRequest {
            message: "I have a headache".to_string(),
            language: Language::French,
            session_id: None,
        })
        .await
        .unwrap();

    assert_eq!(reply.response, "Echo: I have a headache");
    assert_eq!(reply.session_id, SESSION_ID);

    let recorded = server.recorded.lock();
    let body = &recorded.chat_requests[0];
    assert_eq!(body["language"], "french");
    assert!(body.get("session_id").is_none());
}

#[tokio::test]
async fn test_chat_without_token_is_auth_error() {
    let base_url = FakeServer::default().start().await;
    let (api, _store) = client(&base_url, false);

    let err = api
        .send_chat(&ChatRequest {
            message: "Hello".to_string(),
            language: Language::English,
            session_id: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::AuthFailure);
}

#[tokio::test]
async fn test_history_and_session_messages() {
    let base_url = FakeServer::default().start().await;
    let (api, _store) = client(&base_url, true);

    let history = api.chat_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].name, "Headache");
    assert_eq!(history[0].message_count, 2);

    let data = api.session_messages(SESSION_ID).await.unwrap();
    assert_eq!(data.session.name.as_deref(), Some("Headache"));
    assert_eq!(data.messages.len(), 2);
    assert_eq!(data.messages[1].sender, Sender::Bot);
}

#[tokio::test]
async fn test_missing_session_is_http_404() {
    let base_url = FakeServer::default().start().await;
    let (api, _store) = client(&base_url, true);

    let err = api.session_messages(99).await.unwrap_err();

    assert_eq!(err.to_string(), "Session not found (HTTP 404)");
    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
}

#[tokio::test]
async fn test_delete_session() {
    let server = FakeServer::default();
    let base_url = server.start().await;
    let (api, _store) = client(&base_url, true);

    api.delete_session(SESSION_ID).await.unwrap();

    assert_eq!(server.recorded.lock().deleted, vec![SESSION_ID]);
    assert!(api.chat_history().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_translate_text() {
    let server = FakeServer::default();
    let base_url = server.start().await;
    let (api, _store) = client(&base_url, false);

    let text = api
        .translate_text("Bonjour", Language::French, Language::English)
        .await
        .unwrap();

    assert_eq!(text, "[english] Bonjour");
    let recorded = server.recorded.lock();
    assert_eq!(recorded.translate_requests[0]["source_language"], "french");
    assert_eq!(recorded.translate_requests[0]["target_language"], "english");
}

#[tokio::test]
async fn test_translate_failure_is_translation_error() {
    let base_url = FakeServer::default().start().await;
    let (api, _store) = client(&base_url, false);

    let err = api
        .translate_text("fail", Language::French, Language::English)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TranslationFailure);
    assert!(err.to_string().contains("Translation service unavailable"));
}

#[tokio::test]
async fn test_supported_languages_and_health() {
    let base_url = FakeServer::default().start().await;
    let (api, _store) = client(&base_url, false);

    let languages = api.supported_languages().await.unwrap();
    assert_eq!(languages.len(), 3);
    assert_eq!(languages[1].name, "Français");

    assert_eq!(api.health().await.unwrap().status, "healthy");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on the discard port.
    let (api, _store) = client("http://127.0.0.1:9", true);

    let err = api.chat_history().await.unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }));
    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
}
