use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use super::error::ApiError;
use super::types::{
    AuthResponse, ChatReply, ChatRequest, ChatSession, Health, LanguageInfo, LanguagesResponse,
    LoginRequest, RegisterRequest, SessionMessages, TranslateRequest, TranslateResponse, User,
};
use crate::cache::{CacheKey, CacheManager};
use crate::chat::ChatBackend;
use crate::i18n::Language;
use crate::store::KeyValueStore;

/// Store key holding the bearer token.
pub const TOKEN_KEY: &str = "medichat_token";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// HTTP client for the MediChat backend.
///
/// Owns the bearer token: it is read from and written to the injected store,
/// so a sign-in survives restarts.
pub struct ApiClient {
    http: Client,
    base_url: String,
    store: Arc<dyn KeyValueStore>,
    cache: Option<CacheManager>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            cache: None,
        })
    }

    /// Serves repeated translations from `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: CacheManager) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends `request` and decodes a JSON body of type `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(request, url).await?;
        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn send(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(url, "sending request");

        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
        tracing::debug!(url, status = status.as_u16(), %detail, "request rejected");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Auth(detail));
        }
        Err(ApiError::Http {
            status: status.as_u16(),
            detail,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = self.url("/api/auth/login");
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self.execute(self.http.post(&url).json(&body), &url).await?;
        self.store.set(TOKEN_KEY, &auth.access_token)?;
        Ok(auth)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.url("/api/auth/register");
        let auth: AuthResponse = self
            .execute(self.http.post(&url).json(request), &url)
            .await?;
        self.store.set(TOKEN_KEY, &auth.access_token)?;
        Ok(auth)
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Auth("no stored token".to_string()));
        }
        let url = self.url("/api/auth/me");
        self.execute(self.http.get(&url), &url).await
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        self.store.remove(TOKEN_KEY)?;
        Ok(())
    }

    pub async fn supported_languages(&self) -> Result<Vec<LanguageInfo>, ApiError> {
        let url = self.url("/api/translate/languages");
        let response: LanguagesResponse = self.execute(self.http.get(&url), &url).await?;
        Ok(response.languages)
    }

    pub async fn health(&self) -> Result<Health, ApiError> {
        let url = self.url("/api/health");
        self.execute(self.http.get(&url), &url).await
    }

    async fn request_translation(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<TranslateResponse, ApiError> {
        let url = self.url("/api/translate/");
        let body = TranslateRequest {
            text,
            source_language: source,
            target_language: target,
        };
        self.execute(self.http.post(&url).json(&body), &url).await
    }
}

/// Extracts FastAPI's `detail` field from an error body.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        // Validation errors carry a list of {loc, msg, type} objects.
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[async_trait]
impl ChatBackend for ApiClient {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        let url = self.url("/api/chat/");
        self.execute(self.http.post(&url).json(request), &url).await
    }

    async fn translate_text(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ApiError> {
        if source == target || text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let key = CacheKey {
            text,
            source,
            target,
            endpoint: &self.base_url,
        };

        if let Some(cache) = &self.cache {
            match cache.get(&key) {
                Ok(Some(cached)) => {
                    tracing::debug!(%source, %target, "translation cache hit");
                    return Ok(cached);
                }
                Ok(None) => {}
                Err(err) => tracing::warn!("translation cache read failed: {err:#}"),
            }
        }

        let response = self
            .request_translation(text, source, target)
            .await
            .map_err(|err| ApiError::Translation(err.to_string()))?;
        tracing::debug!(%source, %target, server_cached = response.cached, "translated");

        if let Some(cache) = &self.cache
            && let Err(err) = cache.put(&key, &response.translated_text)
        {
            tracing::warn!("translation cache write failed: {err:#}");
        }

        Ok(response.translated_text)
    }

    async fn chat_history(&self) -> Result<Vec<ChatSession>, ApiError> {
        let url = self.url("/api/chat/history");
        self.execute(self.http.get(&url), &url).await
    }

    async fn session_messages(&self, session_id: i64) -> Result<SessionMessages, ApiError> {
        let url = self.url(&format!("/api/chat/history/{session_id}"));
        self.execute(self.http.get(&url), &url).await
    }

    async fn delete_session(&self, session_id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/chat/history/{session_id}"));
        self.send(self.http.delete(&url), &url).await?;
        Ok(())
    }
}
