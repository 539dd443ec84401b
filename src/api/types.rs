//! Request and response bodies of the MediChat HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::Sender;
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    /// Assistant answer, always in the base language.
    pub response: String,
    pub session_id: i64,
    pub message_id: i64,
}

/// Summary of a stored conversation, as listed in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: i64,
    #[serde(rename = "session_name")]
    pub name: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub message_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionMessages {
    pub session: SessionInfo,
    pub messages: Vec<MessageRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A stored message as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRecord {
    pub id: i64,
    pub content: String,
    pub sender: Sender,
    /// Kept as a raw tag: the backend stores whatever the client sent.
    pub language: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest<'a> {
    pub text: &'a str,
    pub source_language: Language,
    pub target_language: Language,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    #[serde(default)]
    pub cached: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub preferred_language: Language,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
}

/// Backend timestamps are naive ISO-8601 in UTC; RFC 3339 is accepted too.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc()))
    }
}
