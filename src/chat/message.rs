use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::MessageRecord;
use crate::i18n::{BASE_LANGUAGE, Key, Language, t};

/// Id of the greeting shown at the top of an empty conversation.
///
/// Not numeric, so it can never collide with a backend message id.
pub const WELCOME_MESSAGE_ID: &str = "welcome";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub language: Language,
}

impl Message {
    /// A message typed by the user, stamped with a locally generated id.
    pub fn user(content: impl Into<String>, language: Language) -> Self {
        Self {
            id: local_id(0),
            content: content.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            language,
        }
    }

    pub fn bot(id: impl Into<String>, content: impl Into<String>, language: Language) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            language,
        }
    }

    pub fn welcome(language: Language) -> Self {
        Self::bot(WELCOME_MESSAGE_ID, t(language, Key::WelcomeMessage), language)
    }

    /// Apology shown in place of an answer when the backend could not be reached.
    pub fn fallback(language: Language) -> Self {
        Self::bot(local_id(1), t(language, Key::FallbackResponse), language)
    }

    pub fn is_welcome(&self) -> bool {
        self.id == WELCOME_MESSAGE_ID
    }

    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        let language = Language::parse(&record.language).unwrap_or_else(|err| {
            tracing::warn!(id = record.id, %err, "stored message has unknown language");
            BASE_LANGUAGE
        });

        Self {
            id: record.id.to_string(),
            content: record.content,
            sender: record.sender,
            timestamp: record.created_at,
            language,
        }
    }
}

fn local_id(offset: i64) -> String {
    (Utc::now().timestamp_millis() + offset).to_string()
}
