use crate::api::{ApiError, ErrorKind};
use crate::i18n::{Key, Language, t, t_with};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// Verbatim text, typically an error message from the backend.
    Text(String),
    Localized(Key, Vec<(&'static str, String)>),
}

/// A transient, dismissable notification for the user.
///
/// Notices are localized when rendered, so the interface language at display
/// time wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: Key,
    pub description: Description,
}

impl Notice {
    pub const fn info(title: Key, description: Description) -> Self {
        Self {
            level: NoticeLevel::Info,
            title,
            description,
        }
    }

    pub const fn error(title: Key, description: Description) -> Self {
        Self {
            level: NoticeLevel::Error,
            title,
            description,
        }
    }

    /// An error notice describing `err`.
    ///
    /// Auth failures get a localized sign-in hint; other errors show their
    /// message, or `generic` if they have none.
    pub fn from_error(title: Key, err: &ApiError, generic: Key) -> Self {
        let description = match err.kind() {
            ErrorKind::AuthFailure => Description::localized(Key::SignInRequiredDesc),
            ErrorKind::NetworkFailure
            | ErrorKind::TranslationFailure
            | ErrorKind::ValidationFailure => {
                let message = err.to_string();
                if message.trim().is_empty() {
                    Description::localized(generic)
                } else {
                    Description::Text(message)
                }
            }
        };
        Self::error(title, description)
    }

    /// Title and description in `language`.
    pub fn render(&self, language: Language) -> (String, String) {
        let description = match &self.description {
            Description::Text(text) => text.clone(),
            Description::Localized(key, params) => {
                let params: Vec<(&str, &str)> =
                    params.iter().map(|(k, v)| (*k, v.as_str())).collect();
                t_with(language, *key, &params)
            }
        };
        (t(language, self.title).to_string(), description)
    }
}

impl Description {
    pub const fn localized(key: Key) -> Self {
        Self::Localized(key, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_localized_with_params() {
        let notice = Notice::info(
            Key::SessionLoaded,
            Description::Localized(
                Key::SessionLoadedDesc,
                vec![("count", "4".to_string()), ("name", "Fever".to_string())],
            ),
        );

        let (title, description) = notice.render(Language::French);
        assert_eq!(title, "Conversation chargée");
        assert_eq!(description, "4 messages chargés depuis Fever");
    }

    #[test]
    fn test_from_error_uses_error_text() {
        let err = ApiError::Http {
            status: 500,
            detail: "Error processing chat".to_string(),
        };
        let notice = Notice::from_error(Key::MessageFailed, &err, Key::MessageFailedDesc);

        assert_eq!(notice.level, NoticeLevel::Error);
        let (_, description) = notice.render(Language::English);
        assert!(description.contains("Error processing chat"));
    }

    #[test]
    fn test_from_error_auth_failure_is_localized() {
        let err = ApiError::Auth("Could not validate credentials".to_string());
        let notice = Notice::from_error(Key::HistoryLoadFailed, &err, Key::HistoryLoadFailedDesc);

        assert_eq!(notice.description, Description::localized(Key::SignInRequiredDesc));
        let (title, description) = notice.render(Language::French);
        assert_eq!(title, "Échec du chargement de l'historique");
        assert!(description.contains("medichat login"));
        assert!(!description.contains("credentials"));
    }
}
