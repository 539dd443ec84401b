use std::sync::Arc;

use super::{KeyValueStore, StoreError};
use crate::i18n::Language;

/// Store key holding the selected interface language.
pub const LANGUAGE_KEY: &str = "medichat_language";

/// User preferences, read once at startup and written on every change.
pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
    language: Language,
}

impl Preferences {
    /// Loads preferences, using `default_language` when nothing valid is stored.
    pub fn load(store: Arc<dyn KeyValueStore>, default_language: Language) -> Self {
        let language = match store.get(LANGUAGE_KEY).as_deref().map(Language::parse) {
            Some(Ok(lang)) => lang,
            Some(Err(err)) => {
                tracing::warn!(%err, "ignoring stored language preference");
                default_language
            }
            None => default_language,
        };

        Self { store, language }
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), StoreError> {
        self.store.set(LANGUAGE_KEY, language.tag())?;
        self.language = language;
        Ok(())
    }

    /// Parses and stores a language tag. Unknown tags leave the preference
    /// unchanged.
    pub fn set_language_tag(&mut self, tag: &str) -> anyhow::Result<Language> {
        let language = Language::parse(tag)?;
        self.set_language(language)?;
        Ok(language)
    }
}
