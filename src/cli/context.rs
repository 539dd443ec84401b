use anyhow::{Context, Result};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::cache::CacheManager;
use crate::chat::{ChatBackend, ChatManager};
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::i18n::Language;
use crate::paths;
use crate::store::{FileStore, KeyValueStore, Preferences};

const STORE_FILE: &str = "store.json";

/// Everything a command needs, built once from flags, config and disk state.
pub struct AppContext {
    pub config: ResolvedConfig,
    pub prefs: Preferences,
    pub api: Arc<ApiClient>,
}

impl AppContext {
    pub fn load(options: &ResolveOptions) -> Result<Self> {
        let config_file = ConfigManager::new()?.load_or_default()?;
        let config = resolve_config(options, &config_file)?;

        let store_path = paths::data_dir()?.join(STORE_FILE);
        let file_store = FileStore::open(store_path).context("Failed to open local state")?;
        tracing::debug!(path = %file_store.path().display(), "opened local state");
        let store: Arc<dyn KeyValueStore> = Arc::new(file_store);
        let prefs = Preferences::load(Arc::clone(&store), config.default_language);

        let mut api = ApiClient::new(&config.api_url, config.timeout, store)?;
        if config.cache {
            match CacheManager::new() {
                Ok(cache) => api = api.with_cache(cache),
                Err(err) => tracing::warn!("translation cache disabled: {err:#}"),
            }
        }

        Ok(Self {
            config,
            prefs,
            api: Arc::new(api),
        })
    }

    /// The language for this run: `--lang`, then the stored preference.
    pub fn language(&self) -> Language {
        self.config
            .language_override
            .unwrap_or_else(|| self.prefs.language())
    }

    pub fn chat_manager(&self) -> ChatManager {
        ChatManager::new(Arc::clone(&self.api) as Arc<dyn ChatBackend>)
    }
}
