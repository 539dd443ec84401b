use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::i18n::Language;
use crate::paths;

/// Identity of a translation: same text, language pair and API.
#[derive(Debug, Clone, Copy)]
pub struct CacheKey<'a> {
    pub text: &'a str,
    pub source: Language,
    pub target: Language,
    pub endpoint: &'a str,
}

impl CacheKey<'_> {
    pub fn digest(&self) -> String {
        let input = serde_json::json!({
            "text": self.text,
            "source": self.source.tag(),
            "target": self.target.tag(),
            "endpoint": self.endpoint,
        });

        let mut hasher = Sha256::new();
        hasher.update(input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// SQLite-backed translation cache.
///
/// A connection is opened per call so the manager can be shared across tasks.
#[derive(Debug, Clone)]
pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    /// Opens the cache in the default cache directory.
    pub fn new() -> Result<Self> {
        Self::open(&paths::cache_dir()?)
    }

    /// Opens (and creates if needed) the cache database inside `dir`.
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create cache directory: {}", dir.display()))?;

        let manager = Self {
            db_path: dir.join("translations.db"),
        };
        manager.init_db()?;
        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                source_text TEXT NOT NULL,
                translated_text TEXT NOT NULL,
                source_language TEXT NOT NULL,
                target_language TEXT NOT NULL,
                endpoint TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    pub fn get(&self, key: &CacheKey<'_>) -> Result<Option<String>> {
        let digest = key.digest();
        let conn = self.connect()?;

        let cached: Option<String> = conn
            .query_row(
                "SELECT translated_text FROM translations WHERE cache_key = ?1",
                [&digest],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to query translation cache")?;

        if cached.is_some() {
            conn.execute(
                "UPDATE translations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [&digest],
            )?;
        }

        Ok(cached)
    }

    pub fn put(&self, key: &CacheKey<'_>, translated_text: &str) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, source_text, translated_text, source_language, target_language, endpoint)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                key.digest(),
                key.text,
                translated_text,
                key.source.tag(),
                key.target.tag(),
                key.endpoint,
            ],
        )
        .context("Failed to insert translation into cache")?;

        Ok(())
    }
}
