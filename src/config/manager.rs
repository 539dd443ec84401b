use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_API_URL;
use crate::fs::atomic_write;
use crate::i18n::Language;
use crate::paths;

/// Environment variable that overrides the configured API URL.
pub const API_URL_ENV: &str = "MEDICHAT_API_URL";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default settings in the `[medichat]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedichatConfig {
    /// Base URL of the MediChat backend.
    pub api_url: Option<String>,
    /// Interface language used when no preference has been stored.
    pub language: Option<String>,
    /// Translate messages to and from the base language.
    pub translate: Option<bool>,
    /// Cache translation results locally.
    pub cache: Option<bool>,
    pub timeout_secs: Option<u64>,
    /// Text-to-speech program, e.g. `espeak-ng -v {voice}`.
    pub tts_command: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/medichat/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub medichat: MedichatConfig,
}

/// CLI overrides that take precedence over the environment and config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub api_url: Option<String>,
    pub language: Option<String>,
    pub no_cache: bool,
}

/// Configuration after merging CLI options, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_url: String,
    /// Language forced from the command line for this run only.
    pub language_override: Option<Language>,
    /// Language used when nothing is stored or forced.
    pub default_language: Language,
    pub translate: bool,
    pub cache: bool,
    pub timeout: Duration,
    pub tts_command: Option<String>,
}

/// Resolves configuration.
///
/// Priority: CLI options, then `MEDICHAT_API_URL` (API URL only), then the
/// config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the API URL is not an http(s) URL, a language is not
/// supported, or the timeout is zero.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.medichat;

    let api_url = options
        .api_url
        .clone()
        .or_else(|| std::env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty()))
        .or_else(|| file.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    validate_api_url(&api_url)?;

    let language_override = options
        .language
        .as_deref()
        .map(Language::parse)
        .transpose()?;

    let default_language = file
        .language
        .as_deref()
        .map(Language::parse)
        .transpose()
        .context("Invalid 'language' in config file")?
        .unwrap_or_default();

    let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        bail!(
            "Invalid configuration: 'timeout_secs' must be greater than 0\n\n\
             Fix it in ~/.config/medichat/config.toml"
        );
    }

    Ok(ResolvedConfig {
        api_url: api_url.trim_end_matches('/').to_string(),
        language_override,
        default_language,
        translate: file.translate.unwrap_or(true),
        cache: !options.no_cache && file.cache.unwrap_or(true),
        timeout: Duration::from_secs(timeout_secs),
        tts_command: file
            .tts_command
            .clone()
            .filter(|cmd| !cmd.trim().is_empty()),
    })
}

fn validate_api_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(());
    }
    bail!(
        "Invalid API URL: '{url}'\n\n\
         The URL must start with http:// or https://, e.g. {DEFAULT_API_URL}"
    )
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Configuration is stored at `$XDG_CONFIG_HOME/medichat/config.toml`
    /// or `~/.config/medichat/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self::at(paths::config_dir()?.join("config.toml")))
    }

    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents)
    }

    /// Loads the config file; a missing file yields the defaults.
    ///
    /// A file that exists but does not parse is an error rather than being
    /// silently replaced.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }
        self.load()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::at(temp_dir.path().join("config.toml"))
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            medichat: MedichatConfig {
                api_url: Some("https://medichat.example".to_string()),
                language: Some("french".to_string()),
                translate: Some(false),
                cache: None,
                timeout_secs: Some(30),
                tts_command: Some("espeak-ng -v {voice}".to_string()),
            },
        };

        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_rejects_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[medichat\napi_url = ").unwrap();

        assert!(manager.load_or_default().is_err());
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(config.medichat, MedichatConfig::default());
    }

    #[test]
    #[serial]
    fn test_resolve_defaults() {
        // SAFETY: serialized with the other env-dependent tests
        unsafe {
            std::env::remove_var(API_URL_ENV);
        }

        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.api_url, DEFAULT_API_URL);
        assert_eq!(resolved.language_override, None);
        assert_eq!(resolved.default_language, Language::English);
        assert!(resolved.translate);
        assert!(resolved.cache);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(resolved.tts_command, None);
    }

    #[test]
    #[serial]
    fn test_resolve_env_overrides_file_url() {
        // SAFETY: serialized with the other env-dependent tests
        unsafe {
            std::env::set_var(API_URL_ENV, "http://env.local:9000/");
        }

        let config = ConfigFile {
            medichat: MedichatConfig {
                api_url: Some("http://file.local".to_string()),
                ..MedichatConfig::default()
            },
        };
        let resolved = resolve_config(&ResolveOptions::default(), &config);

        // SAFETY: cleanup
        unsafe {
            std::env::remove_var(API_URL_ENV);
        }
        assert_eq!(resolved.unwrap().api_url, "http://env.local:9000");
    }

    #[test]
    fn test_resolve_rejects_bad_url() {
        let options = ResolveOptions {
            api_url: Some("localhost:8000".to_string()),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid API URL"));
    }

    #[test]
    fn test_resolve_rejects_bad_language() {
        let options = ResolveOptions {
            api_url: Some(DEFAULT_API_URL.to_string()),
            language: Some("klingon".to_string()),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_resolve_rejects_zero_timeout() {
        let options = ResolveOptions {
            api_url: Some(DEFAULT_API_URL.to_string()),
            ..ResolveOptions::default()
        };
        let config = ConfigFile {
            medichat: MedichatConfig {
                timeout_secs: Some(0),
                ..MedichatConfig::default()
            },
        };

        let err = resolve_config(&options, &config).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_no_cache_flag_wins_over_file() {
        let options = ResolveOptions {
            api_url: Some(DEFAULT_API_URL.to_string()),
            no_cache: true,
            ..ResolveOptions::default()
        };
        let config = ConfigFile {
            medichat: MedichatConfig {
                cache: Some(true),
                tts_command: Some("   ".to_string()),
                ..MedichatConfig::default()
            },
        };

        let resolved = resolve_config(&options, &config).unwrap();
        assert!(!resolved.cache);
        assert_eq!(resolved.tts_command, None);
    }
}
