//! Configuration file management and resolution.

mod manager;

pub use manager::{
    API_URL_ENV, ConfigFile, ConfigManager, DEFAULT_TIMEOUT_SECS, MedichatConfig, ResolveOptions,
    ResolvedConfig, resolve_config,
};
