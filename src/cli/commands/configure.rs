//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Confirm, Select, Text};

use crate::api::DEFAULT_API_URL;
use crate::config::{ConfigFile, ConfigManager, DEFAULT_TIMEOUT_SECS, MedichatConfig};
use crate::i18n::Language;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the config file path and current values. Otherwise
/// walks through every setting interactively and saves the result.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    if show {
        print_current_defaults(&manager, &config);
        return Ok(());
    }

    handle_prompt_cancellation(|| configure_interactively(&manager, config)).map(|_| ())
}

fn configure_interactively(manager: &ConfigManager, mut config: ConfigFile) -> Result<()> {
    print_current_defaults(manager, &config);
    let current = &config.medichat;

    let api_url = Text::new("API URL:")
        .with_default(current.api_url.as_deref().unwrap_or(DEFAULT_API_URL))
        .prompt()?;
    let api_url = api_url.trim().trim_end_matches('/').to_string();
    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        bail!("API URL must start with http:// or https://");
    }

    let language = select_language(current.language.as_deref())?;

    let translate = Confirm::new("Translate messages to and from English?")
        .with_default(current.translate.unwrap_or(true))
        .prompt()?;
    let cache = Confirm::new("Cache translations locally?")
        .with_default(current.cache.unwrap_or(true))
        .prompt()?;

    let timeout = Text::new("Request timeout (seconds):")
        .with_default(&current.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS).to_string())
        .prompt()?;
    let timeout_secs: u64 = match timeout.trim().parse() {
        Ok(secs) if secs > 0 => secs,
        _ => bail!("Timeout must be a positive number of seconds"),
    };

    let tts_command = Text::new("Text-to-speech command:")
        .with_default(current.tts_command.as_deref().unwrap_or(""))
        .with_help_message("e.g. espeak-ng -v {voice}; leave empty to disable")
        .prompt()?;

    config.medichat = MedichatConfig {
        api_url: Some(api_url),
        language: Some(language.tag().to_string()),
        translate: Some(translate),
        cache: Some(cache),
        timeout_secs: Some(timeout_secs),
        tts_command: Some(tts_command.trim().to_string()).filter(|cmd| !cmd.is_empty()),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );
    Ok(())
}

fn select_language(current: Option<&str>) -> Result<Language> {
    let starting = current
        .and_then(|tag| Language::parse(tag).ok())
        .and_then(|lang| Language::ALL.iter().position(|l| *l == lang))
        .unwrap_or(0);

    Ok(Select::new("Default language:", Language::ALL.to_vec())
        .with_starting_cursor(starting)
        .prompt()?)
}

fn print_current_defaults(manager: &ConfigManager, config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");
    let settings = &config.medichat;

    println!(
        "{} {}",
        Style::header("Current defaults"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}       {}",
        Style::label("api_url"),
        settings.api_url.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("language"),
        settings.language.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("translate"),
        settings.translate.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}         {}",
        Style::label("cache"),
        settings.cache.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("timeout_secs"),
        settings.timeout_secs.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("tts_command"),
        settings.tts_command.as_deref().map_or_else(not_set, Style::value)
    );
    println!();
}
