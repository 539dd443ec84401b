use anyhow::{Context, Result};
use std::path::Path;

use crate::chat::ChatBackend;
use crate::cli::AppContext;
use crate::i18n::{Key, Language, t};
use crate::input::read_input;
use crate::ui::Spinner;

pub struct TranslateOptions<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub file: Option<&'a Path>,
}

/// Translates a file or stdin and prints the result to stdout.
pub async fn run_translate(ctx: &AppContext, options: TranslateOptions<'_>) -> Result<()> {
    let source = Language::parse(options.from).context("Invalid --from language")?;
    let target = Language::parse(options.to).context("Invalid --to language")?;
    let text = read_input(options.file)?;

    let translated = {
        let _spinner = Spinner::new(t(ctx.language(), Key::Translating));
        ctx.api.translate_text(&text, source, target).await?
    };

    println!("{}", translated.trim_end());
    Ok(())
}
