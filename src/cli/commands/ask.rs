use anyhow::{Result, bail};
use std::path::Path;

use super::auth::ensure_signed_in;
use crate::chat::{NoticeLevel, Sender, print_notice};
use crate::cli::AppContext;
use crate::i18n::{Key, t};
use crate::input::read_input;
use crate::ui::Spinner;

/// Sends one message and prints the assistant's answer to stdout.
pub async fn run_ask(ctx: &AppContext, file: Option<&Path>, translate: bool) -> Result<()> {
    let text = read_input(file)?;
    ensure_signed_in(ctx).await?;

    let language = ctx.language();
    let mut manager = ctx.chat_manager();
    {
        let _spinner = Spinner::new(t(language, Key::Thinking));
        manager
            .send_message(&text, language, translate && ctx.config.translate)
            .await;
    }

    let notices = manager.take_notices();
    for notice in &notices {
        print_notice(notice, language);
    }
    if notices.iter().any(|notice| notice.level == NoticeLevel::Error) {
        bail!("{}", t(language, Key::MessageFailedDesc));
    }

    if let Some(answer) = manager
        .messages()
        .iter()
        .rev()
        .find(|message| message.sender == Sender::Bot)
    {
        println!("{}", answer.content);
    }
    Ok(())
}
