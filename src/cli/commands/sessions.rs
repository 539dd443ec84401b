//! Browsing and deleting saved conversations.

use anyhow::{Result, bail};
use inquire::Confirm;

use super::auth::ensure_signed_in;
use crate::chat::{ChatManager, NoticeLevel, print_history, print_notice, print_transcript};
use crate::cli::AppContext;
use crate::i18n::{Key, Language, t};
use crate::ui::{Spinner, handle_prompt_cancellation};

pub async fn run_history(ctx: &AppContext) -> Result<()> {
    ensure_signed_in(ctx).await?;

    let language = ctx.language();
    let mut manager = ctx.chat_manager();
    {
        let _spinner = Spinner::new(t(language, Key::ChatHistory));
        manager.load_chat_history().await;
    }
    report(&mut manager, language, Key::HistoryLoadFailedDesc)?;

    print_history(manager.chat_history(), None, language);
    Ok(())
}

pub async fn run_show(ctx: &AppContext, session_id: i64) -> Result<()> {
    ensure_signed_in(ctx).await?;

    let language = ctx.language();
    let mut manager = ctx.chat_manager();
    {
        let _spinner = Spinner::new(t(language, Key::Thinking));
        manager.load_session(session_id).await;
    }
    report(&mut manager, language, Key::SessionLoadFailedDesc)?;

    if ctx.config.translate && !language.is_base() {
        let _spinner = Spinner::new(t(language, Key::Translating));
        manager.translate_all_messages(language).await;
    }
    report(&mut manager, language, Key::TranslationFailedDesc)?;

    print_transcript(manager.messages());
    Ok(())
}

pub async fn run_delete(ctx: &AppContext, session_id: i64, yes: bool) -> Result<()> {
    ensure_signed_in(ctx).await?;
    let language = ctx.language();

    if !yes {
        let confirmed = handle_prompt_cancellation(|| {
            Ok(Confirm::new(&format!("{} {session_id}?", t(language, Key::DeleteChat)))
                .with_default(false)
                .prompt()?)
        })?;
        if confirmed != Some(true) {
            return Ok(());
        }
    }

    let mut manager = ctx.chat_manager();
    manager.delete_session(session_id).await;
    report(&mut manager, language, Key::SessionDeleteFailedDesc)
}

/// Prints pending notices, failing if any of them is an error.
fn report(manager: &mut ChatManager, language: Language, failure: Key) -> Result<()> {
    let notices = manager.take_notices();
    for notice in &notices {
        print_notice(notice, language);
    }
    if notices.iter().any(|notice| notice.level == NoticeLevel::Error) {
        bail!("{}", t(language, failure));
    }
    Ok(())
}
