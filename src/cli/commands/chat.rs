use anyhow::Result;

use super::auth::ensure_signed_in;
use crate::alert;
use crate::chat::{ChatRepl, ReplOptions};
use crate::cli::AppContext;
use crate::speech::{self, Unsupported};
use crate::ui::Style;

pub async fn run_chat(ctx: AppContext) -> Result<()> {
    if let Err(err) = ctx.api.health().await {
        tracing::debug!(%err, "health check failed");
        alert!(
            "{} MediChat backend is not reachable at {}",
            Style::warning("Warning:"),
            ctx.api.base_url()
        );
    }

    ensure_signed_in(&ctx).await?;

    let options = ReplOptions {
        api_url: ctx.config.api_url.clone(),
        language_override: ctx.config.language_override,
        translate: ctx.config.translate,
    };
    let manager = ctx.chat_manager();
    let speaker = speech::output_for(ctx.config.tts_command.as_deref());

    let mut repl = ChatRepl::new(manager, ctx.prefs, options, speaker, Box::new(Unsupported));
    repl.run().await
}
