use anyhow::Result;
use clap::Parser;

use medichat::cli::commands::{ask, auth, chat, configure, languages, sessions, translate};
use medichat::cli::{AppContext, Args, Command};
use medichat::config::ResolveOptions;
use medichat::i18n::Language;
use medichat::{logging, output};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(output::OutputConfig {
        quiet: args.quiet,
        ..output::OutputConfig::default()
    });
    logging::init(args.verbose);

    if let Some(ref lang) = args.lang {
        Language::parse(lang)?;
    }

    // Configuration and local listings must work even when the config
    // cannot be resolved.
    match args.command {
        Some(Command::Languages { remote: false }) => languages::run_languages(),
        Some(Command::Configure { show }) => configure::run_configure(show)?,
        command => {
            let ctx = AppContext::load(&ResolveOptions {
                api_url: args.api_url,
                language: args.lang,
                no_cache: args.no_cache,
            })?;
            run(ctx, command).await?;
        }
    }

    Ok(())
}

async fn run(ctx: AppContext, command: Option<Command>) -> Result<()> {
    match command {
        None | Some(Command::Chat) => chat::run_chat(ctx).await,
        Some(Command::Ask { file, no_translate }) => {
            ask::run_ask(&ctx, file.as_deref(), !no_translate).await
        }
        Some(Command::History) => sessions::run_history(&ctx).await,
        Some(Command::Show { id }) => sessions::run_show(&ctx, id).await,
        Some(Command::Delete { id, yes }) => sessions::run_delete(&ctx, id, yes).await,
        Some(Command::Translate { from, to, file }) => {
            let options = translate::TranslateOptions {
                from: &from,
                to: &to,
                file: file.as_deref(),
            };
            translate::run_translate(&ctx, options).await
        }
        Some(Command::Login { email }) => auth::run_login(&ctx, email).await,
        Some(Command::Register) => auth::run_register(&ctx).await,
        Some(Command::Logout) => auth::run_logout(&ctx),
        Some(Command::Whoami) => auth::run_whoami(&ctx).await,
        Some(Command::Languages { .. }) => languages::run_remote_languages(&ctx).await,
        Some(Command::Configure { show }) => configure::run_configure(show),
    }
}
