use anyhow::Result;

use crate::cli::AppContext;
use crate::i18n::{Language, print_languages};
use crate::ui::{Spinner, Style};

/// Lists the languages the backend translator accepts.
pub async fn run_remote_languages(ctx: &AppContext) -> Result<()> {
    let languages = {
        let _spinner = Spinner::new("Fetching languages...");
        ctx.api.supported_languages().await?
    };

    println!("{}", Style::header("Backend languages"));
    for info in languages {
        let marker = if Language::parse(&info.code).is_ok() {
            String::new()
        } else {
            format!(" {}", Style::secondary("(not available in this client)"))
        };
        println!(
            "  {:8} {}{marker}",
            Style::code(&info.code),
            Style::secondary(&info.name)
        );
    }
    Ok(())
}

pub fn run_languages() {
    print_languages();
}
