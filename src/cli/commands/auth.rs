//! Sign-in, registration and account commands.

use anyhow::{Result, bail};
use inquire::{Confirm, Password, PasswordDisplayMode, Select, Text};
use std::io::IsTerminal;

use crate::api::{ApiError, RegisterRequest, User};
use crate::cli::AppContext;
use crate::i18n::{Key, Language, t};
use crate::status;
use crate::ui::{Spinner, Style, handle_prompt_cancellation};

pub async fn run_login(ctx: &AppContext, email: Option<String>) -> Result<()> {
    let language = ctx.language();
    let Some((email, password)) = handle_prompt_cancellation(|| prompt_credentials(email, language))?
    else {
        return Ok(());
    };

    login(ctx, &email, &password).await
}

async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let language = ctx.language();
    let auth = {
        let _spinner = Spinner::new(t(language, Key::SignIn));
        ctx.api.login(email, password).await?
    };

    status!(
        "{} {} {}",
        Style::success("✓"),
        t(language, Key::WelcomeBack),
        Style::value(&auth.user.full_name)
    );
    Ok(())
}

fn prompt_credentials(email: Option<String>, language: Language) -> Result<(String, String)> {
    let email = match email {
        Some(email) => email,
        None => Text::new(&format!("{}:", t(language, Key::Email))).prompt()?,
    };
    let password = Password::new(&format!("{}:", t(language, Key::Password)))
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    Ok((email.trim().to_string(), password))
}

pub async fn run_register(ctx: &AppContext) -> Result<()> {
    let language = ctx.language();
    let Some(request) = handle_prompt_cancellation(|| prompt_registration(language))? else {
        return Ok(());
    };

    let auth = {
        let _spinner = Spinner::new(t(language, Key::CreateAccount));
        ctx.api.register(&request).await?
    };

    status!(
        "{} {} {}",
        Style::success("✓"),
        t(language, Key::RegistrationSuccess),
        t(language, Key::RegistrationSuccessDesc)
    );
    print_user(&auth.user);
    Ok(())
}

fn prompt_registration(language: Language) -> Result<RegisterRequest> {
    let label = |key| format!("{}:", t(language, key));

    let full_name = Text::new(&label(Key::FullName)).prompt()?;
    let email = Text::new(&label(Key::Email)).prompt()?;
    let password = Password::new(&label(Key::Password))
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    let confirmation = Password::new(&label(Key::ConfirmPassword))
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    if password != confirmation {
        bail!("{}", t(language, Key::PasswordMismatch));
    }

    let date_of_birth = optional(
        Text::new(&label(Key::DateOfBirth))
            .with_help_message("YYYY-MM-DD, optional")
            .prompt()?,
    );
    let phone = optional(
        Text::new(&label(Key::Phone))
            .with_help_message("optional")
            .prompt()?,
    );

    let starting = Language::ALL
        .iter()
        .position(|lang| *lang == language)
        .unwrap_or(0);
    let preferred_language = Select::new("Preferred language:", Language::ALL.to_vec())
        .with_starting_cursor(starting)
        .prompt()?;

    Ok(RegisterRequest {
        email: email.trim().to_string(),
        password,
        full_name: full_name.trim().to_string(),
        date_of_birth,
        phone,
        preferred_language,
    })
}

fn optional(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn run_logout(ctx: &AppContext) -> Result<()> {
    let language = ctx.language();
    ctx.api.logout()?;
    status!(
        "{} {}: {}",
        Style::success("✓"),
        t(language, Key::SignedOut),
        t(language, Key::SignedOutDesc)
    );
    Ok(())
}

pub async fn run_whoami(ctx: &AppContext) -> Result<()> {
    let user = ctx.api.current_user().await?;
    print_user(&user);
    Ok(())
}

fn print_user(user: &User) {
    println!("{}", Style::header(&user.full_name));
    println!("  {}     {}", Style::label("email"), Style::value(&user.email));
    if let Some(phone) = &user.phone {
        println!("  {}     {}", Style::label("phone"), Style::value(phone));
    }
    if let Some(language) = &user.preferred_language {
        println!("  {}  {}", Style::label("language"), Style::code(language));
    }
}

/// Makes sure a token is stored before calling endpoints that need one.
///
/// On a terminal the user is offered to sign in right away; otherwise this
/// fails with a hint to run `medichat login`.
pub async fn ensure_signed_in(ctx: &AppContext) -> Result<()> {
    if ctx.api.is_authenticated() {
        return Ok(());
    }

    let not_signed_in = ApiError::Auth("this command needs an account".to_string());
    if !std::io::stdin().is_terminal() {
        return Err(not_signed_in.into());
    }

    let language = ctx.language();
    let wants_login = handle_prompt_cancellation(|| {
        Ok(Confirm::new(&format!("{}?", t(language, Key::SignIn)))
            .with_default(true)
            .prompt()?)
    })?;
    if wants_login != Some(true) {
        return Err(not_signed_in.into());
    }

    let Some((email, password)) = handle_prompt_cancellation(|| prompt_credentials(None, language))?
    else {
        return Err(not_signed_in.into());
    };
    login(ctx, &email, &password).await
}
