//! Chat mode UI components.

use crate::api::ChatSession;
use crate::i18n::{Key, Language, t};
use crate::ui::Style;
use crate::{alert, status};

use super::message::{Message, Sender};
use super::notice::{Notice, NoticeLevel};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings shown by `/config`.
pub struct ReplSummary<'a> {
    pub api_url: &'a str,
    pub language: Language,
    pub translate: bool,
    pub session_id: Option<i64>,
    pub speech_output: bool,
    pub speech_input: bool,
}

pub fn print_header(language: Language) {
    println!(
        "{} {} - {}",
        Style::header("MediChat"),
        Style::version(format!("v{VERSION}")),
        t(language, Key::YourMedicalAssistant)
    );
    println!("{}", Style::hint(t(language, Key::Disclaimer)));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_message(message: &Message) {
    let speaker = match message.sender {
        Sender::User => Style::user("You"),
        Sender::Bot => Style::bot("MediChat"),
    };
    println!(
        "{speaker} {}",
        Style::secondary(message.timestamp.format("%H:%M"))
    );
    println!("{}", message.content);
    println!();
}

pub fn print_transcript(messages: &[Message]) {
    for message in messages {
        print_message(message);
    }
}

pub fn print_notice(notice: &Notice, language: Language) {
    let (title, description) = notice.render(language);
    match notice.level {
        NoticeLevel::Info => {
            status!("{} {title}: {description}", Style::success("✓"));
        }
        NoticeLevel::Error => {
            alert!("{} {title}: {description}", Style::error("✗"));
        }
    }
}

pub fn print_history(history: &[ChatSession], current: Option<i64>, language: Language) {
    println!("{}", Style::header(t(language, Key::ChatHistory)));
    if history.is_empty() {
        println!("  {}", Style::secondary(t(language, Key::NoHistory)));
        println!();
        return;
    }

    for session in history {
        let marker = if current == Some(session.id) { "*" } else { " " };
        println!(
            "{marker} {:>5}  {}  {}",
            Style::code(session.id),
            Style::value(&session.name),
            Style::secondary(format!(
                "{} {} · {}",
                session.message_count,
                t(language, Key::Messages),
                session.created_at.format("%Y-%m-%d %H:%M")
            ))
        );
    }
    println!();
}

pub fn print_config(summary: &ReplSummary<'_>) {
    let on_off = |flag: bool| if flag { "on" } else { "off" };

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}    {}",
        Style::label("api_url"),
        Style::secondary(summary.api_url)
    );
    println!(
        "  {}   {} ({})",
        Style::label("language"),
        Style::value(summary.language),
        summary.language.label()
    );
    println!(
        "  {}  {}",
        Style::label("translate"),
        Style::value(on_off(summary.translate))
    );
    println!(
        "  {}    {}",
        Style::label("session"),
        summary
            .session_id
            .map_or_else(|| Style::secondary("(new)"), Style::value)
    );
    println!(
        "  {}     {} / {}",
        Style::label("speech"),
        Style::value(format!("out {}", on_off(summary.speech_output))),
        Style::value(format!("in {}", on_off(summary.speech_input)))
    );
    println!();
}

pub fn print_help() {
    let commands = [
        ("/history", "List saved conversations"),
        ("/load <id>", "Open a saved conversation"),
        ("/delete <id>", "Delete a saved conversation"),
        ("/new", "Start a new conversation"),
        ("/lang <tag>", "Switch language and translate the conversation"),
        ("/speak", "Read the last answer aloud"),
        ("/stop", "Stop reading aloud"),
        ("/mic", "Start or stop voice input"),
        ("/config", "Show current settings"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];

    println!("{}", Style::header("Available commands"));
    for (command, description) in commands {
        println!(
            "  {}  {}",
            Style::command(format!("{command:<13}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    alert!("{} {message}", Style::error("Error:"));
}
