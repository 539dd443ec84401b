use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current settings"),
    ("/delete", "Delete a saved conversation: /delete <id>"),
    ("/help", "Show available commands"),
    ("/history", "List saved conversations"),
    ("/lang", "Switch language: /lang <tag>"),
    ("/load", "Open a saved conversation: /load <id>"),
    ("/mic", "Start or stop voice input"),
    ("/new", "Start a new conversation"),
    ("/quit", "Exit chat mode"),
    ("/speak", "Read the last answer aloud"),
    ("/stop", "Stop reading aloud"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        // Arguments are free-form; stop suggesting once one is being typed.
        if !input.starts_with('/') || input.contains(char::is_whitespace) {
            return Ok(vec![]);
        }

        Ok(SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion
            .and_then(|s| s.split_whitespace().next().map(str::to_string)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    History,
    /// `None` when the id is missing or not a number.
    Load(Option<i64>),
    Delete(Option<i64>),
    New,
    Lang(Option<String>),
    Speak,
    Stop,
    Mic,
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), |cmd| Input::Command(parse_slash_command(cmd)))
}

fn parse_slash_command(cmd: &str) -> SlashCommand {
    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    let session_id = || arg.and_then(|id| id.parse::<i64>().ok());

    match name {
        "config" => SlashCommand::Config,
        "help" | "?" => SlashCommand::Help,
        "history" => SlashCommand::History,
        "load" | "open" => SlashCommand::Load(session_id()),
        "delete" | "rm" => SlashCommand::Delete(session_id()),
        "new" => SlashCommand::New,
        "lang" | "language" => SlashCommand::Lang(arg.map(str::to_string)),
        "speak" => SlashCommand::Speak,
        "stop" => SlashCommand::Stop,
        "mic" => SlashCommand::Mic,
        "quit" | "exit" | "q" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    }
}
