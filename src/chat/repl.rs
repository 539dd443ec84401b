use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::manager::ChatManager;
use super::message::{Message, Sender};
use super::notice::{Description, Notice};
use super::ui;
use crate::i18n::{Key, Language, t, t_with};
use crate::speech::{SpeechError, SpeechInput, SpeechOutput};
use crate::store::Preferences;
use crate::ui::{Spinner, Style};

/// Settings for an interactive chat session.
pub struct ReplOptions {
    pub api_url: String,
    /// Language forced for this run; `/lang` still switches and persists.
    pub language_override: Option<Language>,
    pub translate: bool,
}

/// An interactive chat session.
///
/// Renders the manager's state and turns typed lines into intents.
pub struct ChatRepl {
    manager: ChatManager,
    prefs: Preferences,
    language: Language,
    options: ReplOptions,
    speaker: Box<dyn SpeechOutput>,
    listener: Box<dyn SpeechInput>,
}

impl ChatRepl {
    pub fn new(
        manager: ChatManager,
        prefs: Preferences,
        options: ReplOptions,
        speaker: Box<dyn SpeechOutput>,
        listener: Box<dyn SpeechInput>,
    ) -> Self {
        let language = options.language_override.unwrap_or_else(|| prefs.language());
        Self {
            manager,
            prefs,
            language,
            options,
            speaker,
            listener,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.language);

        self.manager.load_chat_history().await;
        self.flush_notices();
        self.print_welcome_if_empty();

        let render_config = render_config();

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(t(self.language, Key::TypeMessage))
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => self.send(&text).await,
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.speaker.stop();
        ui::print_goodbye();
        Ok(())
    }

    async fn send(&mut self, text: &str) {
        let before = self.manager.messages().len();
        {
            let _spinner = Spinner::new(t(self.language, Key::Thinking));
            self.manager
                .send_message(text, self.language, self.options.translate)
                .await;
        }

        // The user's own line is already on screen.
        self.manager
            .messages()
            .iter()
            .skip(before)
            .filter(|message| message.sender == Sender::Bot)
            .for_each(ui::print_message);
        self.flush_notices();
    }

    /// Returns `false` when the session should end.
    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Config => self.print_config(),
            SlashCommand::Quit => return false,
            SlashCommand::History => {
                self.manager.load_chat_history().await;
                self.flush_notices();
                ui::print_history(
                    self.manager.chat_history(),
                    self.manager.current_session_id(),
                    self.language,
                );
            }
            SlashCommand::Load(Some(id)) => self.load(id).await,
            SlashCommand::Load(None) => ui::print_error("Usage: /load <id>"),
            SlashCommand::Delete(Some(id)) => self.delete(id).await,
            SlashCommand::Delete(None) => ui::print_error("Usage: /delete <id>"),
            SlashCommand::New => {
                self.manager.start_new_session();
                println!("{} {}", Style::success("✓"), t(self.language, Key::NewChat));
                println!();
                self.print_welcome_if_empty();
            }
            SlashCommand::Lang(Some(tag)) => self.switch_language(&tag).await,
            SlashCommand::Lang(None) => {
                ui::print_error("Usage: /lang <tag>");
                crate::i18n::print_languages();
            }
            SlashCommand::Speak => self.speak_last_answer(),
            SlashCommand::Stop => self.speaker.stop(),
            SlashCommand::Mic => self.toggle_mic().await,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    async fn load(&mut self, session_id: i64) {
        {
            let _spinner = Spinner::new(t(self.language, Key::Thinking));
            self.manager.load_session(session_id).await;
        }
        self.flush_notices();

        if self.manager.current_session_id() == Some(session_id) {
            println!();
            ui::print_transcript(self.manager.messages());
        }
    }

    async fn delete(&mut self, session_id: i64) {
        let was_active = self.manager.current_session_id() == Some(session_id);
        self.manager.delete_session(session_id).await;
        self.flush_notices();

        if was_active {
            self.print_welcome_if_empty();
        }
    }

    async fn switch_language(&mut self, tag: &str) {
        let language = match self.prefs.set_language_tag(tag) {
            Ok(language) => language,
            Err(err) => {
                ui::print_error(&format!("{err:#}"));
                return;
            }
        };
        self.language = language;
        println!(
            "{} {}",
            Style::success("✓"),
            t_with(language, Key::LanguageChanged, &[("language", language.label())])
        );

        if self.manager.original_messages().is_empty() {
            self.print_welcome_if_empty();
            return;
        }

        let before = self.manager.messages().to_vec();
        {
            let _spinner = Spinner::new(t(language, Key::Translating));
            self.manager.translate_all_messages(language).await;
        }
        self.flush_notices();

        if self.manager.messages() != before.as_slice() {
            println!();
            ui::print_transcript(self.manager.messages());
        }
    }

    fn speak_last_answer(&mut self) {
        if !self.speaker.is_supported() {
            self.show(Notice::error(
                Key::TtsNotSupported,
                Description::localized(Key::TtsNotSupportedDesc),
            ));
            return;
        }

        let Some(answer) = self
            .manager
            .messages()
            .iter()
            .rev()
            .find(|message| message.sender == Sender::Bot)
        else {
            ui::print_error(t(self.language, Key::NothingToSpeak));
            return;
        };

        if let Err(err) = self.speaker.speak(&answer.content, answer.language) {
            tracing::warn!(%err, "speech output failed");
            ui::print_error(&err.to_string());
        }
    }

    async fn toggle_mic(&mut self) {
        match self.listener.toggle_listening(self.language) {
            Ok(true) => status_line("Listening... run /mic again to stop."),
            Ok(false) => {
                if let Some(transcript) = self.listener.take_transcript() {
                    println!("{} {transcript}", Style::user("You"));
                    self.send(&transcript).await;
                }
            }
            Err(SpeechError::Unsupported) => self.show(Notice::error(
                Key::SpeechNotSupported,
                Description::localized(Key::SpeechNotSupportedDesc),
            )),
            Err(err) => ui::print_error(&err.to_string()),
        }
    }

    fn print_config(&self) {
        ui::print_config(&ui::ReplSummary {
            api_url: &self.options.api_url,
            language: self.language,
            translate: self.options.translate,
            session_id: self.manager.current_session_id(),
            speech_output: self.speaker.is_supported(),
            speech_input: self.listener.is_supported(),
        });
    }

    fn print_welcome_if_empty(&self) {
        if self.manager.messages().is_empty() {
            ui::print_message(&Message::welcome(self.language));
        }
    }

    fn flush_notices(&mut self) {
        for notice in self.manager.take_notices() {
            ui::print_notice(&notice, self.language);
        }
    }

    fn show(&self, notice: Notice) {
        ui::print_notice(&notice, self.language);
    }
}

fn status_line(message: &str) {
    crate::status!("{}", Style::hint(message));
}

fn render_config() -> RenderConfig<'static> {
    let prompt_style = Styled::new("❯")
        .with_fg(Color::LightBlue)
        .with_attr(Attributes::BOLD);
    let mut render_config = RenderConfig::default()
        .with_prompt_prefix(prompt_style)
        .with_answered_prompt_prefix(prompt_style);

    render_config.option = StyleSheet::new().with_fg(Color::Grey);
    render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));
    render_config
}
