//! Speech input and output adapters.
//!
//! Speech is optional: every adapter reports whether it is usable, and the
//! REPL shows a localized notice instead of failing when it is not.

mod command;

use thiserror::Error;

use crate::i18n::Language;

pub use command::CommandSpeaker;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech is not supported on this system")]
    Unsupported,

    #[error("Speech command is empty")]
    EmptyCommand,

    #[error("Failed to start speech command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reads text aloud.
pub trait SpeechOutput: Send {
    /// Starts reading `text` in `language`'s voice, interrupting any
    /// utterance in progress. Empty text is ignored.
    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError>;
    fn stop(&mut self);
    fn is_speaking(&mut self) -> bool;
    fn is_supported(&self) -> bool;
}

/// Turns the user's voice into text.
pub trait SpeechInput: Send {
    /// Starts or stops listening; returns whether it is now listening.
    fn toggle_listening(&mut self, language: Language) -> Result<bool, SpeechError>;
    fn is_listening(&self) -> bool;
    /// The last finished transcript, if any.
    fn take_transcript(&mut self) -> Option<String>;
    fn is_supported(&self) -> bool;
}

/// Stand-in used when no speech backend is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unsupported;

impl SpeechOutput for Unsupported {
    fn speak(&mut self, _text: &str, _language: Language) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn stop(&mut self) {}

    fn is_speaking(&mut self) -> bool {
        false
    }

    fn is_supported(&self) -> bool {
        false
    }
}

impl SpeechInput for Unsupported {
    fn toggle_listening(&mut self, _language: Language) -> Result<bool, SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn is_listening(&self) -> bool {
        false
    }

    fn take_transcript(&mut self) -> Option<String> {
        None
    }

    fn is_supported(&self) -> bool {
        false
    }
}

/// Picks the speech output for a configured TTS command line.
pub fn output_for(tts_command: Option<&str>) -> Box<dyn SpeechOutput> {
    match tts_command.map(str::trim).filter(|cmd| !cmd.is_empty()) {
        Some(cmd) => Box::new(CommandSpeaker::new(cmd)),
        None => Box::new(Unsupported),
    }
}
