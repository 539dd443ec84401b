use std::io::Write;
use std::process::{Child, Command, Stdio};
use std::thread;

use super::{SpeechError, SpeechOutput};
use crate::i18n::Language;

const VOICE_PLACEHOLDER: &str = "{voice}";

/// Speaks through an external TTS program such as `espeak-ng -v {voice}`.
///
/// The text is written to the program's stdin; `{voice}` in the command line
/// is replaced by the language's voice tag.
pub struct CommandSpeaker {
    command_line: String,
    child: Option<Child>,
}

impl CommandSpeaker {
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            child: None,
        }
    }

    fn build(&self, language: Language) -> Result<Command, SpeechError> {
        let mut parts = self
            .command_line
            .split_whitespace()
            .map(|part| part.replace(VOICE_PLACEHOLDER, language.voice()));
        let program = parts.next().ok_or(SpeechError::EmptyCommand)?;

        let mut command = Command::new(program);
        command
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Ok(command)
    }
}

impl SpeechOutput for CommandSpeaker {
    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        self.stop();

        let mut command = self.build(language)?;
        let mut child = command.spawn().map_err(|source| SpeechError::Spawn {
            program: command.get_program().to_string_lossy().into_owned(),
            source,
        })?;

        // Programs that read slowly (or not at all) would block the caller
        // once the pipe fills. Dropping stdin after the write ends the input.
        if let Some(mut stdin) = child.stdin.take() {
            let text = text.to_string();
            thread::spawn(move || {
                if let Err(err) = stdin.write_all(text.as_bytes()) {
                    tracing::debug!(%err, "speech command stopped reading its input");
                }
            });
        }

        tracing::debug!(voice = language.voice(), pid = child.id(), "speaking");
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(err) = child.kill() {
                tracing::debug!(%err, "speech command already finished");
            }
            let _ = child.wait();
        }
    }

    fn is_speaking(&mut self) -> bool {
        let finished = match self.child.as_mut() {
            None => return false,
            Some(child) => !matches!(child.try_wait(), Ok(None)),
        };
        if finished {
            self.child = None;
        }
        !finished
    }

    fn is_supported(&self) -> bool {
        true
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.stop();
    }
}
