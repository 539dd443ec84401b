//! Reading message text from a file or stdin.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Largest accepted input, in bytes.
pub const MAX_INPUT_SIZE: u64 = 1024 * 1024;

/// Reads `path`, or stdin when `path` is `None`.
///
/// Input larger than [`MAX_INPUT_SIZE`] or blank input is rejected.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open file: {}", path.display()))?;
            read_limited(file, &path.display().to_string())?
        }
        None => read_limited(io::stdin().lock(), "stdin")?,
    };

    if text.trim().is_empty() {
        bail!("Nothing to send: the input is empty");
    }
    Ok(text)
}

fn read_limited<R: Read>(reader: R, source: &str) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .take(MAX_INPUT_SIZE + 1)
        .read_to_end(&mut buffer)
        .with_context(|| format!("Failed to read {source}"))?;

    if buffer.len() as u64 > MAX_INPUT_SIZE {
        bail!(
            "Input from {source} exceeds the maximum allowed size (1 MB).\n\n\
             Split it into smaller parts."
        );
    }

    String::from_utf8(buffer).with_context(|| format!("Input from {source} is not valid UTF-8"))
}
