//! Terminal UI helpers (spinner, colors, prompt cancellation).

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive prompt flow, treating Ctrl+C / Escape as a clean exit.
///
/// Returns `Ok(None)` when the user cancelled, after printing a newline to
/// leave the terminal tidy.
pub fn handle_prompt_cancellation<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
