pub mod console;
pub mod prompt;

pub use console::Console;
pub use prompt::{AbortReason, PromptOutcome, ask, match_answer};
pub(crate) use prompt::selected;
