mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;
pub mod ui;

pub use args::Cli;
pub use commands::run;
pub use handlers::session::{SessionEnd, run_session, wants_restart};
pub use ui::{AbortReason, Console, PromptOutcome, ask, match_answer};
