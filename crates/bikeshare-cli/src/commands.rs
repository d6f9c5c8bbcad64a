use crate::args::Cli;
use crate::config::Config;
use crate::handlers::session::{self, SessionEnd};
use crate::logging;
use crate::presentation::views::FarewellView;
use crate::ui::Console;
use anyhow::Result;
use std::io;

pub fn run(cli: Cli) -> Result<SessionEnd> {
    let config = Config::from_cli(&cli);
    logging::init(config.log_level);
    tracing::debug!(data_dir = %config.data_dir.display(), "starting session");

    let registry = config.registry();
    let options = config.options();
    let mut console = Console::new(io::stdin().lock(), io::stdout(), config.style());

    let end = session::run_session(&mut console, &registry, &options)?;
    console.print(FarewellView { end })?;
    Ok(end)
}
