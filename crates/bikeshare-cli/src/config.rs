use crate::args::Cli;
use crate::presentation::Style;
use crate::types::LogLevel;
use bikeshare_types::{DatasetRegistry, OptionSets};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Runtime settings, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: LogLevel,
    pub color: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            log_level: cli.log_level,
            color: !cli.no_color && std::io::stdout().is_terminal(),
        }
    }

    pub fn registry(&self) -> DatasetRegistry {
        DatasetRegistry::new(&self.data_dir)
    }

    pub fn options(&self) -> OptionSets {
        OptionSets::STANDARD
    }

    pub fn style(&self) -> Style {
        Style::new(self.color)
    }
}
