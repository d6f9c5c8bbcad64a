//! TestWorld pattern for declarative integration test setup.

use crate::fixtures;
use anyhow::Result;
use assert_cmd::Command;
use bikeshare_types::City;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Isolated data directory and scripted runs of the `bikeshare` binary.
///
/// # Example
/// ```no_run
/// use bikeshare_testing::TestWorld;
///
/// let world = TestWorld::new().with_all_cities();
/// let result = world.run_script(&["chicago", "all", "all", "no", "no"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Place the bundled sample for every city.
    pub fn with_all_cities(self) -> Self {
        City::ALL
            .into_iter()
            .fold(self, |world, city| world.with_city(city))
    }

    pub fn with_city(self, city: City) -> Self {
        self.with_city_data(city, fixtures::sample_for(city))
    }

    pub fn with_city_data(self, city: City, csv: &str) -> Self {
        fs::write(self.data_dir().join(city.file_name()), csv)
            .expect("Failed to write city data");
        self
    }

    /// The binary, pointed at this world's data directory with colors off.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("bikeshare")
            .map_err(|e| anyhow::anyhow!("Failed to find bikeshare binary: {}", e))?;
        cmd.arg("--data-dir").arg(self.data_dir()).arg("--no-color");
        Ok(cmd)
    }

    /// Run the binary, feeding each entry of `lines` as one line of stdin.
    pub fn run_script(&self, lines: &[&str]) -> Result<CliResult> {
        let mut stdin = lines.join("\n");
        stdin.push('\n');

        let output = self.command()?.write_stdin(stdin).output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
