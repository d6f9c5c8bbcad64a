//! Testing infrastructure for bikeshare integration tests.
//!
//! - `TestWorld`: isolated data directory plus scripted runs of the binary
//! - `fixtures`: small city datasets shaped like the real sources

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
