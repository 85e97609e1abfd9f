//! Testing infrastructure for deidash integration tests.
//!
//! - `TestWorld`: isolated data dir and working directory, CLI execution
//! - `fixtures`: contract CSV builders
//! - `assertions`: checks against the JSON result envelope

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{ContractRow, CsvFixture};
pub use world::{CliResult, TestWorld};
