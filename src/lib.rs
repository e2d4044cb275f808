pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::args::{parse_args, Command, Flag, OptionValue, Options};
pub use crate::core::orchestrator::{orchestrator, Orchestrator};
pub use crate::core::transform::{count, filter, DatasetCommands};
pub use crate::domain::model::{Animal, Country, Person};
pub use crate::utils::error::{FaunaError, Result};
