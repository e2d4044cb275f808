pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::logger::LogFormat;
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

/// Launcher options that take a value; stripped with their value before the
/// argument list reaches the command scanner.
const LAUNCHER_VALUE_OPTIONS: [&str; 2] = ["--config", "--data"];
const LAUNCHER_FLAGS: [&str; 2] = ["-v", "--verbose"];

/// Command line options. `filter` and `count` are declared so they may appear
/// anywhere on the line, but the command is still selected by scanning the
/// argument list (see [`command_args`]).
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fauna")]
#[command(about = "Filter or count animals in a countries/people/animals dataset")]
#[command(args_override_self = true)]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the JSON dataset (defaults to the bundled dataset)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Keep animals whose name contains PATTERN
    #[arg(long, num_args = 0..=1, require_equals = true, value_name = "PATTERN")]
    pub filter: Option<Option<String>>,

    /// Append child counts to country and person names
    #[arg(long, num_args = 0..=1, require_equals = true, hide = true)]
    pub count: Option<Option<String>>,

    #[arg(hide = true)]
    pub tokens: Vec<String>,
}

/// Drops launcher options (and their values) from `args`, keeping everything
/// else in order for the command scanner.
pub fn command_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut kept = Vec::new();
    let mut skip_value = false;

    for arg in args {
        let arg = arg.as_ref();
        if skip_value {
            skip_value = false;
            continue;
        }
        if LAUNCHER_FLAGS.contains(&arg) {
            continue;
        }
        if LAUNCHER_VALUE_OPTIONS.contains(&arg) {
            skip_value = true;
            continue;
        }
        if LAUNCHER_VALUE_OPTIONS
            .iter()
            .any(|option| arg.starts_with(&format!("{}=", option)))
        {
            continue;
        }
        kept.push(arg.to_string());
    }

    kept
}

/// Effective settings after merging the command line over the config file.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub dataset_path: Option<PathBuf>,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn resolve(
        data: Option<&Path>,
        verbose: bool,
        file: Option<&TomlConfig>,
    ) -> Self {
        let dataset_path = data
            .map(Path::to_path_buf)
            .or_else(|| file.and_then(|f| f.dataset_path()).map(PathBuf::from));

        Self {
            dataset_path,
            verbose,
            log_level: file.and_then(|f| f.log_level()).map(str::to_string),
            log_format: file.map(|f| f.log_format()).unwrap_or_default(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        Self::resolve(cli.data.as_deref(), cli.verbose, file)
    }
}

impl ConfigProvider for Settings {
    fn dataset_path(&self) -> Option<&Path> {
        self.dataset_path.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
