use crate::core::args::{parse_args, Command, Options};
use crate::core::transform::DatasetCommands;
use crate::core::Commands;
use crate::domain::model::Country;
use crate::utils::error::{FaunaError, Result};
use std::io::Write;

pub struct Orchestrator<C: Commands> {
    commands: C,
}

impl Default for Orchestrator<DatasetCommands> {
    fn default() -> Self {
        Self::new(DatasetCommands)
    }
}

impl<C: Commands> Orchestrator<C> {
    pub fn new(commands: C) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &C {
        &self.commands
    }

    pub fn dispatch(&self, options: &Options, countries: &[Country]) -> Result<Vec<Country>> {
        match options.command() {
            Some(Command::Filter(pattern)) => {
                tracing::info!("Filtering animals by pattern '{}'", pattern);
                Ok(self.commands.filter(countries, &pattern))
            }
            Some(Command::Count) => {
                tracing::info!("Counting children of {} countries", countries.len());
                Ok(self.commands.count(countries))
            }
            None => Err(FaunaError::UnknownCommand),
        }
    }

    /// Parses `args`, runs the selected command and writes the result as
    /// pretty-printed JSON to `out`. Nothing is written on error.
    pub fn run<I, S, W>(&self, args: I, countries: &[Country], out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let options = parse_args(args);
        tracing::debug!("Parsed options: {:?}", options);

        let result = self.dispatch(&options, countries)?;
        tracing::debug!("Command produced {} countries", result.len());

        let json = serde_json::to_string_pretty(&result)?;
        writeln!(out, "{}", json)?;
        Ok(())
    }
}

/// Runs the default command set and prints to stdout.
pub fn orchestrator<I, S>(args: I, countries: &[Country]) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    Orchestrator::default().run(args, countries, &mut handle)
}
