use crate::domain::model::Country;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use std::path::Path;

/// The two dataset commands the orchestrator can dispatch to.
pub trait Commands {
    fn filter(&self, countries: &[Country], pattern: &str) -> Vec<Country>;
    fn count(&self, countries: &[Country]) -> Vec<Country>;
}

/// Supplies the dataset once per invocation.
pub trait DatasetSource {
    fn load(&self) -> Result<Vec<Country>>;
    fn describe(&self) -> String;
}

pub trait ConfigProvider {
    fn dataset_path(&self) -> Option<&Path>;
    fn verbose(&self) -> bool;
    fn log_level(&self) -> Option<&str>;
    fn log_format(&self) -> LogFormat;
}
