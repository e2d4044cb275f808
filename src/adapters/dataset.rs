use crate::core::{Country, DatasetSource};
use crate::utils::error::{FaunaError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const EMBEDDED_DATASET: &str = include_str!("../../data/data.json");

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Country>> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| FaunaError::DatasetError {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dataset bundled with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl DatasetSource for EmbeddedSource {
    fn load(&self) -> Result<Vec<Country>> {
        Ok(serde_json::from_str(EMBEDDED_DATASET)?)
    }

    fn describe(&self) -> String {
        "embedded dataset".to_string()
    }
}

pub fn source_for(path: Option<&Path>) -> Box<dyn DatasetSource> {
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(EmbeddedSource),
    }
}
