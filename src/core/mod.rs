pub mod args;
pub mod orchestrator;
pub mod transform;

pub use crate::domain::model::{Animal, Country, Person};
pub use crate::domain::ports::{Commands, ConfigProvider, DatasetSource};
pub use crate::utils::error::Result;
