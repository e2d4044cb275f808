// Adapters layer: concrete dataset sources behind the DatasetSource port.

pub mod dataset;

pub use dataset::{source_for, EmbeddedSource, JsonFileSource};
