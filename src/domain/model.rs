use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Any field besides the ones the transforms read, kept verbatim.
pub type Extra = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub people: Vec<Person>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub animals: Vec<Animal>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Country {
    pub fn new(name: impl Into<String>, people: Vec<Person>) -> Self {
        Self {
            name: name.into(),
            people,
            extra: Extra::new(),
        }
    }

    /// Shallow copy with the people list replaced.
    pub fn with_people(&self, people: Vec<Person>) -> Self {
        Self {
            name: self.name.clone(),
            people,
            extra: self.extra.clone(),
        }
    }
}

impl Person {
    pub fn new(name: impl Into<String>, animals: Vec<Animal>) -> Self {
        Self {
            name: name.into(),
            animals,
            extra: Extra::new(),
        }
    }

    /// Shallow copy with the animals list replaced.
    pub fn with_animals(&self, animals: Vec<Animal>) -> Self {
        Self {
            name: self.name.clone(),
            animals,
            extra: self.extra.clone(),
        }
    }
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Extra::new(),
        }
    }
}
