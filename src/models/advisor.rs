use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const BUILTIN_CATALOG: &str = include_str!("../../config/advisors.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisor {
    pub id: String,
    pub name: String,
}

/// Fixed, ordered list of advisors a request can be addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorCatalog {
    advisors: Vec<Advisor>,
}

impl AdvisorCatalog {
    pub fn new(advisors: Vec<Advisor>) -> Result<Self, ConfigError> {
        if advisors.is_empty() {
            return Err(ConfigError::Catalog("catalog is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for advisor in &advisors {
            if advisor.id.trim().is_empty() {
                return Err(ConfigError::Catalog(format!(
                    "advisor '{}' has an empty id",
                    advisor.name
                )));
            }
            if !seen.insert(advisor.id.as_str()) {
                return Err(ConfigError::Catalog(format!(
                    "duplicate advisor id: {}",
                    advisor.id
                )));
            }
        }

        Ok(Self { advisors })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let advisors: Vec<Advisor> = serde_json::from_str(json)?;
        Self::new(advisors)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::CatalogIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn get(&self, id: &str) -> Option<&Advisor> {
        self.advisors.iter().find(|advisor| advisor.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Advisor> {
        self.advisors.iter()
    }

    pub fn len(&self) -> usize {
        self.advisors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advisors.is_empty()
    }
}
