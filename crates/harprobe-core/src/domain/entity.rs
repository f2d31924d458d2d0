use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Organisation that owns one or more registrable domains
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl Entity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// Registrable domain → owning entity.
///
/// Domains missing from the map are unknown entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainMap {
    entities: HashMap<String, Entity>,
}

impl DomainMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a domain map from a JSON object keyed by domain
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Reading domain map from: {}", path.display());

        let file = File::open(path)?;
        let map: DomainMap = serde_json::from_reader(BufReader::new(file))?;

        tracing::debug!("Loaded {} domain map entries", map.len());
        Ok(map)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn with_entity(mut self, domain: impl Into<String>, entity: Entity) -> Self {
        self.entities.insert(domain.into(), entity);
        self
    }

    pub fn get(&self, domain: &str) -> Option<&Entity> {
        self.entities.get(domain)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
