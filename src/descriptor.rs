//! Input types accepted by [`crate::ProviderTree`] construction and bulk
//! population.

use serde::{Deserialize, Serialize};

/// A compute-node-like object: the minimal shape the tree needs to seed its
/// initial set of root providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeNode {
    pub name: String,
    pub identifier: String,
}

impl ComputeNode {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        ComputeNode {
            name: name.into(),
            identifier: identifier.into(),
        }
    }
}

/// One entry of a bulk-population batch.
///
/// Only `identifier` is mandatory. `name` defaults to the identifier when
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    pub identifier: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub generation: Option<u64>,
    #[serde(default)]
    pub parent_provider_identifier: Option<String>,
}

impl ProviderDescriptor {
    pub fn new(identifier: impl Into<String>) -> Self {
        ProviderDescriptor {
            identifier: identifier.into(),
            name: None,
            generation: None,
            parent_provider_identifier: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = Some(generation);
        self
    }

    pub fn with_parent(mut self, parent_identifier: impl Into<String>) -> Self {
        self.parent_provider_identifier = Some(parent_identifier.into());
        self
    }

    /// The name to use if constructing a provider from this descriptor:
    /// the declared name, or the identifier if none was given.
    pub(crate) fn effective_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.identifier)
    }
}
