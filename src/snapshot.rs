//! An immutable, deep-copied, point-in-time view of one provider.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;

/// A point-in-time copy of a resource provider's observable state.
///
/// Mutating the collections returned here (inventory/traits/aggregates) has
/// no effect on the tree the snapshot came from, and a later snapshot of the
/// same provider is unaffected by mutations to an earlier one: every field
/// is deep-copied at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSnapshot {
    pub identifier: String,
    pub name: String,
    pub generation: Option<u64>,
    pub parent_identifier: Option<String>,
    pub inventory: Inventory,
    pub traits: HashSet<String>,
    pub aggregates: HashSet<String>,
}
