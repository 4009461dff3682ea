//! A single resource provider and the primitives the tree calls under lock.
//!
//! All operations here assume the caller already holds the tree's mutex;
//! none of them perform their own locking.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::descriptor::ProviderDescriptor;
use crate::inventory::Inventory;
use crate::snapshot::ProviderSnapshot;

/// A resource provider: identity, optional parent linkage, children, and its
/// three kinds of observable attributes (inventory, traits, aggregates).
///
/// Downward links are owned (`children` holds the child providers directly);
/// upward links are by identifier only, re-resolved through
/// [`crate::ProviderTree::find_by_key`] when needed. This avoids reference
/// cycles entirely.
#[derive(Debug, Clone)]
pub(crate) struct ProviderNode {
    pub(crate) identifier: String,
    pub(crate) name: String,
    pub(crate) generation: Option<u64>,
    pub(crate) parent_identifier: Option<String>,
    pub(crate) children: HashMap<String, ProviderNode>,
    pub(crate) inventory: Inventory,
    pub(crate) traits: HashSet<String>,
    pub(crate) aggregates: HashSet<String>,
}

impl ProviderNode {
    /// Constructs a new provider with empty inventory, traits, and
    /// aggregates. Generates a fresh UUID-shaped identifier if `identifier`
    /// is `None`.
    pub(crate) fn new(
        name: impl Into<String>,
        identifier: Option<String>,
        generation: Option<u64>,
        parent_identifier: Option<String>,
    ) -> Self {
        ProviderNode {
            identifier: identifier.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: name.into(),
            generation,
            parent_identifier,
            children: HashMap::new(),
            inventory: HashMap::new(),
            traits: HashSet::new(),
            aggregates: HashSet::new(),
        }
    }

    pub(crate) fn from_descriptor(descriptor: &ProviderDescriptor) -> Self {
        ProviderNode::new(
            descriptor.effective_name(),
            Some(descriptor.identifier.clone()),
            descriptor.generation,
            descriptor.parent_provider_identifier.clone(),
        )
    }

    /// Recursive descent lookup by name or identifier.
    ///
    /// Tie-break: a direct child-identifier hit is checked before scanning
    /// children by name at the same level, and the same-level name scan
    /// happens before recursing into grandchildren. Sibling order within a
    /// level follows the child map's (unspecified) iteration order.
    /// Duplicate names are not forbidden; the first depth-first hit wins,
    /// which is why this method and not a name index is the source of truth
    /// for lookup.
    pub(crate) fn find(&self, key: &str) -> Option<&ProviderNode> {
        if self.name == key || self.identifier == key {
            return Some(self);
        }
        if let Some(child) = self.children.get(key) {
            return Some(child);
        }
        for child in self.children.values() {
            if child.name == key {
                return Some(child);
            }
        }
        for child in self.children.values() {
            if let Some(found) = child.find(key) {
                return Some(found);
            }
        }
        None
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut ProviderNode> {
        if self.name == key || self.identifier == key {
            return Some(self);
        }
        if self.children.contains_key(key) {
            return self.children.get_mut(key);
        }
        if let Some(child_id) = self
            .children
            .values()
            .find(|child| child.name == key)
            .map(|child| child.identifier.clone())
        {
            return self.children.get_mut(&child_id);
        }
        for child in self.children.values_mut() {
            if let Some(found) = child.find_mut(key) {
                return Some(found);
            }
        }
        None
    }

    /// This node's identifier plus every descendant's identifier.
    pub(crate) fn descendant_identifiers(&self) -> HashSet<String> {
        let mut ret: HashSet<String> = HashSet::new();
        ret.insert(self.identifier.clone());
        for child in self.children.values() {
            ret.extend(child.descendant_identifiers());
        }
        ret
    }

    pub(crate) fn add_child(&mut self, provider: ProviderNode) {
        self.children.insert(provider.identifier.clone(), provider);
    }

    /// No-op when `identifier` is not a direct child.
    pub(crate) fn remove_child(&mut self, identifier: &str) -> Option<ProviderNode> {
        self.children.remove(identifier)
    }

    pub(crate) fn data(&self) -> ProviderSnapshot {
        ProviderSnapshot {
            identifier: self.identifier.clone(),
            name: self.name.clone(),
            generation: self.generation,
            parent_identifier: self.parent_identifier.clone(),
            inventory: self.inventory.clone(),
            traits: self.traits.clone(),
            aggregates: self.aggregates.clone(),
        }
    }

    /// Whether this provider has any inventory records at all.
    pub(crate) fn has_inventory(&self) -> bool {
        !self.inventory.is_empty()
    }

    /// True iff the set of resource-class keys differs from `new`, or any
    /// field present in *both* the current and new record for a shared
    /// resource class differs in value. Fields present on only one side
    /// never cause a change report: the report client and the remote
    /// service supply overlapping but non-identical field sets.
    pub(crate) fn inventory_changed(&self, new: &Inventory) -> bool {
        let cur_keys: HashSet<&String> = self.inventory.keys().collect();
        let new_keys: HashSet<&String> = new.keys().collect();
        if cur_keys != new_keys {
            return true;
        }
        for (resource_class, cur_record) in &self.inventory {
            let new_record = &new[resource_class];
            for (field, cur_val) in cur_record {
                if let Some(new_val) = new_record.get(field) {
                    if new_val != cur_val {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Sets the generation, then replaces the inventory (deep copy) if
    /// changed. Returns whether the inventory changed. The generation is
    /// always updated, even when the inventory content did not change.
    pub(crate) fn update_inventory(&mut self, new: Inventory, generation: Option<u64>) -> bool {
        self.update_generation(generation);
        if self.inventory_changed(&new) {
            self.inventory = new;
            true
        } else {
            false
        }
    }

    pub(crate) fn traits_changed(&self, new: &HashSet<String>) -> bool {
        new != &self.traits
    }

    pub(crate) fn update_traits(&mut self, new: HashSet<String>, generation: Option<u64>) -> bool {
        self.update_generation(generation);
        if self.traits_changed(&new) {
            self.traits = new;
            true
        } else {
            false
        }
    }

    /// True iff `traits` is a subset of this provider's traits. Vacuously
    /// true for an empty `traits`.
    pub(crate) fn has_traits(&self, traits: &HashSet<String>) -> bool {
        traits.is_subset(&self.traits)
    }

    pub(crate) fn aggregates_changed(&self, new: &HashSet<String>) -> bool {
        new != &self.aggregates
    }

    pub(crate) fn update_aggregates(
        &mut self,
        new: HashSet<String>,
        generation: Option<u64>,
    ) -> bool {
        self.update_generation(generation);
        if self.aggregates_changed(&new) {
            self.aggregates = new;
            true
        } else {
            false
        }
    }

    /// True iff `aggregates` is a subset of this provider's aggregates.
    /// Vacuously true for an empty `aggregates`.
    pub(crate) fn in_aggregates(&self, aggregates: &HashSet<String>) -> bool {
        aggregates.is_subset(&self.aggregates)
    }

    /// Overwrites the generation if `generation` is `Some` and differs from
    /// the current value. Leaves it unchanged when `generation` is `None`.
    /// No rejection of a downgrade: the remote service is the source of
    /// truth and this crate does not interpret the token's ordering.
    pub(crate) fn update_generation(&mut self, generation: Option<u64>) {
        if let Some(g) = generation {
            if Some(g) != self.generation {
                log::debug!(
                    "updating resource provider {} generation from {:?} to {}",
                    self.identifier,
                    self.generation,
                    g
                );
                self.generation = Some(g);
            }
        }
    }
}
