//! The forest container: roots, the tree-wide lock, and the public API.

use std::collections::{HashMap, HashSet};

use parking_lot::{Mutex, MutexGuard};

use crate::descriptor::{ComputeNode, ProviderDescriptor};
use crate::error::ProviderTreeError;
use crate::inventory::Inventory;
use crate::node::ProviderNode;
use crate::snapshot::ProviderSnapshot;

/// A thread-safe forest of resource providers.
///
/// A single mutex guards all state. Every public method acquires it on
/// entry and releases it on every exit path, including error paths, via
/// ordinary Rust scoping. The lock is non-reentrant: none of the private
/// `*_locked` helpers on [`ProviderTreeInner`] acquire the lock themselves,
/// they assume the caller already holds it.
pub struct ProviderTree {
    inner: Mutex<ProviderTreeInner>,
}

struct ProviderTreeInner {
    roots: Vec<ProviderNode>,
}

impl ProviderTreeInner {
    fn find_ref(&self, key: &str) -> Option<&ProviderNode> {
        for root in &self.roots {
            if let Some(found) = root.find(key) {
                return Some(found);
            }
        }
        None
    }

    fn find_ref_or_err(&self, key: &str) -> Result<&ProviderNode, ProviderTreeError> {
        self.find_ref(key)
            .ok_or_else(|| ProviderTreeError::NotFound(key.to_string()))
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut ProviderNode> {
        for root in &mut self.roots {
            if let Some(found) = root.find_mut(key) {
                return Some(found);
            }
        }
        None
    }

    fn find_mut_or_err(&mut self, key: &str) -> Result<&mut ProviderNode, ProviderTreeError> {
        self.find_mut(key)
            .ok_or_else(|| ProviderTreeError::NotFound(key.to_string()))
    }

    fn all_identifiers(&self) -> HashSet<String> {
        let mut ret = HashSet::new();
        for root in &self.roots {
            ret.extend(root.descendant_identifiers());
        }
        ret
    }

    /// Removes the provider (and its subtree) identified by `key`, wherever
    /// it is in the forest.
    fn remove(&mut self, key: &str) -> Result<(), ProviderTreeError> {
        let found = self.find_ref_or_err(key)?;
        let identifier = found.identifier.clone();
        let parent_identifier = found.parent_identifier.clone();
        match parent_identifier {
            Some(parent_id) => {
                let parent = self
                    .find_mut(&parent_id)
                    .expect("parent of a resolved provider must itself resolve");
                parent.remove_child(&identifier);
            }
            None => {
                self.roots.retain(|root| root.identifier != identifier);
            }
        }
        Ok(())
    }

    fn new_root(&mut self, name: &str, identifier: String, generation: Option<u64>) {
        self.roots
            .push(ProviderNode::new(name, Some(identifier), generation, None));
    }

    /// The algorithmically interesting operation: validate, then upsert,
    /// every descriptor in `descriptors` as a single atomic step.
    fn populate_from_iterable(
        &mut self,
        descriptors: Vec<ProviderDescriptor>,
    ) -> Result<(), ProviderTreeError> {
        if descriptors.is_empty() {
            return Ok(());
        }

        // Last one wins on duplicate identifiers.
        let mut to_add: HashMap<String, ProviderDescriptor> = HashMap::new();
        for descriptor in descriptors {
            to_add.insert(descriptor.identifier.clone(), descriptor);
        }

        let mut allowed_parents: HashSet<Option<String>> = HashSet::new();
        allowed_parents.insert(None);
        for identifier in self.all_identifiers() {
            allowed_parents.insert(Some(identifier));
        }
        for identifier in to_add.keys() {
            allowed_parents.insert(Some(identifier.clone()));
        }

        let mut missing_parents: HashSet<String> = HashSet::new();
        for descriptor in to_add.values() {
            if !allowed_parents.contains(&descriptor.parent_provider_identifier) {
                if let Some(parent) = &descriptor.parent_provider_identifier {
                    missing_parents.insert(parent.clone());
                }
            }
        }
        if !missing_parents.is_empty() {
            let mut missing: Vec<String> = missing_parents.into_iter().collect();
            missing.sort();
            return Err(ProviderTreeError::OrphanInput(missing));
        }

        while !to_add.is_empty() {
            let eligible_identifier = to_add
                .values()
                .find(|descriptor| {
                    descriptor
                        .parent_provider_identifier
                        .as_ref()
                        .map_or(true, |parent| !to_add.contains_key(parent))
                })
                .map(|descriptor| descriptor.identifier.clone());

            let identifier = match eligible_identifier {
                Some(identifier) => identifier,
                None => {
                    let mut remaining: Vec<String> = to_add.keys().cloned().collect();
                    remaining.sort();
                    return Err(ProviderTreeError::InternalInvariant(remaining));
                }
            };

            let descriptor = to_add
                .remove(&identifier)
                .expect("identifier was just found as a key of to_add");

            // Replace-in-place semantics: wipe any prior instance. Absorb a
            // NotFound, it simply wasn't there yet.
            let _ = self.remove(&identifier);

            let provider = ProviderNode::from_descriptor(&descriptor);
            match &descriptor.parent_provider_identifier {
                None => self.roots.push(provider),
                Some(parent_id) => {
                    let parent = self
                        .find_mut(parent_id)
                        .expect("parent was validated to be in the tree or already processed");
                    parent.add_child(provider);
                }
            }
        }

        Ok(())
    }
}

impl Default for ProviderTree {
    fn default() -> Self {
        ProviderTree {
            inner: Mutex::new(ProviderTreeInner { roots: Vec::new() }),
        }
    }
}

impl ProviderTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree seeded with one root provider per compute node, each
    /// with empty attributes and an absent generation.
    pub fn from_compute_nodes(compute_nodes: impl IntoIterator<Item = ComputeNode>) -> Self {
        let roots = compute_nodes
            .into_iter()
            .map(|cn| ProviderNode::new(cn.name, Some(cn.identifier), None, None))
            .collect();
        ProviderTree {
            inner: Mutex::new(ProviderTreeInner { roots }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProviderTreeInner> {
        self.inner.lock()
    }

    /// Returns the identifiers of the subtree rooted at `name_or_uuid`, or
    /// of the whole forest if `name_or_uuid` is `None`.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` is given and does
    /// not resolve.
    pub fn all_identifiers(
        &self,
        name_or_uuid: Option<&str>,
    ) -> Result<HashSet<String>, ProviderTreeError> {
        let guard = self.lock();
        match name_or_uuid {
            Some(key) => Ok(guard.find_ref_or_err(key)?.descendant_identifiers()),
            None => Ok(guard.all_identifiers()),
        }
    }

    /// Populates this tree from an iterable of provider descriptors. Adds
    /// providers that do not exist yet, and replaces (removing all prior
    /// attributes) providers that do. Never removes a provider absent from
    /// `descriptors` but present in the tree.
    ///
    /// # Errors
    /// [`ProviderTreeError::OrphanInput`] if any descriptor's declared
    /// parent is neither already in the tree nor present in `descriptors`;
    /// [`ProviderTreeError::InternalInvariant`] if the input nonetheless
    /// cannot be fully drained (unreachable given the prior check succeeds).
    /// Either error leaves the tree exactly as it was before the call.
    pub fn populate_from_iterable(
        &self,
        descriptors: impl IntoIterator<Item = ProviderDescriptor>,
    ) -> Result<(), ProviderTreeError> {
        let descriptors: Vec<ProviderDescriptor> = descriptors.into_iter().collect();
        let mut guard = self.lock();
        guard.populate_from_iterable(descriptors)
    }

    fn remove_locked(&self, name_or_uuid: &str) -> Result<(), ProviderTreeError> {
        let mut guard = self.lock();
        guard.remove(name_or_uuid)
    }

    /// Removes the provider identified by `name_or_uuid`, and its entire
    /// subtree, from the tree.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn remove(&self, name_or_uuid: &str) -> Result<(), ProviderTreeError> {
        self.remove_locked(name_or_uuid)
    }

    /// Adds a new root provider, returning its identifier.
    ///
    /// # Errors
    /// [`ProviderTreeError::AlreadyExists`] if a provider with `identifier`
    /// is already anywhere in the forest.
    pub fn new_root(
        &self,
        name: &str,
        identifier: &str,
        generation: Option<u64>,
    ) -> Result<String, ProviderTreeError> {
        let mut guard = self.lock();
        if guard.find_ref(identifier).is_some() {
            return Err(ProviderTreeError::AlreadyExists(identifier.to_string()));
        }
        guard.new_root(name, identifier.to_string(), generation);
        Ok(identifier.to_string())
    }

    /// Finds the provider by name or identifier.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn find_by_key(&self, name_or_uuid: &str) -> Result<ProviderSnapshot, ProviderTreeError> {
        self.data(name_or_uuid)
    }

    /// Returns whether the tree contains a provider matching `name_or_uuid`.
    /// Never fails.
    pub fn exists(&self, name_or_uuid: &str) -> bool {
        self.lock().find_ref(name_or_uuid).is_some()
    }

    /// Creates a new child provider under `parent`, returning the new
    /// provider's identifier.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `parent` does not resolve.
    pub fn new_child(
        &self,
        name: &str,
        parent: &str,
        identifier: Option<String>,
        generation: Option<u64>,
    ) -> Result<String, ProviderTreeError> {
        let mut guard = self.lock();
        let parent_identifier = guard.find_ref_or_err(parent)?.identifier.clone();
        let provider = ProviderNode::new(
            name,
            identifier,
            generation,
            Some(parent_identifier.clone()),
        );
        let new_identifier = provider.identifier.clone();
        let parent_node = guard
            .find_mut(&parent_identifier)
            .expect("parent resolved above must still resolve under the held lock");
        parent_node.add_child(provider);
        Ok(new_identifier)
    }

    /// Returns a point-in-time snapshot of the specified provider's data.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn data(&self, name_or_uuid: &str) -> Result<ProviderSnapshot, ProviderTreeError> {
        let guard = self.lock();
        Ok(guard.find_ref_or_err(name_or_uuid)?.data())
    }

    /// Returns true if the provider has any inventory records at all.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn has_inventory(&self, name_or_uuid: &str) -> Result<bool, ProviderTreeError> {
        let guard = self.lock();
        Ok(guard.find_ref_or_err(name_or_uuid)?.has_inventory())
    }

    /// Returns true if `inventory` differs from the provider's stored
    /// inventory (see [`crate::node::ProviderNode::inventory_changed`] for
    /// the comparison semantics).
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn inventory_changed(
        &self,
        name_or_uuid: &str,
        inventory: &Inventory,
    ) -> Result<bool, ProviderTreeError> {
        let guard = self.lock();
        Ok(guard.find_ref_or_err(name_or_uuid)?.inventory_changed(inventory))
    }

    /// Updates the provider's inventory and generation. The generation is
    /// always set, even when the inventory content is unchanged.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn update_inventory(
        &self,
        name_or_uuid: &str,
        inventory: Inventory,
        generation: Option<u64>,
    ) -> Result<bool, ProviderTreeError> {
        let mut guard = self.lock();
        Ok(guard
            .find_mut_or_err(name_or_uuid)?
            .update_inventory(inventory, generation))
    }

    /// Returns true if the provider has *all* of `traits`. Vacuously true
    /// for an empty `traits`.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn has_traits(
        &self,
        name_or_uuid: &str,
        traits: &HashSet<String>,
    ) -> Result<bool, ProviderTreeError> {
        let guard = self.lock();
        Ok(guard.find_ref_or_err(name_or_uuid)?.has_traits(traits))
    }

    /// Returns true if `traits` differs from the provider's stored traits.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn traits_changed(
        &self,
        name_or_uuid: &str,
        traits: &HashSet<String>,
    ) -> Result<bool, ProviderTreeError> {
        let guard = self.lock();
        Ok(guard.find_ref_or_err(name_or_uuid)?.traits_changed(traits))
    }

    /// Updates the provider's traits and, if `generation` is `Some`, its
    /// generation.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn update_traits(
        &self,
        name_or_uuid: &str,
        traits: HashSet<String>,
        generation: Option<u64>,
    ) -> Result<bool, ProviderTreeError> {
        let mut guard = self.lock();
        Ok(guard
            .find_mut_or_err(name_or_uuid)?
            .update_traits(traits, generation))
    }

    /// Returns true if the provider belongs to *all* of `aggregates`.
    /// Vacuously true for an empty `aggregates`.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn in_aggregates(
        &self,
        name_or_uuid: &str,
        aggregates: &HashSet<String>,
    ) -> Result<bool, ProviderTreeError> {
        let guard = self.lock();
        Ok(guard.find_ref_or_err(name_or_uuid)?.in_aggregates(aggregates))
    }

    /// Returns true if `aggregates` differs from the provider's stored
    /// aggregates.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn aggregates_changed(
        &self,
        name_or_uuid: &str,
        aggregates: &HashSet<String>,
    ) -> Result<bool, ProviderTreeError> {
        let guard = self.lock();
        Ok(guard.find_ref_or_err(name_or_uuid)?.aggregates_changed(aggregates))
    }

    /// Updates the provider's aggregates and, if `generation` is `Some`,
    /// its generation.
    ///
    /// # Errors
    /// [`ProviderTreeError::NotFound`] if `name_or_uuid` does not resolve.
    pub fn update_aggregates(
        &self,
        name_or_uuid: &str,
        aggregates: HashSet<String>,
        generation: Option<u64>,
    ) -> Result<bool, ProviderTreeError> {
        let mut guard = self.lock();
        Ok(guard
            .find_mut_or_err(name_or_uuid)?
            .update_aggregates(aggregates, generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn inventory_with(resource_class: &str, fields: &[(&str, crate::inventory::InventoryValue)]) -> Inventory {
        let mut record = HashMap::new();
        for (k, v) in fields {
            record.insert((*k).to_string(), v.clone());
        }
        let mut inv = Inventory::new();
        inv.insert(resource_class.to_string(), record);
        inv
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // S1: root round-trip.
    #[test]
    fn s1_root_round_trip() {
        let tree = ProviderTree::new();
        let id = tree.new_root("cn1", "u1", Some(5)).unwrap();
        assert_eq!(id, "u1");

        let snap = tree.data("u1").unwrap();
        assert_eq!(snap.name, "cn1");
        assert_eq!(snap.identifier, "u1");
        assert_eq!(snap.generation, Some(5));
        assert_eq!(snap.parent_identifier, None);
        assert!(snap.inventory.is_empty());
        assert!(snap.traits.is_empty());
        assert!(snap.aggregates.is_empty());
    }

    // S2: child lookup by name.
    #[test]
    fn s2_child_lookup_by_name() {
        let tree = ProviderTree::new();
        tree.new_root("cn1", "u1", Some(5)).unwrap();
        tree.new_child("nic0", "u1", Some("u2".to_string()), None)
            .unwrap();

        let snap = tree.find_by_key("nic0").unwrap();
        assert_eq!(snap.parent_identifier, Some("u1".to_string()));
    }

    // S3: inventory change detection.
    #[test]
    fn s3_inventory_change_detection() {
        let tree = ProviderTree::new();
        tree.new_root("cn1", "u1", Some(5)).unwrap();

        let inv = inventory_with(
            "VCPU",
            &[
                ("total", 8i64.into()),
                ("allocation_ratio", 16.0f64.into()),
            ],
        );
        assert!(tree.update_inventory("u1", inv, Some(6)).unwrap());

        let same_total = inventory_with("VCPU", &[("total", 8i64.into())]);
        assert!(!tree.update_inventory("u1", same_total, Some(6)).unwrap());

        let new_total = inventory_with("VCPU", &[("total", 9i64.into())]);
        assert!(tree.update_inventory("u1", new_total, Some(6)).unwrap());
    }

    // S4: trait/aggregate semantics.
    #[test]
    fn s4_trait_semantics() {
        let tree = ProviderTree::new();
        tree.new_root("cn1", "u1", Some(5)).unwrap();
        tree.update_traits("u1", set(&["HW_CPU_X86_AVX2"]), None)
            .unwrap();

        assert!(tree.has_traits("u1", &HashSet::new()).unwrap());
        assert!(!tree
            .has_traits("u1", &set(&["HW_CPU_X86_AVX2", "HW_CPU_X86_SSE4"]))
            .unwrap());
        assert!(tree.has_traits("u1", &set(&["HW_CPU_X86_AVX2"])).unwrap());
    }

    // S5: bulk population, out-of-order.
    #[test]
    fn s5_bulk_population_out_of_order() {
        let tree = ProviderTree::new();
        let descriptors = vec![
            ProviderDescriptor::new("c").with_parent("b"),
            ProviderDescriptor::new("a"),
            ProviderDescriptor::new("b").with_parent("a"),
        ];
        tree.populate_from_iterable(descriptors).unwrap();

        assert_eq!(tree.all_identifiers(None).unwrap(), set(&["a", "b", "c"]));
        assert_eq!(
            tree.data("c").unwrap().parent_identifier,
            Some("b".to_string())
        );
    }

    // S6: bulk population orphan.
    #[test]
    fn s6_bulk_population_orphan() {
        let tree = ProviderTree::new();
        let descriptors = vec![ProviderDescriptor::new("x").with_parent("missing")];
        let err = tree.populate_from_iterable(descriptors).unwrap_err();
        assert_eq!(err, ProviderTreeError::OrphanInput(vec!["missing".to_string()]));
        assert!(!tree.exists("x"));
    }

    // S7: bulk replacement wipes attributes.
    #[test]
    fn s7_bulk_replacement_wipes_attributes() {
        let tree = ProviderTree::new();
        tree.new_root("cn1", "u1", None).unwrap();
        tree.update_traits("u1", set(&["T1"]), None).unwrap();

        tree.populate_from_iterable(vec![ProviderDescriptor::new("u1")])
            .unwrap();

        assert!(tree.data("u1").unwrap().traits.is_empty());
    }

    #[test]
    fn new_root_rejects_duplicate_identifier() {
        let tree = ProviderTree::new();
        tree.new_root("cn1", "u1", None).unwrap();
        let err = tree.new_root("cn2", "u1", None).unwrap_err();
        assert_eq!(err, ProviderTreeError::AlreadyExists("u1".to_string()));
    }

    #[test]
    fn not_found_on_missing_key() {
        let tree = ProviderTree::new();
        assert_eq!(
            tree.data("nope").unwrap_err(),
            ProviderTreeError::NotFound("nope".to_string())
        );
        assert!(!tree.exists("nope"));
    }

    #[test]
    fn remove_takes_entire_subtree() {
        let tree = ProviderTree::new();
        tree.new_root("cn1", "u1", None).unwrap();
        tree.new_child("nic0", "u1", Some("u2".to_string()), None)
            .unwrap();

        tree.remove("u1").unwrap();
        assert!(!tree.exists("u1"));
        assert!(!tree.exists("u2"));
    }

    #[test]
    fn populate_does_not_remove_providers_absent_from_input() {
        let tree = ProviderTree::new();
        tree.new_root("cn1", "u1", None).unwrap();
        tree.populate_from_iterable(vec![ProviderDescriptor::new("u2")])
            .unwrap();

        assert!(tree.exists("u1"));
        assert!(tree.exists("u2"));
    }

    #[test]
    fn populate_is_atomic_on_orphan_failure() {
        let tree = ProviderTree::new();
        tree.new_root("cn1", "u1", Some(1)).unwrap();
        tree.update_traits("u1", set(&["T1"]), None).unwrap();

        let before = tree.data("u1").unwrap();
        let err = tree.populate_from_iterable(vec![
            ProviderDescriptor::new("u1"),
            ProviderDescriptor::new("x").with_parent("missing"),
        ]);
        assert!(err.is_err());

        let after = tree.data("u1").unwrap();
        assert_eq!(before, after);
        assert!(!tree.exists("x"));
    }

    // S8: concurrent readers/writer.
    #[test]
    fn s8_concurrent_readers_and_writer() {
        let _ = env_logger::try_init();
        let tree = Arc::new(ProviderTree::new());
        tree.new_root("cn1", "root", None).unwrap();

        let mut handles = Vec::new();
        for i in 0..8 {
            let tree = Arc::clone(&tree);
            handles.push(std::thread::spawn(move || {
                let child_id = format!("child-{i}");
                let _ = tree.new_child(&child_id, "root", Some(child_id.clone()), None);
                for _ in 0..20 {
                    let _ = tree.data("root");
                    let inv = inventory_with("VCPU", &[("total", (i as i64).into())]);
                    let _ = tree.update_inventory(&child_id, inv, Some(i as u64));
                    let _ = tree.all_identifiers(None);
                }
                if i % 2 == 0 {
                    let _ = tree.remove(&child_id);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Invariant 1/2: every non-root has a resolving parent; identifiers
        // partition cleanly.
        let ids = tree.all_identifiers(None).unwrap();
        for id in &ids {
            let snap = tree.data(id).unwrap();
            if let Some(parent) = &snap.parent_identifier {
                assert!(tree.exists(parent));
            }
        }
        // Invariant 3: exists/data agree.
        for id in &ids {
            assert!(tree.exists(id));
            assert!(tree.data(id).is_ok());
        }
    }

    #[cfg(test)]
    mod quickcheck_properties {
        use super::*;
        use quickcheck_macros::quickcheck;

        /// Bulk population in any order that keeps every declared parent
        /// resolvable (in the tree or in the same batch) must succeed and
        /// produce exactly the input identifier set.
        #[quickcheck]
        fn chain_in_any_order_always_populates(mut order: Vec<u8>) -> bool {
            order.truncate(6);
            order.dedup();
            if order.is_empty() {
                return true;
            }

            // Build a simple chain 0 -> 1 -> 2 -> ... by identifier index,
            // then shuffle emission order using `order` as a permutation key.
            let n = order.len();
            let mut descriptors: Vec<ProviderDescriptor> = (0..n)
                .map(|i| {
                    let d = ProviderDescriptor::new(format!("id{i}"));
                    if i == 0 {
                        d
                    } else {
                        d.with_parent(format!("id{}", i - 1))
                    }
                })
                .collect();
            // Stable-sort descriptors by the fuzzed key so ordering varies
            // across inputs while the topology stays a valid chain.
            let mut keyed: Vec<(u8, ProviderDescriptor)> =
                order.into_iter().zip(descriptors.drain(..)).collect();
            keyed.sort_by_key(|(k, _)| *k);
            let shuffled: Vec<ProviderDescriptor> =
                keyed.into_iter().map(|(_, d)| d).collect();

            let tree = ProviderTree::new();
            if tree.populate_from_iterable(shuffled).is_err() {
                return false;
            }
            let expected: HashSet<String> = (0..n).map(|i| format!("id{i}")).collect();
            tree.all_identifiers(None).unwrap() == expected
        }

        /// Every non-root provider's parent resolves after any successful
        /// bulk population.
        #[quickcheck]
        fn every_non_root_parent_resolves(n: u8) -> bool {
            let n = (n % 10) as usize;
            if n == 0 {
                return true;
            }
            let descriptors: Vec<ProviderDescriptor> = (0..n)
                .map(|i| {
                    let d = ProviderDescriptor::new(format!("id{i}"));
                    if i == 0 {
                        d
                    } else {
                        d.with_parent(format!("id{}", i - 1))
                    }
                })
                .collect();
            let tree = ProviderTree::new();
            tree.populate_from_iterable(descriptors).unwrap();
            for i in 1..n {
                let snap = tree.data(&format!("id{i}")).unwrap();
                if !tree.exists(snap.parent_identifier.as_deref().unwrap()) {
                    return false;
                }
            }
            true
        }
    }
}
