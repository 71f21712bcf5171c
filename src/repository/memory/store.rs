//! Generic in-memory entity store
//!
//! Shared by the typed repositories: an ordered id -> entity map plus the
//! id assignment bookkeeping. Not synchronised; callers that share a store
//! across tasks wrap it in a lock.

use std::collections::BTreeMap;

use tracing::debug;

use crate::repository::{Entity, IdStrategy};
use crate::utils::errors::{Result, SavotenError};
use crate::utils::logging::log_repository_operation;

#[derive(Debug, Clone)]
pub struct MemoryStore<T: Entity> {
    entries: BTreeMap<i64, T>,
    strategy: IdStrategy,
    last_assigned: i64,
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::with_strategy(IdStrategy::default())
    }
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self {
            entries: BTreeMap::new(),
            strategy,
            last_assigned: 0,
        }
    }

    /// Insert or overwrite `entity`, assigning an id first if it has none.
    ///
    /// Returns the key the entity is stored under, which always equals its `id`.
    pub fn save(&mut self, entity: &mut T) -> i64 {
        let id = match entity.id() {
            Some(id) => id,
            None => {
                let id = self.next_id();
                entity.set_id(id);
                id
            }
        };

        let replaced = self.entries.insert(id, entity.clone()).is_some();
        debug!(entity = T::NAME, id = id, replaced = replaced, "Entity saved");
        log_repository_operation(if replaced { "update" } else { "insert" }, T::NAME, Some(id), true);

        id
    }

    /// Remove the entry keyed by `entity`'s id
    pub fn delete(&mut self, entity: &T) -> Result<T> {
        let Some(id) = entity.id() else {
            log_repository_operation("delete", T::NAME, None, false);
            return Err(SavotenError::MissingId { entity: T::NAME });
        };

        match self.entries.remove(&id) {
            Some(removed) => {
                log_repository_operation("delete", T::NAME, Some(id), true);
                Ok(removed)
            }
            None => {
                log_repository_operation("delete", T::NAME, Some(id), false);
                Err(SavotenError::NotStored { entity: T::NAME, id })
            }
        }
    }

    pub fn find_by_id(&self, id: i64) -> Option<&T> {
        self.entries.get(&id)
    }

    /// All entities in id order
    pub fn find_all(&self) -> Vec<&T> {
        self.entries.values().collect()
    }

    /// Linear scan over every stored entity
    pub fn find_where<F>(&self, mut predicate: F) -> Vec<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.entries.values().filter(|entity| predicate(entity)).collect()
    }

    /// Drop every entity matching `predicate`, returning how many were removed
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|_, entity| !predicate(entity));
        let removed = before - self.entries.len();
        debug!(entity = T::NAME, removed = removed, "Entities removed");
        removed
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_id(&mut self) -> i64 {
        match self.strategy {
            IdStrategy::MaxPlusOne => {
                let largest = self.entries.keys().next_back().copied();
                match largest {
                    None => 1,
                    Some(largest) => match largest.checked_add(1) {
                        Some(id) => id.max(1),
                        None => self.lowest_free_id(),
                    },
                }
            }
            IdStrategy::Sequential => {
                let mut candidate = self.last_assigned.checked_add(1);
                while let Some(id) = candidate.filter(|id| self.entries.contains_key(id)) {
                    candidate = id.checked_add(1);
                }
                match candidate {
                    Some(id) => {
                        self.last_assigned = id;
                        id
                    }
                    // Counter exhausted at i64::MAX
                    None => self.lowest_free_id(),
                }
            }
        }
    }

    /// Smallest positive id with no entry stored under it
    fn lowest_free_id(&self) -> i64 {
        let mut candidate = 1;
        for &id in self.entries.range(1_i64..).map(|(id, _)| id) {
            if id != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    fn user(name: &str) -> User {
        User::new(name, format!("{name}@test.com"), 100)
    }

    #[test]
    fn test_max_plus_one_falls_back_to_lowest_free_id_at_ceiling() {
        let mut store = MemoryStore::<User>::new();
        for id in [1, 2, 4, i64::MAX] {
            let mut explicit = user("explicit");
            explicit.id = Some(id);
            store.save(&mut explicit);
        }

        let mut fresh = user("fresh");
        assert_eq!(store.save(&mut fresh), 3);
        assert_eq!(store.len(), 5);
        assert_eq!(store.find_by_id(1).unwrap().name, "explicit");
    }

    #[test]
    fn test_sequential_falls_back_to_lowest_free_id_at_ceiling() {
        let mut store = MemoryStore::<User>::with_strategy(IdStrategy::Sequential);
        let mut first = user("first");
        store.save(&mut first);
        let mut ceiling = user("ceiling");
        ceiling.id = Some(i64::MAX);
        store.save(&mut ceiling);
        store.last_assigned = i64::MAX - 1;

        let mut fresh = user("fresh");
        assert_eq!(store.save(&mut fresh), 2);
        let mut next = user("next");
        assert_eq!(store.save(&mut next), 3);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_max_plus_one_reuses_freed_highest_id() {
        let mut store = MemoryStore::<User>::with_strategy(IdStrategy::MaxPlusOne);
        let mut first = user("first");
        let mut second = user("second");
        store.save(&mut first);
        store.save(&mut second);
        assert_eq!(second.id, Some(2));

        store.delete(&second).unwrap();
        let mut third = user("third");
        assert_eq!(store.save(&mut third), 2);
    }

    #[test]
    fn test_max_plus_one_continues_after_explicit_id() {
        let mut store = MemoryStore::<User>::new();
        let mut explicit = user("explicit");
        explicit.id = Some(10);
        store.save(&mut explicit);

        let mut fresh = user("fresh");
        assert_eq!(store.save(&mut fresh), 11);
    }

    #[test]
    fn test_max_plus_one_ignores_non_positive_keys() {
        let mut store = MemoryStore::<User>::new();
        let mut negative = user("negative");
        negative.id = Some(-5);
        store.save(&mut negative);

        let mut fresh = user("fresh");
        assert_eq!(store.save(&mut fresh), 1);
    }

    #[test]
    fn test_sequential_never_reuses_ids() {
        let mut store = MemoryStore::<User>::with_strategy(IdStrategy::Sequential);
        let mut first = user("first");
        let mut second = user("second");
        store.save(&mut first);
        store.save(&mut second);
        store.delete(&second).unwrap();

        let mut third = user("third");
        assert_eq!(store.save(&mut third), 3);
    }

    #[test]
    fn test_sequential_skips_occupied_ids() {
        let mut store = MemoryStore::<User>::with_strategy(IdStrategy::Sequential);
        let mut explicit = user("explicit");
        explicit.id = Some(1);
        store.save(&mut explicit);

        let mut fresh = user("fresh");
        assert_eq!(store.save(&mut fresh), 2);
    }

    #[test]
    fn test_delete_without_id_leaves_store_unchanged() {
        let mut store = MemoryStore::<User>::new();
        let mut stored = user("stored");
        store.save(&mut stored);

        let result = store.delete(&user("unsaved"));
        assert_matches!(result, Err(SavotenError::MissingId { entity: "User" }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_where_counts_removed() {
        let mut store = MemoryStore::<User>::new();
        for name in ["a", "b", "c"] {
            store.save(&mut user(name));
        }
        assert_eq!(store.remove_where(|u| u.name != "b"), 2);
        assert_eq!(store.find_all().len(), 1);
        assert!(store.contains(2));
    }

    proptest! {
        #[test]
        fn prop_assigned_ids_are_unique_and_match_keys(
            explicit in proptest::collection::vec(1i64..50, 0..10),
            fresh in 1usize..30,
            sequential in any::<bool>(),
        ) {
            let strategy = if sequential { IdStrategy::Sequential } else { IdStrategy::MaxPlusOne };
            let mut store = MemoryStore::<User>::with_strategy(strategy);
            for id in &explicit {
                let mut u = user("explicit");
                u.id = Some(*id);
                store.save(&mut u);
            }
            let before = store.len();
            for _ in 0..fresh {
                let mut u = user("fresh");
                let id = store.save(&mut u);
                prop_assert_eq!(u.id, Some(id));
            }
            prop_assert_eq!(store.len(), before + fresh);
            for entity in store.find_all() {
                prop_assert_eq!(store.find_by_id(entity.id.unwrap()), Some(entity));
            }
        }
    }
}
