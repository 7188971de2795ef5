//! Insertion-ordered counting.

use std::borrow::Borrow;
use std::hash::Hash;

use cord_types::GroupCount;
use rustc_hash::FxHashMap;

/// Counts keys while remembering the order each key was first seen.
///
/// Entries live in a `Vec` in first-encounter order; the map only stores each
/// key's slot. Ranking with a stable sort then breaks count ties by first
/// encounter for free.
#[derive(Debug, Clone)]
pub(crate) struct OrderedCounter<K> {
    slots: FxHashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for OrderedCounter<K> {
    fn default() -> Self {
        Self {
            slots: FxHashMap::default(),
            entries: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> OrderedCounter<K> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Increments `key`, inserting it with count 1 on first sight.
    ///
    /// Allocates an owned key only the first time a key is seen.
    #[inline]
    pub(crate) fn add<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(&slot) = self.slots.get(key) {
            self.entries[slot].1 += 1;
            return;
        }
        let owned = key.to_owned();
        self.slots.insert(owned.clone(), self.entries.len());
        self.entries.push((owned, 1));
    }

    #[inline]
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(key).map(|&slot| self.entries[slot].1)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in first-encounter order.
    pub(crate) fn entries(&self) -> &[(K, usize)] {
        &self.entries
    }

    /// The `n` highest counts, descending; ties keep first-encounter order.
    pub(crate) fn top(&self, n: usize) -> GroupCount<K> {
        if n == 0 || self.entries.is_empty() {
            return GroupCount::new();
        }
        let mut ranked = self.entries.clone();
        // `sort_by` is stable: equal counts stay in first-encounter order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        GroupCount::from_entries(ranked)
    }
}
