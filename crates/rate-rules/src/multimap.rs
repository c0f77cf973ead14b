//! Keyed multi-map backing the rule tree indices.

use std::{
    collections::HashMap,
    fmt::Debug,
    hash::Hash,
};

/// A mapping from a key to the ordered list of values added under it.
///
/// Append-only: values can never be removed, so a key that is present always
/// maps to a non-empty list. Iteration order within a key is insertion order;
/// key order is unspecified. The rule tree builds one of these per level
/// during assembly and only reads it afterwards.
#[derive(Clone, Debug)]
pub struct MultiMap<K, V>(HashMap<K, Vec<V>>);

/// Lookup of a key that was never added.
///
/// This is a rule-tree integrity failure, not a property of the shipment
/// being validated: callers that cannot tolerate it check
/// [`MultiMap::contains_key`] or use [`MultiMap::try_get`] first.
#[derive(Debug, thiserror::Error)]
#[error("no entries for key {key}")]
pub struct MissingKey {
    pub key: String,
}

impl<K, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<K, V> MultiMap<K, V>
where
    K: Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the list stored under `key`, creating the list if
    /// the key is new. Never fails.
    pub fn add(&mut self, key: K, value: V) {
        self.0.entry(key).or_default().push(value);
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.0.contains_key(key)
    }

    /// The values stored under `key`, or `None` if the key was never added.
    pub fn try_get(&self, key: &K) -> Option<&[V]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// The values stored under `key`. A miss means the tree is inconsistent
    /// and is reported as [`MissingKey`] rather than an empty slice.
    pub fn get(&self, key: &K) -> Result<&[V], MissingKey> {
        self.try_get(key).ok_or_else(|| MissingKey {
            key: format!("{key:?}"),
        })
    }

    /// All values across all keys. Key order is unspecified, value order
    /// within a key is insertion order. Restartable.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.values().flatten()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.keys()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MultiMap<K, V>
where
    K: Eq + Hash + Debug,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.add(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_contains() {
        let mut map = MultiMap::new();
        map.add("a", 1);
        assert!(map.contains_key(&"a"));
        assert!(!map.contains_key(&"b"));
    }

    #[test]
    fn lookup_of_absent_key_fails() {
        let map = MultiMap::<&str, i32>::new();
        assert!(map.try_get(&"a").is_none());
        let err = map.get(&"a").unwrap_err();
        assert!(err.to_string().contains("\"a\""));
    }

    #[test]
    fn values_within_a_key_keep_insertion_order() {
        let mut map = MultiMap::new();
        map.add("a", 1);
        map.add("a", 2);
        map.add("b", 10);
        map.add("a", 3);
        assert_eq!(map.get(&"a").unwrap(), &[1, 2, 3]);
        assert_eq!(map.get(&"b").unwrap(), &[10]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn iteration_covers_all_values_and_restarts() {
        let map: MultiMap<_, _> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        let mut values: Vec<_> = map.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, [1, 2, 3]);
        // A second pass over the same map yields the same values.
        assert_eq!(map.values().count(), 3);
    }

    #[test]
    fn present_key_never_maps_to_empty_list() {
        let mut map = MultiMap::new();
        map.add("a", 1);
        for key in map.keys() {
            assert!(!map.get(key).unwrap().is_empty());
        }
    }
}
