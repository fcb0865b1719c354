//! Insertion-ordered keyed accumulator.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::HashMap;

/// Accumulates values per string key, remembering first-seen order.
///
/// Ranking helpers use a stable sort, so keys with equal rank keep the
/// order in which they were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<V = u64> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for Tally<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V: Default> Tally<V> {
    /// Mutable access to the value for `key`, inserting a default first.
    pub fn entry(&mut self, key: &str) -> &mut V {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.to_string(), i);
                self.entries.push((key.to_string(), V::default()));
                i
            }
        };
        &mut self.entries[i].1
    }
}

impl<V> Tally<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries sorted by `rank` descending, ties in first-seen order.
    pub fn ranked_by<K, F>(&self, rank: F) -> Vec<(&str, &V)>
    where
        K: Ord,
        F: Fn(&V) -> K,
    {
        let mut ranked: Vec<(&str, &V)> = self.iter().collect();
        ranked.sort_by(|a, b| rank(b.1).cmp(&rank(a.1)));
        ranked
    }
}

impl Tally<u64> {
    pub fn increment(&mut self, key: &str) {
        *self.entry(key) += 1;
    }

    pub fn count(&self, key: &str) -> u64 {
        self.get(key).copied().unwrap_or(0)
    }

    pub fn sum(&self) -> u64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    /// The `n` largest counts, ties in first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        self.ranked_by(|v| *v)
            .into_iter()
            .take(n)
            .map(|(k, v)| (k, *v))
            .collect()
    }
}

impl<V: Serialize> Serialize for Tally<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            seq.serialize_element(&(name, value))?;
        }
        seq.end()
    }
}
