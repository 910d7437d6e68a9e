use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// A single key/count pair of a grouped series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket<K> {
    pub key: K,
    pub count: usize,
}

/// Ordered key → count series produced by a group-by.
///
/// The order is part of the value: each analysis documents whether it is
/// ranked by count or chronological. Charting layers consume it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts<K> {
    buckets: Vec<Bucket<K>>,
}

impl<K> Default for Counts<K> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }
}

impl<K> Counts<K> {
    pub fn from_buckets(buckets: Vec<Bucket<K>>) -> Self {
        Self { buckets }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    pub fn buckets(&self) -> &[Bucket<K>] {
        &self.buckets
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.buckets.iter().map(|b| (&b.key, b.count))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().map(|b| &b.key)
    }

    pub fn values(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.count).collect()
    }

    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Keep the first `n` buckets in their current order
    pub fn head(mut self, n: usize) -> Self {
        self.buckets.truncate(n);
        self
    }

    /// Stable sort by count, largest first. Equal counts keep their order.
    pub fn ranked(mut self) -> Self {
        self.buckets.sort_by(|a, b| b.count.cmp(&a.count));
        self
    }

    pub fn retain(mut self, mut keep: impl FnMut(&Bucket<K>) -> bool) -> Self {
        self.buckets.retain(|b| keep(b));
        self
    }
}

impl<K: PartialEq> Counts<K> {
    pub fn get(&self, key: &K) -> Option<usize> {
        self.buckets.iter().find(|b| &b.key == key).map(|b| b.count)
    }
}

impl<K: Ord> Counts<K> {
    /// Sort ascending by key
    pub fn by_key(mut self) -> Self {
        self.buckets.sort_by(|a, b| a.key.cmp(&b.key));
        self
    }

    /// Largest count first, ties ascending by key
    pub fn ranked_then_by_key(mut self) -> Self {
        self.buckets
            .sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        self
    }
}

impl<K: Eq + Hash + Clone> Counts<K> {
    /// Group equal keys and count them, in first-seen order
    pub fn tally<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut buckets: Vec<Bucket<K>> = Vec::new();

        for key in keys {
            if let Some(&i) = index.get(&key) {
                buckets[i].count += 1;
            } else {
                index.insert(key.clone(), buckets.len());
                buckets.push(Bucket { key, count: 1 });
            }
        }

        Self { buckets }
    }
}

impl<'a, K> IntoIterator for &'a Counts<K> {
    type Item = &'a Bucket<K>;
    type IntoIter = std::slice::Iter<'a, Bucket<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
