use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::mem;

const DEFAULT_CAPACITY: usize = 16;
const LOAD_FACTOR: f64 = 0.75;

/// A chained hash map: every index structure in this crate is built on it.
///
/// Buckets hold their entries in insertion order. When an insert would push
/// the load factor past 0.75 the table grows to `2 * capacity + 1` and every
/// entry is rehashed before the new entry is linked in.
pub struct ChainedMap<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hash_builder: RandomState,
}

impl<K: Hash + Eq, V> ChainedMap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buckets: (0..capacity).map(|_| Vec::new()).collect(),
            len: 0,
            hash_builder: RandomState::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets. Exposed so tests can observe growth.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    // The 64-bit hash reduced modulo the bucket count. Total for every hash
    // value; no signed arithmetic is involved.
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Insert or overwrite, returning the previous value if the key existed.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if (self.len + 1) as f64 > self.buckets.len() as f64 * LOAD_FACTOR {
            self.grow();
        }
        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];
        for (existing, slot) in bucket.iter_mut() {
            if *existing == key {
                return Some(mem::replace(slot, value));
            }
        }
        bucket.push((key, value));
        self.len += 1;
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove and return the value for `key`. A miss, including a hit on an
    /// empty bucket, is an ordinary `None`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket.iter().position(|(k, _)| k.borrow() == key)?;
        self.len -= 1;
        Some(bucket.remove(pos).1)
    }

    /// Borrowed view of every entry. Order is bucket order, not global
    /// insertion order. Values are walked as key-value pairs, so equal
    /// values under distinct keys all appear.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter().flat_map(|b| b.iter().map(|(k, v)| (k, v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2 + 1;
        let mut new_buckets: Vec<Vec<(K, V)>> =
            (0..new_capacity).map(|_| Vec::new()).collect();
        for (key, value) in self.buckets.drain(..).flatten() {
            let idx = (self.hash_builder.hash_one(&key) % new_capacity as u64) as usize;
            new_buckets[idx].push((key, value));
        }
        self.buckets = new_buckets;
        tracing::trace!(capacity = new_capacity, len = self.len, "map resized");
    }
}

impl<K: Hash + Eq, V> Default for ChainedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
