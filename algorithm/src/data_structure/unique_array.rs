use std::ops::Index;
use std::hash::Hash;
use fnv::FnvHashSet;

/// An append-only array that keeps the first value pushed for every key, later values
/// pushed under a key already seen are dropped.
pub struct UniqueArray<V, K: Hash + Eq + Clone=String> {
    data: Vec<V>,
    keys: FnvHashSet<K>
}

impl<V, K: Hash + Eq + Clone> UniqueArray<V, K> {
    pub fn new() -> UniqueArray<V, K> {
        UniqueArray {
            data: Vec::new(),
            keys: FnvHashSet::default()
        }
    }

    pub fn with_capacity(capacity: usize) -> UniqueArray<V, K> {
        let mut keys = FnvHashSet::default();
        keys.reserve(capacity);

        UniqueArray {
            data: Vec::with_capacity(capacity),
            keys
        }
    }

    /// Push `value` under `key`, returns false (and drops the value) if the key is already present
    pub fn push(&mut self, key: K, value: V) -> bool {
        if self.keys.insert(key) {
            self.data.push(value);
            return true;
        }

        false
    }

    pub fn get_value(self) -> Vec<V> {
        self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<V, K: Hash + Eq + Clone> Index<usize> for UniqueArray<V, K> {
    type Output = V;

    fn index(&self, idx: usize) -> &V {
        &self.data[idx]
    }
}
