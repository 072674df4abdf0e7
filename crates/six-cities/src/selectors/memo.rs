//! Single-entry memoization
//!
//! A `Memo` remembers the last key and value. Collections are keyed by
//! `ArcKey`, which compares by pointer: reducers replace the `Arc` whenever
//! a collection changes, so pointer equality means "unchanged".

use std::cell::{Cell, RefCell};
use std::sync::Arc;

/// Key that compares an `Arc` by identity
pub struct ArcKey<T>(pub Arc<T>);

impl<T> ArcKey<T> {
    pub fn new(value: &Arc<T>) -> Self {
        Self(Arc::clone(value))
    }
}

impl<T> Clone for ArcKey<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for ArcKey<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

pub struct Memo<K, V> {
    cached: RefCell<Option<(K, V)>>,
    computations: Cell<usize>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            cached: RefCell::new(None),
            computations: Cell::new(0),
        }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    /// Cached value for `key`, computing it when the key changed
    pub fn get(&self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some((cached_key, value)) = self.cached.borrow().as_ref() {
            if *cached_key == key {
                return value.clone();
            }
        }
        let value = compute(&key);
        self.computations.set(self.computations.get() + 1);
        *self.cached.borrow_mut() = Some((key, value.clone()));
        value
    }

    /// How many times the value was (re)computed
    #[cfg(test)]
    pub fn computations(&self) -> usize {
        self.computations.get()
    }
}
