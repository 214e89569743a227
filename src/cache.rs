//! Per-session query cache.
//!
//! Keys are the exact query strings that were resolved (case-sensitive,
//! untrimmed). Only successful lookups are stored. By default the cache is
//! unbounded for the lifetime of the session; with a capacity it evicts the
//! least recently used query.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::types::{UserRecord, is_blank};

pub struct QueryCache {
    entries: LruCache<String, Vec<UserRecord>>,
}

impl QueryCache {
    pub fn unbounded() -> Self {
        Self {
            entries: LruCache::unbounded(),
        }
    }

    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn with_capacity(capacity: Option<NonZeroUsize>) -> Self {
        match capacity {
            Some(capacity) => Self::bounded(capacity),
            None => Self::unbounded(),
        }
    }

    /// Cached results for `query`, marking it as recently used.
    pub fn get(&mut self, query: &str) -> Option<Vec<UserRecord>> {
        self.entries.get(query).cloned()
    }

    /// Store results for `query`. Blank queries are never cached.
    pub fn insert(&mut self, query: &str, users: Vec<UserRecord>) {
        if is_blank(query) {
            return;
        }
        self.entries.put(query.to_string(), users);
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains(query)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::unbounded()
    }
}
