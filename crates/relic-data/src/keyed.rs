// Copyright 2025 the Relic authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The reference-counted, name-keyed object cache.

use ahash::AHashMap;
use relic_core::{ResRef, ResourceError};
use std::sync::Arc;

struct CacheEntry<A> {
    payload: Arc<A>,
    refcount: u32,
}

/// A reference-counted cache from resource names to shared payloads.
///
/// A hit increments the entry's count and hands out a shared handle; a
/// release decrements it. An entry whose count reaches zero is destroyed
/// only when the releasing caller asks for it (`free_if_zero`); otherwise
/// it stays cached at refcount zero — soft retention — until
/// [`KeyedCache::remove_all`] scrubs it at session teardown.
#[derive(Default)]
pub struct KeyedCache<A> {
    entries: AHashMap<ResRef, CacheEntry<A>>,
}

impl<A> KeyedCache<A> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Looks up `key`, incrementing the refcount on a hit.
    pub fn get(&mut self, key: &ResRef) -> Option<Arc<A>> {
        let entry = self.entries.get_mut(key)?;
        entry.refcount += 1;
        Some(entry.payload.clone())
    }

    /// Inserts a freshly decoded payload at refcount one (the caller's
    /// claim) and returns the shared handle.
    pub fn insert(&mut self, key: ResRef, payload: A) -> Arc<A> {
        let payload = Arc::new(payload);
        self.entries.insert(
            key,
            CacheEntry {
                payload: payload.clone(),
                refcount: 1,
            },
        );
        payload
    }

    /// Releases one claim on `key`.
    ///
    /// Returns the remaining count. A release of an absent entry, or of an
    /// entry already at zero, is a caller bug: the cache stays untouched
    /// and [`ResourceError::RefcountUnderflow`] is returned for the caller
    /// to log.
    ///
    /// When the count reaches zero and `free_if_zero` is set, the entry is
    /// destroyed; with `free_if_zero` unset it stays cached for reuse.
    pub fn release(&mut self, key: &ResRef, free_if_zero: bool) -> Result<u32, ResourceError> {
        let entry = self
            .entries
            .get_mut(key)
            .ok_or(ResourceError::RefcountUnderflow(*key))?;
        if entry.refcount == 0 {
            return Err(ResourceError::RefcountUnderflow(*key));
        }
        entry.refcount -= 1;
        let remaining = entry.refcount;
        if remaining == 0 && free_if_zero {
            self.entries.remove(key);
        }
        Ok(remaining)
    }

    /// The current refcount of `key`, if cached.
    pub fn refcount(&self, key: &ResRef) -> Option<u32> {
        self.entries.get(key).map(|e| e.refcount)
    }

    /// Destroys every entry regardless of refcount. Only valid at session
    /// teardown, when all callers are being torn down with the cache.
    pub fn remove_all(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries, soft-retained ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_after_insert_returns_same_instance() {
        let mut cache = KeyedCache::new();
        let key = ResRef::new("sw1h01");
        let first = cache.insert(key, "longsword".to_string());
        let second = cache.get(&key).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn refcount_is_symmetric_around_get_and_release() {
        let mut cache = KeyedCache::new();
        let key = ResRef::new("sw1h01");
        cache.insert(key, 1u32);
        assert_eq!(cache.refcount(&key), Some(1));

        cache.get(&key).unwrap();
        assert_eq!(cache.refcount(&key), Some(2));
        cache.release(&key, false).unwrap();
        assert_eq!(cache.refcount(&key), Some(1));
    }

    #[test]
    fn release_without_free_soft_retains_the_entry() {
        let mut cache = KeyedCache::new();
        let key = ResRef::new("sw1h01");
        let first = cache.insert(key, 1u32);
        assert_eq!(cache.release(&key, false), Ok(0));

        // Still cached: a later get resurrects the same payload.
        assert_eq!(cache.len(), 1);
        let again = cache.get(&key).unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(cache.refcount(&key), Some(1));
    }

    #[test]
    fn release_with_free_destroys_at_zero() {
        let mut cache = KeyedCache::new();
        let key = ResRef::new("sw1h01");
        cache.insert(key, 1u32);
        assert_eq!(cache.release(&key, true), Ok(0));
        assert!(cache.is_empty());
    }

    #[test]
    fn underflow_is_reported_and_leaves_cache_untouched() {
        let mut cache = KeyedCache::new();
        let key = ResRef::new("sw1h01");
        cache.insert(key, 1u32);
        cache.release(&key, false).unwrap();

        // Double free: the count is already zero.
        assert_eq!(
            cache.release(&key, false),
            Err(ResourceError::RefcountUnderflow(key))
        );
        assert_eq!(cache.refcount(&key), Some(0));

        // Releasing a key that was never cached underflows too.
        let missing = ResRef::new("nothere");
        assert_eq!(
            cache.release(&missing, true),
            Err(ResourceError::RefcountUnderflow(missing))
        );
    }

    #[test]
    fn remove_all_destroys_live_entries() {
        let mut cache = KeyedCache::new();
        cache.insert(ResRef::new("a"), 1u32);
        cache.insert(ResRef::new("b"), 2u32);
        cache.get(&ResRef::new("a")).unwrap();
        cache.remove_all();
        assert!(cache.is_empty());
    }
}
