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

//! The negative-caching map for derived, optional assets.

use ahash::AHashMap;
use relic_core::ResRef;
use std::sync::Arc;

/// A cache that also remembers failed lookups.
///
/// A confirmed-absent key is stored as a tombstone (`None`), which counts
/// as a hit for every later lookup: the disk probe and format sniff that
/// failed once are never repeated. Only [`NegativeCache::clear`] removes
/// tombstones.
#[derive(Default)]
pub struct NegativeCache<T> {
    entries: AHashMap<ResRef, Option<Arc<T>>>,
}

impl<T> NegativeCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Looks up `key`.
    ///
    /// - `None`: never looked up; the caller should probe the backing
    ///   store and record the outcome.
    /// - `Some(None)`: tombstoned; confirmed absent, do not re-probe.
    /// - `Some(Some(value))`: present.
    pub fn get(&self, key: &ResRef) -> Option<Option<Arc<T>>> {
        self.entries.get(key).cloned()
    }

    /// Records a successful lookup and returns the shared handle.
    pub fn insert(&mut self, key: ResRef, value: T) -> Arc<T> {
        let value = Arc::new(value);
        self.entries.insert(key, Some(value.clone()));
        value
    }

    /// Records a confirmed-absent lookup.
    pub fn insert_absent(&mut self, key: ResRef) {
        self.entries.insert(key, None);
    }

    /// Drops every entry, tombstones included.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded lookups, tombstones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no lookup has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
