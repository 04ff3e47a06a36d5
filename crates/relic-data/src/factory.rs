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

//! Deduplication cache for decoded factory objects.

use ahash::AHashMap;
use relic_core::{ClassId, FactoryMode, FactoryObject, ResRef};
use std::sync::Arc;

/// The compound key a factory object is deduplicated on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FactoryKey {
    /// The source resource name.
    pub name: ResRef,
    /// The source asset class.
    pub class: ClassId,
    /// The decode mode the factory was built with.
    pub mode: FactoryMode,
}

/// An exact-match cache of decoded sprite-sheet/image factories.
///
/// No refcounting: a factory object lives until the cache is cleared with
/// the session.
#[derive(Default)]
pub struct FactoryCache {
    entries: AHashMap<FactoryKey, Arc<dyn FactoryObject>>,
}

impl FactoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Exact-match lookup.
    pub fn get(&self, key: &FactoryKey) -> Option<Arc<dyn FactoryObject>> {
        self.entries.get(key).cloned()
    }

    /// Registers a built factory object under its compound key.
    pub fn insert(&mut self, key: FactoryKey, object: Arc<dyn FactoryObject>) {
        self.entries.insert(key, object);
    }

    /// Drops every factory object.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached factories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
