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

//! The name-keyed map for exclusively owned mutable state.

use ahash::AHashMap;
use relic_core::{Named, ResRef};

/// A map from canonical names to exclusively owned mutable values.
///
/// Unlike the refcounted caches this holds game state, not derived data:
/// entries are never passively evicted, only removed by an explicit flush
/// ([`NamedMap::take`]) or a wholesale clear at session teardown.
///
/// Values are filed under the name they report themselves
/// ([`Named::name`]), never a caller-supplied spelling, so the map key and
/// the value's self-reported name cannot diverge.
#[derive(Default)]
pub struct NamedMap<T: Named> {
    entries: AHashMap<ResRef, T>,
}

impl<T: Named> NamedMap<T> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Inserts `value` under its self-reported name.
    pub fn insert(&mut self, value: T) {
        self.entries.insert(value.name(), value);
    }

    /// Borrowed access to the value under `key`.
    pub fn get(&self, key: &ResRef) -> Option<&T> {
        self.entries.get(key)
    }

    /// Mutable borrowed access to the value under `key`.
    pub fn get_mut(&mut self, key: &ResRef) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    /// True when `key` is present.
    pub fn contains(&self, key: &ResRef) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes and returns the value under `key` (the flush primitive).
    pub fn take(&mut self, key: &ResRef) -> Option<T> {
        self.entries.remove(key)
    }

    /// An arbitrary key currently in the map, for drain-style flushing.
    /// Iteration order is unspecified.
    pub fn any_key(&self) -> Option<ResRef> {
        self.entries.keys().next().copied()
    }

    /// Drops every entry without flushing.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the map holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fake {
        name: ResRef,
        gold: u32,
    }

    impl Named for Fake {
        fn name(&self) -> ResRef {
            self.name
        }
    }

    #[test]
    fn values_are_keyed_by_their_own_name() {
        let mut map = NamedMap::new();
        map.insert(Fake {
            name: ResRef::new("ribald"),
            gold: 100,
        });

        // The canonical (lower-cased) name matches any caller spelling.
        assert!(map.contains(&ResRef::new("RIBALD")));
        assert_eq!(map.get(&ResRef::new("Ribald")).map(|s| s.gold), Some(100));
    }

    #[test]
    fn mutation_is_in_place() {
        let mut map = NamedMap::new();
        let key = ResRef::new("ribald");
        map.insert(Fake { name: key, gold: 0 });
        map.get_mut(&key).unwrap().gold = 250;
        assert_eq!(map.get(&key).unwrap().gold, 250);
    }

    #[test]
    fn take_removes_the_entry() {
        let mut map = NamedMap::new();
        let key = ResRef::new("ribald");
        map.insert(Fake { name: key, gold: 7 });
        let taken = map.take(&key).unwrap();
        assert_eq!(taken.gold, 7);
        assert!(map.is_empty());
        assert!(map.take(&key).is_none());
    }

    #[test]
    fn any_key_drains_the_whole_map() {
        let mut map = NamedMap::new();
        for name in ["aaaa", "bbbb", "cccc"] {
            map.insert(Fake {
                name: ResRef::new(name),
                gold: 0,
            });
        }
        let mut drained = 0;
        while let Some(key) = map.any_key() {
            map.take(&key).unwrap();
            drained += 1;
        }
        assert_eq!(drained, 3);
        assert!(map.is_empty());
    }
}
