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

//! The slot pool for parsed tabular data.

use relic_core::ResRef;

struct Slot<T> {
    key: ResRef,
    refcount: u32,
    payload: T,
}

/// A compacting pool of reference-counted entries with index-stable
/// handles.
///
/// Slot indices stay valid while the slot's refcount is above zero. A
/// released slot keeps its key, payload, and zeroed count: a later load of
/// the same key resurrects it by incrementing (no re-decode), while a load
/// of a new key reuses the lowest-indexed free slot before growing the
/// pool. First-fit reuse is deliberate — it keeps handle assignment
/// deterministic and bounds pool growth.
///
/// The free-slot scan is O(n); n stays small in practice.
#[derive(Default)]
pub struct SlotPool<T> {
    slots: Vec<Slot<T>>,
}

impl<T> SlotPool<T> {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    fn find(&self, key: &ResRef) -> Option<usize> {
        self.slots.iter().position(|s| s.key == *key)
    }

    /// Loads `key`, decoding through `decode` only when no slot (live or
    /// released) already holds it. Returns the slot index.
    pub fn load_with<E>(
        &mut self,
        key: ResRef,
        decode: impl FnOnce() -> Result<T, E>,
    ) -> Result<usize, E> {
        if let Some(index) = self.find(&key) {
            // Any key match counts, refcount zero included: a released
            // slot is resurrected without re-decoding.
            self.slots[index].refcount += 1;
            return Ok(index);
        }

        let payload = decode()?;
        let slot = Slot {
            key,
            refcount: 1,
            payload,
        };

        // First-fit: the lowest-indexed free slot wins.
        for (index, existing) in self.slots.iter_mut().enumerate() {
            if existing.refcount == 0 {
                *existing = slot;
                return Ok(index);
            }
        }
        self.slots.push(slot);
        Ok(self.slots.len() - 1)
    }

    /// The payload at `index`, or `None` when the index is out of range or
    /// the slot has been released.
    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.slots.get(index)?;
        if slot.refcount == 0 {
            return None;
        }
        Some(&slot.payload)
    }

    /// Releases one claim on the slot at `index`. Returns false for an
    /// out-of-range index or an already-released slot.
    pub fn release(&mut self, index: usize) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        if slot.refcount == 0 {
            return false;
        }
        slot.refcount -= 1;
        true
    }

    /// Clears every slot regardless of refcount.
    pub fn release_all(&mut self) {
        self.slots.clear();
    }

    /// The refcount of the slot at `index`, if it exists.
    pub fn refcount(&self, index: usize) -> Option<u32> {
        self.slots.get(index).map(|s| s.refcount)
    }

    /// Number of slots, released ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the pool holds no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
