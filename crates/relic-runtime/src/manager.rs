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

//! The resource manager: the one context object game code loads through.

use crate::registry::ImporterRegistry;
use relic_core::types::{Effect, Item, Palette, Spell, Store, Table};
use relic_core::{
    ClassId, FactoryMode, FactoryObject, Named, ResRef, ResourceError, ResourceLocator, StoreSink,
};
use relic_data::{FactoryCache, FactoryKey, KeyedCache, NamedMap, NegativeCache, SlotPool};
use relic_io::{DirectoryLocator, StoreImporter, TableImporter};
use std::path::Path;
use std::sync::Arc;

/// A handle to a loaded table slot.
///
/// Handles stay valid while the slot's refcount is above zero; the
/// [`TableHandle::ALL`] sentinel addresses every slot at once when
/// releasing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TableHandle(usize);

impl TableHandle {
    /// Sentinel meaning "every loaded table".
    pub const ALL: TableHandle = TableHandle(usize::MAX);

    /// The underlying slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The typed, reference-counted resource cache for one game session.
///
/// Owns the locator, the importer registry, and the five cache
/// structures; each asset family keeps its own retention policy:
///
/// | family             | structure        | policy                          |
/// |--------------------|------------------|---------------------------------|
/// | items/spells/effects | [`KeyedCache`] | refcounted, soft-retained       |
/// | tables             | [`SlotPool`]     | refcounted, first-fit slot reuse|
/// | stores             | [`NamedMap`]     | owned state, flushed on save    |
/// | palettes           | [`NegativeCache`]| tombstones failed lookups       |
/// | factories          | [`FactoryCache`] | exact-match dedup, session-long |
///
/// The asymmetry is deliberate tuning, not an accident; do not unify it.
///
/// All state is scoped to the active session: [`ResourceManager::clear_caches`]
/// at a session or area transition is the only event that invalidates
/// outstanding references, and callers must not hold handles across it.
pub struct ResourceManager {
    locator: Box<dyn ResourceLocator>,
    sink: Box<dyn StoreSink>,
    registry: ImporterRegistry,
    items: KeyedCache<Item>,
    spells: KeyedCache<Spell>,
    effects: KeyedCache<Effect>,
    tables: SlotPool<Table>,
    stores: NamedMap<Store>,
    palettes: NegativeCache<Palette>,
    factories: FactoryCache,
}

impl ResourceManager {
    /// Creates a manager over the given backing store halves and a
    /// pre-populated importer registry.
    pub fn new(
        locator: Box<dyn ResourceLocator>,
        sink: Box<dyn StoreSink>,
        registry: ImporterRegistry,
    ) -> Self {
        Self {
            locator,
            sink,
            registry,
            items: KeyedCache::new(),
            spells: KeyedCache::new(),
            effects: KeyedCache::new(),
            tables: SlotPool::new(),
            stores: NamedMap::new(),
            palettes: NegativeCache::new(),
            factories: FactoryCache::new(),
        }
    }

    /// Convenience constructor over a game directory, with the built-in
    /// store and table codecs registered. Importers for the remaining
    /// classes are registered by the embedding application through
    /// [`ResourceManager::registry_mut`].
    pub fn with_game_directory(root: impl AsRef<Path>) -> Self {
        let mut registry = ImporterRegistry::new();
        registry.register::<Store>(ClassId::Store, StoreImporter);
        registry.register::<Table>(ClassId::Table, TableImporter);
        registry.set_store_exporter(StoreImporter);
        Self::new(
            Box::new(DirectoryLocator::new(root.as_ref())),
            Box::new(DirectoryLocator::new(root.as_ref())),
            registry,
        )
    }

    /// The importer registry, for registering application importers.
    pub fn registry_mut(&mut self) -> &mut ImporterRegistry {
        &mut self.registry
    }

    fn resolve(&self, key: ResRef, class: ClassId, silent: bool) -> Result<Vec<u8>, ResourceError> {
        self.locator
            .resolve(&key, class, silent)
            .ok_or(ResourceError::NotFound { key, class })
    }

    // --- items / spells / effects -------------------------------------

    /// Loads (or returns the cached) item under `key`, claiming one
    /// reference.
    pub fn get_item(&mut self, key: ResRef, silent: bool) -> Result<Arc<Item>, ResourceError> {
        if key.is_empty() {
            return Err(ResourceError::InvalidKey);
        }
        if let Some(item) = self.items.get(&key) {
            return Ok(item);
        }
        let bytes = self.resolve(key, ClassId::Item, silent)?;
        let item = self.registry.import::<Item>(ClassId::Item, &bytes, &key)?;
        Ok(self.items.insert(key, item))
    }

    /// Releases one claim on the item under `key`. With `free_if_zero`
    /// the entry is destroyed when the count reaches zero; otherwise it
    /// stays cached for reuse. A double free is logged and ignored.
    pub fn free_item(&mut self, key: ResRef, free_if_zero: bool) {
        if let Err(e) = self.items.release(&key, free_if_zero) {
            log::error!("corrupted item cache encountered: {e}");
        }
    }

    /// Loads (or returns the cached) spell under `key`.
    pub fn get_spell(&mut self, key: ResRef, silent: bool) -> Result<Arc<Spell>, ResourceError> {
        if key.is_empty() {
            return Err(ResourceError::InvalidKey);
        }
        if let Some(spell) = self.spells.get(&key) {
            return Ok(spell);
        }
        let bytes = self.resolve(key, ClassId::Spell, silent)?;
        let spell = self.registry.import::<Spell>(ClassId::Spell, &bytes, &key)?;
        Ok(self.spells.insert(key, spell))
    }

    /// Releases one claim on the spell under `key`.
    pub fn free_spell(&mut self, key: ResRef, free_if_zero: bool) {
        if let Err(e) = self.spells.release(&key, free_if_zero) {
            log::error!("corrupted spell cache encountered: {e}");
        }
    }

    /// Loads (or returns the cached) effect under `key`.
    pub fn get_effect(&mut self, key: ResRef, silent: bool) -> Result<Arc<Effect>, ResourceError> {
        if key.is_empty() {
            return Err(ResourceError::InvalidKey);
        }
        if let Some(effect) = self.effects.get(&key) {
            return Ok(effect);
        }
        let bytes = self.resolve(key, ClassId::Effect, silent)?;
        let effect = self
            .registry
            .import::<Effect>(ClassId::Effect, &bytes, &key)?;
        Ok(self.effects.insert(key, effect))
    }

    /// Releases one claim on the effect under `key`.
    pub fn free_effect(&mut self, key: ResRef, free_if_zero: bool) {
        if let Err(e) = self.effects.release(&key, free_if_zero) {
            log::error!("corrupted effect cache encountered: {e}");
        }
    }

    // --- tables --------------------------------------------------------

    /// Loads the table under `key`, returning its slot handle. A key
    /// already in the pool (even fully released) is claimed without
    /// re-parsing.
    pub fn load_table(&mut self, key: ResRef, silent: bool) -> Result<TableHandle, ResourceError> {
        if key.is_empty() {
            return Err(ResourceError::InvalidKey);
        }
        let Self {
            tables,
            locator,
            registry,
            ..
        } = self;
        tables
            .load_with(key, || {
                let bytes = locator
                    .resolve(&key, ClassId::Table, silent)
                    .ok_or(ResourceError::NotFound {
                        key,
                        class: ClassId::Table,
                    })?;
                registry.import::<Table>(ClassId::Table, &bytes, &key)
            })
            .map(TableHandle)
    }

    /// The parsed table behind `handle`, or `None` for an out-of-range or
    /// released handle (and always for [`TableHandle::ALL`]).
    pub fn get_table(&self, handle: TableHandle) -> Option<&Table> {
        if handle == TableHandle::ALL {
            return None;
        }
        self.tables.get(handle.0)
    }

    /// Releases one claim on `handle`; [`TableHandle::ALL`] clears every
    /// slot. Returns false for an invalid handle.
    pub fn release_table(&mut self, handle: TableHandle) -> bool {
        if handle == TableHandle::ALL {
            self.tables.release_all();
            return true;
        }
        let ok = self.tables.release(handle.0);
        if !ok {
            log::warn!("release of invalid table handle {}", handle.0);
        }
        ok
    }

    // --- stores --------------------------------------------------------

    /// Loads (or returns the cached) store under `key`, with exclusive
    /// mutable access. The store is filed under its canonical
    /// self-reported name.
    pub fn get_store(&mut self, key: ResRef) -> Result<&mut Store, ResourceError> {
        if key.is_empty() {
            return Err(ResourceError::InvalidKey);
        }
        let name = if self.stores.contains(&key) {
            key
        } else {
            let bytes = self.resolve(key, ClassId::Store, false)?;
            let store = self.registry.import::<Store>(ClassId::Store, &bytes, &key)?;
            let name = store.name();
            self.stores.insert(store);
            name
        };
        Ok(self
            .stores
            .get_mut(&name)
            .expect("store filed under its canonical name"))
    }

    /// Flushes the store under `key` back to the backing store and drops
    /// the cached copy; the next [`ResourceManager::get_store`] re-decodes
    /// the updated data.
    ///
    /// # Panics
    ///
    /// Panics when no store is cached under `key`: saving something never
    /// cached is a bookkeeping bug in the calling layer, not a condition
    /// the cache can paper over.
    pub fn save_store(&mut self, key: ResRef) -> Result<(), ResourceError> {
        let Some(store) = self.stores.get(&key) else {
            panic!("saving a store that was never cached: {key}");
        };
        let bytes = self.registry.export_store(store)?;
        self.sink.create(&key, ClassId::Store, &bytes)?;
        self.stores.take(&key);
        Ok(())
    }

    /// Saves every cached store until the map is empty. Save order is
    /// unspecified.
    pub fn save_all_stores(&mut self) -> Result<(), ResourceError> {
        while let Some(key) = self.stores.any_key() {
            self.save_store(key)?;
        }
        Ok(())
    }

    /// Number of stores currently cached.
    pub fn cached_stores(&self) -> usize {
        self.stores.len()
    }

    // --- palettes ------------------------------------------------------

    /// The palette derived from the image resource under `key`.
    ///
    /// A failed lookup is tombstoned: later calls return `None` without
    /// touching the backing store again, until [`ResourceManager::clear_caches`].
    /// Dropping the returned handle releases the caller's claim; the
    /// cached copy stays until the cache is cleared.
    pub fn get_palette(&mut self, key: ResRef) -> Option<Arc<Palette>> {
        if key.is_empty() {
            return None;
        }
        if let Some(cached) = self.palettes.get(&key) {
            return cached;
        }
        let Some(bytes) = self.locator.resolve(&key, ClassId::Image, true) else {
            self.palettes.insert_absent(key);
            return None;
        };
        match self.registry.import::<Palette>(ClassId::Image, &bytes, &key) {
            Ok(mut palette) => {
                palette.named = true;
                Some(self.palettes.insert(key, palette))
            }
            Err(e) => {
                log::warn!("could not derive palette '{key}': {e}");
                self.palettes.insert_absent(key);
                None
            }
        }
    }

    // --- factories -----------------------------------------------------

    /// Returns the factory object for `(key, class, mode)`, building and
    /// registering it on the first request. A blank key is rejected
    /// before the locator is touched.
    pub fn get_factory_resource(
        &mut self,
        key: ResRef,
        class: ClassId,
        mode: FactoryMode,
        silent: bool,
    ) -> Result<Arc<dyn FactoryObject>, ResourceError> {
        if key.is_empty() {
            return Err(ResourceError::InvalidKey);
        }
        let factory_key = FactoryKey {
            name: key,
            class,
            mode,
        };
        if let Some(object) = self.factories.get(&factory_key) {
            return Ok(object);
        }
        let bytes = self.resolve(key, class, silent)?;
        let object = self.registry.build_factory(class, &bytes, &key, mode)?;
        self.factories.insert(factory_key, object.clone());
        Ok(object)
    }

    /// Registers a pre-built factory object.
    pub fn add_factory_resource(
        &mut self,
        key: ResRef,
        class: ClassId,
        mode: FactoryMode,
        object: Arc<dyn FactoryObject>,
    ) {
        self.factories.insert(
            FactoryKey {
                name: key,
                class,
                mode,
            },
            object,
        );
    }

    // --- session lifecycle ---------------------------------------------

    /// Clears every cache structure at once (session teardown or area
    /// transition). Outstanding handles are invalidated; unsaved store
    /// changes are discarded.
    pub fn clear_caches(&mut self) {
        self.items.remove_all();
        self.spells.remove_all();
        self.effects.remove_all();
        self.tables.release_all();
        self.stores.clear();
        self.palettes.clear();
        self.factories.clear();
    }
}
