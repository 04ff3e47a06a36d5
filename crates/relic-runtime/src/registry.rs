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

//! The importer plugin registry.
//!
//! Importers are registered per asset class at startup and dispatched
//! through type erasure: the generic, type-safe [`AssetImporter`] is
//! wrapped into an object-safe shim whose product is downcast back at the
//! call site. Asking for a class nobody registered yields
//! [`ResourceError::UnsupportedFormat`].

use relic_core::types::Store;
use relic_core::{
    AssetExporter, AssetImporter, ClassId, FactoryMode, FactoryObject, ResRef, ResourceError,
};
use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Object-safe shim over a typed importer.
trait AnyImporter: Send + Sync {
    fn import_any(&self, bytes: &[u8], name: &ResRef) -> Result<Box<dyn Any + Send>, ResourceError>;
}

struct ImporterShim<A, I> {
    importer: I,
    _marker: PhantomData<fn() -> A>,
}

impl<A: Send + 'static, I: AssetImporter<A>> AnyImporter for ImporterShim<A, I> {
    fn import_any(&self, bytes: &[u8], name: &ResRef) -> Result<Box<dyn Any + Send>, ResourceError> {
        let asset = self.importer.import(bytes, name)?;
        Ok(Box::new(asset))
    }
}

/// Builds a factory object from raw bytes in a given decode mode.
type FactoryBuilder =
    Box<dyn Fn(&[u8], &ResRef, FactoryMode) -> Result<Arc<dyn FactoryObject>, ResourceError> + Send + Sync>;

/// The per-class importer dispatch table.
#[derive(Default)]
pub struct ImporterRegistry {
    importers: HashMap<ClassId, Box<dyn AnyImporter>>,
    factory_builders: HashMap<ClassId, FactoryBuilder>,
    store_exporter: Option<Box<dyn AssetExporter<Store>>>,
}

impl ImporterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the importer decoding `class` resources into `A`,
    /// replacing any previous registration for the class.
    pub fn register<A: Send + 'static>(
        &mut self,
        class: ClassId,
        importer: impl AssetImporter<A> + 'static,
    ) {
        self.importers.insert(
            class,
            Box::new(ImporterShim {
                importer,
                _marker: PhantomData,
            }),
        );
    }

    /// Registers the builder that turns `class` resources into factory
    /// objects.
    pub fn register_factory_builder(
        &mut self,
        class: ClassId,
        builder: impl Fn(&[u8], &ResRef, FactoryMode) -> Result<Arc<dyn FactoryObject>, ResourceError>
            + Send
            + Sync
            + 'static,
    ) {
        self.factory_builders.insert(class, Box::new(builder));
    }

    /// Registers the exporter used when stores are flushed back.
    pub fn set_store_exporter(&mut self, exporter: impl AssetExporter<Store> + 'static) {
        self.store_exporter = Some(Box::new(exporter));
    }

    /// True when an importer is registered for `class`.
    pub fn supports(&self, class: ClassId) -> bool {
        self.importers.contains_key(&class)
    }

    /// Decodes `bytes` through the importer registered for `class`.
    pub fn import<A: 'static>(
        &self,
        class: ClassId,
        bytes: &[u8],
        name: &ResRef,
    ) -> Result<A, ResourceError> {
        let importer = self
            .importers
            .get(&class)
            .ok_or(ResourceError::UnsupportedFormat(class))?;
        let asset = importer.import_any(bytes, name)?;
        asset
            .downcast::<A>()
            .map(|boxed| *boxed)
            .map_err(|_| ResourceError::DecodeFailed {
                key: *name,
                reason: format!("importer for '{class}' produced an unexpected type"),
            })
    }

    /// Builds a factory object through the builder registered for `class`.
    pub fn build_factory(
        &self,
        class: ClassId,
        bytes: &[u8],
        name: &ResRef,
        mode: FactoryMode,
    ) -> Result<Arc<dyn FactoryObject>, ResourceError> {
        let builder = self
            .factory_builders
            .get(&class)
            .ok_or(ResourceError::UnsupportedFormat(class))?;
        builder(bytes, name, mode)
    }

    /// Encodes a store through the registered exporter.
    pub fn export_store(&self, store: &Store) -> Result<Vec<u8>, ResourceError> {
        let exporter = self
            .store_exporter
            .as_ref()
            .ok_or(ResourceError::UnsupportedFormat(ClassId::Store))?;
        exporter.export(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relic_core::types::Item;

    struct FakeItemImporter;

    impl AssetImporter<Item> for FakeItemImporter {
        fn import(&self, _bytes: &[u8], name: &ResRef) -> Result<Item, ResourceError> {
            Ok(Item {
                name: *name,
                name_ref: 7,
                flags: 0,
            })
        }
    }

    #[test]
    fn registered_importer_round_trips_through_type_erasure() {
        let mut registry = ImporterRegistry::new();
        registry.register::<Item>(ClassId::Item, FakeItemImporter);

        let key = ResRef::new("sw1h01");
        let item: Item = registry.import(ClassId::Item, b"", &key).unwrap();
        assert_eq!(item.name, key);
        assert_eq!(item.name_ref, 7);
    }

    #[test]
    fn unregistered_class_is_unsupported() {
        let registry = ImporterRegistry::new();
        let err = registry
            .import::<Item>(ClassId::Item, b"", &ResRef::new("sw1h01"))
            .unwrap_err();
        assert_eq!(err, ResourceError::UnsupportedFormat(ClassId::Item));
        assert!(!registry.supports(ClassId::Item));
    }

    #[test]
    fn wrong_target_type_is_a_decode_failure() {
        let mut registry = ImporterRegistry::new();
        registry.register::<Item>(ClassId::Item, FakeItemImporter);

        let err = registry
            .import::<u32>(ClassId::Item, b"", &ResRef::new("sw1h01"))
            .unwrap_err();
        assert!(matches!(err, ResourceError::DecodeFailed { .. }));
    }

    #[test]
    fn missing_store_exporter_is_unsupported() {
        let registry = ImporterRegistry::new();
        let err = registry.export_store(&Store::default()).unwrap_err();
        assert_eq!(err, ResourceError::UnsupportedFormat(ClassId::Store));
    }
}
