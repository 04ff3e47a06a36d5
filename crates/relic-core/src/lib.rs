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

//! # Relic Core
//!
//! Foundational crate containing the resource key and class-id types, the
//! asset data model, the error taxonomy, and the interface contracts
//! (locator, importer, exporter, factory object) that the cache layers
//! are built against.

#![warn(missing_docs)]

pub mod class;
pub mod error;
pub mod factory;
pub mod importer;
pub mod locator;
pub mod resref;
pub mod types;

pub use class::ClassId;
pub use error::ResourceError;
pub use factory::{FactoryMode, FactoryObject};
pub use importer::{AssetExporter, AssetImporter};
pub use locator::{ResourceLocator, StoreSink};
pub use resref::{Named, ResRef};
