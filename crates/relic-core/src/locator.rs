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

//! The contracts between the cache and the backing store.

use crate::class::ClassId;
use crate::error::ResourceError;
use crate::resref::ResRef;

/// Resolves resource keys to raw byte streams.
///
/// The cache never interprets bytes itself; a successful resolve is always
/// handed to the class-specific importer. `silent` suppresses the
/// not-found log line for probes where absence is expected.
pub trait ResourceLocator {
    /// Looks up the bytes for `key` of the given class, or `None` when the
    /// backing store has no such resource.
    fn resolve(&self, key: &ResRef, class: ClassId, silent: bool) -> Option<Vec<u8>>;

    /// Probes for existence without reading the payload.
    fn exists(&self, key: &ResRef, class: ClassId) -> bool;
}

/// The write-back half of the backing store, used when a cached mutable
/// asset (a store) is flushed.
pub trait StoreSink {
    /// Creates (or replaces) the backing resource for `key` with `bytes`.
    fn create(&mut self, key: &ResRef, class: ClassId, bytes: &[u8]) -> Result<(), ResourceError>;
}
