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

//! The importer/exporter plugin contracts.

use crate::error::ResourceError;
use crate::resref::ResRef;

/// Decodes a byte stream into an in-memory asset.
///
/// One importer exists per asset class; the registry dispatches to it on a
/// cache miss. `name` is the canonical key the asset is being loaded
/// under, so importers of self-naming assets can stamp it into the result.
pub trait AssetImporter<A>: Send + Sync {
    /// Decodes `bytes` into an asset.
    fn import(&self, bytes: &[u8], name: &ResRef) -> Result<A, ResourceError>;
}

/// The symmetric encoder for asset classes that are saved back.
pub trait AssetExporter<A>: Send + Sync {
    /// Encodes the asset into a fresh byte stream.
    fn export(&self, asset: &A) -> Result<Vec<u8>, ResourceError>;
}
