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

//! A directory-backed resource locator.

use relic_core::{ClassId, ResRef, ResourceError, ResourceLocator, StoreSink};
use std::path::{Path, PathBuf};

/// Resolves resources as `<key>.<extension>` files under one directory.
///
/// Keys are canonical (lower-case), so lookups are deterministic on
/// case-sensitive filesystems. The same directory doubles as the
/// write-back target for saved stores.
pub struct DirectoryLocator {
    root: PathBuf,
}

impl DirectoryLocator {
    /// Creates a locator over `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &ResRef, class: ClassId) -> PathBuf {
        self.root.join(format!("{}.{}", key, class.extension()))
    }

    /// The directory this locator reads from and writes to.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceLocator for DirectoryLocator {
    fn resolve(&self, key: &ResRef, class: ClassId, silent: bool) -> Option<Vec<u8>> {
        let path = self.path_for(key, class);
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if !silent {
                    log::warn!("resource '{key}.{class}' not found in {}", self.root.display());
                }
                None
            }
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                None
            }
        }
    }

    fn exists(&self, key: &ResRef, class: ClassId) -> bool {
        self.path_for(key, class).is_file()
    }
}

impl StoreSink for DirectoryLocator {
    fn create(&mut self, key: &ResRef, class: ClassId, bytes: &[u8]) -> Result<(), ResourceError> {
        let path = self.path_for(key, class);
        std::fs::write(&path, bytes).map_err(|e| ResourceError::WriteFailed {
            key: *key,
            reason: format!("{}: {e}", path.display()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolves_files_by_canonical_name_and_extension() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("racefeat.2da"), b"2DA V1.0\n").unwrap();

        let locator = DirectoryLocator::new(dir.path());
        // Caller spelling is canonicalized before hitting the filesystem.
        let bytes = locator.resolve(&ResRef::new("RACEFEAT"), ClassId::Table, false);
        assert_eq!(bytes.as_deref(), Some(&b"2DA V1.0\n"[..]));
        assert!(locator.exists(&ResRef::new("RaceFeat"), ClassId::Table));
    }

    #[test]
    fn missing_resources_resolve_to_none() {
        let dir = tempdir().unwrap();
        let locator = DirectoryLocator::new(dir.path());
        assert!(locator
            .resolve(&ResRef::new("nope0000"), ClassId::Item, true)
            .is_none());
        assert!(!locator.exists(&ResRef::new("nope0000"), ClassId::Item));
    }

    #[test]
    fn created_resources_resolve_afterwards() {
        let dir = tempdir().unwrap();
        let mut locator = DirectoryLocator::new(dir.path());
        let key = ResRef::new("ribald");
        locator.create(&key, ClassId::Store, b"STORV0.0").unwrap();
        assert_eq!(
            locator.resolve(&key, ClassId::Store, false).as_deref(),
            Some(&b"STORV0.0"[..])
        );
    }
}
