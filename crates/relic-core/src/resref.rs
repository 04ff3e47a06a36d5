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

//! The fixed-width, case-insensitive resource key used by every cache.

use std::fmt;

/// Maximum length of a resource key, in bytes.
pub const RESREF_LEN: usize = 8;

/// An 8-byte, case-insensitive resource name.
///
/// Construction canonicalizes the name: it is truncated to eight bytes and
/// lower-cased, so two keys differing only in case compare (and hash) equal.
/// The canonical form is also what callers observe through [`ResRef::as_str`],
/// which lets a freshly decoded asset report exactly the key it is cached
/// under.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ResRef {
    bytes: [u8; RESREF_LEN],
    len: u8,
}

impl ResRef {
    /// Creates a key from a string, truncating to eight bytes and
    /// lower-casing ASCII characters.
    pub fn new(name: &str) -> Self {
        let mut bytes = [0u8; RESREF_LEN];
        let mut len = 0;
        for &b in name.as_bytes().iter().take(RESREF_LEN) {
            bytes[len] = b.to_ascii_lowercase();
            len += 1;
        }
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Creates a key from raw on-disk bytes (NUL padded), as binary formats
    /// store them.
    pub fn from_bytes(raw: &[u8; RESREF_LEN]) -> Self {
        let mut bytes = [0u8; RESREF_LEN];
        let mut len = 0;
        for &b in raw {
            if b == 0 {
                break;
            }
            bytes[len] = b.to_ascii_lowercase();
            len += 1;
        }
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// The canonical (lower-case) form of the key.
    pub fn as_str(&self) -> &str {
        // Canonicalization only maps ASCII; anything else is stored verbatim
        // and keys are ASCII in practice.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }

    /// The key padded to eight bytes with NULs, as binary formats write it.
    pub fn to_bytes(self) -> [u8; RESREF_LEN] {
        self.bytes
    }

    /// True for the blank key. A blank key is never a valid cache key.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<&str> for ResRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ResRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ResRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResRef({:?})", self.as_str())
    }
}

/// Implemented by assets that carry their own canonical resource name.
///
/// The name-keyed map inserts values under the name the value itself
/// reports, so the map key and the asset's self-reported name can never
/// diverge.
pub trait Named {
    /// The canonical resource name of this asset.
    fn name(&self) -> ResRef;
}
