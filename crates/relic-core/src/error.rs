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

//! The error taxonomy shared by all cache families.
//!
//! Every variant here is recoverable: missing or malformed assets degrade
//! gracefully (an absent picture, a silent spell failure) and refcount
//! misuse is logged and ignored. The single fatal condition — saving a
//! store that was never cached — is a programming error in the calling
//! layer and panics at the call site instead of appearing here.

use crate::class::ClassId;
use crate::resref::ResRef;
use thiserror::Error;

/// An error produced by a cache lookup, decode, or release.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The backing store has no resource under this key and class.
    #[error("resource '{key}' ({class}) not found in the backing store")]
    NotFound {
        /// The key that was probed.
        key: ResRef,
        /// The asset class that was probed.
        class: ClassId,
    },

    /// No importer is registered for the asset class.
    #[error("no importer registered for '{0}' resources")]
    UnsupportedFormat(ClassId),

    /// The byte stream did not carry the expected signature or was
    /// structurally unreadable.
    #[error("could not open '{key}': {reason}")]
    OpenFailed {
        /// The key of the malformed resource.
        key: ResRef,
        /// What went wrong while opening it.
        reason: String,
    },

    /// The stream opened but its payload could not be decoded.
    #[error("could not decode '{key}': {reason}")]
    DecodeFailed {
        /// The key of the malformed resource.
        key: ResRef,
        /// What went wrong while decoding it.
        reason: String,
    },

    /// A release would have driven a reference count below zero.
    ///
    /// This indicates a caller bug (a double free); the release is ignored
    /// and the cache stays intact.
    #[error("reference count for '{0}' went below zero")]
    RefcountUnderflow(ResRef),

    /// A table handle was out of range or pointed at a released slot.
    #[error("invalid table handle {0}")]
    InvalidHandle(usize),

    /// The caller passed a blank resource key.
    #[error("empty resource key")]
    InvalidKey,

    /// Writing a saved asset back to the backing store failed.
    #[error("could not write '{key}' back to the store: {reason}")]
    WriteFailed {
        /// The key being written back.
        key: ResRef,
        /// What went wrong while writing.
        reason: String,
    },
}
