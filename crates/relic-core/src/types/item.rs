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

//! Item definitions.

use crate::resref::{Named, ResRef};

/// A decoded item definition.
///
/// The cache stores items shared and immutable; mutable per-instance state
/// (charges, stacks) lives with the owning inventory, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// Canonical resource name, stamped at decode time.
    pub name: ResRef,
    /// String reference of the identified display name.
    pub name_ref: u32,
    /// Item behavior flags.
    pub flags: u32,
}

impl Named for Item {
    fn name(&self) -> ResRef {
        self.name
    }
}
