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

//! Asset class identifiers.

use std::fmt;

/// The class of an asset, selecting which importer decodes its bytes.
///
/// A closed enum stands in for the integer class ids the on-disk formats
/// use; the importer registry is keyed by it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ClassId {
    /// An item definition.
    Item,
    /// A spell definition.
    Spell,
    /// A standalone effect.
    Effect,
    /// Tabular lookup data.
    Table,
    /// A shop/container store.
    Store,
    /// A static image (also the carrier format palettes are extracted from).
    Image,
    /// A sprite-sheet animation.
    Animation,
}

impl ClassId {
    /// The file extension the directory locator resolves this class with.
    pub fn extension(self) -> &'static str {
        match self {
            ClassId::Item => "itm",
            ClassId::Spell => "spl",
            ClassId::Effect => "eff",
            ClassId::Table => "2da",
            ClassId::Store => "sto",
            ClassId::Image => "bmp",
            ClassId::Animation => "bam",
        }
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
