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

//! The mutable shop/store data model.

use crate::resref::{Named, ResRef};

/// On-disk dialect of the store format.
///
/// The version is remembered at decode time so a later save can write the
/// same dialect back; freshly constructed stores use the internal
/// superset version.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum StoreVersion {
    /// The internal superset version with every known field and no legacy
    /// padding.
    #[default]
    V0,
    /// The baseline legacy version.
    V10,
    /// Legacy version with an extra signed supply-override per item record
    /// and larger item padding.
    V11,
    /// Legacy version with a 4-byte capacity field and a fixed padding
    /// block appended to the header.
    V90,
}

/// One item record in a store's stock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreItem {
    /// The item resource this record sells.
    pub item: ResRef,
    /// Amount already purchased by the party.
    pub purchased_amount: u16,
    /// Charge counters of the stocked instance.
    pub usages: [u16; 3],
    /// Instance flags (identified, stolen, ...).
    pub flags: u32,
    /// Units in stock; decoders clamp a stored zero up to one.
    pub amount_in_stock: u32,
    /// Signed supply marker: -1 for an infinite supply, a positive value
    /// for a trigger reference, 0 for plain finite stock.
    pub infinite_supply: i32,
}

/// One drink on a tavern's menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreDrink {
    /// Rumour resource attached to the drink.
    pub rumour: ResRef,
    /// String reference of the drink's name.
    pub name_ref: u32,
    /// Price in gold.
    pub price: u32,
    /// Intoxication strength.
    pub strength: u32,
}

/// One cure offered by a temple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreCure {
    /// The spell resource cast as the cure.
    pub cure: ResRef,
    /// Price in gold.
    pub price: u32,
}

/// A decoded store: shop, tavern, temple, or container.
///
/// Stores are mutable game state, owned exclusively by the name-keyed map
/// and flushed back to the backing store on save. `name` is the canonical
/// key the map files the store under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    /// Canonical resource name, stamped at decode time.
    pub name: ResRef,
    /// The on-disk dialect the store was decoded from.
    pub version: StoreVersion,
    /// Store category (shop, tavern, temple, container).
    pub store_type: u32,
    /// String reference of the store's display name.
    pub name_ref: u32,
    /// Behavior flags.
    pub flags: u32,
    /// Markup applied when the store sells, in percent.
    pub sell_markup: u32,
    /// Markup applied when the store buys, in percent.
    pub buy_markup: u32,
    /// Depreciation rate for repeat sales.
    pub depreciation_rate: u32,
    /// Percent chance a theft attempt fails.
    pub steal_failure_chance: u16,
    /// Stock capacity.
    pub capacity: u16,
    /// Lore requirement for identification.
    pub lore: u32,
    /// Price of the identify service.
    pub id_price: u32,
    /// Rumour resource for the tavern service.
    pub rumours_tavern: ResRef,
    /// Rumour resource for the temple service.
    pub rumours_temple: ResRef,
    /// Bitmask of rentable rooms.
    pub available_rooms: u32,
    /// Price of each room tier.
    pub room_prices: [u32; 4],
    /// Item categories this store purchases.
    pub purchased_categories: Vec<u32>,
    /// Drink menu.
    pub drinks: Vec<StoreDrink>,
    /// Cure menu.
    pub cures: Vec<StoreCure>,
    /// Items in stock.
    pub items: Vec<StoreItem>,
}

impl Store {
    /// Creates an empty store under the given canonical name, using the
    /// internal superset version.
    pub fn new(name: ResRef) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}

impl Named for Store {
    fn name(&self) -> ResRef {
        self.name
    }
}
