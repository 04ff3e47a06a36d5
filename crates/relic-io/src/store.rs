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

//! The binary store codec (`STOR` signature family).
//!
//! Four dialects share one layout: a fixed header followed by four
//! variable-length sections (drinks, cures, purchased categories, items)
//! at header-recorded offsets.
//!
//! - `STORV1.0` — baseline legacy layout.
//! - `STORV1.1` — item records carry an extra signed supply-override
//!   dword plus 56 bytes of padding.
//! - `STORV9.0` — the header capacity field widens to a dword and an
//!   80-byte padding block follows the header.
//! - `STORV0.0` — internal superset, no legacy padding quirks.
//!
//! Reads honor the offsets stored in the header; writes recompute every
//! offset from the section counts first, never trusting stale values.
//! Padding is normalized to zero on write.

use crate::stream::{StreamError, StreamReader, StreamWriter};
use relic_core::types::{Store, StoreCure, StoreDrink, StoreItem, StoreVersion};
use relic_core::{AssetExporter, AssetImporter, ResRef, ResourceError};

const HEADER_SIZE: u32 = 156;
// Dword capacity plus the original 80-byte filler block.
const V90_HEADER_EXTRA: u32 = 84;
const DRINK_SIZE: u32 = 20;
const CURE_SIZE: u32 = 12;
const ITEM_SIZE: u32 = 28;
const V11_ITEM_EXTRA: usize = 56;

fn signature(version: StoreVersion) -> &'static [u8; 8] {
    match version {
        StoreVersion::V0 => b"STORV0.0",
        StoreVersion::V10 => b"STORV1.0",
        StoreVersion::V11 => b"STORV1.1",
        StoreVersion::V90 => b"STORV9.0",
    }
}

fn version_from_signature(sig: &[u8; 8]) -> Option<StoreVersion> {
    match sig {
        b"STORV0.0" => Some(StoreVersion::V0),
        b"STORV1.0" => Some(StoreVersion::V10),
        b"STORV1.1" => Some(StoreVersion::V11),
        b"STORV9.0" => Some(StoreVersion::V90),
        _ => None,
    }
}

/// Section offsets, derived purely from the section counts.
struct Layout {
    drinks: u32,
    cures: u32,
    categories: u32,
    items: u32,
}

impl Layout {
    fn compute(store: &Store) -> Self {
        let header = match store.version {
            StoreVersion::V90 => HEADER_SIZE + V90_HEADER_EXTRA,
            _ => HEADER_SIZE,
        };
        let drinks = header;
        let cures = drinks + store.drinks.len() as u32 * DRINK_SIZE;
        let categories = cures + store.cures.len() as u32 * CURE_SIZE;
        let items = categories + store.purchased_categories.len() as u32 * 4;
        Self {
            drinks,
            cures,
            categories,
            items,
        }
    }
}

/// Importer/exporter for the store format.
#[derive(Default)]
pub struct StoreImporter;

impl StoreImporter {
    fn read_item(
        reader: &mut StreamReader<'_>,
        version: StoreVersion,
    ) -> Result<StoreItem, StreamError> {
        let mut item = StoreItem {
            item: reader.read_resref()?,
            purchased_amount: reader.read_u16()?,
            ..StoreItem::default()
        };
        for usage in &mut item.usages {
            *usage = reader.read_u16()?;
        }
        item.flags = reader.read_u32()?;
        item.amount_in_stock = reader.read_u32()?;
        // A zero stock count would make the record unsellable; clamp it up,
        // matching what legacy data expects.
        if item.amount_in_stock == 0 {
            item.amount_in_stock = 1;
        }
        item.infinite_supply = reader.read_i32()?;

        match version {
            StoreVersion::V11 => {
                if item.infinite_supply != 0 {
                    item.infinite_supply = -1;
                }
                // This dialect stores a signed trigger reference after the
                // infinite-supply marker; a positive value overrides it.
                let supply_override = reader.read_i32()?;
                if supply_override > 0 {
                    item.infinite_supply = supply_override;
                }
                reader.skip(V11_ITEM_EXTRA)?;
            }
            // The superset dialect keeps trigger references directly in
            // the supply field.
            StoreVersion::V0 => {}
            _ => {
                if item.infinite_supply != 0 {
                    item.infinite_supply = -1;
                }
            }
        }
        Ok(item)
    }

    fn read_drink(reader: &mut StreamReader<'_>) -> Result<StoreDrink, StreamError> {
        Ok(StoreDrink {
            rumour: reader.read_resref()?,
            name_ref: reader.read_u32()?,
            price: reader.read_u32()?,
            strength: reader.read_u32()?,
        })
    }

    fn read_cure(reader: &mut StreamReader<'_>) -> Result<StoreCure, StreamError> {
        Ok(StoreCure {
            cure: reader.read_resref()?,
            price: reader.read_u32()?,
        })
    }

    fn write_item(writer: &mut StreamWriter, item: &StoreItem, version: StoreVersion) {
        writer.write_resref(item.item);
        writer.write_u16(item.purchased_amount);
        for usage in item.usages {
            writer.write_u16(usage);
        }
        writer.write_u32(item.flags);
        writer.write_u32(item.amount_in_stock);
        writer.write_i32(item.infinite_supply);
        if version == StoreVersion::V11 {
            writer.write_i32(item.infinite_supply);
            writer.write_zeros(V11_ITEM_EXTRA);
        }
    }
}

impl AssetImporter<Store> for StoreImporter {
    fn import(&self, bytes: &[u8], name: &ResRef) -> Result<Store, ResourceError> {
        let fail = |e: StreamError| ResourceError::DecodeFailed {
            key: *name,
            reason: e.to_string(),
        };

        let mut reader = StreamReader::new(bytes);
        let mut sig = [0u8; 8];
        reader.read_exact(&mut sig).map_err(fail)?;
        let Some(version) = version_from_signature(&sig) else {
            log::warn!(
                "'{name}' is not a valid store file (signature {:?})",
                String::from_utf8_lossy(&sig)
            );
            return Err(ResourceError::OpenFailed {
                key: *name,
                reason: format!("bad signature {:?}", String::from_utf8_lossy(&sig)),
            });
        };

        let mut store = Store::new(*name);
        store.version = version;
        store.store_type = reader.read_u32().map_err(fail)?;
        store.name_ref = reader.read_u32().map_err(fail)?;
        store.flags = reader.read_u32().map_err(fail)?;
        store.sell_markup = reader.read_u32().map_err(fail)?;
        store.buy_markup = reader.read_u32().map_err(fail)?;
        store.depreciation_rate = reader.read_u32().map_err(fail)?;
        store.steal_failure_chance = reader.read_u16().map_err(fail)?;
        store.capacity = reader.read_u16().map_err(fail)?;
        reader.skip(8).map_err(fail)?;
        let categories_offset = reader.read_u32().map_err(fail)?;
        let categories_count = reader.read_u32().map_err(fail)?;
        let items_offset = reader.read_u32().map_err(fail)?;
        let items_count = reader.read_u32().map_err(fail)?;
        store.lore = reader.read_u32().map_err(fail)?;
        store.id_price = reader.read_u32().map_err(fail)?;
        store.rumours_tavern = reader.read_resref().map_err(fail)?;
        let drinks_offset = reader.read_u32().map_err(fail)?;
        let drinks_count = reader.read_u32().map_err(fail)?;
        store.rumours_temple = reader.read_resref().map_err(fail)?;
        store.available_rooms = reader.read_u32().map_err(fail)?;
        for price in &mut store.room_prices {
            *price = reader.read_u32().map_err(fail)?;
        }
        let cures_offset = reader.read_u32().map_err(fail)?;
        let cures_count = reader.read_u32().map_err(fail)?;
        reader.skip(36).map_err(fail)?;

        if version == StoreVersion::V90 {
            // This dialect widens capacity to a dword after the shared
            // header, shadowing the word-sized field.
            store.capacity = reader.read_u32().map_err(fail)? as u16;
            reader.skip(80).map_err(fail)?;
        }

        reader.seek(categories_offset as usize).map_err(fail)?;
        for _ in 0..categories_count {
            store
                .purchased_categories
                .push(reader.read_u32().map_err(fail)?);
        }

        reader.seek(items_offset as usize).map_err(fail)?;
        for _ in 0..items_count {
            store
                .items
                .push(Self::read_item(&mut reader, version).map_err(fail)?);
        }

        reader.seek(drinks_offset as usize).map_err(fail)?;
        for _ in 0..drinks_count {
            store.drinks.push(Self::read_drink(&mut reader).map_err(fail)?);
        }

        reader.seek(cures_offset as usize).map_err(fail)?;
        for _ in 0..cures_count {
            store.cures.push(Self::read_cure(&mut reader).map_err(fail)?);
        }

        Ok(store)
    }
}

impl AssetExporter<Store> for StoreImporter {
    fn export(&self, store: &Store) -> Result<Vec<u8>, ResourceError> {
        // Offsets are always derived from the counts; header values from a
        // previous decode are never reused.
        let layout = Layout::compute(store);
        let version = store.version;
        let mut writer = StreamWriter::new();

        writer.write_bytes(signature(version));
        writer.write_u32(store.store_type);
        writer.write_u32(store.name_ref);
        writer.write_u32(store.flags);
        writer.write_u32(store.sell_markup);
        writer.write_u32(store.buy_markup);
        writer.write_u32(store.depreciation_rate);
        writer.write_u16(store.steal_failure_chance);
        match version {
            StoreVersion::V10 | StoreVersion::V0 => writer.write_u16(store.capacity),
            // V1.1 never stored capacity; V9.0 stores it as a dword below.
            _ => writer.write_u16(0),
        }
        writer.write_zeros(8);
        writer.write_u32(layout.categories);
        writer.write_u32(store.purchased_categories.len() as u32);
        writer.write_u32(layout.items);
        writer.write_u32(store.items.len() as u32);
        writer.write_u32(store.lore);
        writer.write_u32(store.id_price);
        writer.write_resref(store.rumours_tavern);
        writer.write_u32(layout.drinks);
        writer.write_u32(store.drinks.len() as u32);
        writer.write_resref(store.rumours_temple);
        writer.write_u32(store.available_rooms);
        for price in store.room_prices {
            writer.write_u32(price);
        }
        writer.write_u32(layout.cures);
        writer.write_u32(store.cures.len() as u32);
        writer.write_zeros(36);
        if version == StoreVersion::V90 {
            writer.write_u32(store.capacity as u32);
            writer.write_zeros(80);
        }

        debug_assert_eq!(writer.position() as u32, layout.drinks);
        for drink in &store.drinks {
            writer.write_resref(drink.rumour);
            writer.write_u32(drink.name_ref);
            writer.write_u32(drink.price);
            writer.write_u32(drink.strength);
        }

        debug_assert_eq!(writer.position() as u32, layout.cures);
        for cure in &store.cures {
            writer.write_resref(cure.cure);
            writer.write_u32(cure.price);
        }

        debug_assert_eq!(writer.position() as u32, layout.categories);
        for category in &store.purchased_categories {
            writer.write_u32(*category);
        }

        debug_assert_eq!(writer.position() as u32, layout.items);
        for item in &store.items {
            Self::write_item(&mut writer, item, version);
        }

        Ok(writer.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn importer() -> StoreImporter {
        StoreImporter
    }

    fn sample(version: StoreVersion) -> Store {
        let mut store = Store::new(ResRef::new("ribald"));
        store.version = version;
        store.store_type = 1;
        store.name_ref = 4242;
        store.flags = 0x0B;
        store.sell_markup = 125;
        store.buy_markup = 50;
        store.depreciation_rate = 10;
        store.steal_failure_chance = 75;
        store.lore = 40;
        store.id_price = 100;
        store.rumours_tavern = ResRef::new("tavrumor");
        store.rumours_temple = ResRef::new("tmprumor");
        store.available_rooms = 0b0111;
        store.room_prices = [2, 10, 60, 200];
        store.purchased_categories = vec![2, 4, 15];
        store.drinks.push(StoreDrink {
            rumour: ResRef::new("drnkrumr"),
            name_ref: 77,
            price: 5,
            strength: 3,
        });
        store.cures.push(StoreCure {
            cure: ResRef::new("sppr103"),
            price: 50,
        });
        store.items.push(StoreItem {
            item: ResRef::new("sw1h01"),
            purchased_amount: 0,
            usages: [1, 0, 0],
            flags: 1,
            amount_in_stock: 3,
            infinite_supply: 0,
        });
        store
    }

    #[test]
    fn rejects_unknown_signatures() {
        let err = importer()
            .import(b"NOTASTOREATALL......", &ResRef::new("bad"))
            .unwrap_err();
        assert!(matches!(err, ResourceError::OpenFailed { .. }));
    }

    #[test]
    fn rejects_truncated_headers() {
        let err = importer()
            .import(b"STORV1.0\x01\x00", &ResRef::new("short"))
            .unwrap_err();
        assert!(matches!(err, ResourceError::DecodeFailed { .. }));
    }

    #[test]
    fn v10_round_trip_preserves_every_field() {
        let original = sample(StoreVersion::V10);
        let bytes = importer().export(&original).unwrap();
        let decoded = importer().import(&bytes, &ResRef::new("RIBALD")).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn v0_round_trip_preserves_trigger_references() {
        let mut original = sample(StoreVersion::V0);
        // Only the superset dialect keeps positive trigger refs verbatim.
        original.items[0].infinite_supply = 1234;
        let bytes = importer().export(&original).unwrap();
        let decoded = importer().import(&bytes, &ResRef::new("ribald")).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn v11_round_trip_for_the_tavern_and_temple_sections() {
        let mut original = sample(StoreVersion::V11);
        // V1.1 does not store capacity; keep the model consistent.
        original.capacity = 0;
        original.items.clear();
        let bytes = importer().export(&original).unwrap();

        let decoded = importer().import(&bytes, &ResRef::new("ribald")).unwrap();
        assert_eq!(decoded.store_type, 1);
        assert_eq!(decoded.sell_markup, 125);
        assert_eq!(decoded.drinks, original.drinks);
        assert_eq!(decoded.cures, original.cures);
        assert_eq!(decoded, original);
    }

    #[test]
    fn v11_item_records_are_88_bytes_and_round_trip() {
        let mut original = sample(StoreVersion::V11);
        original.capacity = 0;
        original.items[0].infinite_supply = 555; // trigger reference
        let bytes = importer().export(&original).unwrap();

        let expected_len = HEADER_SIZE + DRINK_SIZE + CURE_SIZE + 3 * 4 + (ITEM_SIZE + 60);
        assert_eq!(bytes.len() as u32, expected_len);

        let decoded = importer().import(&bytes, &ResRef::new("ribald")).unwrap();
        assert_eq!(decoded.items[0].infinite_supply, 555);
        assert_eq!(decoded, original);
    }

    #[test]
    fn v90_header_carries_the_wide_capacity() {
        let mut original = sample(StoreVersion::V90);
        original.capacity = 400;
        let bytes = importer().export(&original).unwrap();

        // Header grows by the dword capacity plus the 80-byte filler.
        let header = HEADER_SIZE + V90_HEADER_EXTRA;
        let expected_len = header + DRINK_SIZE + CURE_SIZE + 3 * 4 + ITEM_SIZE;
        assert_eq!(bytes.len() as u32, expected_len);

        let decoded = importer().import(&bytes, &ResRef::new("ribald")).unwrap();
        assert_eq!(decoded.capacity, 400);
        assert_eq!(decoded, original);
    }

    #[test]
    fn infinite_supply_marker_normalizes_to_minus_one() {
        let mut original = sample(StoreVersion::V10);
        original.items[0].infinite_supply = -1;
        let bytes = importer().export(&original).unwrap();
        let decoded = importer().import(&bytes, &ResRef::new("ribald")).unwrap();
        assert_eq!(decoded.items[0].infinite_supply, -1);
    }

    #[test]
    fn zero_stock_is_clamped_up_on_decode() {
        let mut original = sample(StoreVersion::V10);
        original.items[0].amount_in_stock = 0;
        let bytes = importer().export(&original).unwrap();
        let decoded = importer().import(&bytes, &ResRef::new("ribald")).unwrap();
        assert_eq!(decoded.items[0].amount_in_stock, 1);
    }

    #[test]
    fn offsets_are_recomputed_from_counts_on_write() {
        let mut store = sample(StoreVersion::V10);
        // Grow the sections, then re-export: the section data must still
        // land exactly where the header claims.
        store.drinks.push(StoreDrink::default());
        store.cures.push(StoreCure::default());
        let bytes = importer().export(&store).unwrap();

        let mut reader = StreamReader::new(&bytes);
        reader.seek(8 + 6 * 4 + 2 + 2 + 8).unwrap();
        let categories_offset = reader.read_u32().unwrap();
        let categories_count = reader.read_u32().unwrap();
        let items_offset = reader.read_u32().unwrap();
        assert_eq!(categories_count, 3);
        assert_eq!(
            categories_offset,
            HEADER_SIZE + 2 * DRINK_SIZE + 2 * CURE_SIZE
        );
        assert_eq!(items_offset, categories_offset + 3 * 4);

        let decoded = importer().import(&bytes, &ResRef::new("ribald")).unwrap();
        assert_eq!(decoded.drinks.len(), 2);
        assert_eq!(decoded.cures.len(), 2);
        assert_eq!(decoded.items.len(), 1);
    }

    #[test]
    fn decode_stamps_the_canonical_name() {
        let bytes = importer().export(&sample(StoreVersion::V10)).unwrap();
        let decoded = importer().import(&bytes, &ResRef::new("RIBALD")).unwrap();
        assert_eq!(decoded.name, ResRef::new("ribald"));
    }
}
