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

//! End-to-end flow over a real game directory: files on disk, the built-in
//! codecs, and the write-back path for mutated stores.

use anyhow::Result;
use relic_core::types::{Store, StoreItem, StoreVersion};
use relic_core::{AssetExporter, ResRef};
use relic_io::StoreImporter;
use relic_runtime::ResourceManager;
use tempfile::tempdir;

fn seed_store(dir: &std::path::Path, name: &str) -> Result<()> {
    let mut store = Store::new(ResRef::new(name));
    store.version = StoreVersion::V10;
    store.store_type = 2;
    store.sell_markup = 150;
    store.buy_markup = 50;
    store.items.push(StoreItem {
        item: ResRef::new("sw1h01"),
        amount_in_stock: 3,
        ..StoreItem::default()
    });
    let bytes = StoreImporter.export(&store)?;
    std::fs::write(dir.join(format!("{name}.sto")), bytes)?;
    Ok(())
}

#[test]
fn test_tables_load_from_disk() -> Result<()> {
    let dir = tempdir()?;
    std::fs::write(
        dir.path().join("racefeat.2da"),
        "2DA V1.0\n*\nVALUE BONUS\nHUMAN 0 2\nELF 1\n",
    )?;

    let mut manager = ResourceManager::with_game_directory(dir.path());
    let handle = manager.load_table(ResRef::new("RACEFEAT"), false)?;
    let table = manager.get_table(handle).expect("freshly loaded table");
    assert_eq!(table.lookup("human", "bonus"), "2");
    assert_eq!(table.lookup("ELF", "BONUS"), "*");
    Ok(())
}

#[test]
fn test_store_edits_survive_a_save_round_trip() -> Result<()> {
    let dir = tempdir()?;
    seed_store(dir.path(), "ribald")?;
    let key = ResRef::new("ribald");

    {
        let mut manager = ResourceManager::with_game_directory(dir.path());
        let store = manager.get_store(key)?;
        assert_eq!(store.sell_markup, 150);
        assert_eq!(store.items.len(), 1);
        store.items[0].amount_in_stock = 2;
        store.sell_markup = 200;
        manager.save_all_stores()?;
        assert_eq!(manager.cached_stores(), 0);
    }

    // A fresh session sees the flushed state, same on-disk dialect.
    let mut manager = ResourceManager::with_game_directory(dir.path());
    let store = manager.get_store(key)?;
    assert_eq!(store.version, StoreVersion::V10);
    assert_eq!(store.sell_markup, 200);
    assert_eq!(store.items[0].amount_in_stock, 2);
    Ok(())
}

#[test]
fn test_missing_files_surface_as_not_found() -> Result<()> {
    let dir = tempdir()?;
    let mut manager = ResourceManager::with_game_directory(dir.path());
    assert!(manager.load_table(ResRef::new("absent"), true).is_err());
    assert!(manager.get_store(ResRef::new("absent")).is_err());
    Ok(())
}
