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

//! The text table codec (`2DA V1.0`).
//!
//! A signature line, a default-value line, a column-name line, then one
//! row per line with the row name as the first token. Tokens are
//! whitespace separated; blank lines are skipped.

use relic_core::types::Table;
use relic_core::{AssetImporter, ResRef, ResourceError};

/// Importer for whitespace-separated lookup tables.
#[derive(Default)]
pub struct TableImporter;

impl AssetImporter<Table> for TableImporter {
    fn import(&self, bytes: &[u8], name: &ResRef) -> Result<Table, ResourceError> {
        let text = std::str::from_utf8(bytes).map_err(|e| ResourceError::OpenFailed {
            key: *name,
            reason: format!("not valid text: {e}"),
        })?;

        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let signature = lines.next().unwrap_or("");
        if !signature.eq_ignore_ascii_case("2da v1.0") {
            return Err(ResourceError::OpenFailed {
                key: *name,
                reason: format!("bad table signature {signature:?}"),
            });
        }

        let default = lines
            .next()
            .and_then(|l| l.split_whitespace().next())
            .unwrap_or("")
            .to_string();

        let column_names: Vec<String> = lines
            .next()
            .map(|l| l.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        let mut row_names = Vec::new();
        let mut cells = Vec::new();
        for line in lines {
            let mut tokens = line.split_whitespace();
            let Some(row_name) = tokens.next() else {
                continue;
            };
            row_names.push(row_name.to_string());
            cells.push(tokens.map(str::to_string).collect());
        }

        Ok(Table::new(*name, default, column_names, row_names, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RACEFEAT: &str = "2DA V1.0\n\
                            *\n\
                            VALUE   BONUS\n\
                            HUMAN   0   2\n\
                            ELF     1\n\
                            \n\
                            DWARF   1   4\n";

    #[test]
    fn parses_rows_columns_and_default() {
        let table = TableImporter
            .import(RACEFEAT.as_bytes(), &ResRef::new("racefeat"))
            .unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.default_value(), "*");
        assert_eq!(table.lookup("dwarf", "bonus"), "4");
        // Short row: falls back to the default.
        assert_eq!(table.lookup("ELF", "BONUS"), "*");
    }

    #[test]
    fn rejects_a_missing_signature() {
        let err = TableImporter
            .import(b"VALUE BONUS\nHUMAN 0 2\n", &ResRef::new("racefeat"))
            .unwrap_err();
        assert!(matches!(err, ResourceError::OpenFailed { .. }));
    }

    #[test]
    fn rejects_non_utf8_payloads() {
        let err = TableImporter
            .import(&[0xFF, 0xFE, 0x00], &ResRef::new("racefeat"))
            .unwrap_err();
        assert!(matches!(err, ResourceError::OpenFailed { .. }));
    }

    #[test]
    fn tolerates_an_empty_body() {
        let table = TableImporter
            .import(b"2DA V1.0\n0\nCOL\n", &ResRef::new("empty"))
            .unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.lookup("anything", "COL"), "0");
    }
}
