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

//! Parsed tabular lookup data.

use crate::resref::ResRef;

/// A parsed lookup table: named rows and columns over string cells.
///
/// Cells outside the stored matrix (short rows, unknown names) fall back
/// to the table's default value, so lookups never fail — missing data
/// degrades to the default instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    name: ResRef,
    default: String,
    column_names: Vec<String>,
    row_names: Vec<String>,
    cells: Vec<Vec<String>>,
}

impl Table {
    /// Assembles a parsed table. `cells` is row-major; short rows are
    /// padded with the default value at query time.
    pub fn new(
        name: ResRef,
        default: String,
        column_names: Vec<String>,
        row_names: Vec<String>,
        cells: Vec<Vec<String>>,
    ) -> Self {
        Self {
            name,
            default,
            column_names,
            row_names,
            cells,
        }
    }

    /// The resource name this table was loaded under.
    pub fn name(&self) -> ResRef {
        self.name
    }

    /// The default value used for absent cells.
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.row_names.len()
    }

    /// Number of named columns.
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// The name of row `index`, if in range.
    pub fn row_name(&self, index: usize) -> Option<&str> {
        self.row_names.get(index).map(String::as_str)
    }

    /// The name of column `index`, if in range.
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.column_names.get(index).map(String::as_str)
    }

    /// Case-insensitive row lookup by name.
    pub fn find_row(&self, name: &str) -> Option<usize> {
        self.row_names.iter().position(|r| r.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive column lookup by name.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.column_names
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }

    /// The cell at `(row, col)`, or the default value when the cell is
    /// absent (short row or out-of-range index).
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or(&self.default)
    }

    /// Named variant of [`Table::cell`]; unknown names yield the default.
    pub fn lookup(&self, row: &str, col: &str) -> &str {
        match (self.find_row(row), self.find_column(col)) {
            (Some(r), Some(c)) => self.cell(r, c),
            _ => &self.default,
        }
    }

    /// The cell at `(row, col)` parsed as an integer, falling back to
    /// `fallback` for non-numeric cells.
    pub fn cell_as_i64(&self, row: usize, col: usize, fallback: i64) -> i64 {
        self.cell(row, col).parse().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            ResRef::new("racefeat"),
            "*".to_string(),
            vec!["VALUE".into(), "BONUS".into()],
            vec!["HUMAN".into(), "ELF".into()],
            vec![vec!["0".into(), "2".into()], vec!["1".into()]],
        )
    }

    #[test]
    fn named_lookup_is_case_insensitive() {
        let t = sample();
        assert_eq!(t.lookup("elf", "value"), "1");
        assert_eq!(t.lookup("HUMAN", "bonus"), "2");
    }

    #[test]
    fn short_rows_fall_back_to_default() {
        let t = sample();
        assert_eq!(t.lookup("ELF", "BONUS"), "*");
        assert_eq!(t.cell(7, 0), "*");
    }

    #[test]
    fn numeric_cells_parse_with_fallback() {
        let t = sample();
        assert_eq!(t.cell_as_i64(0, 1, 0), 2);
        assert_eq!(t.cell_as_i64(1, 1, -1), -1);
    }
}
