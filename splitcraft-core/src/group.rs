//! Grouping engine: partitions data rows by key-column value

use indexmap::IndexMap;

use crate::reader::{CellValue, Sheet};

/// One source row, as the full ordered sequence of its column values.
pub type Row = Vec<CellValue>;

/// Distinguishing value of the split column.
///
/// Numbers compare numerically (stored as normalized bit patterns so `1` and
/// `1.0` land in the same group), text compares exactly. Null cells never
/// form a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Text(String),
    Number(u64),
}

impl GroupKey {
    /// Build a key from a cell, `None` for null cells.
    pub fn from_cell(value: &CellValue) -> Option<Self> {
        match value {
            CellValue::Empty => None,
            CellValue::Text(s) => Some(GroupKey::Text(s.clone())),
            CellValue::Number(n) => {
                // Fold -0.0 into 0.0 so the bit patterns agree.
                let n = if *n == 0.0 { 0.0 } else { *n };
                Some(GroupKey::Number(n.to_bits()))
            }
        }
    }

    /// Display label of the key, used for file and sheet naming.
    pub fn label(&self) -> String {
        match self {
            GroupKey::Text(s) => s.clone(),
            GroupKey::Number(bits) => CellValue::Number(f64::from_bits(*bits)).display_text(),
        }
    }
}

/// In-memory partition of data rows keyed by [`GroupKey`].
///
/// Groups iterate in first-seen source order; rows keep their original
/// relative order within each group.
#[derive(Debug, Default)]
pub struct GroupedTable {
    groups: IndexMap<GroupKey, Vec<Row>>,
}

impl GroupedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &Vec<Row>)> {
        self.groups.iter()
    }

    fn push(&mut self, key: GroupKey, row: Row) {
        self.groups.entry(key).or_default().push(row);
    }
}

/// Partition `sheet`'s data rows by the values of the column whose header
/// equals `key_column` exactly.
///
/// A missing column yields an empty table ("nothing to split"). Rows whose
/// key cell is null are silently dropped. Linear in rows × columns.
pub fn group(sheet: &Sheet, key_column: &str) -> GroupedTable {
    let mut table = GroupedTable::new();
    let Some(key_idx) = sheet.column_index(key_column) else {
        return table;
    };

    for row in sheet.data_rows() {
        let key_cell = row.get(key_idx).unwrap_or(&CellValue::Empty);
        if let Some(key) = GroupKey::from_cell(key_cell) {
            table.push(key, row.clone());
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    fn fixture_sheet() -> Sheet {
        Sheet {
            name: "Sheet1".to_string(),
            rows: vec![
                vec![text("ID"), text("Dept")],
                vec![num(1.0), text("A")],
                vec![num(2.0), text("B")],
                vec![num(3.0), text("A")],
            ],
        }
    }

    #[test]
    fn test_partition_preserves_row_order() {
        let table = group(&fixture_sheet(), "Dept");
        assert_eq!(table.len(), 2);

        let groups: Vec<_> = table.iter().collect();
        assert_eq!(groups[0].0.label(), "A");
        assert_eq!(groups[1].0.label(), "B");

        let a_rows = groups[0].1;
        assert_eq!(a_rows.len(), 2);
        assert_eq!(a_rows[0][0], num(1.0));
        assert_eq!(a_rows[1][0], num(3.0));
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_row_conservation() {
        let table = group(&fixture_sheet(), "Dept");
        let total: usize = table.iter().map(|(_, rows)| rows.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_missing_column_yields_empty_table() {
        let table = group(&fixture_sheet(), "Region");
        assert!(table.is_empty());
    }

    #[test]
    fn test_null_keys_are_dropped() {
        let mut sheet = fixture_sheet();
        sheet.rows.push(vec![num(4.0), CellValue::Empty]);

        let table = group(&sheet, "Dept");
        let total: usize = table.iter().map(|(_, rows)| rows.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_numeric_and_text_keys_stay_distinct() {
        let sheet = Sheet {
            name: "Sheet1".to_string(),
            rows: vec![
                vec![text("Key")],
                vec![num(1.0)],
                vec![text("1")],
            ],
        };
        let table = group(&sheet, "Key");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_numeric_keys_compare_numerically() {
        assert_eq!(
            GroupKey::from_cell(&num(0.0)),
            GroupKey::from_cell(&num(-0.0))
        );
        assert_eq!(
            GroupKey::from_cell(&num(7.0)),
            GroupKey::from_cell(&num(7.0))
        );
    }

    #[test]
    fn test_short_rows_count_as_null_key() {
        let sheet = Sheet {
            name: "Sheet1".to_string(),
            rows: vec![
                vec![text("ID"), text("Dept")],
                vec![num(1.0)],
                vec![num(2.0), text("B")],
            ],
        };
        let table = group(&sheet, "Dept");
        assert_eq!(table.len(), 1);
    }
}
