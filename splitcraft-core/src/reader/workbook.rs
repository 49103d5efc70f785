//! Workbook data structures

use std::path::PathBuf;

/// Represents a loaded source workbook
#[derive(Debug, Clone)]
pub struct Workbook {
    pub path: PathBuf,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get all sheet names
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// A worksheet as a dense grid anchored at A1.
///
/// Row 0 is the header row; rows 1.. are data. Cells outside the used range
/// are padded with [`CellValue::Empty`] so positions always match the
/// on-screen grid.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// The full header row (row 0), empty slice for a blank sheet.
    pub fn header_row(&self) -> &[CellValue] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ordered non-empty header values. Blank header cells are skipped,
    /// duplicate names are kept as they appear.
    pub fn header_values(&self) -> Vec<String> {
        self.header_row()
            .iter()
            .filter(|cell| !cell.is_empty())
            .map(CellValue::display_text)
            .collect()
    }

    /// Index of the first header cell whose displayed value equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header_row()
            .iter()
            .position(|cell| !cell.is_empty() && cell.display_text() == name)
    }

    /// All rows below the header, in source order.
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        if self.rows.len() > 1 { &self.rows[1..] } else { &[] }
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The value as it would display in a cell. Integral numbers render
    /// without a decimal point, empty cells as the empty string.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}
