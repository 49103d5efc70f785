//! Source workbook reader using calamine
//!
//! Only cached values are read: formula cells arrive as their last computed
//! value. The underlying file handle lives for the duration of this call and
//! is released on every exit path when the calamine reader drops.

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::path::Path;

pub mod workbook;

pub use workbook::{CellValue, Sheet, Workbook};

use crate::error::SplitError;

/// Read a workbook from a file path
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook, SplitError> {
    let path = path.as_ref();
    let mut excel: Sheets<_> = open_workbook_auto(path).map_err(|source| SplitError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sheets = Vec::new();
    for sheet_name in excel.sheet_names() {
        let range = excel
            .worksheet_range(&sheet_name)
            .map_err(|source| SplitError::Load {
                path: path.to_path_buf(),
                source,
            })?;
        sheets.push(parse_sheet(&sheet_name, &range));
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

fn parse_sheet(name: &str, range: &Range<Data>) -> Sheet {
    let Some(end) = range.end() else {
        return Sheet {
            name: name.to_string(),
            rows: Vec::new(),
        };
    };
    let start = range.start().unwrap_or((0, 0));

    // Pad from A1 so row/column positions match the visible grid even when
    // the used range starts further in.
    let mut rows = vec![vec![CellValue::Empty; end.1 as usize + 1]; end.0 as usize + 1];
    for (rel_row, rel_col, data) in range.used_cells() {
        let row = start.0 as usize + rel_row;
        let col = start.1 as usize + rel_col;
        rows[row][col] = parse_cell_value(data);
    }

    Sheet {
        name: name.to_string(),
        rows,
    }
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => CellValue::Text(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
