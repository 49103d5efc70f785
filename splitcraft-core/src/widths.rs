//! Column width estimation for output sheets
//!
//! Widths derive from display-string lengths over a capped sample of rows
//! (header included). Rows beyond the sample are not inspected even if they
//! hold longer values; this is a deliberate accuracy/performance trade-off,
//! not an oversight.

use crate::config::SplitterConfig;
use crate::group::Row;
use crate::reader::CellValue;

/// Estimate one width per column for a fully populated output sheet.
///
/// Width = `(max_display_len + padding) * factor`, with the maximum taken
/// over at most `width_sample_rows` rows starting at the header.
pub fn estimate_widths(header: &[CellValue], rows: &[Row], config: &SplitterConfig) -> Vec<f64> {
    let columns = rows
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(header.len());
    let mut max_len = vec![0usize; columns];

    let sample = std::iter::once(header)
        .chain(rows.iter().map(Vec::as_slice))
        .take(config.width_sample_rows);
    for row in sample {
        for (col, cell) in row.iter().enumerate() {
            let len = cell.display_text().chars().count();
            if len > max_len[col] {
                max_len[col] = len;
            }
        }
    }

    max_len
        .into_iter()
        .map(|len| (len as f64 + config.width_padding) * config.width_factor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_width_formula() {
        let header = vec![text("ID")];
        let rows = vec![vec![text("abcdef")]];
        let widths = estimate_widths(&header, &rows, &SplitterConfig::default());
        assert_eq!(widths, vec![(6.0 + 2.0) * 1.5]);
    }

    #[test]
    fn test_empty_cells_count_as_zero_length() {
        let header = vec![CellValue::Empty];
        let widths = estimate_widths(&header, &[], &SplitterConfig::default());
        assert_eq!(widths, vec![2.0 * 1.5]);
    }

    #[test]
    fn test_rows_beyond_sample_are_ignored() {
        let header = vec![text("H")];
        let mut rows: Vec<Row> = (0..98).map(|_| vec![text("x")]).collect();
        // Row 100 of the sheet (header + 99 data rows); the sample cap of
        // 100 stops right after it.
        rows.push(vec![text("yy")]);
        rows.push(vec![text("a-much-longer-value-past-the-cap")]);

        let widths = estimate_widths(&header, &rows, &SplitterConfig::default());
        assert_eq!(widths, vec![(2.0 + 2.0) * 1.5]);
    }

    #[test]
    fn test_ragged_rows_use_widest_row() {
        let header = vec![text("A")];
        let rows = vec![vec![text("A"), text("spill")]];
        let widths = estimate_widths(&header, &rows, &SplitterConfig::default());
        assert_eq!(widths.len(), 2);
        assert_eq!(widths[1], (5.0 + 2.0) * 1.5);
    }
}
