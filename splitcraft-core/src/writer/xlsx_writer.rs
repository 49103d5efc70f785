//! Worksheet emission via rust_xlsxwriter

use rust_xlsxwriter::{Format, Worksheet, XlsxError};

use crate::config::SplitterConfig;
use crate::group::Row;
use crate::numtext::needs_text_format;
use crate::reader::CellValue;
use crate::widths::estimate_widths;

/// Fill a worksheet with a header row plus data rows, then size its columns.
///
/// `format_header` controls whether the numeric-text rule also applies to
/// header cells (it does for per-group files, not for the multi-sheet
/// workbook, where the header is a re-derived plain row).
pub fn populate_sheet(
    worksheet: &mut Worksheet,
    header: &[CellValue],
    rows: &[Row],
    format_header: bool,
    config: &SplitterConfig,
) -> Result<(), XlsxError> {
    // `@` keeps the full digit string visible instead of numeric display.
    let text_format = Format::new().set_num_format("@");

    for (col, cell) in header.iter().enumerate() {
        write_cell(worksheet, 0, col as u16, cell, format_header, &text_format)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            write_cell(
                worksheet,
                row_idx as u32 + 1,
                col as u16,
                cell,
                true,
                &text_format,
            )?;
        }
    }

    for (col, width) in estimate_widths(header, rows, config).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    Ok(())
}

/// How one cell lands in the output sheet.
#[derive(Debug, Clone, PartialEq)]
enum CellWrite<'a> {
    Blank,
    Text(&'a str),
    Number(f64),
    /// Numeric value kept, but displayed through the plain-text format.
    NumberAsText(f64),
}

fn plan_cell(value: &CellValue, apply_text_rule: bool) -> CellWrite<'_> {
    match value {
        CellValue::Empty => CellWrite::Blank,
        CellValue::Text(s) => CellWrite::Text(s),
        CellValue::Number(n) => {
            if apply_text_rule && needs_text_format(value) {
                CellWrite::NumberAsText(*n)
            } else {
                CellWrite::Number(*n)
            }
        }
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    apply_text_rule: bool,
    text_format: &Format,
) -> Result<(), XlsxError> {
    match plan_cell(value, apply_text_rule) {
        CellWrite::Blank => {}
        CellWrite::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellWrite::Number(n) => {
            worksheet.write_number(row, col, n)?;
        }
        CellWrite::NumberAsText(n) => {
            worksheet.write_number_with_format(row, col, n, text_format)?;
        }
    }
    Ok(())
}
