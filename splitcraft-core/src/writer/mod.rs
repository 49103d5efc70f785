//! Output writer: persists a grouped table as split workbooks
//!
//! All artifacts are written into a staging directory next to the source;
//! only after every write succeeds is the previous output directory removed
//! and the staging directory renamed into place. A failure partway through
//! leaves the prior output untouched.

mod xlsx_writer;

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook as XlsxWorkbook;

use crate::config::SplitterConfig;
use crate::error::SplitError;
use crate::group::GroupedTable;
use crate::progress::ProgressSink;
use crate::reader::CellValue;
use crate::sanitize::{sanitize, sheet_title};

/// Output layout of a split operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// One single-sheet workbook per group.
    SeparateFiles,
    /// One workbook with one sheet per group.
    SingleWorkbook,
}

/// Result of a completed split.
#[derive(Debug)]
pub struct SplitReport {
    pub output_dir: PathBuf,
    pub groups: usize,
    pub files: Vec<PathBuf>,
}

/// Write every group of `table` under `<base_name>-<suffix>` next to the
/// source, advancing `progress` once per group.
///
/// Sanitized names are not deduplicated. In separate-files mode two keys
/// that sanitize to the same text write the same file, last group wins. In
/// single-workbook mode a duplicate sheet title is rejected by the workbook
/// writer and surfaces as [`SplitError::Write`].
#[allow(clippy::too_many_arguments)]
pub(crate) fn write_split(
    table: &GroupedTable,
    header: &[CellValue],
    source_sheet: &str,
    base_name: &str,
    parent_dir: &Path,
    mode: SplitMode,
    config: &SplitterConfig,
    progress: &mut dyn ProgressSink,
) -> Result<SplitReport, SplitError> {
    let target = parent_dir.join(format!("{base_name}-{}", config.output_suffix));
    let staging = parent_dir.join(format!("{base_name}-{}.partial", config.output_suffix));

    let files = match write_into(&staging, table, header, source_sheet, base_name, mode, config, progress)
    {
        Ok(files) => files,
        Err(err) => {
            let _ = fs::remove_dir_all(&staging);
            return Err(err);
        }
    };

    if let Err(err) = swap_into_place(&staging, &target) {
        let _ = fs::remove_dir_all(&staging);
        return Err(err);
    }

    Ok(SplitReport {
        groups: table.len(),
        files: files.into_iter().map(|name| target.join(name)).collect(),
        output_dir: target,
    })
}

#[allow(clippy::too_many_arguments)]
fn write_into(
    staging: &Path,
    table: &GroupedTable,
    header: &[CellValue],
    source_sheet: &str,
    base_name: &str,
    mode: SplitMode,
    config: &SplitterConfig,
    progress: &mut dyn ProgressSink,
) -> Result<Vec<String>, SplitError> {
    recreate_dir(staging)?;
    progress.begin(table.len());

    let mut files = Vec::new();
    match mode {
        SplitMode::SeparateFiles => {
            for (key, rows) in table.iter() {
                let file_name = format!("{base_name}-{}.xlsx", sanitize(&key.label()));
                let path = staging.join(&file_name);

                let mut workbook = XlsxWorkbook::new();
                let worksheet = workbook.add_worksheet();
                worksheet
                    .set_name(source_sheet)
                    .map_err(|source| write_error(&path, source))?;
                xlsx_writer::populate_sheet(worksheet, header, rows, true, config)
                    .map_err(|source| write_error(&path, source))?;
                workbook
                    .save(&path)
                    .map_err(|source| write_error(&path, source))?;

                files.push(file_name);
                progress.advance();
            }
        }
        SplitMode::SingleWorkbook => {
            let file_name = format!("{base_name}-{}.xlsx", config.output_suffix);
            let path = staging.join(&file_name);

            let mut workbook = XlsxWorkbook::new();
            for (key, rows) in table.iter() {
                let worksheet = workbook.add_worksheet();
                worksheet
                    .set_name(sheet_title(&sanitize(&key.label())))
                    .map_err(|source| write_error(&path, source))?;
                xlsx_writer::populate_sheet(worksheet, header, rows, false, config)
                    .map_err(|source| write_error(&path, source))?;
                progress.advance();
            }
            workbook
                .save(&path)
                .map_err(|source| write_error(&path, source))?;

            files.push(file_name);
        }
    }

    Ok(files)
}

fn recreate_dir(dir: &Path) -> Result<(), SplitError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|source| io_error(dir, source))?;
    }
    fs::create_dir_all(dir).map_err(|source| io_error(dir, source))
}

/// Replace `target` with the fully written `staging` directory.
fn swap_into_place(staging: &Path, target: &Path) -> Result<(), SplitError> {
    if target.exists() {
        fs::remove_dir_all(target).map_err(|source| io_error(target, source))?;
    }
    fs::rename(staging, target).map_err(|source| io_error(target, source))
}

fn io_error(path: &Path, source: std::io::Error) -> SplitError {
    SplitError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_error(path: &Path, source: rust_xlsxwriter::XlsxError) -> SplitError {
    SplitError::Write {
        path: path.to_path_buf(),
        source,
    }
}
