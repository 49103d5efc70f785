//! splitcraft-core: group-and-split engine for spreadsheet tables
//!
//! Given a source sheet and a key column, partitions the data rows by the
//! distinct values of that column and writes each partition either as an
//! independent workbook or as a separate sheet of one output workbook,
//! replicating the header row, sanitizing generated names, forcing long
//! numeric identifiers to text display, and auto-sizing output columns.

pub mod config;
pub mod error;
pub mod group;
pub mod numtext;
pub mod progress;
pub mod reader;
pub mod sanitize;
pub mod widths;
pub mod writer;

use std::path::{Path, PathBuf};

pub use config::SplitterConfig;
pub use error::{Severity, SplitError};
pub use group::{GroupKey, GroupedTable};
pub use progress::{NoopProgress, ProgressSink};
pub use reader::{CellValue, Sheet, Workbook};
pub use writer::{SplitMode, SplitReport};

/// Parameters of one split operation.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    /// Path to the source spreadsheet file.
    pub source: PathBuf,
    /// Name of the sheet to split.
    pub sheet: String,
    /// Header name of the key column.
    pub key_column: String,
    /// Output layout.
    pub mode: SplitMode,
}

/// Main split interface
pub struct Splitter {
    config: SplitterConfig,
}

impl Splitter {
    /// Create a splitter with default configuration
    pub fn new() -> Self {
        Self::with_config(SplitterConfig::default())
    }

    /// Create a splitter with custom configuration
    pub fn with_config(config: SplitterConfig) -> Self {
        Self { config }
    }

    /// Run one split operation from start to finish.
    ///
    /// Synchronous and single-threaded; the only suspension points are the
    /// file reads and writes themselves. The progress sink is reset to zero
    /// on every exit, successful or not, and every failure surfaces as a
    /// single [`SplitError`].
    pub fn split(
        &self,
        request: &SplitRequest,
        progress: &mut dyn ProgressSink,
    ) -> Result<SplitReport, SplitError> {
        let result = self.run_split(request, progress);
        progress.reset();
        result
    }

    fn run_split(
        &self,
        request: &SplitRequest,
        progress: &mut dyn ProgressSink,
    ) -> Result<SplitReport, SplitError> {
        if request.sheet.is_empty() {
            return Err(SplitError::Selection("no sheet selected".to_string()));
        }
        if request.key_column.is_empty() {
            return Err(SplitError::Selection("no key column selected".to_string()));
        }

        let workbook = reader::read_workbook(&request.source)?;
        let sheet = workbook.sheet(&request.sheet).ok_or_else(|| {
            SplitError::Selection(format!("sheet '{}' not found in workbook", request.sheet))
        })?;

        if sheet.column_index(&request.key_column).is_none() {
            return Err(SplitError::ColumnNotFound {
                sheet: sheet.name.clone(),
                column: request.key_column.clone(),
            });
        }

        let table = group::group(sheet, &request.key_column);
        if table.is_empty() {
            return Err(SplitError::EmptyGrouping {
                sheet: sheet.name.clone(),
            });
        }

        let header = sheet.header_row().to_vec();
        let base_name = request
            .source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let parent_dir = request.source.parent().unwrap_or_else(|| Path::new("."));

        writer::write_split(
            &table,
            &header,
            &sheet.name,
            &base_name,
            parent_dir,
            request.mode,
            &self.config,
            progress,
        )
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}
