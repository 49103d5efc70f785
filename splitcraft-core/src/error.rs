//! Error taxonomy for split operations
//!
//! Every failure of a split surfaces as exactly one [`SplitError`]; the
//! caller maps it to a categorized message through [`SplitError::severity`].

use std::path::PathBuf;
use thiserror::Error;

/// Category of an outcome message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A failed split operation
#[derive(Debug, Error)]
pub enum SplitError {
    /// The source file could not be opened or parsed as a workbook.
    #[error("cannot read workbook '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// File, sheet, or column was not chosen or does not exist.
    #[error("{0}")]
    Selection(String),

    /// The key column is absent from the current header. Treated as
    /// "no groups found", never a hard failure.
    #[error("column '{column}' not found in sheet '{sheet}', no groups found")]
    ColumnNotFound { sheet: String, column: String },

    /// The sheet has no data rows, or every key value is null.
    #[error("no groups found in sheet '{sheet}'")]
    EmptyGrouping { sheet: String },

    /// Directory staging or swap failed.
    #[error("output directory error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output workbook could not be built or persisted.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl SplitError {
    /// How the failure should be reported to the user.
    pub fn severity(&self) -> Severity {
        match self {
            SplitError::Selection(_)
            | SplitError::ColumnNotFound { .. }
            | SplitError::EmptyGrouping { .. } => Severity::Warning,
            SplitError::Load { .. } | SplitError::Io { .. } | SplitError::Write { .. } => {
                Severity::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let missing = SplitError::ColumnNotFound {
            sheet: "Sheet1".to_string(),
            column: "Dept".to_string(),
        };
        assert_eq!(missing.severity(), Severity::Warning);

        let empty = SplitError::EmptyGrouping {
            sheet: "Sheet1".to_string(),
        };
        assert_eq!(empty.severity(), Severity::Warning);

        let io = SplitError::Io {
            path: PathBuf::from("/tmp/out"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(io.severity(), Severity::Error);
    }

    #[test]
    fn test_column_not_found_reports_no_groups() {
        let err = SplitError::ColumnNotFound {
            sheet: "Data".to_string(),
            column: "Region".to_string(),
        };
        assert!(err.to_string().contains("no groups found"));
    }
}
