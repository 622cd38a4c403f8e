/// Errors raised while loading population records.
///
/// The binary wraps these with `anyhow` context; library callers get
/// the structured variants.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// Workbook could not be opened or recognised
    #[error("Failed to open workbook {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: calamine::Error,
    },

    /// Named sheet is not in the workbook
    #[error("Sheet '{sheet}' not found (available: {})", available.join(", "))]
    MissingSheet { sheet: String, available: Vec<String> },

    /// Sheet exists but its cells could not be read
    #[error("Failed to read sheet '{sheet}': {source}")]
    ReadSheet {
        sheet: String,
        source: calamine::Error,
    },

    /// Numeric cell did not parse (strict mode only)
    #[error("Invalid number '{value}' at row {row}, column {column}")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    pub fn missing_sheet(sheet: impl Into<String>, available: Vec<String>) -> Self {
        Self::MissingSheet {
            sheet: sheet.into(),
            available,
        }
    }

    pub fn invalid_number(row: usize, column: usize, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            row,
            column,
            value: value.into(),
        }
    }
}
