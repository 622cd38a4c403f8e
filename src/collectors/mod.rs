pub mod population;
pub mod workbook;

pub use population::{extract_records, PopulationCollector};
pub use workbook::WorkbookCollector;

use crate::error::{ExtractError, Result};
use std::collections::HashMap;

/// Source of tabular rows, one named sheet at a time.
///
/// Rows come back in sheet order with every cell rendered as text, and
/// index 0 is the first row of the sheet.
pub trait RowProvider {
    fn sheet_rows(&mut self, sheet: &str) -> Result<Vec<Vec<String>>>;
}

/// Rows held in memory, keyed by sheet name
#[derive(Clone, Debug, Default)]
pub struct MemoryRows {
    sheets: HashMap<String, Vec<Vec<String>>>,
}

impl MemoryRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        self.sheets.insert(sheet.into(), rows);
        self
    }
}

impl RowProvider for MemoryRows {
    fn sheet_rows(&mut self, sheet: &str) -> Result<Vec<Vec<String>>> {
        match self.sheets.get(sheet) {
            Some(rows) => Ok(rows.clone()),
            None => {
                let mut available: Vec<String> = self.sheets.keys().cloned().collect();
                available.sort();
                Err(ExtractError::missing_sheet(sheet, available))
            }
        }
    }
}
