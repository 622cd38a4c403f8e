use crate::collectors::RowProvider;
use crate::domain::{NumericPolicy, SheetLayout, StatRecord};
use crate::error::{ExtractError, Result};
use log::{debug, info, warn};

/// Pulls state-level population change records out of a sheet
pub struct PopulationCollector {
    layout: SheetLayout,
    policy: NumericPolicy,
}

impl PopulationCollector {
    pub fn new(layout: SheetLayout, policy: NumericPolicy) -> Self {
        Self { layout, policy }
    }

    /// Read the configured sheet from `provider` and extract its records
    pub fn collect<P: RowProvider>(&self, provider: &mut P) -> Result<Vec<StatRecord>> {
        let rows = provider.sheet_rows(&self.layout.sheet)?;
        let records = extract_records(&rows, &self.layout, self.policy)?;

        info!(
            "Extracted {} records from {} rows of sheet '{}'",
            records.len(),
            rows.len(),
            self.layout.sheet
        );
        if records.len() < self.layout.expected_records {
            warn!(
                "Expected {} records, found {}",
                self.layout.expected_records,
                records.len()
            );
        }

        Ok(records)
    }
}

/// Extract one record per summary row, in sheet order.
///
/// The header row and the aggregate row are always skipped. Any other
/// row is a summary row when both marker cells hold the same non-blank
/// text; everything else (county lines, short or blank rows, footnotes)
/// is dropped.
pub fn extract_records(
    rows: &[Vec<String>],
    layout: &SheetLayout,
    policy: NumericPolicy,
) -> Result<Vec<StatRecord>> {
    let mut records = Vec::with_capacity(layout.expected_records);

    for (index, row) in rows.iter().enumerate() {
        if layout.is_skipped_row(index) {
            continue;
        }

        let (left, right) = layout.marker_columns;
        // Workbook rows are padded to the sheet width, so blank means absent
        let (left, right) = match (marker(row, left), marker(row, right)) {
            (Some(left), Some(right)) => (left, right),
            _ => {
                debug!("Row {} has no marker cells ({} cells), skipping", index, row.len());
                continue;
            }
        };
        if left != right {
            continue;
        }

        let name = cell(row, layout.name_column);
        let change = parse_count(row, index, layout.change_column, policy)?;
        let baseline = parse_count(row, index, layout.baseline_column, policy)?;

        records.push(StatRecord::from_counts(name, change, baseline));
    }

    Ok(records)
}

fn marker(row: &[String], column: usize) -> Option<&str> {
    row.get(column)
        .map(String::as_str)
        .filter(|text| !text.trim().is_empty())
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(String::as_str).unwrap_or("")
}

fn parse_count(row: &[String], index: usize, column: usize, policy: NumericPolicy) -> Result<i64> {
    let text = cell(row, column);

    match text.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            NumericPolicy::Lenient => {
                warn!(
                    "Row {}, column {}: '{}' is not an integer, using 0",
                    index, column, text
                );
                Ok(0)
            }
            NumericPolicy::Strict => Err(ExtractError::invalid_number(index, column, text)),
        },
    }
}
