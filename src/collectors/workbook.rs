/// Workbook-backed row provider.
///
/// Opens xlsx/xlsm/xlsb/xls/ods files through calamine and hands back
/// sheet contents as text cells, the way a spreadsheet shows them.

use crate::collectors::RowProvider;
use crate::error::{ExtractError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct WorkbookCollector {
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookCollector {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook = open_workbook_auto(&path).map_err(|source| ExtractError::Open {
            path: path.clone(),
            source,
        })?;

        debug!("Opened workbook {} ({} sheets)", path.display(), workbook.sheet_names().len());

        Ok(Self { workbook })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }
}

impl RowProvider for WorkbookCollector {
    fn sheet_rows(&mut self, sheet: &str) -> Result<Vec<Vec<String>>> {
        let available = self.workbook.sheet_names();
        if !available.iter().any(|name| name == sheet) {
            return Err(ExtractError::missing_sheet(sheet, available));
        }

        let range = self
            .workbook
            .worksheet_range(sheet)
            .map_err(|source| ExtractError::ReadSheet {
                sheet: sheet.to_string(),
                source,
            })?;

        Ok(range_to_rows(&range))
    }
}

/// Convert a used range into rows addressed from A1.
///
/// calamine trims leading empty rows and columns from a range, so the
/// front is padded back to keep row and column indices absolute.
fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let (first_row, first_col) = match range.start() {
        Some((row, col)) => (row as usize, col as usize),
        None => return Vec::new(),
    };

    let mut rows = vec![Vec::new(); first_row];
    rows.extend(range.rows().map(|cells| {
        let mut row = vec![String::new(); first_col];
        row.extend(cells.iter().map(cell_text));
        row
    }));
    rows
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // Whole numbers stored as floats print without a fraction
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (*f as i64).to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::PopulationCollector;
    use crate::domain::{NumericPolicy, SheetLayout, StatRecord};
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("pop.xlsx");
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name("co-est2021-alldata").unwrap();
        sheet.write(0, 0, "STNAME").unwrap();
        sheet.write(0, 1, "CTYNAME").unwrap();
        sheet.write(0, 2, "POPESTIMATE2020").unwrap();
        sheet.write(1, 0, "Texas").unwrap();
        sheet.write(1, 1, "Texas").unwrap();
        sheet.write(1, 2, 29_232_474.0).unwrap();
        sheet.write(2, 0, "Texas").unwrap();
        sheet.write(2, 1, "Anderson County").unwrap();
        sheet.write(2, 2, 57_863.5).unwrap();

        let notes = workbook.add_worksheet();
        notes.set_name("Notes").unwrap();
        notes.write(3, 2, "offset").unwrap();

        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_reads_sheet_as_text() {
        let dir = TempDir::new().unwrap();
        let mut collector = WorkbookCollector::open(write_fixture(&dir)).unwrap();
        assert_eq!(collector.sheet_names(), vec!["co-est2021-alldata", "Notes"]);

        let rows = collector.sheet_rows("co-est2021-alldata").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["STNAME", "CTYNAME", "POPESTIMATE2020"]);
        assert_eq!(rows[1], vec!["Texas", "Texas", "29232474"]);
        assert_eq!(rows[2], vec!["Texas", "Anderson County", "57863.5"]);
    }

    #[test]
    fn test_pads_to_absolute_positions() {
        let dir = TempDir::new().unwrap();
        let mut collector = WorkbookCollector::open(write_fixture(&dir)).unwrap();

        let rows = collector.sheet_rows("Notes").unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].is_empty());
        assert_eq!(rows[3], vec!["", "", "offset"]);
    }

    #[test]
    fn test_missing_sheet() {
        let dir = TempDir::new().unwrap();
        let mut collector = WorkbookCollector::open(write_fixture(&dir)).unwrap();

        let err = collector.sheet_rows("nope").unwrap_err();
        assert!(matches!(err, ExtractError::MissingSheet { ref sheet, .. } if sheet == "nope"));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("countyPopChange2020-2021.xlsx");

        match WorkbookCollector::open(&missing) {
            Err(ExtractError::Open { path, .. }) => assert_eq!(path, missing),
            Err(other) => panic!("expected Open error, got {:?}", other),
            Ok(_) => panic!("expected Open error for a missing file"),
        }
    }

    /// Census-shaped sheet: STNAME/CTYNAME in F/G, POPESTIMATE2020 in I,
    /// NPOPCHG2021 in L, with a blank line and a footnote mixed in
    fn write_census_fixture(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("countyPopChange2020-2021.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("co-est2021-alldata").unwrap();

        let header = [
            "SUMLEV", "REGION", "DIVISION", "STATE", "COUNTY", "STNAME", "CTYNAME",
            "ESTIMATESBASE2020", "POPESTIMATE2020", "POPESTIMATE2021", "NPOPCHG2020", "NPOPCHG2021",
        ];
        for (col, title) in header.iter().enumerate() {
            sheet.write(0, col as u16, *title).unwrap();
        }

        let lines: [(u32, &str, &str, f64, f64); 4] = [
            (1, "Texas", "Texas", 1000.0, 50.0),
            (2, "Texas", "Harris County", 4_731_145.0, 24_021.0),
            (4, "Utah", "Utah", 3_281_684.0, 56_749.0),
            (5, "Utah", "Salt Lake County", 1_186_257.0, 13_128.0),
        ];
        for (row, state, county, baseline, change) in lines {
            sheet.write(row, 5, state).unwrap();
            sheet.write(row, 6, county).unwrap();
            sheet.write(row, 8, baseline).unwrap();
            sheet.write(row, 11, change).unwrap();
        }

        // Row 3 stays blank
        sheet.write(6, 0, "Source: U.S. Census Bureau, Population Division").unwrap();

        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_census_workbook_end_to_end() {
        let dir = TempDir::new().unwrap();
        let mut workbook = WorkbookCollector::open(write_census_fixture(&dir)).unwrap();

        let rows = workbook.sheet_rows("co-est2021-alldata").unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[3], vec![String::new(); 12]);

        let collector = PopulationCollector::new(SheetLayout::default(), NumericPolicy::Strict);
        let records = collector.collect(&mut workbook).unwrap();

        assert_eq!(
            records,
            vec![
                StatRecord::from_counts("Texas", 50, 1000),
                StatRecord::from_counts("Utah", 56_749, 3_281_684),
            ]
        );
        assert!(records.iter().all(|r| !r.name.is_empty()));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Int(-42)), "-42");
        assert_eq!(cell_text(&Data::Float(1000.0)), "1000");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }
}
