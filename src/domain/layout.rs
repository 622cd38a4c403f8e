/// Column layout of the Census Bureau `co-est2021-alldata` sheet
/// (county population totals, vintage 2021).
///
/// Columns: SUMLEV, REGION, DIVISION, STATE, COUNTY, STNAME, CTYNAME,
/// ESTIMATESBASE2020, POPESTIMATE2020, POPESTIMATE2021, NPOPCHG2020,
/// NPOPCHG2021, ...
///
/// State-level lines repeat the state name in CTYNAME, so STNAME == CTYNAME
/// marks a summary row. District of Columbia appears twice with equal
/// names (state line and county line); the second one is the skipped
/// aggregate row.
pub const CO_EST2021_SHEET: &str = "co-est2021-alldata";
pub const CO_EST2021_HEADER_ROW: usize = 0;
pub const CO_EST2021_AGGREGATE_ROW: usize = 330;
pub const CO_EST2021_STNAME: usize = 5;
pub const CO_EST2021_CTYNAME: usize = 6;
pub const CO_EST2021_POPESTIMATE2020: usize = 8;
pub const CO_EST2021_NPOPCHG2021: usize = 11;
pub const CO_EST2021_STATE_COUNT: usize = 51; // 50 states + DC

/// Where the extractor finds things in a sheet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    pub sheet: String,
    pub header_row: usize,
    pub aggregate_row: usize,
    pub name_column: usize,
    pub marker_columns: (usize, usize), // equal cells = summary row
    pub baseline_column: usize,
    pub change_column: usize,
    pub expected_records: usize, // capacity hint only
}

impl SheetLayout {
    pub fn co_est2021() -> Self {
        Self {
            sheet: CO_EST2021_SHEET.to_string(),
            header_row: CO_EST2021_HEADER_ROW,
            aggregate_row: CO_EST2021_AGGREGATE_ROW,
            name_column: CO_EST2021_STNAME,
            marker_columns: (CO_EST2021_STNAME, CO_EST2021_CTYNAME),
            baseline_column: CO_EST2021_POPESTIMATE2020,
            change_column: CO_EST2021_NPOPCHG2021,
            expected_records: CO_EST2021_STATE_COUNT,
        }
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = sheet.into();
        self
    }

    pub fn with_aggregate_row(mut self, row: usize) -> Self {
        self.aggregate_row = row;
        self
    }

    /// Rows that never produce a record, whatever their contents
    pub fn is_skipped_row(&self, index: usize) -> bool {
        index == self.header_row || index == self.aggregate_row
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::co_est2021()
    }
}

/// What to do with a numeric cell that does not parse as an integer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Count it as zero and log a warning
    #[default]
    Lenient,
    /// Abort extraction with `ExtractError::InvalidNumber`
    Strict,
}
