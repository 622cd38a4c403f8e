use std::fmt;

/// Population change for one entity (a U.S. state) over the observed period
#[derive(Clone, Debug, PartialEq)]
pub struct StatRecord {
    pub name: String,
    pub absolute_change: i64,
    pub percent_change: f64, // absolute_change / baseline * 100
}

impl StatRecord {
    /// Build a record from the raw change and baseline counts.
    ///
    /// The percentage uses plain floating-point division, so a zero
    /// baseline yields `inf` (or `NaN` when the change is zero too).
    pub fn from_counts(name: impl Into<String>, absolute_change: i64, baseline: i64) -> Self {
        let percent_change = absolute_change as f64 / baseline as f64 * 100.0;

        Self {
            name: name.into(),
            absolute_change,
            percent_change,
        }
    }
}

/// List label for a record, as shown one entry per line in the UI
pub fn format_record(record: &StatRecord) -> String {
    format!(
        "{}  -------->  Pop. Change : {}  ---  % Change of Pop. : {:.2} %",
        record.name, record.absolute_change, record.percent_change
    )
}

impl fmt::Display for StatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_record(self))
    }
}
