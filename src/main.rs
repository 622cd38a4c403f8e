use anyhow::{Context, Result};
use clap::Parser;
use popview::collectors::{PopulationCollector, WorkbookCollector};
use popview::domain::layout::{CO_EST2021_AGGREGATE_ROW, CO_EST2021_SHEET};
use popview::domain::{format_record, NumericPolicy, SheetLayout, StatRecord};
use popview::ui::{run_tui, AppState, DEFAULT_TITLE};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "popview")]
#[command(about = "U.S. state population change viewer - scrollable TUI over Census county estimates")]
#[command(version)]
struct Args {
    /// Workbook with the county population estimates
    #[arg(short, long, default_value = "countyPopChange2020-2021.xlsx")]
    file: PathBuf,

    /// Sheet holding the estimates
    #[arg(short, long, default_value = CO_EST2021_SHEET)]
    sheet: String,

    /// Row index of the aggregate line to skip
    #[arg(long, default_value_t = CO_EST2021_AGGREGATE_ROW)]
    aggregate_row: usize,

    /// Fail on numeric cells that are not integers instead of reading them as 0
    #[arg(long)]
    strict: bool,

    /// Print the formatted list to stdout instead of starting the TUI
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let layout = SheetLayout::default()
        .with_sheet(args.sheet.as_str())
        .with_aggregate_row(args.aggregate_row);
    let policy = if args.strict {
        NumericPolicy::Strict
    } else {
        NumericPolicy::Lenient
    };

    // Nothing to show without the data
    let records = match load_records(&args.file, layout, policy) {
        Ok(records) => records,
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    };

    if args.print {
        for record in &records {
            println!("{}", format_record(record));
        }
        return Ok(());
    }

    run_tui(AppState::new(DEFAULT_TITLE, records, format_record))
}

fn load_records(path: &Path, layout: SheetLayout, policy: NumericPolicy) -> Result<Vec<StatRecord>> {
    let mut workbook = WorkbookCollector::open(path)
        .with_context(|| format!("Failed to load population data from {}", path.display()))?;

    let sheet = layout.sheet.clone();
    PopulationCollector::new(layout, policy)
        .collect(&mut workbook)
        .with_context(|| format!("Failed to extract records from sheet '{}'", sheet))
}
