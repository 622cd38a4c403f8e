pub mod layout;
pub mod record;

pub use layout::{NumericPolicy, SheetLayout};
pub use record::{format_record, StatRecord};
