pub mod app;
pub mod components;
pub mod state;

pub use app::run_tui;
pub use state::{AppState, LabelFn};

pub const DEFAULT_TITLE: &str = "2020-2021 United States Population Change Data";
