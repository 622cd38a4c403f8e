pub mod collectors;
pub mod domain;
pub mod error;
pub mod ui;

pub use error::{ExtractError, Result};
