//! Cash flow input model and CSV ingestion

mod data;
mod loader;

pub use data::{CashFlow, DayNumber};
pub use loader::{load_series, load_series_from_reader, LoadError};
