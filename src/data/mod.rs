//! Data module - result table loading and series selection

mod series;
mod table;

pub use series::{Metric, SeriesChoice, Side};
pub use table::{ResultTable, TableError, REQUIRED_COLUMNS, RESULT_FILE};
