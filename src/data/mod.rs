//! Data structures for income inequality analysis.

mod dataset;
mod income_file;

pub use dataset::{IncomeDataset, LorenzPoint};
pub use income_file::{parse_incomes, read_incomes};
