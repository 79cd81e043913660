//! Synthetic income generation.
//!
//! These functions only produce income sequences; analysis happens in
//! [`crate::data::IncomeDataset`].

mod grouped;
mod uniform;

pub use grouped::{expand_groups, GroupSpec, GroupedConfig, IncomePlacement};
pub use uniform::{create_rng, uniform_incomes};
