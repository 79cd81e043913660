//! Income Inequality Library
//!
//! This library computes the Gini coefficient of a population of incomes
//! together with its supporting curves: the cumulative income share (a
//! discrete Lorenz curve) and the line of equality.
//!
//! # Overview
//!
//! The library is organized into small modules:
//!
//! - **data**: The [`IncomeDataset`](data::IncomeDataset) and income file loading
//! - **generate**: Synthetic income sequences (uniform draws, grouped brackets)
//! - **report**: Sampled text/JSON/YAML summaries and full curve export
//!
//! # Example
//!
//! ```
//! use income_gini::prelude::*;
//!
//! let data = IncomeDataset::new(vec![3, 1]).unwrap();
//! assert_eq!(data.incomes(), &[1, 3]);
//! assert!((data.gini_coefficient() - 1.0 / 6.0).abs() < 1e-10);
//!
//! let mut rng = create_rng(42);
//! let synthetic = IncomeDataset::from_uniform(1000, 0, 50_000, &mut rng).unwrap();
//! println!("{}", SampledReport::from_dataset(&synthetic, DEFAULT_REPORT_ROWS));
//! ```

pub mod data;
pub mod error;
pub mod generate;
pub mod report;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::{parse_incomes, read_incomes, IncomeDataset, LorenzPoint};
    pub use crate::error::{GiniError, Result};
    pub use crate::generate::{
        create_rng, expand_groups, uniform_incomes, GroupSpec, GroupedConfig, IncomePlacement,
    };
    pub use crate::report::{write_curves_tsv, SampledReport, DEFAULT_REPORT_ROWS};
}
