//! Reporting of computed income curves.
//!
//! Reports only read an [`IncomeDataset`]; they never alter computed values.

use crate::data::{IncomeDataset, LorenzPoint};
use crate::error::{GiniError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default number of sampled rows in a summary.
pub const DEFAULT_REPORT_ROWS: usize = 9;

/// Summary of a dataset: every `step`-th individual plus the richest one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampledReport {
    /// Sampled rows in rank order.
    pub rows: Vec<LorenzPoint>,
    /// Number of individuals in the dataset.
    pub population_size: usize,
    /// Gini coefficient of the dataset.
    pub gini_coefficient: f64,
}

impl SampledReport {
    /// Sample roughly `n_rows` evenly spaced ranks from `dataset`.
    ///
    /// The first and last individual are always included.
    pub fn from_dataset(dataset: &IncomeDataset, n_rows: usize) -> Self {
        let n = dataset.population_size();
        let step = (n / n_rows.max(1)).max(1);

        let mut rows: Vec<LorenzPoint> = (0..n)
            .step_by(step)
            .filter_map(|i| dataset.point(i))
            .collect();
        if rows.last().map(|r| r.rank) != Some(n) {
            rows.extend(n.checked_sub(1).and_then(|last| dataset.point(last)));
        }

        Self {
            rows,
            population_size: n,
            gini_coefficient: dataset.gini_coefficient(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(GiniError::from)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(GiniError::from)
    }
}

impl std::fmt::Display for SampledReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Income Distribution Summary")?;
        writeln!(f, "rank\tincome\tcum_share\tequality")?;
        for row in &self.rows {
            writeln!(
                f,
                "{}\t{}\t{:.3}\t{:.3}",
                row.rank, row.income, row.cumulative_share, row.equality
            )?;
        }
        writeln!(f, "Individuals: {}", self.population_size)?;
        writeln!(f, "Gini coefficient: {:.3}", self.gini_coefficient)?;
        Ok(())
    }
}

/// Write every rank of the curves to a TSV file.
pub fn write_curves_tsv<P: AsRef<Path>>(dataset: &IncomeDataset, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "rank\tincome\tcumulative_share\tequality_line")?;
    for p in dataset.lorenz_points() {
        writeln!(
            writer,
            "{}\t{}\t{:.6}\t{:.6}",
            p.rank, p.income, p.cumulative_share, p.equality
        )?;
    }
    writer.flush()?;

    Ok(())
}
