//! Income dataset with cumulative share, equality line and Gini coefficient.

use crate::error::{GiniError, Result};
use crate::generate::{expand_groups, uniform_incomes, GroupSpec, IncomePlacement};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A population of incomes together with its derived inequality curves.
///
/// All derived fields are computed once in [`IncomeDataset::new`] and the
/// dataset is immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct IncomeDataset {
    /// Incomes sorted ascending.
    incomes: Vec<u64>,
    /// Fraction of total income held by the poorest i+1 individuals.
    cumulative_share: Vec<f64>,
    /// Share held by the poorest i+1 individuals under perfect equality.
    equality_line: Vec<f64>,
    /// Sum of all incomes.
    total_income: u128,
    /// Inequality index derived from the two curves.
    gini_coefficient: f64,
}

/// One rank of the curves, as consumed by reporters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzPoint {
    /// 1-based rank, poorest first.
    pub rank: usize,
    pub income: u64,
    pub cumulative_share: f64,
    pub equality: f64,
}

impl IncomeDataset {
    /// Build a dataset from individual incomes, in any order.
    ///
    /// # Errors
    /// - [`GiniError::EmptyPopulation`] if `incomes` is empty
    /// - [`GiniError::InvalidIncome`] for the first negative value
    /// - [`GiniError::DivisionUndefined`] if every income is zero
    pub fn new(incomes: Vec<i64>) -> Result<Self> {
        if incomes.is_empty() {
            return Err(GiniError::EmptyPopulation);
        }

        let mut sorted = incomes
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u64::try_from(value).map_err(|_| GiniError::InvalidIncome { index, value })
            })
            .collect::<Result<Vec<u64>>>()?;
        sorted.sort();

        let total_income: u128 = sorted.iter().map(|&x| x as u128).sum();
        let cumulative_share = cumulative_share(&sorted, total_income)?;
        let equality_line = equality_line(sorted.len());
        let gini_coefficient = gini_coefficient(&cumulative_share, &equality_line);

        Ok(Self {
            incomes: sorted,
            cumulative_share,
            equality_line,
            total_income,
            gini_coefficient,
        })
    }

    /// Build a dataset from `n` uniform random incomes in `[min, max]`.
    pub fn from_uniform<R: Rng>(n: usize, min: i64, max: i64, rng: &mut R) -> Result<Self> {
        Self::new(uniform_incomes(n, min, max, rng)?)
    }

    /// Build a dataset by expanding income brackets into individuals.
    pub fn from_groups<R: Rng>(
        groups: &[GroupSpec],
        placement: IncomePlacement,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(expand_groups(groups, placement, rng)?)
    }

    /// Number of individuals.
    pub fn population_size(&self) -> usize {
        self.incomes.len()
    }

    /// Incomes sorted ascending.
    pub fn incomes(&self) -> &[u64] {
        &self.incomes
    }

    pub fn cumulative_share(&self) -> &[f64] {
        &self.cumulative_share
    }

    pub fn equality_line(&self) -> &[f64] {
        &self.equality_line
    }

    pub fn gini_coefficient(&self) -> f64 {
        self.gini_coefficient
    }

    pub fn total_income(&self) -> u128 {
        self.total_income
    }

    /// Check whether the cumulative share tracks the equality line within `tolerance`.
    pub fn is_perfectly_equal(&self, tolerance: f64) -> bool {
        self.cumulative_share
            .iter()
            .zip(&self.equality_line)
            .all(|(c, e)| (e - c).abs() <= tolerance)
    }

    /// Iterate over every rank, poorest first.
    pub fn lorenz_points(&self) -> impl Iterator<Item = LorenzPoint> + '_ {
        (0..self.population_size()).filter_map(move |i| self.point(i))
    }

    /// The curve values at 0-based index `i`, or `None` past the richest individual.
    pub fn point(&self, i: usize) -> Option<LorenzPoint> {
        let income = *self.incomes.get(i)?;
        Some(LorenzPoint {
            rank: i + 1,
            income,
            cumulative_share: self.cumulative_share[i],
            equality: self.equality_line[i],
        })
    }

    /// Serialize the full dataset (every income and both curves) to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(GiniError::from)
    }
}

/// Running share of total income; `sorted` must already be ascending.
fn cumulative_share(sorted: &[u64], total: u128) -> Result<Vec<f64>> {
    if total == 0 {
        return Err(GiniError::DivisionUndefined);
    }
    let total = total as f64;
    let mut running: u128 = 0;
    Ok(sorted
        .iter()
        .map(|&x| {
            running += x as u128;
            running as f64 / total
        })
        .collect())
}

fn equality_line(n: usize) -> Vec<f64> {
    let n_f = n as f64;
    (1..=n).map(|i| i as f64 / n_f).collect()
}

/// Rank-discretized Gini: `sum(diff) / (sum(cum) + sum(diff))` where
/// `diff = equality - cum`. Not the trapezoidal Lorenz-area estimator.
fn gini_coefficient(cumulative: &[f64], equality: &[f64]) -> f64 {
    let diff_sum: f64 = equality
        .iter()
        .zip(cumulative)
        .map(|(e, c)| e - c)
        .sum();
    let cum_sum: f64 = cumulative.iter().sum();
    diff_sum / (cum_sum + diff_sum)
}
