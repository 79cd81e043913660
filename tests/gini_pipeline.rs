//! Integration tests for loading, generating and reporting income datasets.

use income_gini::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Create an income file with an id column and a header.
fn create_income_file(incomes: &[i64]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# household survey extract").unwrap();
    writeln!(file, "person_id\tincome").unwrap();
    for (i, income) in incomes.iter().enumerate() {
        writeln!(file, "person_{}\t{}", i, income).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_file_to_report() {
    let file = create_income_file(&[30, 10, 0, 20, 40]);
    let incomes = read_incomes(file.path()).unwrap();
    assert_eq!(incomes, vec![30, 10, 0, 20, 40]);

    let data = IncomeDataset::new(incomes).unwrap();
    assert_eq!(data.incomes(), &[0, 10, 20, 30, 40]);

    // cum = [0, .1, .3, .6, 1], eq = [.2, .4, .6, .8, 1]
    // sum(diff) = 1.0, sum(cum) = 2.0
    assert!((data.gini_coefficient() - 1.0 / 3.0).abs() < 1e-10);

    let report = SampledReport::from_dataset(&data, DEFAULT_REPORT_ROWS);
    assert_eq!(report.rows.len(), 5);
    assert_eq!(report.rows[4].income, 40);

    let text = report.to_string();
    assert!(text.contains("Individuals: 5"));
    assert!(text.contains("Gini coefficient: 0.333"));
}

#[test]
fn test_file_with_negative_income_is_rejected() {
    let file = create_income_file(&[100, -5, 50]);
    let incomes = read_incomes(file.path()).unwrap();

    let err = IncomeDataset::new(incomes).unwrap_err();
    assert!(matches!(err, GiniError::InvalidIncome { index: 1, value: -5 }));
}

#[test]
fn test_header_only_file_is_empty_population() {
    let file = create_income_file(&[]);
    let incomes = read_incomes(file.path()).unwrap();

    let err = IncomeDataset::new(incomes).unwrap_err();
    assert!(matches!(err, GiniError::EmptyPopulation));
}

#[test]
fn test_missing_file() {
    let err = read_incomes("/nonexistent/incomes.tsv").unwrap_err();
    assert!(matches!(err, GiniError::Io(_)));
}

#[test]
fn test_uniform_population_is_moderately_unequal() {
    // Uniform incomes on [0, m] have a textbook Gini near 1/3; the
    // rank-discretized formula lands close to it for large N.
    let mut rng = create_rng(2024);
    let data = IncomeDataset::from_uniform(20_000, 0, 100_000, &mut rng).unwrap();

    assert_eq!(data.population_size(), 20_000);
    let g = data.gini_coefficient();
    assert!(g > 0.30 && g < 0.37, "unexpected gini {}", g);
}

#[test]
fn test_grouped_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "name: two_classes\nplacement: Midpoint\ngroups:\n  - span: 100\n    count: 3\n  - span: 100\n    count: 1\n"
    )
    .unwrap();
    file.flush().unwrap();

    let config = GroupedConfig::from_file(file.path()).unwrap();
    let incomes = config.generate(&mut create_rng(0)).unwrap();
    assert_eq!(incomes, vec![50, 50, 50, 150]);

    let data = IncomeDataset::new(incomes).unwrap();
    // total = 300, cum = [1/6, 2/6, 3/6, 1], eq = [.25, .5, .75, 1]
    let diff: f64 = 0.25 - 1.0 / 6.0 + 0.5 - 2.0 / 6.0 + 0.75 - 0.5;
    let cum: f64 = 1.0 / 6.0 + 2.0 / 6.0 + 0.5 + 1.0;
    assert!((data.gini_coefficient() - diff / (cum + diff)).abs() < 1e-10);
}

#[test]
fn test_grouped_uniform_reproducible_dataset() {
    let groups = GroupSpec::uniform_span(10_000, &[30, 40, 20, 8, 2]);
    let a = IncomeDataset::from_groups(&groups, IncomePlacement::Uniform, &mut create_rng(5))
        .unwrap();
    let b = IncomeDataset::from_groups(&groups, IncomePlacement::Uniform, &mut create_rng(5))
        .unwrap();

    assert_eq!(a.population_size(), 100);
    assert_eq!(a.incomes(), b.incomes());
    assert!(a.incomes().iter().all(|&x| x < 50_000));
}

#[test]
fn test_curves_export_matches_dataset() {
    let data = IncomeDataset::new(vec![5, 1, 4]).unwrap();
    let out = NamedTempFile::new().unwrap();
    write_curves_tsv(&data, out.path()).unwrap();

    let text = std::fs::read_to_string(out.path()).unwrap();
    let rows: Vec<Vec<&str>> = text
        .lines()
        .skip(1)
        .map(|l| l.split('\t').collect())
        .collect();

    assert_eq!(rows.len(), 3);
    for (row, point) in rows.iter().zip(data.lorenz_points()) {
        assert_eq!(row[0].parse::<usize>().unwrap(), point.rank);
        assert_eq!(row[1].parse::<u64>().unwrap(), point.income);
        assert!((row[2].parse::<f64>().unwrap() - point.cumulative_share).abs() < 1e-6);
        assert!((row[3].parse::<f64>().unwrap() - point.equality).abs() < 1e-6);
    }
}
