//! gini - income inequality CLI
//!
//! Command-line interface for computing the Gini coefficient and income share curves.

use clap::{Args, Parser, Subcommand, ValueEnum};
use income_gini::data::{read_incomes, IncomeDataset};
use income_gini::error::Result;
use income_gini::generate::{create_rng, uniform_incomes, GroupedConfig};
use income_gini::report::{write_curves_tsv, SampledReport, DEFAULT_REPORT_ROWS};
use std::path::PathBuf;

/// Output format for the summary report
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Tab-separated sampled rows plus totals
    Text,
    Json,
    Yaml,
}

/// Options shared by every analysis command
#[derive(Debug, Args)]
struct OutputArgs {
    /// Approximate number of sampled rows in the summary
    #[arg(long, default_value_t = DEFAULT_REPORT_ROWS)]
    rows: usize,

    /// Output format: text, json, or yaml
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write every rank of the curves to this TSV file
    #[arg(long)]
    curves: Option<PathBuf>,

    /// Also write the full dataset (all incomes and both curves) as JSON
    #[arg(long)]
    dataset_json: Option<PathBuf>,
}

/// Income inequality analysis
#[derive(Parser)]
#[command(name = "gini")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze incomes read from a file (one per line, optional id column)
    Analyze {
        /// Path to the income file
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze a population of uniform random incomes
    Uniform {
        /// Number of individuals
        #[arg(short, long)]
        n: usize,

        /// Lowest possible income
        #[arg(long, default_value = "0")]
        min: i64,

        /// Highest possible income
        #[arg(long)]
        max: i64,

        /// Random seed (default: 42)
        #[arg(long, default_value = "42")]
        seed: u64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze a population described by income brackets (YAML or JSON)
    Grouped {
        /// Path to the grouped population configuration
        #[arg(short, long)]
        config: PathBuf,

        /// Random seed, overriding the one in the configuration
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write an example grouped population configuration
    ExampleConfig {
        /// Output path for the YAML configuration
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { input, output } => cmd_analyze(&input, &output),
        Commands::Uniform {
            n,
            min,
            max,
            seed,
            output,
        } => cmd_uniform(n, min, max, seed, &output),
        Commands::Grouped {
            config,
            seed,
            output,
        } => cmd_grouped(&config, seed, &output),
        Commands::ExampleConfig { output } => cmd_example_config(&output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Analyze incomes from a file
fn cmd_analyze(input_path: &PathBuf, output: &OutputArgs) -> Result<()> {
    eprintln!("Loading incomes from {:?}...", input_path);
    let incomes = read_incomes(input_path)?;
    eprintln!("Loaded {} individuals", incomes.len());

    let dataset = IncomeDataset::new(incomes)?;
    emit(&dataset, output)
}

/// Analyze uniform random incomes
fn cmd_uniform(n: usize, min: i64, max: i64, seed: u64, output: &OutputArgs) -> Result<()> {
    eprintln!(
        "Drawing {} incomes uniformly from [{}, {}] (seed {})...",
        n, min, max, seed
    );
    let mut rng = create_rng(seed);
    let dataset = IncomeDataset::new(uniform_incomes(n, min, max, &mut rng)?)?;
    emit(&dataset, output)
}

/// Analyze a grouped population
fn cmd_grouped(config_path: &PathBuf, seed: Option<u64>, output: &OutputArgs) -> Result<()> {
    eprintln!("Loading grouped configuration from {:?}...", config_path);
    let config = GroupedConfig::from_file(config_path)?;
    let seed = seed.or(config.seed).unwrap_or(42);

    eprintln!(
        "Expanding '{}': {} groups, {} individuals ({:?} placement, seed {})",
        config.name,
        config.groups.len(),
        config.population_size()?,
        config.placement,
        seed
    );
    let mut rng = create_rng(seed);
    let dataset = IncomeDataset::new(config.generate(&mut rng)?)?;
    emit(&dataset, output)
}

/// Generate example grouped configuration
fn cmd_example_config(output_path: &PathBuf) -> Result<()> {
    let yaml = GroupedConfig::example().to_yaml()?;

    std::fs::write(output_path, &yaml)?;
    eprintln!("Wrote example configuration to {:?}", output_path);
    eprintln!();
    eprintln!("Contents:");
    println!("{}", yaml);

    Ok(())
}

fn emit(dataset: &IncomeDataset, output: &OutputArgs) -> Result<()> {
    let report = SampledReport::from_dataset(dataset, output.rows);
    match output.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Yaml => print!("{}", report.to_yaml()?),
    }

    if let Some(path) = &output.curves {
        write_curves_tsv(dataset, path)?;
        eprintln!(
            "Wrote {} ranks to {:?}",
            dataset.population_size(),
            path
        );
    }

    if let Some(path) = &output.dataset_json {
        std::fs::write(path, dataset.to_json()?)?;
        eprintln!("Wrote full dataset to {:?}", path);
    }

    Ok(())
}
