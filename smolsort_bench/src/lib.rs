//! # Introduction
//!
//! Timing and comparison-counting harness for the sorters in
//! [`smolsort_core`](https://docs.rs/smolsort_core). Every run is verified against the standard
//! library and is reproducible from the seed it prints.

pub mod benchmark;
pub mod evaluator;
pub mod patterns;
pub mod stats;

use benchmark::{BenchConfig, DEFAULT_SIZES, DEFAULT_WORST_CASE_SIZE};
use clap::{Args, Subcommand};
use colored::Colorize;
use patterns::Pattern;
use smolsort_core::Algorithm;

/// Install the [`smolsort`](https://crates.io/crates/smolsort) crate and run `smolsort bench`
/// to see what options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct BenchArgs {
    #[command(subcommand)]
    command: BenchCommands,
}

#[derive(Clone, Subcommand, Debug)]
enum BenchCommands {
    /// Time every algorithm over a range of input sizes.
    Auto {
        /// Input lengths to measure.
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
        sizes: Vec<usize>,

        /// Shape of the generated inputs.
        #[arg(long, value_enum, default_value_t = Pattern::Random)]
        pattern: Pattern,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Compare every algorithm on random, sorted and reverse sorted inputs.
    WorstCase {
        /// Input length.
        #[arg(long, default_value_t = DEFAULT_WORST_CASE_SIZE)]
        size: usize,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Sort the given numbers and show how many comparisons it took.
    Try {
        #[arg(short, long, value_enum, default_value_t = Algorithm::QuickMedianSwapped)]
        algorithm: Algorithm,

        /// Sort largest first.
        #[arg(short, long)]
        descending: bool,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// List the available algorithms.
    List,
}

#[derive(Clone, Args, Debug)]
struct RunOptions {
    /// Only run these algorithms. Runs all of them when not given.
    #[arg(short, long, value_enum, value_delimiter = ',')]
    algorithms: Vec<Algorithm>,

    /// Seed for the input generator. A random one is picked and printed when not given.
    #[arg(long)]
    seed: Option<u64>,

    /// Samples per measurement for O(n^2) algorithms.
    #[arg(long, default_value_t = benchmark::DEFAULT_SLOW_SAMPLES)]
    slow_samples: usize,

    /// Samples per measurement for the other algorithms.
    #[arg(long, default_value_t = benchmark::DEFAULT_FAST_SAMPLES)]
    fast_samples: usize,
}

impl RunOptions {
    fn config(self) -> BenchConfig {
        let seed = self.seed.unwrap_or_else(patterns::random_seed);
        println!("{} {}", "Seed ->".bold().underline().blue(), seed.to_string().bold());

        let mut config = BenchConfig::new(seed);
        if !self.algorithms.is_empty() {
            config.algorithms = self.algorithms;
        }
        config.slow_samples = self.slow_samples;
        config.fast_samples = self.fast_samples;
        config.show_progress = true;
        config
    }
}

impl BenchArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            BenchCommands::Auto {
                sizes,
                pattern,
                options,
            } => {
                let config = options.config();
                for report in benchmark::run_auto(&config, &sizes, pattern)? {
                    println!(
                        "{} {}",
                        "List Size ->".bold().underline().blue(),
                        report.len.to_string().bold()
                    );
                    report.table().printstd();
                    println!();
                }
            }

            BenchCommands::WorstCase { size, options } => {
                let config = options.config();
                let rows = benchmark::run_worst_case(&config, size)?;
                benchmark::worst_case_table(&rows).printstd();
            }

            BenchCommands::Try {
                algorithm,
                descending,
                mut values,
            } => {
                let comparisons = benchmark::try_sort(algorithm, &mut values, descending);
                let sorted = values
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{} {sorted}", format!("{algorithm} ->").bold().green());
                println!(
                    "{} {}",
                    "Comparisons Made ->".bold().blue(),
                    comparisons.to_string().bold()
                );
            }

            BenchCommands::List => benchmark::list_table().printstd(),
        }

        Ok(())
    }
}
