use std::{cell::Cell, rc::Rc, time::Instant};

use anyhow::{bail, Context};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use smolsort_core::{Algorithm, Sorter};

use crate::evaluator::SortEvaluator;
use crate::patterns::{Generator, Pattern};
use crate::stats::Stats;

/// O(n^2) algorithms are not run on inputs longer than this.
pub const QUADRATIC_LIMIT: usize = 1_000;

pub const DEFAULT_SIZES: [usize; 6] = [10, 30, 100, 300, 1_000, 3_000];
pub const DEFAULT_SLOW_SAMPLES: usize = 3;
pub const DEFAULT_FAST_SAMPLES: usize = 20;
pub const DEFAULT_WORST_CASE_SIZE: usize = 1_000;

/// Settings shared by both benchmarks.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub algorithms: Vec<Algorithm>,
    pub seed: u64,
    /// Samples per measurement for O(n^2) algorithms.
    pub slow_samples: usize,
    /// Samples per measurement for everything else.
    pub fast_samples: usize,
    pub show_progress: bool,
}

impl BenchConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            seed,
            slow_samples: DEFAULT_SLOW_SAMPLES,
            fast_samples: DEFAULT_FAST_SAMPLES,
            show_progress: false,
        }
    }

    fn contenders(&self) -> impl Iterator<Item = Contender> + '_ {
        self.algorithms
            .iter()
            .copied()
            .map(Contender::Algorithm)
            .chain([Contender::Std])
    }

    fn progress_bar(&self, len: u64) -> anyhow::Result<ProgressBar> {
        if !self.show_progress {
            return Ok(ProgressBar::hidden());
        }

        let pb = ProgressBar::new(len);
        pb.set_style(ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {bar:50.cyan/blue} {pos}/{len} {msg}",
        )?);
        Ok(pb)
    }
}

/// Something that can be timed: one of our algorithms, or the standard library as a yardstick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contender {
    Algorithm(Algorithm),
    Std,
}

impl Contender {
    pub fn name(self) -> &'static str {
        match self {
            Contender::Algorithm(algorithm) => algorithm.name(),
            Contender::Std => "std sort_unstable",
        }
    }

    fn is_quadratic(self) -> bool {
        matches!(self, Contender::Algorithm(a) if a.is_quadratic())
    }

    fn samples(self, config: &BenchConfig) -> usize {
        if self.is_quadratic() {
            config.slow_samples
        } else {
            config.fast_samples
        }
    }

    fn sort(self, slice: &mut [SortEvaluator<u16>]) {
        match self {
            Contender::Algorithm(algorithm) => algorithm.sort(slice),
            Contender::Std => slice.sort_unstable(),
        }
    }
}

/// Timing (milliseconds) and comparison counts over all samples of one measurement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Measurement {
    pub millis: Stats,
    pub comparisons: Stats,
}

/// One contender at one input length. `measurement` is `None` when the run was skipped.
#[derive(Debug, Clone)]
pub struct AutoRow {
    pub contender: Contender,
    pub measurement: Option<Measurement>,
}

/// Every contender at one input length.
#[derive(Debug, Clone)]
pub struct AutoReport {
    pub len: usize,
    pub rows: Vec<AutoRow>,
}

impl AutoReport {
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "n".bold(),
            "Min (ms)".bold(),
            "Avg (ms)".bold(),
            "Max (ms)".bold(),
            "Comparisons".bold(),
            "Samples".bold()
        ]);

        for AutoRow {
            contender,
            measurement,
        } in &self.rows
        {
            match measurement {
                Some(m) => table.add_row(row![
                    contender.name(),
                    self.len,
                    millis(m.millis.min()),
                    millis(m.millis.avg()),
                    millis(m.millis.max()),
                    format!("{:.0}", m.comparisons.avg().unwrap_or_default()),
                    m.millis.count()
                ]),
                None => table.add_row(row![
                    contender.name(),
                    self.len,
                    "Not Doing It".red(),
                    "",
                    "",
                    "It is Stupid",
                    0
                ]),
            };
        }
        table
    }
}

/// One contender on every worst case pattern.
#[derive(Debug, Clone)]
pub struct WorstCaseRow {
    pub contender: Contender,
    pub len: usize,
    pub measurements: Vec<(Pattern, Measurement)>,
}

pub fn worst_case_table(rows: &[WorstCaseRow]) -> Table {
    let mut table = Table::new();
    let mut header = row!["Sorter".bold(), "n".bold()];
    for pattern in Pattern::WORST_CASE {
        let title = format!("{} (ms)", pattern.label());
        header.add_cell(prettytable::Cell::new(&title).style_spec("b"));
    }
    header.add_cell(prettytable::Cell::new("Samples").style_spec("b"));
    table.add_row(header);

    for row in rows {
        let mut cells = row![row.contender.name(), row.len];
        for (_, measurement) in &row.measurements {
            cells.add_cell(prettytable::Cell::new(&millis(measurement.millis.avg())));
        }
        let samples = row
            .measurements
            .first()
            .map_or(0, |(_, m)| m.millis.count());
        cells.add_cell(prettytable::Cell::new(&samples.to_string()));
        table.add_row(cells);
    }
    table
}

fn millis(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("-"), |ms| format!("{ms:.3}"))
}

/// Times every contender on `pattern` inputs of each length in `sizes`.
///
/// O(n^2) algorithms are skipped for lengths above [`QUADRATIC_LIMIT`].
pub fn run_auto(
    config: &BenchConfig,
    sizes: &[usize],
    pattern: Pattern,
) -> anyhow::Result<Vec<AutoReport>> {
    let mut generator = Generator::new(config.seed);
    let contenders = config.contenders().collect::<Vec<_>>();
    let pb = config.progress_bar((contenders.len() * sizes.len()) as u64)?;

    let mut reports = Vec::with_capacity(sizes.len());
    for &len in sizes {
        let mut rows = Vec::with_capacity(contenders.len());
        for &contender in &contenders {
            pb.set_message(format!("{} on {len}", contender.name()));

            let measurement = if contender.is_quadratic() && len > QUADRATIC_LIMIT {
                None
            } else {
                let samples = contender.samples(config);
                Some(measure(
                    contender,
                    pattern,
                    len,
                    samples,
                    &mut generator,
                    config.seed,
                )?)
            };

            rows.push(AutoRow {
                contender,
                measurement,
            });
            pb.inc(1);
        }
        reports.push(AutoReport { len, rows });
    }
    pb.finish_and_clear();

    Ok(reports)
}

/// Times every contender on random, sorted and reverse sorted inputs of length `len`.
pub fn run_worst_case(config: &BenchConfig, len: usize) -> anyhow::Result<Vec<WorstCaseRow>> {
    let mut generator = Generator::new(config.seed);
    let contenders = config.contenders().collect::<Vec<_>>();
    let pb = config.progress_bar((contenders.len() * Pattern::WORST_CASE.len()) as u64)?;

    let mut rows = Vec::with_capacity(contenders.len());
    for contender in contenders {
        let samples = contender.samples(config);
        let mut measurements = Vec::with_capacity(Pattern::WORST_CASE.len());
        for pattern in Pattern::WORST_CASE {
            pb.set_message(format!("{} on {}", contender.name(), pattern.label()));
            let measurement = measure(
                contender,
                pattern,
                len,
                samples,
                &mut generator,
                config.seed,
            )?;
            measurements.push((pattern, measurement));
            pb.inc(1);
        }
        rows.push(WorstCaseRow {
            contender,
            len,
            measurements,
        });
    }
    pb.finish_and_clear();

    Ok(rows)
}

fn measure(
    contender: Contender,
    pattern: Pattern,
    len: usize,
    samples: usize,
    generator: &mut Generator,
    seed: u64,
) -> anyhow::Result<Measurement> {
    let counter = Rc::new(Cell::new(0));
    let mut measurement = Measurement::default();

    for _ in 0..samples {
        let input = generator.generate(pattern, len);
        if pattern == Pattern::Random && len > 1 && is_sorted(&input) {
            eprintln!(
                "{} random input of {len} elements is already sorted",
                "warning:".yellow().bold()
            );
        }

        let mut values = SortEvaluator::wrap_all(&input, &counter);
        counter.set(0);

        let now = Instant::now();
        contender.sort(&mut values);
        let elapsed = now.elapsed();

        measurement.millis.add(elapsed.as_secs_f64() * 1_000.0);
        measurement.comparisons.add(counter.get() as f64);

        let output = values
            .into_iter()
            .map(SortEvaluator::into_inner)
            .collect::<Vec<_>>();
        verify(&input, &output).with_context(|| {
            format!(
                "{} failed on {len} {} elements (seed {seed})",
                contender.name(),
                pattern.label()
            )
        })?;
    }

    Ok(measurement)
}

fn is_sorted(values: &[u16]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Checks that `output` is `input` in ascending order.
pub fn verify(input: &[u16], output: &[u16]) -> anyhow::Result<()> {
    if let Some(i) = output.windows(2).position(|w| w[1] < w[0]) {
        bail!(
            "elements {i} and {} are out of order ({} > {})",
            i + 1,
            output[i],
            output[i + 1]
        );
    }

    let mut expected = input.to_vec();
    expected.sort_unstable();
    if expected != output {
        bail!("output is not a permutation of the input");
    }

    Ok(())
}

/// Sorts `values` with `algorithm` and returns the number of comparisons it made.
pub fn try_sort(algorithm: Algorithm, values: &mut [i64], descending: bool) -> usize {
    let mut comparisons = 0;
    if descending {
        algorithm.sort_by(values, |a, b| {
            comparisons += 1;
            b < a
        });
    } else {
        algorithm.sort_by(values, |a, b| {
            comparisons += 1;
            a < b
        });
    }
    comparisons
}

pub fn list_table() -> Table {
    use clap::ValueEnum;

    let mut table = Table::new();
    table.add_row(row![
        "Algorithm".bold(),
        "Argument".bold(),
        "Stable".bold(),
        "Complexity".bold()
    ]);
    for algorithm in Algorithm::ALL {
        let argument = algorithm
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default();
        let stable = if algorithm.is_stable() {
            "yes".green()
        } else {
            "no".red()
        };
        table.add_row(row![
            algorithm.name(),
            argument,
            stable,
            algorithm.complexity()
        ]);
    }
    table
}
