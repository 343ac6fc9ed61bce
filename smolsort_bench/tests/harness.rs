use smolsort_bench::benchmark::*;
use smolsort_bench::patterns::{Generator, Pattern};
use smolsort_core::{Algorithm, Sorter};
use utilities::sorting::count_comparisons;

fn quick_config() -> BenchConfig {
    BenchConfig {
        slow_samples: 1,
        fast_samples: 2,
        ..BenchConfig::new(0xbe7c_4a11)
    }
}

#[test]
fn auto_runs_every_contender_at_every_size() {
    let config = quick_config();
    let sizes = [0, 1, 10, 64];
    let reports = run_auto(&config, &sizes, Pattern::Random).unwrap();

    assert_eq!(reports.len(), sizes.len());
    for (report, len) in reports.iter().zip(sizes) {
        assert_eq!(report.len, len);
        assert_eq!(report.rows.len(), Algorithm::ALL.len() + 1);
        assert_eq!(report.rows.last().map(|r| r.contender), Some(Contender::Std));

        for row in &report.rows {
            let measurement = row.measurement.expect("nothing is skipped at this size");
            let expected = if matches!(row.contender, Contender::Algorithm(a) if a.is_quadratic()) {
                1
            } else {
                2
            };
            assert_eq!(measurement.millis.count(), expected, "{}", row.contender.name());
        }
    }
}

#[test]
fn auto_skips_quadratic_sorts_on_long_inputs() {
    let config = BenchConfig {
        algorithms: vec![Algorithm::Insertion, Algorithm::ShellTokuda],
        ..quick_config()
    };
    let reports = run_auto(&config, &[QUADRATIC_LIMIT + 1], Pattern::Random).unwrap();
    let rows = &reports[0].rows;

    assert_eq!(rows.len(), 3);
    assert!(rows[0].measurement.is_none());
    assert!(rows[1].measurement.is_some());
    assert!(rows[2].measurement.is_some());
}

#[test]
fn auto_reports_average_comparisons() {
    // Selection sort makes n(n-1)/2 comparisons whatever the input.
    let config = BenchConfig {
        algorithms: vec![Algorithm::Selection],
        slow_samples: 3,
        ..quick_config()
    };
    let reports = run_auto(&config, &[20], Pattern::FewUnique).unwrap();
    let measurement = reports[0].rows[0].measurement.unwrap();

    assert_eq!(measurement.comparisons.min(), Some(190.0));
    assert_eq!(measurement.comparisons.max(), Some(190.0));
    assert_eq!(reports[0].table().len(), 3);
}

#[test]
fn comparison_counts_match_a_counting_comparator() {
    // Same seed, same inputs, so the harness must report exactly what a counting closure sees.
    let config = BenchConfig {
        algorithms: vec![Algorithm::CombThirteenM],
        fast_samples: 1,
        ..quick_config()
    };
    let reports = run_auto(&config, &[300], Pattern::Random).unwrap();
    let reported = reports[0].rows[0].measurement.unwrap().comparisons.avg();

    let mut input = Generator::new(config.seed).generate(Pattern::Random, 300);
    let counted = count_comparisons(Algorithm::CombThirteenM, &mut input);
    assert_eq!(reported, Some(counted as f64));
}

#[test]
fn worst_case_covers_each_pattern() {
    let config = BenchConfig {
        algorithms: vec![Algorithm::QuickMiddle, Algorithm::Bubble],
        ..quick_config()
    };
    let rows = run_worst_case(&config, 200).unwrap();

    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.len, 200);
        let patterns = row.measurements.iter().map(|(p, _)| *p).collect::<Vec<_>>();
        assert_eq!(patterns, Pattern::WORST_CASE);
    }

    // Bubble sort stops after one pass over sorted input.
    let (_, sorted) = rows[1].measurements[1];
    assert_eq!(sorted.comparisons.avg(), Some(199.0));

    assert_eq!(worst_case_table(&rows).len(), rows.len() + 1);
}

#[test]
fn worst_case_inputs_are_what_they_claim() {
    let mut generator = Generator::new(11);
    let mut sorted = generator.generate(Pattern::Ascending, 500);
    let before = sorted.clone();
    Algorithm::ShellKnuth.sort(&mut sorted);
    assert_eq!(sorted, before);

    let reversed = generator.generate(Pattern::Descending, 500);
    assert!(reversed.windows(2).all(|w| w[0] >= w[1]));
}
