//! End-to-end tests driving the public lapbench facade.

use std::time::Duration;

use lapbench::{
    DEFAULT_HEADER, FnSource, Runner, SourceError, StatsError, StatsReporter, TimingSource,
    build_report, generate_csv_report, generate_json_report, generate_text_report,
};

fn reporter_with(case: &str, samples: &[f64]) -> StatsReporter {
    let mut reporter = StatsReporter::new();
    for &ms in samples {
        reporter.record(case, ms).unwrap();
    }
    reporter
}

#[test]
fn record_compute_report_end_to_end() {
    let mut reporter = StatsReporter::new();
    for ms in [10.0, 12.0, 11.0, 14.0, 13.0] {
        reporter.record("point_get", ms).unwrap();
    }
    for ms in [100.0, 110.0, 105.0, 120.0, 115.0] {
        reporter.record("full_scan", ms).unwrap();
    }

    let stats = reporter.compute("point_get").unwrap();
    assert_eq!(stats.samples, 5);
    assert!((stats.median - 12.0).abs() < f64::EPSILON);
    assert!((stats.mean - 12.0).abs() < f64::EPSILON);
    assert!((stats.min - 10.0).abs() < f64::EPSILON);
    assert!((stats.max - 14.0).abs() < f64::EPSILON);

    let width = reporter.column_width(DEFAULT_HEADER);
    let report = reporter.report(width).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("point_get "));
    assert!(lines[1].starts_with("full_scan "));
}

#[test]
fn median_odd_count_takes_middle_element() {
    // Sorted [1, 3, 5]: 1-based index (3+1)/2 = 2 is the value 3.
    let reporter = reporter_with("case", &[5.0, 3.0, 1.0]);
    let set = reporter.get("case").unwrap();
    assert!((set.median().unwrap() - 3.0).abs() < f64::EPSILON);
}

#[test]
fn median_even_count_collapses_to_lower_middle() {
    // Sorted [1, 2, 3, 4]: 1-based indices 4/2 and (4+1)/2 both equal 2,
    // so the median is 2.0 rather than the textbook 2.5.
    let reporter = reporter_with("case", &[4.0, 1.0, 3.0, 2.0]);
    let set = reporter.get("case").unwrap();
    assert!((set.median().unwrap() - 2.0).abs() < f64::EPSILON);
}

#[test]
fn p90_of_one_to_ten_is_ten() {
    // floor(min(0.9 * 10 + 0.5, 9)) = 9, the last sorted element.
    let samples: Vec<f64> = (1..=10).map(|x| x as f64).collect();
    let reporter = reporter_with("case", &samples);
    let stats = reporter.compute("case").unwrap();
    assert!((stats.p90 - 10.0).abs() < f64::EPSILON);
}

#[test]
fn statistics_are_permutation_invariant() {
    let samples = [12.5, 3.75, 8.0, 21.0, 5.5, 9.25];
    let mut permuted = samples;
    permuted.reverse();
    permuted.swap(1, 3);

    let a = reporter_with("case", &samples).compute("case").unwrap();
    let b = reporter_with("case", &permuted).compute("case").unwrap();

    assert_eq!(a.median, b.median);
    assert_eq!(a.mean, b.mean);
    assert_eq!(a.std_dev, b.std_dev);
    assert_eq!(a.p90, b.p90);
    assert_eq!(a.min, b.min);
    assert_eq!(a.max, b.max);
}

#[test]
fn statistics_stay_within_extrema() {
    let reporter = reporter_with("case", &[0.0, 47.3, 2.9, 18.0, 5.5, 103.2, 61.8]);
    let stats = reporter.compute("case").unwrap();

    assert!(stats.min <= stats.median && stats.median <= stats.max);
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
}

#[test]
fn single_sample_set_fails_compute_but_has_point_statistics() {
    let reporter = reporter_with("case", &[42.0]);

    assert!(matches!(
        reporter.compute("case"),
        Err(StatsError::InsufficientSamples { .. })
    ));

    let set = reporter.get("case").unwrap();
    assert!((set.median().unwrap() - 42.0).abs() < f64::EPSILON);
    assert!((set.mean().unwrap() - 42.0).abs() < f64::EPSILON);
    assert!((set.min().unwrap() - 42.0).abs() < f64::EPSILON);
    assert!((set.max().unwrap() - 42.0).abs() < f64::EPSILON);
}

#[test]
fn rejected_samples_leave_the_reporter_unchanged() {
    let mut reporter = reporter_with("case", &[1.0]);

    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            reporter.record("case", bad),
            Err(StatsError::InvalidSample { .. })
        ));
    }

    assert_eq!(reporter.get("case").unwrap().samples(), &[1.0]);
}

#[test]
fn compute_on_unknown_case_fails() {
    let reporter = reporter_with("known", &[1.0, 2.0]);
    assert!(matches!(
        reporter.compute("unknown"),
        Err(StatsError::UnknownCase { .. })
    ));
}

#[test]
fn runner_feeds_fn_source_timings_into_the_report() {
    let mut source = FnSource::new(|case: &str| {
        if case == "slow" {
            std::thread::sleep(Duration::from_millis(3));
        }
        Ok(())
    });
    let mut reporter = StatsReporter::new();
    let mut progress = Vec::new();

    Runner::new(3)
        .run(&mut source, &["fast", "slow"], &mut reporter, |record| {
            progress.push(format!("{} #{}", record.case, record.round));
        })
        .unwrap();

    assert_eq!(
        progress,
        vec!["fast #1", "fast #2", "fast #3", "slow #1", "slow #2", "slow #3"]
    );

    let fast = reporter.compute("fast").unwrap();
    let slow = reporter.compute("slow").unwrap();
    assert_eq!(fast.samples, 3);
    assert_eq!(slow.samples, 3);
    assert!(slow.mean > fast.mean);
}

#[test]
fn scripted_source_flows_through_every_renderer() {
    struct Scripted(Vec<u64>);

    impl TimingSource for Scripted {
        fn run(&mut self, case: &str) -> Result<Duration, SourceError> {
            self.0
                .pop()
                .map(Duration::from_millis)
                .ok_or_else(|| SourceError::new(case, "script exhausted"))
        }
    }

    let mut source = Scripted(vec![30, 20, 10]);
    let mut reporter = StatsReporter::new();
    Runner::new(3)
        .run(&mut source, &["scan"], &mut reporter, |_| {})
        .unwrap();

    let report = build_report(&reporter).unwrap();
    assert_eq!(report.summary.total_cases, 1);
    assert_eq!(report.summary.total_samples, 3);

    let text = generate_text_report(&report, DEFAULT_HEADER);
    assert!(text.contains("Case Med/Avg/Stddev/90%/Min/Max"));
    assert!(text.contains("scan 20.00/20.00/10.00/30.00/10.00/30.00"));

    let json = generate_json_report(&report).unwrap();
    let parsed: lapbench::Report = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.cases[0].case, "scan");

    let csv = generate_csv_report(&report);
    assert!(csv.contains("scan,3,20,20,10,30,10,30"));
}

#[test]
fn failing_source_aborts_the_run() {
    let mut source = FnSource::new(|case: &str| Err(SourceError::new(case, "connection refused")));
    let mut reporter = StatsReporter::new();

    let err = Runner::new(2)
        .run(&mut source, &["scan"], &mut reporter, |_| {})
        .unwrap_err();

    assert!(err.to_string().contains("scan"));
    assert!(err.to_string().contains("connection refused"));
}
