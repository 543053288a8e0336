//! Worked harness example: time a few in-process workloads and report.
//!
//! Run with: cargo run --example perf_report

use lapbench::{
    DEFAULT_HEADER, FnSource, Runner, RunnerError, StatsReporter, build_report, column_width,
    generate_text_report,
};

const ROUNDS: usize = 5;

fn main() -> Result<(), RunnerError> {
    let cases = ["sum_loop", "string_build", "sort_small"];

    // Stand-in workloads; a real harness would run queries or subprocesses
    // behind the same TimingSource seam.
    let mut source = FnSource::new(|case: &str| {
        match case {
            "sum_loop" => {
                let total: u64 = (0..2_000_000).sum();
                std::hint::black_box(total);
            }
            "string_build" => {
                let mut s = String::new();
                for i in 0..20_000 {
                    s.push_str(&i.to_string());
                }
                std::hint::black_box(s);
            }
            _ => {
                let mut v: Vec<u32> = (0..50_000).rev().collect();
                v.sort_unstable();
                std::hint::black_box(v);
            }
        }
        Ok(())
    });

    let width = column_width(cases.iter().copied(), DEFAULT_HEADER);
    let mut reporter = StatsReporter::new();

    println!("Timing {} cases, {} rounds each...", cases.len(), ROUNDS);
    Runner::new(ROUNDS).run(&mut source, &cases, &mut reporter, |record| {
        println!("{:<width$} {:.2}", record.case, record.elapsed_ms);
    })?;

    let report = build_report(&reporter)?;
    println!();
    print!("{}", generate_text_report(&report, DEFAULT_HEADER));

    Ok(())
}
