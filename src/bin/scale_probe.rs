use std::env;
use std::time::Instant;

use runbound::{Grid, RunLimits, SearchBuilder};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("runbound Scaling Probe: Performance and Correctness Testing");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the run-length-bounded search across grid families and sizes to verify:");
    eprintln!(
        "  • Correctness: answers match a heuristic-free Dijkstra re-run (up to size {})",
        options.verify_limit
    );
    eprintln!("  • Performance: wall-clock time and memory usage scale appropriately");
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: wall-clock time in seconds (lower is better)");
    eprintln!("  • rss_delta_kib: resident-set delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/4] Crucible profile on woven grids (min_run=1, max_run=3)...");
    measurements.extend(run_profile(
        "crucible_woven",
        RunLimits::crucible(),
        woven_grid,
        &options,
        &mut sys,
    ));
    eprintln!();

    eprintln!("[2/4] Ultra profile on woven grids (min_run=4, max_run=10)...");
    measurements.extend(run_profile(
        "ultra_woven",
        RunLimits::ultra(),
        woven_grid,
        &options,
        &mut sys,
    ));
    eprintln!();

    eprintln!("[3/4] Crucible profile on banded grids (cheap corridors every 4th line)...");
    measurements.extend(run_profile(
        "crucible_banded",
        RunLimits::crucible(),
        banded_grid,
        &options,
        &mut sys,
    ));
    eprintln!();

    eprintln!("[4/4] Ultra profile on banded grids (cheap corridors every 4th line)...");
    measurements.extend(run_profile(
        "ultra_banded",
        RunLimits::ultra(),
        banded_grid,
        &options,
        &mut sys,
    ));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 256usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum grid side length to verify against the
                                heuristic-free baseline (default: 256)
  -h, --help                    Print this help message

Examples:
  cargo run --bin scale_probe
  cargo run --bin scale_probe -- --format table --verify-limit 128
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn run_profile(
    scenario: &'static str,
    limits: RunLimits,
    generate: fn(usize) -> Grid,
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    const SIZES: &[usize] = &[32, 64, 128, 256, 512, 1024];
    let total = SIZES.len();

    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &side)| {
            eprint!("      [{}/{}] Testing {side}x{side}... ", idx + 1, total);
            let mut cost_result = 0u64;
            let mut expanded_result = 0u64;
            let m = measure(scenario, format!("side={side}"), sys, || {
                let grid = generate(side);
                let outcome = SearchBuilder::new(&grid, limits)
                    .build()
                    .run()
                    .expect("probe grids always have a route");
                cost_result = outcome.cost;
                expanded_result = outcome.expanded;

                if side <= options.verify_limit {
                    let baseline = SearchBuilder::new(&grid, limits)
                        .with_heuristic(false)
                        .build()
                        .run()
                        .expect("probe grids always have a route");
                    if baseline.cost == outcome.cost {
                        (VerificationStatus::Passed, None)
                    } else {
                        (
                            VerificationStatus::Failed,
                            Some(format!("expected {}, got {}", baseline.cost, outcome.cost)),
                        )
                    }
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            let status_icon = match m.verification_status {
                VerificationStatus::Passed => "✓",
                VerificationStatus::Failed => "✗",
                VerificationStatus::NotChecked => "○",
            };
            eprintln!(
                "{} cost={}, expanded={}, time={:.3}s, status={}",
                status_icon,
                cost_result,
                expanded_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Probe Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len();
    eprintln!("Verification results:");
    eprintln!("  Total runs: {total}");
    eprintln!("  Passed: {passed}");
    eprintln!("  Failed: {failed}");
    eprintln!(
        "  Not checked (side > {}): {not_checked}",
        options.verify_limit
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     {detail}");
                }
            }
        }
        eprintln!();
    }

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All verified runs matched the heuristic-free baseline.");
    } else {
        eprintln!("✗ {failed} run(s) diverged from the baseline; see above.");
    }
    eprintln!();
    eprintln!("Interpretation:");
    eprintln!("  • 'passed' runs found the same minimum cost with and without the heuristic");
    eprintln!("  • 'not_checked' runs were too large for the double run but completed");
    eprintln!("  • expanded counts should stay well under rows*cols*2 when the heuristic is on");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  {}",
        "scenario",
        "size",
        "wall_s",
        "rss_delta_kib",
        "status",
        "detail",
        col1 = col1,
        col2 = col2
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "",
        "",
        "",
        "",
        "",
        "",
        col1 = col1,
        col2 = col2
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or(""),
            col1 = col1,
            col2 = col2
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

/// Mixed digit costs with no exploitable structure.
fn woven_grid(side: usize) -> Grid {
    let rows = (0..side)
        .map(|r| {
            (0..side)
                .map(|c| ((r * 31 + c * 17 + (r * c) % 7) % 9 + 1) as u32)
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("probe grid dimensions are valid")
}

/// Expensive field crossed by cheap corridors every fourth row and column.
/// Ultra-profile runs must stitch corridors together with long legs.
fn banded_grid(side: usize) -> Grid {
    let rows = (0..side)
        .map(|r| {
            (0..side)
                .map(|c| {
                    if r % 4 == 0 || c % 4 == 0 {
                        1u32
                    } else {
                        (7 + (r + c) % 3) as u32
                    }
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("probe grid dimensions are valid")
}
