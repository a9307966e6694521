use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use runbound::{Grid, RunLimits, Search};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_grid(rng: &mut StdRng, side: usize) -> Grid {
    let rows = (0..side)
        .map(|_| (0..side).map(|_| rng.gen_range(1u32..10)).collect())
        .collect();
    Grid::from_rows(rows).unwrap()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory()
    } else {
        0
    }
}

fn bench_search_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_length_search");
    for &side in &[64usize, 128, 256] {
        for (name, limits) in [
            ("crucible", RunLimits::crucible()),
            ("ultra", RunLimits::ultra()),
        ] {
            group.bench_function(format!("{name}_side_{side}"), |b| {
                b.iter_batched(
                    || {
                        let mut rng = StdRng::seed_from_u64(44);
                        random_grid(&mut rng, side)
                    },
                    |grid| {
                        let before = rss_kib();
                        let outcome = Search::new(&grid, limits).run().unwrap();
                        let after = rss_kib();
                        criterion::black_box(outcome.cost);
                        eprintln!(
                            "RSS KiB delta ({name} {side}): {}",
                            after.saturating_sub(before)
                        );
                    },
                    BatchSize::PerIteration,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_search_perf);
criterion_main!(benches);
