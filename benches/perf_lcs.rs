use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seqmerge::{backtrack::backtrack, build_table, Equality, LcsEngine, Scope};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn augmented(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len() + 1);
    out.push(0);
    out.extend_from_slice(seq);
    out
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_lcs_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_engine_scoped");
    for &len in &[100usize, 500, 1_000] {
        group.bench_function(format!("lcs_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let s = random_dna(&mut rng, len);
                    let t = random_dna(&mut rng, len);
                    let mut scope = Scope::with_capacity(4 * len + 8);
                    let x = scope.seq_of(s);
                    let y = scope.seq_of(t);
                    (scope, x, y)
                },
                |(mut scope, x, y)| {
                    let before = rss_kib();
                    let (len_lcs, out) = LcsEngine::default().run_with_length(&mut scope, x, y);
                    let after = rss_kib();
                    black_box((len_lcs, out));
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta (lcs {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_table_and_backtrack(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let len = 2048;
    let x = augmented(&random_dna(&mut rng, len));
    let y = augmented(&random_dna(&mut rng, len));
    let table = build_table(&x, &y, &Equality);

    let mut group = c.benchmark_group("lcs_phases");
    group.bench_function("build_table", |b| {
        b.iter(|| black_box(build_table(black_box(&x), black_box(&y), &Equality)));
    });
    group.bench_function("backtrack", |b| {
        b.iter(|| black_box(backtrack(&table, &x, &y, len, len, &Equality)));
    });
    group.finish();
}

criterion_group!(benches, bench_lcs_engine, bench_table_and_backtrack);
criterion_main!(benches);
