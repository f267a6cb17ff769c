use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlchain::prelude::*;
use sqlchain::{Select, rebind};

/// Build a SELECT with `n` structured conditions:
/// SELECT * FROM t WHERE col0 = ? AND col1 = ? ...
fn build_select(n: usize) -> Select {
    let mut q = select("t");
    for i in 0..n {
        q = q.and_where(format!("col{i}"));
    }
    q
}

fn bench_rebind(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebind/raw");

    for n in [1, 5, 10, 50, 100] {
        let raw = build_select(n).build_raw();
        group.bench_with_input(BenchmarkId::from_parameter(n), &raw, |b, raw| {
            b.iter(|| black_box(rebind(raw)));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebind/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).to_sql()));
        });
    }

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebind/nested");

    for depth in [1, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut q = select("t").and_where("a");
                for _ in 0..depth {
                    q = q
                        .where_group(|g| g.and_where("b").or_where("c"))
                        .and_where_in_subquery("id", |s| s.table("u").columns(["t_id"]).and_where("d"));
                }
                black_box(q.to_sql())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rebind, bench_build_and_render, bench_nested);
criterion_main!(benches);
