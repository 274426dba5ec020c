use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::{fs::File, io::Write};
use stringfinder::{collect_files, count_occurrences, search, SearchConfig, SearchCoordinator};
use tempfile::tempdir;

fn create_test_files(
    dir: &tempfile::TempDir,
    file_count: usize,
    lines_per_file: usize,
) -> std::io::Result<()> {
    for i in 0..file_count {
        let sub = dir.path().join(format!("dir_{}", i % 8));
        std::fs::create_dir_all(&sub)?;
        let mut file = File::create(sub.join(format!("test_{}.txt", i)))?;
        for j in 0..lines_per_file {
            writeln!(
                file,
                "Line {} TODO: fix bug {} FIXME: optimize line {} NOTE: important task {}",
                j, j, j, j
            )?;
        }
    }
    Ok(())
}

fn bench_count_occurrences(c: &mut Criterion) {
    let content = "TODO: fix this, nothing here, TODO again\n".repeat(10_000);
    let mut group = c.benchmark_group("Count Occurrences");
    for pattern in ["TODO", "nothing here", "absent pattern"] {
        group.bench_with_input(BenchmarkId::from_parameter(pattern), pattern, |b, p| {
            b.iter(|| black_box(count_occurrences(content.as_bytes(), p.as_bytes())));
        });
    }
    group.finish();
}

fn bench_file_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("File Scaling");
    for file_count in [1, 10, 100, 1000] {
        let dir = tempdir().unwrap();
        create_test_files(&dir, file_count, 10).unwrap();
        let config = SearchConfig::new(dir.path(), "TODO");

        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            &config,
            |b, config| {
                b.iter(|| black_box(search(config).unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_walk_vs_search(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    create_test_files(&dir, 200, 50).unwrap();
    let files = collect_files(dir.path(), true, &[]);

    let mut group = c.benchmark_group("Phases");
    group.bench_function("collect_files", |b| {
        b.iter(|| black_box(collect_files(dir.path(), true, &[])));
    });
    group.bench_function("coordinator", |b| {
        b.iter(|| black_box(SearchCoordinator::new("FIXME").run(&files)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_count_occurrences,
    bench_file_scaling,
    bench_walk_vs_search
);
criterion_main!(benches);
