use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sortkit::{patterns, SortOrder, SortRange};

const BENCH_SIZES: [usize; 4] = [20, 100, 1_000, 10_000];

// The quadratic family gets a trimmed grid, it would dominate the run
// otherwise.
const QUADRATIC_CAP: usize = 1_000;

fn bench_sort(
    c: &mut Criterion,
    bench_name: &str,
    max_size: usize,
    sort_func: impl Fn(&mut Vec<i32>),
) {
    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 4] = [
        ("random", patterns::random),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw-mixed", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
    ];

    for (pattern_name, pattern_provider) in pattern_providers {
        for test_size in BENCH_SIZES {
            if test_size > max_size {
                continue;
            }

            let batch_size = if test_size > 30 {
                BatchSize::LargeInput
            } else {
                BatchSize::SmallInput
            };

            c.bench_function(&format!("{bench_name}-{pattern_name}-{test_size}"), |b| {
                b.iter_batched(
                    || pattern_provider(test_size),
                    |mut test_data| sort_func(black_box(&mut test_data)),
                    batch_size,
                )
            });
        }
    }
}

macro_rules! bench_algorithm {
    ($c:expr, $name:ident, $max_size:expr) => {
        paste::paste! {
            bench_sort($c, stringify!($name), $max_size, |v: &mut Vec<i32>| {
                sortkit::[<sort_ $name>](v, SortRange::all(), SortOrder::Ascending).unwrap()
            });
        }
    };
}

fn criterion_benchmark(c: &mut Criterion) {
    patterns::disable_fixed_seed();

    bench_algorithm!(c, bubble, QUADRATIC_CAP);
    bench_algorithm!(c, selection, QUADRATIC_CAP);
    bench_algorithm!(c, insertion, QUADRATIC_CAP);
    bench_algorithm!(c, shell, usize::MAX);
    bench_algorithm!(c, binary_insertion, QUADRATIC_CAP);
    bench_algorithm!(c, gnome, QUADRATIC_CAP);
    bench_algorithm!(c, comb, usize::MAX);
    bench_algorithm!(c, cocktail, QUADRATIC_CAP);
    bench_algorithm!(c, brick, QUADRATIC_CAP);
    bench_algorithm!(c, pancake, QUADRATIC_CAP);
    // The rotation merge makes merge/block quadratic on random input, so they
    // share the trimmed grid.
    bench_algorithm!(c, merge, QUADRATIC_CAP);
    bench_algorithm!(c, quick, usize::MAX);
    bench_algorithm!(c, bitonic, usize::MAX);
    bench_algorithm!(c, block, QUADRATIC_CAP);
    bench_algorithm!(c, heap, usize::MAX);

    bench_sort(c, "dispatch", usize::MAX, |v: &mut Vec<i32>| {
        sortkit::sort(v, SortRange::all(), SortOrder::Ascending).unwrap()
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
