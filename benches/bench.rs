use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

use sort_test_tools::patterns;
use sortscope::{CountingContext, NullContext};

type SortFn = fn(&mut [i32]);

fn bench_pattern_matrix(c: &mut Criterion) {
    patterns::use_random_seed_each_time();

    let pattern_fns: [(&str, fn(usize) -> Vec<i32>); 5] = [
        ("random", patterns::random),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("saw_mixed", |len| patterns::saw_mixed(len, 31)),
    ];

    let hybrids: [(&str, SortFn); 8] = [
        ("introsort", sortscope::unstable::introsort::sort),
        ("std_sort", sortscope::unstable::std_sort::sort),
        ("runtime_sort", sortscope::unstable::runtime_sort::sort),
        ("pdq_sort", sortscope::unstable::pdq_sort::sort),
        ("dual_pivot", sortscope::unstable::dual_pivot::sort),
        ("quicksort_median9", sortscope::unstable::quicksort_median9::sort),
        ("quicksort_stable", sortscope::stable::quicksort::sort),
        ("heap_sort", sortscope::unstable::heap_sort::sort),
    ];

    let len = 10_000;
    for (pattern_name, pattern_fn) in pattern_fns {
        let mut group = c.benchmark_group(format!("i32_{pattern_name}_{len}"));
        group.throughput(Throughput::Elements(len as u64));

        for (sort_name, sort_fn) in hybrids {
            group.bench_function(BenchmarkId::from_parameter(sort_name), |b| {
                b.iter_batched(
                    || pattern_fn(len),
                    |mut v| sort_fn(&mut v),
                    BatchSize::LargeInput,
                )
            });
        }

        group.finish();
    }

    // The quadratic corner of the crate, at a size it can afford.
    let quadratics: [(&str, SortFn); 4] = [
        ("insertion_sort", sortscope::stable::insertion_sort::sort),
        ("cocktail_sort", sortscope::stable::cocktail_sort::sort),
        ("comb_sort", sortscope::unstable::comb_sort::sort),
        ("quicksort", sortscope::unstable::quicksort::sort),
    ];

    let len = 1_000;
    let mut group = c.benchmark_group(format!("i32_random_{len}"));
    group.throughput(Throughput::Elements(len as u64));
    for (sort_name, sort_fn) in quadratics {
        group.bench_function(BenchmarkId::from_parameter(sort_name), |b| {
            b.iter_batched(
                || patterns::random(len),
                |mut v| sort_fn(&mut v),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

// `sort_with(&NullContext)` must not cost anything over `sort`; the
// counting observer shows the price of the cheapest real observer.
fn bench_observer_overhead(c: &mut Criterion) {
    patterns::use_random_seed_each_time();

    let len = 10_000;
    let mut group = c.benchmark_group("observer_overhead");
    group.throughput(Throughput::Elements(len as u64));

    group.bench_function("pdq_sort", |b| {
        b.iter_batched(
            || patterns::random(len),
            |mut v| sortscope::unstable::pdq_sort::sort(&mut v),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("pdq_sort_null_context", |b| {
        b.iter_batched(
            || patterns::random(len),
            |mut v| sortscope::unstable::pdq_sort::sort_with(&mut v, &NullContext),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("pdq_sort_counting_context", |b| {
        b.iter_batched(
            || patterns::random(len),
            |mut v| {
                let ctx = CountingContext::new();
                sortscope::unstable::pdq_sort::sort_with(&mut v, &ctx);
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_pattern_matrix, bench_observer_overhead);
criterion_main!(benches);
