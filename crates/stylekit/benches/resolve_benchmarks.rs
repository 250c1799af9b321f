//! Class resolution benchmarks.
//!
//! Run with: `cargo bench -p stylekit --bench resolve_benchmarks`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stylekit::parser::parse_class;
use stylekit::{
    Constraint, ResponsiveValue, VariantTable, cn, resolve_constraint, resolve_responsive_class,
};

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]";

fn bench_resolve_responsive(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_responsive");

    let keys = ["initial", "small", "medium", "large", "xl", "2xl"];
    for count in [1, 3, 6] {
        let value = ResponsiveValue::Breakpoints(
            keys.iter()
                .take(count)
                .enumerate()
                .map(|(i, key)| (key.to_string(), i * 2))
                .collect(),
        );
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("gap", count), &value, |b, value| {
            b.iter(|| resolve_responsive_class("gap", black_box(Some(value))))
        });
    }

    group.finish();
}

fn bench_parse_class(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_class");

    for token in ["px-4", "md:hover:!-mt-4", "[&_svg:not([class*='size-'])]:size-4"] {
        group.bench_with_input(BenchmarkId::new("token", token), token, |b, token| {
            b.iter(|| parse_class(black_box(token)))
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    group.bench_function("button_base_with_override", |b| {
        b.iter(|| cn(black_box([BUTTON_BASE, "h-9 px-4 py-2", "rounded-full gap-4"])))
    });

    group.bench_function("no_conflicts", |b| {
        b.iter(|| cn(black_box(["flex", "flex-col", "gap-2", "md:gap-4", "p-4"])))
    });

    group.finish();
}

fn bench_variant_compose(c: &mut Criterion) {
    let table = VariantTable::new("button", BUTTON_BASE)
        .axis(
            "variant",
            [
                ("default", "bg-primary text-primary-foreground hover:bg-primary/90"),
                ("outline", "border bg-background hover:bg-accent"),
            ],
            "default",
        )
        .axis("size", [("default", "h-9 px-4 py-2"), ("sm", "h-8 px-3")], "default");

    c.bench_function("variant_compose", |b| {
        b.iter(|| table.compose(black_box(&[("variant", Some("outline"))]), Some("px-6")))
    });
}

fn bench_constraint(c: &mut Criterion) {
    let constraint = Constraint::new().top(4).left("10%").width("full").z_index(60);
    c.bench_function("resolve_constraint", |b| {
        b.iter(|| resolve_constraint(black_box(&constraint)))
    });
}

criterion_group!(
    benches,
    bench_resolve_responsive,
    bench_parse_class,
    bench_merge,
    bench_variant_compose,
    bench_constraint
);
criterion_main!(benches);
