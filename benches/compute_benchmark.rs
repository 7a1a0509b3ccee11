// ============================================================================
// Holding Core Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Line Computation - Single-line HT/TVA/TTC derivation
// 2. Document Totals - Aggregation over invoices of varying size
// 3. Policy Check - Access decision lookup
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use holding_core::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// Line Computation Benchmarks
// ============================================================================

fn benchmark_compute_line(c: &mut Criterion) {
    let prix: Decimal = "10.33".parse().unwrap();
    let taux: Decimal = "20".parse().unwrap();

    c.bench_function("compute_line", |b| {
        b.iter(|| {
            compute_line(
                black_box(Decimal::from(3)),
                black_box(prix),
                black_box(taux),
            )
            .unwrap()
        })
    });
}

// ============================================================================
// Document Totals Benchmarks
// ============================================================================

fn benchmark_document_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_totals");

    for num_lines in [10u32, 100, 1000] {
        let mut invoice = Invoice::new("FAC-BENCH", "Bench");
        for i in 0..num_lines {
            let prix = Decimal::new(143 + i64::from(i) * 7, 2);
            invoice.add_line(
                InvoiceLine::new(format!("Ligne {}", i), 1 + i % 9, prix, "20".parse().unwrap(), i)
                    .unwrap(),
            );
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(num_lines),
            &invoice,
            |b, invoice| b.iter(|| invoice.totals().unwrap()),
        );
    }

    group.finish();
}

// ============================================================================
// Policy Check Benchmarks
// ============================================================================

fn benchmark_policy_check(c: &mut Criterion) {
    let policy = AccessPolicy::default();

    c.bench_function("policy_check", |b| {
        b.iter(|| {
            policy.check(
                black_box(Role::Manager),
                black_box(AccessModule::Finance),
                black_box(AccessAction::Delete),
            )
        })
    });
}

criterion_group!(
    benches,
    benchmark_compute_line,
    benchmark_document_totals,
    benchmark_policy_check
);
criterion_main!(benches);
