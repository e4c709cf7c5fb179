//! Benchmarks for cc_input performance testing.
//!
//! Run with: cargo bench

use cc_input::{
    apply_edit, format_card_number, format_with_selection, select_pattern, CardNumberField,
    CursorRange, EditSnapshot, Key,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111 1111 1111 1111";
const AMEX: &str = "378282246310005";
const MESSY: &str = "  41 11  1111 11111  111";

/// Benchmark pattern selection
fn bench_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");

    group.bench_function("select_visa", |b| b.iter(|| select_pattern(black_box(VISA_16))));
    group.bench_function("select_unknown", |b| b.iter(|| select_pattern(black_box(""))));

    group.finish();
}

/// Benchmark formatting of raw, canonical and messy input
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("visa_16_raw", |b| {
        b.iter(|| format_card_number(black_box(VISA_16)))
    });

    group.bench_function("visa_16_canonical", |b| {
        b.iter(|| format_card_number(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("amex_15", |b| b.iter(|| format_card_number(black_box(AMEX))));

    group.bench_function("messy_selection", |b| {
        let selection = CursorRange::new(3, 12).unwrap();
        b.iter(|| format_with_selection(black_box(MESSY), black_box(selection)))
    });

    group.finish();
}

/// Benchmark the edit guard on accept and reject paths
fn bench_apply_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_edit");

    let typing = EditSnapshot::capture("4111 1111 111", CursorRange::caret(13), Some('1'));
    group.bench_function("accept_digit", |b| {
        b.iter(|| apply_edit(&typing, black_box("4111 1111 1111"), CursorRange::caret(14)))
    });

    let full = EditSnapshot::capture("3782 822463 10005", CursorRange::caret(17), Some('9'));
    group.bench_function("reject_full", |b| {
        b.iter(|| apply_edit(&full, black_box("3782 822463 100059"), CursorRange::caret(18)))
    });

    let paste = EditSnapshot::capture("4111", CursorRange::new(0, 4).unwrap(), None);
    group.bench_function("reject_letters", |b| {
        b.iter(|| apply_edit(&paste, black_box("abc123"), CursorRange::caret(6)))
    });

    group.finish();
}

/// Benchmark typing whole numbers through a field
fn bench_field_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_typing");

    for card in [VISA_16, AMEX] {
        group.throughput(Throughput::Elements(card.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(card.len()), card, |b, card| {
            b.iter(|| {
                let mut field = CardNumberField::new();
                for c in card.chars() {
                    field.press(Key::Char(c));
                }
                field
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pattern,
    bench_format,
    bench_apply_edit,
    bench_field_typing,
);
criterion_main!(benches);
