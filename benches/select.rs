use criterion::{black_box, criterion_group, criterion_main, Criterion};

use caselabel::{select_label, CASE_1, CASE_2, CASE_3};

fn bench_select(c: &mut Criterion) {
    c.bench_function("select_label/sentinels", |b| {
        b.iter(|| {
            for code in [CASE_1, CASE_2, CASE_3] {
                black_box(select_label(black_box(code)));
            }
        });
    });

    c.bench_function("select_label/miss", |b| {
        b.iter(|| black_box(select_label(black_box(0))));
    });
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
