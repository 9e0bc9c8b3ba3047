//! Benchmarks for zbxsend codec operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zbxsend::protocol::{encode_request, parse_info, DataPoint};

fn codec_benchmarks(c: &mut Criterion) {
    let batch: Vec<DataPoint> = (0..100)
        .map(|i| DataPoint::new(format!("host-{:03}", i), "system.cpu.load[all,avg1]", "0.42"))
        .collect();

    c.bench_function("encode_request_100", |b| {
        b.iter(|| encode_request(black_box(&batch)))
    });

    c.bench_function("parse_info", |b| {
        b.iter(|| parse_info(black_box("processed: 98; failed: 2; total: 100; seconds spent: 0.001204")))
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
