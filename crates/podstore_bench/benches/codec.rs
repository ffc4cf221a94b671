//! Triple codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use podstore_bench::generate_quads;
use podstore_codec::{decode_set, decode_triple, encode_set, encode_triple, Literal, NamedNode, Quad};

/// Benchmark encoding single triples.
fn bench_encode_triple(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_triple");

    group.bench_function("simple_literal", |b| {
        let quad = Quad::new(NamedNode::new("http://name"), "http://pred", Literal::simple("value"));
        b.iter(|| black_box(encode_triple(black_box(&quad)).unwrap()));
    });

    group.bench_function("typed_literal", |b| {
        let quad = Quad::new(
            NamedNode::new("http://name"),
            "http://pred",
            Literal::typed("42", "http://www.w3.org/2001/XMLSchema#integer"),
        );
        b.iter(|| black_box(encode_triple(black_box(&quad)).unwrap()));
    });

    group.finish();
}

/// Benchmark decoding single triples.
fn bench_decode_triple(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_triple");

    for (name, encoded) in [
        ("iri_object", "http://s|http://p|http://o"),
        ("lang_literal", "http://s|http://p|\"a | b\"@en"),
        ("typed_literal", "http://s|http://p|\"42\"^^http://www.w3.org/2001/XMLSchema#integer"),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(decode_triple(black_box(encoded)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark whole quad sets.
fn bench_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    for size in [10, 100, 1000].iter() {
        let quads = generate_quads(*size);
        let members = encode_set(&quads).unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &quads, |b, quads| {
            b.iter(|| black_box(encode_set(black_box(quads)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &members, |b, members| {
            b.iter(|| black_box(decode_set(black_box(members)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode_triple, bench_decode_triple, bench_sets);
criterion_main!(benches);
