//! Benchmark utilities.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use podstore_codec::{BlankNode, Literal, NamedNode, Quad};
use podstore_core::{KvDataAccessor, SingleRootIdentifierStrategy};
use podstore_kv::InMemoryClient;
use rand::Rng;

/// Root container used by the benchmarks.
pub const BENCH_BASE: &str = "http://bench.example/";

/// Generate random payload data of the specified size.
pub fn random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Generate `count` statements about one subject, mixing object kinds.
pub fn generate_quads(count: usize) -> Vec<Quad> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let subject = NamedNode::new(format!("{BENCH_BASE}card#me"));
            let predicate = format!("http://xmlns.com/foaf/0.1/p{}", i % 16);
            match i % 3 {
                0 => Quad::new(
                    subject,
                    predicate,
                    Literal::simple(format!("value {}", rng.gen::<u32>())),
                ),
                1 => Quad::new(
                    subject,
                    predicate,
                    Literal::lang(format!("a | b {i}"), "en"),
                ),
                _ => Quad::new(subject, predicate, BlankNode::new(format!("b{i}"))),
            }
        })
        .collect()
}

/// A connected accessor over a fresh in-memory client.
pub fn memory_accessor() -> KvDataAccessor<InMemoryClient> {
    KvDataAccessor::new(
        InMemoryClient::connected(),
        SingleRootIdentifierStrategy::new(BENCH_BASE),
    )
}
