//! Stress runs for PodStore accessors.
//!
//! These runs verify behavior under heavy load and concurrent access.

use crate::fixtures::{resource, write_bytes, write_quads, MemoryAccessor};
use podstore_codec::{Literal, NamedNode, Quad};
use podstore_core::DataAccessor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }

    /// Prints a summary of the test.
    pub fn print_summary(&self, name: &str) {
        println!("\n=== {} ===", name);
        println!("Total operations: {}", self.total_ops);
        println!("Successful: {}", self.successful_ops);
        println!("Failed: {}", self.failed_ops);
        println!("Duration: {:?}", self.duration);
        println!("Throughput: {:.2} ops/sec", self.ops_per_second);
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of operations to perform.
    pub operations: usize,
    /// Number of concurrent threads (for concurrent tests).
    pub threads: usize,
    /// Size of binary payloads in bytes.
    pub payload_size: usize,
    /// Number of distinct documents.
    pub document_count: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            operations: 10_000,
            threads: 4,
            payload_size: 256,
            document_count: 1_000,
        }
    }
}

fn document(index: usize) -> podstore_core::ResourceIdentifier {
    resource(&format!("stress/doc-{index}"))
}

fn statements(index: usize) -> Vec<Quad> {
    vec![Quad::new(
        NamedNode::new(document(index).path()),
        "http://example.org/index",
        Literal::simple(index.to_string()),
    )]
}

/// Run a sequential write stress test, alternating binary and statement
/// documents.
pub fn stress_sequential_writes(accessor: &MemoryAccessor, config: &StressConfig) -> StressTestResult {
    let data = vec![0xABu8; config.payload_size];

    let start = Instant::now();
    let mut successful = 0usize;
    let mut failed = 0usize;

    for i in 0..config.operations {
        let index = i % config.document_count;
        let result = if i % 2 == 0 {
            write_bytes(accessor, &document(index), &data, "application/octet-stream")
        } else {
            write_quads(accessor, &document(index), statements(index))
        };
        match result {
            Ok(()) => successful += 1,
            Err(_) => failed += 1,
        }
    }

    StressTestResult::new(successful, failed, start.elapsed())
}

/// Run a mixed read/write/delete stress test.
pub fn stress_mixed_operations(accessor: &MemoryAccessor, config: &StressConfig) -> StressTestResult {
    let data = vec![0xABu8; config.payload_size];

    let start = Instant::now();
    let mut successful = 0usize;
    let mut failed = 0usize;

    for i in 0..config.operations {
        let id = document(i % config.document_count);

        let ok = match i % 3 {
            0 => write_bytes(accessor, &id, &data, "text/plain").is_ok(),
            // Not found is still a successful read
            1 => match accessor.get_data(&id) {
                Ok(_) => true,
                Err(e) => e.is_not_found(),
            },
            _ => accessor.delete_resource(&id).is_ok(),
        };

        if ok {
            successful += 1;
        } else {
            failed += 1;
        }
    }

    StressTestResult::new(successful, failed, start.elapsed())
}

/// Run concurrent writers that all link documents into one container.
///
/// Every write must succeed and the container must list every document
/// exactly once afterwards.
pub fn stress_concurrent_writes(
    accessor: Arc<MemoryAccessor>,
    config: &StressConfig,
) -> StressTestResult {
    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let ops_per_thread = config.operations / config.threads;
    let payload_size = config.payload_size;

    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let accessor = Arc::clone(&accessor);
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);

            thread::spawn(move || {
                let data = vec![t as u8; payload_size];
                for i in 0..ops_per_thread {
                    let id = document(t * ops_per_thread + i);
                    match write_bytes(accessor.as_ref(), &id, &data, "text/plain") {
                        Ok(()) => {
                            successful.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(_) => {
                            failed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}
