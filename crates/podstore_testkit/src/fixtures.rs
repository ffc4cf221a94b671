//! Accessor fixtures and test clients.
//!
//! Provides accessors over the in-memory client, identifier helpers and
//! clients whose `connect` is slow or fails.

use parking_lot::Mutex;
use podstore_codec::{Literal, NamedNode, Quad};
use podstore_core::{
    AccessorConfig, DataAccessor, DataStream, KvDataAccessor, RepresentationMetadata,
    ResourceIdentifier, SingleRootIdentifierStrategy, StoreResult, INTERNAL_QUADS,
};
use podstore_kv::{InMemoryClient, KeyValueClient, KvError, KvResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Root container of every fixture accessor.
pub const TEST_BASE: &str = "http://test.com/";

/// An accessor over a shared in-memory client.
pub type MemoryAccessor = KvDataAccessor<Arc<InMemoryClient>>;

/// Creates an accessor over a fresh in-memory client rooted at [`TEST_BASE`].
pub fn memory_accessor() -> MemoryAccessor {
    memory_accessor_with_config(&AccessorConfig::default())
}

/// Same as [`memory_accessor`] with a custom configuration.
pub fn memory_accessor_with_config(config: &AccessorConfig) -> MemoryAccessor {
    KvDataAccessor::with_config(
        Arc::new(InMemoryClient::new()),
        SingleRootIdentifierStrategy::new(TEST_BASE),
        config,
    )
}

/// The root container.
pub fn root() -> ResourceIdentifier {
    ResourceIdentifier::new(TEST_BASE)
}

/// An identifier relative to [`TEST_BASE`].
pub fn resource(relative: &str) -> ResourceIdentifier {
    ResourceIdentifier::new(format!("{TEST_BASE}{relative}"))
}

/// A simple statement in the default graph.
pub fn sample_quad() -> Quad {
    Quad::new(
        NamedNode::new("http://name"),
        "http://pred",
        Literal::simple("value"),
    )
}

/// `count` distinct statements about `subject`.
pub fn sample_quads(subject: &str, count: usize) -> Vec<Quad> {
    (0..count)
        .map(|i| {
            Quad::new(
                NamedNode::new(subject),
                "http://example.org/value",
                Literal::simple(format!("value {i}")),
            )
        })
        .collect()
}

/// Metadata for `identifier` with an optional content type.
pub fn metadata_for(
    identifier: &ResourceIdentifier,
    content_type: Option<&str>,
) -> RepresentationMetadata {
    let metadata = RepresentationMetadata::for_resource(identifier);
    match content_type {
        Some(content_type) => metadata.with_content_type(content_type),
        None => metadata,
    }
}

/// Writes a binary document.
///
/// # Errors
///
/// Returns whatever the accessor returns.
pub fn write_bytes(
    accessor: &dyn DataAccessor,
    identifier: &ResourceIdentifier,
    bytes: &[u8],
    content_type: &str,
) -> StoreResult<()> {
    accessor.write_document(
        identifier,
        DataStream::from_bytes(bytes),
        &metadata_for(identifier, Some(content_type)),
    )
}

/// Writes a statement document.
///
/// # Errors
///
/// Returns whatever the accessor returns.
pub fn write_quads(
    accessor: &dyn DataAccessor,
    identifier: &ResourceIdentifier,
    quads: Vec<Quad>,
) -> StoreResult<()> {
    accessor.write_document(
        identifier,
        DataStream::from_quads(quads),
        &metadata_for(identifier, Some(INTERNAL_QUADS)),
    )
}

/// Writes a container without extra metadata.
///
/// # Errors
///
/// Returns whatever the accessor returns.
pub fn write_container(
    accessor: &dyn DataAccessor,
    identifier: &ResourceIdentifier,
) -> StoreResult<()> {
    accessor.write_container(identifier, &metadata_for(identifier, None))
}

/// An in-memory client whose `connect` blocks for a fixed delay.
///
/// Used to hold the initialization window open while other callers arrive.
#[derive(Debug)]
pub struct SlowConnectClient {
    inner: InMemoryClient,
    delay: Duration,
    connects: AtomicUsize,
    on_connect: Mutex<Option<Sender<()>>>,
}

impl SlowConnectClient {
    /// Creates a client whose connect takes `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryClient::new(),
            delay,
            connects: AtomicUsize::new(0),
            on_connect: Mutex::new(None),
        }
    }

    /// Signals `sender` once, when the first connect starts.
    #[must_use]
    pub fn notify_on_connect(self, sender: Sender<()>) -> Self {
        *self.on_connect.lock() = Some(sender);
        self
    }

    /// Returns how many times `connect` was entered.
    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Returns the wrapped in-memory client.
    pub fn inner(&self) -> &InMemoryClient {
        &self.inner
    }
}

impl KeyValueClient for SlowConnectClient {
    fn connect(&self) -> KvResult<()> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if let Some(sender) = self.on_connect.lock().take() {
            let _ = sender.send(());
        }
        thread::sleep(self.delay);
        self.inner.connect()
    }

    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> KvResult<()> {
        self.inner.set(key, value)
    }

    fn members(&self, key: &str) -> KvResult<Vec<String>> {
        self.inner.members(key)
    }

    fn replace_members(&self, key: &str, members: &[String]) -> KvResult<()> {
        self.inner.replace_members(key, members)
    }

    fn add_member(&self, key: &str, member: &str) -> KvResult<()> {
        self.inner.add_member(key, member)
    }

    fn remove_member(&self, key: &str, member: &str) -> KvResult<()> {
        self.inner.remove_member(key, member)
    }

    fn delete_keys(&self, keys: &[String]) -> KvResult<()> {
        self.inner.delete_keys(keys)
    }
}

/// An in-memory client whose first `failures` connects are refused.
#[derive(Debug)]
pub struct FailingClient {
    inner: InMemoryClient,
    remaining_failures: AtomicUsize,
}

impl FailingClient {
    /// A client that never connects.
    pub fn new() -> Self {
        Self::failing_first(usize::MAX)
    }

    /// A client that refuses `failures` connects, then behaves normally.
    pub fn failing_first(failures: usize) -> Self {
        Self {
            inner: InMemoryClient::new(),
            remaining_failures: AtomicUsize::new(failures),
        }
    }

    /// Returns the wrapped in-memory client.
    pub fn inner(&self) -> &InMemoryClient {
        &self.inner
    }
}

impl Default for FailingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueClient for FailingClient {
    fn connect(&self) -> KvResult<()> {
        let refused = self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if refused {
            return Err(KvError::Connection("connection refused".into()));
        }
        self.inner.connect()
    }

    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> KvResult<()> {
        self.inner.set(key, value)
    }

    fn members(&self, key: &str) -> KvResult<Vec<String>> {
        self.inner.members(key)
    }

    fn replace_members(&self, key: &str, members: &[String]) -> KvResult<()> {
        self.inner.replace_members(key, members)
    }

    fn add_member(&self, key: &str, member: &str) -> KvResult<()> {
        self.inner.add_member(key, member)
    }

    fn remove_member(&self, key: &str, member: &str) -> KvResult<()> {
        self.inner.remove_member(key, member)
    }

    fn delete_keys(&self, keys: &[String]) -> KvResult<()> {
        self.inner.delete_keys(keys)
    }
}
