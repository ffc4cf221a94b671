//! End-to-end scenarios and a model-tracking harness.
//!
//! The harness applies operations to an in-memory accessor and to a plain
//! model of what should be stored, then checks one against the other.

use crate::fixtures::{memory_accessor, metadata_for, MemoryAccessor};
use crate::generators::ResourceOperation;
use podstore_codec::{encode_triple, Quad};
use podstore_core::{
    DataAccessor, DataStream, IdentifierStrategy, ResourceIdentifier,
    SingleRootIdentifierStrategy, INTERNAL_QUADS,
};
use std::collections::{BTreeMap, BTreeSet};

use crate::fixtures::TEST_BASE;

/// What the harness expects a document to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedData {
    /// A binary payload.
    Bytes(Vec<u8>),
    /// A statement payload, as sorted encoded triples.
    Quads(Vec<String>),
}

/// A test harness for integration testing.
pub struct IntegrationHarness {
    /// The accessor under test.
    pub accessor: MemoryAccessor,
    strategy: SingleRootIdentifierStrategy,
    documents: BTreeMap<ResourceIdentifier, ExpectedData>,
    children: BTreeMap<ResourceIdentifier, BTreeSet<String>>,
}

impl IntegrationHarness {
    /// Creates a new harness over a fresh in-memory accessor.
    pub fn new() -> Self {
        Self {
            accessor: memory_accessor(),
            strategy: SingleRootIdentifierStrategy::new(TEST_BASE),
            documents: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    /// Applies one operation and updates the model.
    pub fn apply(&mut self, op: &ResourceOperation) {
        match op {
            ResourceOperation::WriteBytes { id, data } => {
                self.accessor
                    .write_document(
                        id,
                        DataStream::from_bytes(data.clone()),
                        &metadata_for(id, Some("application/octet-stream")),
                    )
                    .expect("Failed to write bytes");
                self.documents
                    .insert(id.clone(), ExpectedData::Bytes(data.clone()));
                self.link(id);
            }
            ResourceOperation::WriteQuads { id, quads } => {
                self.accessor
                    .write_document(
                        id,
                        DataStream::from_quads(quads.clone()),
                        &metadata_for(id, Some(INTERNAL_QUADS)),
                    )
                    .expect("Failed to write quads");
                self.documents
                    .insert(id.clone(), ExpectedData::Quads(sorted_encoding(quads)));
                self.link(id);
            }
            ResourceOperation::Delete { id } => {
                self.accessor
                    .delete_resource(id)
                    .expect("Failed to delete resource");
                self.documents.remove(id);
                if let Some(parent) = self.parent(id) {
                    if let Some(children) = self.children.get_mut(&parent) {
                        children.remove(id.path());
                    }
                }
            }
            ResourceOperation::Get { id } => self.verify_document(id),
        }
    }

    /// Checks one document against the model.
    pub fn verify_document(&self, id: &ResourceIdentifier) {
        let result = self.accessor.get_data(id);
        match self.documents.get(id) {
            None => assert!(
                result.as_ref().is_err_and(|e| e.is_not_found()),
                "Expected {id} to be absent, got {result:?}"
            ),
            Some(ExpectedData::Bytes(expected)) => {
                let actual = result
                    .expect("Failed to read document")
                    .into_bytes()
                    .expect("Expected a byte payload");
                assert_eq!(&actual, expected, "Payload mismatch for {id}");
            }
            Some(ExpectedData::Quads(expected)) => {
                let actual = result
                    .expect("Failed to read document")
                    .into_quads()
                    .expect("Expected a statement payload");
                assert_eq!(&sorted_encoding(&actual), expected, "Statement mismatch for {id}");
            }
        }
    }

    /// Checks every tracked document and container listing.
    pub fn verify_all(&self) {
        for id in self.documents.keys() {
            self.verify_document(id);
            let metadata = self
                .accessor
                .get_metadata(id)
                .expect("Failed to read metadata");
            assert!(metadata.content_type().is_some(), "Missing content type for {id}");
        }
        for (container, expected) in &self.children {
            let actual: BTreeSet<String> = self
                .accessor
                .get_children(container)
                .expect("Failed to list children")
                .map(|child| child.identifier().to_string())
                .collect();
            assert_eq!(&actual, expected, "Children mismatch for {container}");
        }
    }

    /// Returns the count of tracked documents.
    pub fn tracked_count(&self) -> usize {
        self.documents.len()
    }

    fn parent(&self, id: &ResourceIdentifier) -> Option<ResourceIdentifier> {
        self.strategy
            .parent_of(id)
            .expect("Identifier outside the test base")
    }

    fn link(&mut self, id: &ResourceIdentifier) {
        if let Some(parent) = self.parent(id) {
            self.children
                .entry(parent)
                .or_default()
                .insert(id.path().to_string());
        }
    }
}

impl Default for IntegrationHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_encoding(quads: &[Quad]) -> Vec<String> {
    let mut encoded: Vec<String> = quads
        .iter()
        .map(|q| encode_triple(q).expect("Failed to encode triple"))
        .collect();
    encoded.sort();
    encoded.dedup();
    encoded
}

/// Multi-step scenarios over one accessor.
pub mod scenarios {
    use super::*;
    use crate::fixtures::{
        resource, root, sample_quad, write_bytes, write_container, FailingClient,
        SlowConnectClient,
    };
    use podstore_codec::{Literal, NamedNode};
    use podstore_core::{AccessorConfig, KvDataAccessor, StoreError, CONTENT_TYPE};
    use std::sync::{mpsc, Arc};
    use std::thread;
    use std::time::Duration;

    /// Root container, then a document inside it.
    pub fn root_then_document(accessor: &MemoryAccessor) {
        write_container(accessor, &root()).expect("Failed to write root");
        let doc = resource("doc");
        let statement = Quad::new(
            NamedNode::new(doc.path()),
            "http://is.a",
            Literal::simple("x"),
        );
        let mut metadata = metadata_for(&doc, Some(INTERNAL_QUADS));
        metadata.add_quad(statement.clone());
        accessor
            .write_document(&doc, DataStream::from_quads(vec![sample_quad()]), &metadata)
            .expect("Failed to write document");

        let children: Vec<_> = accessor
            .get_children(&root())
            .expect("Failed to list root")
            .collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].identifier().to_string(), resource("doc").path());

        let quads = accessor
            .get_data(&resource("doc"))
            .expect("Failed to read document")
            .into_quads()
            .expect("Expected statements");
        assert_eq!(quads, vec![sample_quad()]);

        let metadata = accessor
            .get_metadata(&resource("doc"))
            .expect("Failed to read metadata");
        assert_eq!(metadata.len(), 2);
        assert!(metadata.quads().contains(&statement));
        assert_eq!(metadata.content_type(), Some(INTERNAL_QUADS));
        assert_eq!(metadata.objects(CONTENT_TYPE).count(), 1);
    }

    /// Nested containers each list only their direct children.
    pub fn container_hierarchy(accessor: &MemoryAccessor) {
        write_container(accessor, &root()).expect("Failed to write root");
        write_container(accessor, &resource("a/")).expect("Failed to write a/");
        write_container(accessor, &resource("a/b/")).expect("Failed to write a/b/");
        write_bytes(accessor, &resource("a/b/file.txt"), b"hello", "text/plain")
            .expect("Failed to write file");

        let names = |id: &ResourceIdentifier| -> Vec<String> {
            accessor
                .get_children(id)
                .expect("Failed to list children")
                .map(|child| child.identifier().to_string())
                .collect()
        };
        assert_eq!(names(&root()), vec![resource("a/").path().to_string()]);
        assert_eq!(names(&resource("a/")), vec![resource("a/b/").path().to_string()]);
        assert_eq!(
            names(&resource("a/b/")),
            vec![resource("a/b/file.txt").path().to_string()]
        );
        assert!(names(&resource("a/b/file.txt")).is_empty());
    }

    /// Deleting a document unlinks it and leaves no keys behind.
    pub fn delete_unlinks(accessor: &MemoryAccessor) {
        write_container(accessor, &resource("c/")).expect("Failed to write container");
        write_bytes(accessor, &resource("c/x"), b"1", "text/plain").expect("Failed to write x");
        write_bytes(accessor, &resource("c/y"), b"2", "text/plain").expect("Failed to write y");

        accessor
            .delete_resource(&resource("c/x"))
            .expect("Failed to delete x");

        let remaining: Vec<String> = accessor
            .get_children(&resource("c/"))
            .expect("Failed to list container")
            .map(|child| child.identifier().to_string())
            .collect();
        assert_eq!(remaining, vec![resource("c/y").path().to_string()]);
        assert!(accessor
            .client()
            .keys()
            .iter()
            .all(|key| !key.starts_with(resource("c/x").path())));
        assert!(matches!(
            accessor.get_metadata(&resource("c/x")),
            Err(StoreError::NotFound { .. })
        ));
    }

    /// A caller arriving during a long connect gives up, the connecting
    /// caller succeeds, and later calls reuse the connection.
    pub fn concurrent_initialization_timeout() {
        let (tx, rx) = mpsc::channel();
        let client = Arc::new(
            SlowConnectClient::new(Duration::from_millis(300)).notify_on_connect(tx),
        );
        let accessor = Arc::new(KvDataAccessor::with_config(
            Arc::clone(&client),
            SingleRootIdentifierStrategy::new(TEST_BASE),
            &AccessorConfig::new()
                .init_check_period(Duration::from_millis(10))
                .max_init_wait(Duration::from_millis(30)),
        ));

        let first = {
            let accessor = Arc::clone(&accessor);
            thread::spawn(move || accessor.get_data(&resource("doc")))
        };
        rx.recv().expect("Connect never started");

        let second = accessor.get_data(&resource("doc"));
        assert!(
            second.as_ref().is_err_and(StoreError::is_backend_unavailable),
            "Expected a timeout, got {second:?}"
        );

        let first = first.join().expect("Initializing thread panicked");
        assert!(first.is_err_and(|e| e.is_not_found()));
        assert!(accessor.is_initialized());

        write_bytes(accessor.as_ref(), &resource("doc"), b"x", "text/plain")
            .expect("Failed to write after initialization");
        assert_eq!(client.connect_count(), 1);
    }

    /// A refused connect is reported and a later call connects.
    pub fn retry_after_failed_connect() {
        let accessor = KvDataAccessor::new(
            FailingClient::failing_first(1),
            SingleRootIdentifierStrategy::new(TEST_BASE),
        );
        let err = accessor
            .get_children(&root())
            .expect_err("First connect should fail");
        assert!(err.is_backend_unavailable());
        assert!(!accessor.is_initialized());

        assert_eq!(
            accessor
                .get_children(&root())
                .expect("Second connect should succeed")
                .len(),
            0
        );
        assert!(accessor.client().inner().is_connected());
    }
}
