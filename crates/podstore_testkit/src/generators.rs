//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random test data
//! that maintains required invariants.

use podstore_codec::{BlankNode, Literal, NamedNode, Quad, Subject, Term};
use podstore_core::ResourceIdentifier;
use proptest::prelude::*;

use crate::fixtures::TEST_BASE;

/// Strategy for IRIs that can appear anywhere in a triple (no `|`).
pub fn iri_strategy() -> impl Strategy<Value = NamedNode> {
    prop::string::string_regex("http://[a-z]{1,8}\\.org/[a-zA-Z0-9/#_.-]{0,16}")
        .expect("Invalid regex")
        .prop_map(NamedNode::new)
}

/// Strategy for blank nodes.
pub fn blank_node_strategy() -> impl Strategy<Value = BlankNode> {
    prop::string::string_regex("[a-z][a-z0-9]{0,7}")
        .expect("Invalid regex")
        .prop_map(BlankNode::new)
}

/// Strategy for literal values, which may contain the delimiter.
pub fn literal_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 |:/'\"-]{0,24}").expect("Invalid regex")
}

/// Strategy for plain, language-tagged and typed literals.
pub fn literal_strategy() -> impl Strategy<Value = Literal> {
    prop_oneof![
        literal_value_strategy().prop_map(Literal::simple),
        (
            literal_value_strategy(),
            prop::string::string_regex("[a-z]{2}(-[A-Z]{2})?").expect("Invalid regex"),
        )
            .prop_map(|(value, lang)| Literal::lang(value, lang)),
        (literal_value_strategy(), iri_strategy())
            .prop_map(|(value, datatype)| Literal::typed(value, datatype)),
    ]
}

/// Strategy for subjects.
pub fn subject_strategy() -> impl Strategy<Value = Subject> {
    prop_oneof![
        3 => iri_strategy().prop_map(Subject::from),
        1 => blank_node_strategy().prop_map(Subject::from),
    ]
}

/// Strategy for objects.
pub fn object_strategy() -> impl Strategy<Value = Term> {
    prop_oneof![
        2 => iri_strategy().prop_map(Term::from),
        1 => blank_node_strategy().prop_map(Term::from),
        3 => literal_strategy().prop_map(Term::from),
    ]
}

/// Strategy for encodable statements in the default graph.
pub fn quad_strategy() -> impl Strategy<Value = Quad> {
    (subject_strategy(), iri_strategy(), object_strategy())
        .prop_map(|(subject, predicate, object)| Quad::new(subject, predicate, object))
}

/// Strategy for statement lists without duplicates.
pub fn quad_set_strategy(max_len: usize) -> impl Strategy<Value = Vec<Quad>> {
    prop::collection::hash_set(quad_strategy(), 0..max_len)
        .prop_map(|set| set.into_iter().collect())
}

/// Strategy for document identifiers under the test base.
pub fn document_strategy() -> impl Strategy<Value = ResourceIdentifier> {
    prop::string::string_regex("([a-z]{1,6}/){0,2}[a-z]{1,8}")
        .expect("Invalid regex")
        .prop_map(|path| ResourceIdentifier::new(format!("{TEST_BASE}{path}")))
}

/// Strategy for binary payloads.
pub fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

/// An operation against a data accessor.
#[derive(Debug, Clone)]
pub enum ResourceOperation {
    /// Write a binary document.
    WriteBytes {
        /// Target document.
        id: ResourceIdentifier,
        /// Payload.
        data: Vec<u8>,
    },
    /// Write a statement document.
    WriteQuads {
        /// Target document.
        id: ResourceIdentifier,
        /// Statements.
        quads: Vec<Quad>,
    },
    /// Delete a resource.
    Delete {
        /// Target resource.
        id: ResourceIdentifier,
    },
    /// Read a document.
    Get {
        /// Target document.
        id: ResourceIdentifier,
    },
}

/// Strategy for accessor operations.
pub fn resource_operation_strategy() -> impl Strategy<Value = ResourceOperation> {
    prop_oneof![
        2 => (document_strategy(), payload_strategy())
            .prop_map(|(id, data)| ResourceOperation::WriteBytes { id, data }),
        2 => (document_strategy(), quad_set_strategy(8))
            .prop_map(|(id, quads)| ResourceOperation::WriteQuads { id, quads }),
        1 => document_strategy().prop_map(|id| ResourceOperation::Delete { id }),
        2 => document_strategy().prop_map(|id| ResourceOperation::Get { id }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<ResourceOperation>> {
    prop::collection::vec(resource_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
