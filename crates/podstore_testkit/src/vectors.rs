//! Encoding test vectors for PodStore.
//!
//! These vectors pin the stored string forms so data written by other
//! PodStore deployments stays readable.

use serde::{Deserialize, Serialize};

/// A test vector that can be shared with other implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Stored string form.
    pub encoded: String,
    /// Expected error kind, if the string must be rejected.
    pub expected_error: Option<String>,
}

fn vector(id: &str, description: &str, encoded: &str, expected_error: Option<&str>) -> TestVector {
    TestVector {
        id: id.into(),
        description: description.into(),
        encoded: encoded.into(),
        expected_error: expected_error.map(Into::into),
    }
}

/// Triple encoding vectors.
pub fn triple_vectors() -> Vec<TestVector> {
    vec![
        vector(
            "triple_simple_literal",
            "IRI subject and predicate, plain literal object",
            "http://name|http://pred|\"value\"",
            None,
        ),
        vector(
            "triple_iri_object",
            "IRI object",
            "http://test.com/s|http://test.com/p|http://test.com/o",
            None,
        ),
        vector(
            "triple_lang_literal",
            "Language-tagged literal",
            "http://test.com/s|http://purl.org/dc/terms/title|\"Titel\"@de",
            None,
        ),
        vector(
            "triple_typed_literal",
            "Typed literal",
            "http://test.com/s|http://test.com/p|\"42\"^^http://www.w3.org/2001/XMLSchema#integer",
            None,
        ),
        vector(
            "triple_delimiter_in_object",
            "Object literal containing the delimiter",
            "http://test.com/s|http://test.com/p|\"a|b|c\"",
            None,
        ),
        vector(
            "triple_blank_subject",
            "Blank node subject",
            "_:b0|http://test.com/p|_:b1",
            None,
        ),
        vector(
            "triple_content_type",
            "Content type metadata triple",
            "http://test.com/doc|http://www.w3.org/ns/ma-ont#format|\"internal/quads\"",
            None,
        ),
        vector("triple_missing_object", "Only two fields", "http://s|http://p", Some("malformed")),
        vector("triple_empty", "Empty string", "", Some("malformed")),
        vector(
            "triple_literal_subject",
            "Literal in subject position",
            "\"s\"|http://p|http://o",
            Some("malformed"),
        ),
        vector(
            "triple_literal_predicate",
            "Literal in predicate position",
            "http://s|\"p\"|http://o",
            Some("malformed"),
        ),
    ]
}

/// Key naming vectors: the identifier is `encoded`, the description names
/// the derived key.
pub fn key_vectors() -> Vec<TestVector> {
    vec![
        vector("key_meta", "http://test.com/resource|meta", "http://test.com/resource", None),
        vector(
            "key_children",
            "http://test.com/|children",
            "http://test.com/",
            None,
        ),
        vector(
            "key_content_type",
            "http://test.com/resource|contentType",
            "http://test.com/resource",
            None,
        ),
    ]
}

/// All vectors, as pretty-printed JSON.
pub fn all_vectors_json() -> String {
    let vectors = AllTestVectors {
        triple: triple_vectors(),
        key: key_vectors(),
    };

    serde_json::to_string_pretty(&vectors).expect("Failed to serialize vectors")
}

#[derive(Debug, Serialize, Deserialize)]
struct AllTestVectors {
    triple: Vec<TestVector>,
    key: Vec<TestVector>,
}
