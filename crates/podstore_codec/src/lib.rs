//! # PodStore Codec
//!
//! RDF term model and the string encoding PodStore uses to keep statements
//! in key-value sets.
//!
//! ## Encoding Rules
//!
//! - A triple is `subject|predicate|object`, each field in its term string
//!   form (bare IRI, `_:label`, `"value"`, `"value"@lang`, `"value"^^iri`)
//! - Literal and IRI objects may contain `|`; subjects and predicates may not
//! - Graphs are not encoded; only default-graph data is stored as triples
//! - An empty quad set is stored as a single placeholder member
//!
//! ## Usage
//!
//! ```
//! use podstore_codec::{decode_triple, encode_triple, Literal, NamedNode, Quad};
//!
//! let quad = Quad::new(
//!     NamedNode::new("http://example.org/doc"),
//!     "http://example.org/title",
//!     Literal::lang("a | b", "en"),
//! );
//! let encoded = encode_triple(&quad).unwrap();
//! assert_eq!(encoded, "http://example.org/doc|http://example.org/title|\"a | b\"@en");
//! assert_eq!(decode_triple(&encoded).unwrap(), quad);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod quad;
mod set;
mod term;
mod triple;

pub use error::{CodecError, CodecResult, TermPosition};
pub use quad::{GraphName, Quad};
pub use set::{decode_set, encode_set, is_empty_set_member, EMPTY_SET_MEMBER};
pub use term::{BlankNode, Literal, NamedNode, Subject, Term, RDF_LANG_STRING, XSD_STRING};
pub use triple::{decode_triple, encode_triple, is_encodable_iri, DELIMITER};
