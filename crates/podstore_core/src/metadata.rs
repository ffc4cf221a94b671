//! Representation metadata.

use crate::identifier::ResourceIdentifier;
use podstore_codec::{Literal, NamedNode, Quad, Subject, Term};

/// Predicate carrying a resource's content type.
pub const CONTENT_TYPE: &str = "http://www.w3.org/ns/ma-ont#format";

/// Content type marking a payload as a set of RDF statements.
pub const INTERNAL_QUADS: &str = "internal/quads";

/// The metadata of one resource: an identifier plus the statements about it.
///
/// The content type is one of those statements, with predicate
/// [`CONTENT_TYPE`] and a plain literal object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepresentationMetadata {
    identifier: Subject,
    quads: Vec<Quad>,
}

impl RepresentationMetadata {
    /// Creates empty metadata about `identifier`.
    #[must_use]
    pub fn new(identifier: impl Into<Subject>) -> Self {
        Self {
            identifier: identifier.into(),
            quads: Vec::new(),
        }
    }

    /// Creates empty metadata about the resource at `identifier`.
    #[must_use]
    pub fn for_resource(identifier: &ResourceIdentifier) -> Self {
        Self::new(NamedNode::new(identifier.path()))
    }

    /// Sets the content type, consuming and returning `self`.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.set_content_type(Some(content_type.into()));
        self
    }

    /// Adds statements, consuming and returning `self`.
    #[must_use]
    pub fn with_quads(mut self, quads: impl IntoIterator<Item = Quad>) -> Self {
        self.add_quads(quads);
        self
    }

    /// Returns the subject this metadata describes.
    pub fn identifier(&self) -> &Subject {
        &self.identifier
    }

    /// Returns every statement, including the content type.
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Consumes the metadata, returning its statements.
    pub fn into_quads(self) -> Vec<Quad> {
        self.quads
    }

    /// Returns the number of statements.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Returns true if there are no statements.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Adds one statement.
    pub fn add_quad(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    /// Adds statements.
    pub fn add_quads(&mut self, quads: impl IntoIterator<Item = Quad>) {
        self.quads.extend(quads);
    }

    /// Returns the objects of statements about the identifier with `predicate`.
    pub fn objects<'a>(&'a self, predicate: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.quads
            .iter()
            .filter(move |q| q.subject == self.identifier && q.predicate.as_str() == predicate)
            .map(|q| &q.object)
    }

    /// Removes every statement about the identifier with `predicate`.
    pub fn remove_all(&mut self, predicate: &str) {
        let identifier = &self.identifier;
        self.quads
            .retain(|q| !(q.subject == *identifier && q.predicate.as_str() == predicate));
    }

    /// Returns the content type, if one is set.
    pub fn content_type(&self) -> Option<&str> {
        self.objects(CONTENT_TYPE)
            .find_map(Term::as_literal)
            .map(Literal::value)
    }

    /// Replaces the content type. `None` removes it.
    pub fn set_content_type(&mut self, content_type: Option<impl Into<String>>) {
        self.remove_all(CONTENT_TYPE);
        if let Some(content_type) = content_type {
            self.quads.push(Quad::new(
                self.identifier.clone(),
                CONTENT_TYPE,
                Literal::simple(content_type),
            ));
        }
    }

    /// Returns true if the payload is a statement set.
    pub fn is_internal_quads(&self) -> bool {
        self.content_type() == Some(INTERNAL_QUADS)
    }
}
