//! RDF terms: named nodes, blank nodes and literals.
//!
//! Every term has a canonical string form, produced by [`fmt::Display`] and
//! parsed back by [`FromStr`]:
//!
//! | Term | String form |
//! |---|---|
//! | named node | `http://example.org/a` (bare IRI) |
//! | blank node | `_:b0` |
//! | plain literal | `"value"` |
//! | language-tagged literal | `"value"@en` |
//! | typed literal | `"value"^^http://www.w3.org/2001/XMLSchema#integer` |
//!
//! Literal values are not escaped. The value runs from the first character
//! after the opening quote to the *last* quote in the string; language tags
//! and datatype IRIs never contain a quote, so the closing quote is always
//! the last one.

use crate::error::{CodecError, CodecResult};
use std::fmt;
use std::str::FromStr;

/// Datatype of plain literals.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Datatype of language-tagged literals.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

const BLANK_PREFIX: &str = "_:";

/// An IRI term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedNode(String);

impl NamedNode {
    /// Creates a named node from an IRI. The IRI is not validated.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Returns the IRI.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the node and returns the IRI.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NamedNode {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for NamedNode {
    fn from(iri: String) -> Self {
        Self::new(iri)
    }
}

/// A blank node, identified by a label local to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(String);

impl BlankNode {
    /// Creates a blank node from a label without the `_:` prefix.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label (without `_:` prefix).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BLANK_PREFIX}{}", self.0)
    }
}

/// A literal: lexical value plus language tag or datatype.
///
/// Constructed through [`Literal::simple`], [`Literal::lang`] or
/// [`Literal::typed`] so the datatype always agrees with the language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    value: String,
    language: Option<String>,
    datatype: NamedNode,
}

impl Literal {
    /// A plain `xsd:string` literal.
    pub fn simple(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: NamedNode::new(XSD_STRING),
        }
    }

    /// A language-tagged literal.
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: NamedNode::new(RDF_LANG_STRING),
        }
    }

    /// A literal with an explicit datatype.
    pub fn typed(value: impl Into<String>, datatype: impl Into<NamedNode>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: datatype.into(),
        }
    }

    /// The lexical value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The datatype IRI.
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else if self.datatype.as_str() != XSD_STRING {
            write!(f, "^^{}", self.datatype)
        } else {
            Ok(())
        }
    }
}

/// Any RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// An IRI.
    NamedNode(NamedNode),
    /// A blank node.
    BlankNode(BlankNode),
    /// A literal.
    Literal(Literal),
}

impl Term {
    /// Returns the named node if this term is one.
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Term::NamedNode(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(node) => node.fmt(f),
            Term::BlankNode(node) => node.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}

impl FromStr for Term {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        if s.is_empty() {
            return Err(CodecError::malformed(s, "empty term"));
        }

        if let Some(rest) = s.strip_prefix('"') {
            return parse_literal(s, rest).map(Term::Literal);
        }

        if let Some(label) = s.strip_prefix(BLANK_PREFIX) {
            if label.is_empty() {
                return Err(CodecError::malformed(s, "blank node without label"));
            }
            return Ok(Term::BlankNode(BlankNode::new(label)));
        }

        Ok(Term::NamedNode(NamedNode::new(s)))
    }
}

/// Parses the part of a literal after its opening quote.
fn parse_literal(input: &str, rest: &str) -> CodecResult<Literal> {
    let close = rest
        .rfind('"')
        .ok_or_else(|| CodecError::malformed(input, "unterminated literal"))?;
    let value = &rest[..close];
    let suffix = &rest[close + 1..];

    if suffix.is_empty() {
        return Ok(Literal::simple(value));
    }
    if let Some(language) = suffix.strip_prefix('@') {
        if language.is_empty() {
            return Err(CodecError::malformed(input, "empty language tag"));
        }
        return Ok(Literal::lang(value, language));
    }
    if let Some(datatype) = suffix.strip_prefix("^^") {
        if datatype.is_empty() {
            return Err(CodecError::malformed(input, "empty datatype"));
        }
        return Ok(Literal::typed(value, datatype));
    }

    Err(CodecError::malformed(
        input,
        "unexpected characters after literal",
    ))
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Term::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

/// A term allowed in subject position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    /// An IRI.
    NamedNode(NamedNode),
    /// A blank node.
    BlankNode(BlankNode),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::NamedNode(node) => node.fmt(f),
            Subject::BlankNode(node) => node.fmt(f),
        }
    }
}

impl FromStr for Subject {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<Self> {
        match s.parse::<Term>()? {
            Term::NamedNode(node) => Ok(Subject::NamedNode(node)),
            Term::BlankNode(node) => Ok(Subject::BlankNode(node)),
            Term::Literal(_) => Err(CodecError::malformed(s, "literal in subject position")),
        }
    }
}

impl From<NamedNode> for Subject {
    fn from(node: NamedNode) -> Self {
        Subject::NamedNode(node)
    }
}

impl From<BlankNode> for Subject {
    fn from(node: BlankNode) -> Self {
        Subject::BlankNode(node)
    }
}

impl From<Subject> for Term {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::NamedNode(node) => Term::NamedNode(node),
            Subject::BlankNode(node) => Term::BlankNode(node),
        }
    }
}
