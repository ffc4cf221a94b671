//! Quads: triples scoped to a graph.

use crate::term::{BlankNode, NamedNode, Subject, Term};

/// The graph a quad belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GraphName {
    /// The default (unnamed) graph.
    #[default]
    DefaultGraph,
    /// A graph named by an IRI.
    NamedNode(NamedNode),
    /// A graph named by a blank node.
    BlankNode(BlankNode),
}

impl GraphName {
    /// Returns true for the default graph.
    pub fn is_default_graph(&self) -> bool {
        matches!(self, GraphName::DefaultGraph)
    }
}

/// A (subject, predicate, object, graph) statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    /// The subject.
    pub subject: Subject,
    /// The predicate.
    pub predicate: NamedNode,
    /// The object.
    pub object: Term,
    /// The graph.
    pub graph: GraphName,
}

impl Quad {
    /// Creates a quad in the default graph.
    pub fn new(
        subject: impl Into<Subject>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) -> Self {
        Self::in_graph(subject, predicate, object, GraphName::DefaultGraph)
    }

    /// Creates a quad in the given graph.
    pub fn in_graph(
        subject: impl Into<Subject>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
        graph: GraphName,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph,
        }
    }

    /// Returns true if the quad lives in the default graph.
    pub fn is_in_default_graph(&self) -> bool {
        self.graph.is_default_graph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Literal;

    #[test]
    fn new_quad_is_in_default_graph() {
        let quad = Quad::new(
            NamedNode::new("http://name"),
            "http://pred",
            Literal::simple("value"),
        );
        assert!(quad.is_in_default_graph());
    }

    #[test]
    fn named_graph_quad() {
        let quad = Quad::in_graph(
            BlankNode::new("b"),
            "http://pred",
            NamedNode::new("http://obj"),
            GraphName::NamedNode(NamedNode::new("http://graph")),
        );
        assert!(!quad.is_in_default_graph());
    }
}
