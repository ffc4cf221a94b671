//! CLI command implementations.

pub mod get;
pub mod ls;
pub mod meta;
pub mod mkdir;
pub mod put;
pub mod rm;

use clap::ValueEnum;
use podstore_codec::{Quad, Subject, Term};
use podstore_core::ResourceIdentifier;
use serde::Serialize;

/// Result type shared by all commands.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Output format for `meta` and `ls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per item.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Resolves `id` against `base` unless it already has a scheme.
pub fn resolve(base: &str, id: &str) -> ResourceIdentifier {
    if id.contains("://") {
        return ResourceIdentifier::new(id);
    }
    let base = base.trim_end_matches('/');
    let id = id.trim_start_matches('/');
    ResourceIdentifier::new(format!("{base}/{id}"))
}

/// A statement in JSON output, each term in its stored string form.
#[derive(Debug, Serialize)]
pub struct Statement {
    /// Subject term.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: String,
}

impl From<&Quad> for Statement {
    fn from(quad: &Quad) -> Self {
        Self {
            subject: quad.subject.to_string(),
            predicate: quad.predicate.to_string(),
            object: quad.object.to_string(),
        }
    }
}

/// Formats a statement as an N-Triples line.
pub fn ntriples_line(quad: &Quad) -> String {
    let subject = match &quad.subject {
        Subject::NamedNode(node) => format!("<{node}>"),
        Subject::BlankNode(node) => node.to_string(),
    };
    format!(
        "{subject} <{}> {} .",
        quad.predicate,
        ntriples_term(&quad.object)
    )
}

fn ntriples_term(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => format!("<{node}>"),
        Term::BlankNode(node) => node.to_string(),
        Term::Literal(literal) => {
            let value = escape(literal.value());
            if let Some(language) = literal.language() {
                format!("\"{value}\"@{language}")
            } else if literal.datatype().as_str() == podstore_codec::XSD_STRING {
                format!("\"{value}\"")
            } else {
                format!("\"{value}\"^^<{}>", literal.datatype())
            }
        }
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
