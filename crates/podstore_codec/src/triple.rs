//! Delimiter-joined triple encoding.
//!
//! A triple is stored as `subject|predicate|object`, each field in the term
//! string form described in [`crate::term`]. The graph is not encoded; decoded
//! quads always land in the default graph.
//!
//! Decoding splits off the subject and predicate and keeps everything after
//! the second delimiter as the object, since literal and IRI objects may
//! contain the delimiter themselves. Subjects and predicates cannot, and
//! [`encode_triple`] rejects them when they do. It also rejects any term whose
//! string form would decode to something else, so a stored member always
//! reads back as the quad that was written.

use crate::error::{CodecError, CodecResult, TermPosition};
use crate::quad::Quad;
use crate::term::{NamedNode, Subject, Term};

/// Separator between the fields of an encoded triple and between a resource
/// identifier and its key suffix.
pub const DELIMITER: char = '|';

/// Encodes the subject, predicate and object of a quad into one string.
///
/// # Errors
///
/// Returns [`CodecError::DelimiterInTerm`] if the subject or predicate
/// contains [`DELIMITER`], and [`CodecError::UndecodableTerm`] if any term's
/// string form does not parse back to that term.
pub fn encode_triple(quad: &Quad) -> CodecResult<String> {
    let subject = quad.subject.to_string();
    if subject.contains(DELIMITER) {
        return Err(CodecError::delimiter_in_term(TermPosition::Subject, subject));
    }
    if subject.parse::<Subject>().ok().as_ref() != Some(&quad.subject) {
        return Err(CodecError::undecodable_term(TermPosition::Subject, subject));
    }

    let predicate = quad.predicate.to_string();
    if predicate.contains(DELIMITER) {
        return Err(CodecError::delimiter_in_term(
            TermPosition::Predicate,
            predicate,
        ));
    }
    match predicate.parse::<Term>() {
        Ok(Term::NamedNode(node)) if node == quad.predicate => {}
        _ => {
            return Err(CodecError::undecodable_term(
                TermPosition::Predicate,
                predicate,
            ))
        }
    }

    let object = quad.object.to_string();
    if object.parse::<Term>().ok().as_ref() != Some(&quad.object) {
        return Err(CodecError::undecodable_term(TermPosition::Object, object));
    }

    Ok(format!("{subject}{DELIMITER}{predicate}{DELIMITER}{object}"))
}

/// Decodes a string produced by [`encode_triple`] into a default-graph quad.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] if the string has fewer than three
/// fields or any field is not a valid term for its position.
pub fn decode_triple(encoded: &str) -> CodecResult<Quad> {
    let mut fields = encoded.splitn(3, DELIMITER);
    let (Some(subject), Some(predicate), Some(object)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(CodecError::malformed(encoded, "expected three fields"));
    };

    let subject: Subject = subject.parse()?;
    let predicate = match predicate.parse::<Term>()? {
        Term::NamedNode(node) => node,
        _ => {
            return Err(CodecError::malformed(
                encoded,
                "predicate must be a named node",
            ))
        }
    };
    let object: Term = object.parse()?;

    Ok(Quad::new(subject, predicate, object))
}

/// Returns true if `node` can be used as a subject or predicate without
/// colliding with the delimiter.
pub fn is_encodable_iri(node: &NamedNode) -> bool {
    !node.as_str().contains(DELIMITER)
}
