//! Error types for the codec crate.

use std::fmt;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Position of a term inside an encoded triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermPosition {
    /// The subject field.
    Subject,
    /// The predicate field.
    Predicate,
    /// The object field.
    Object,
}

impl fmt::Display for TermPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermPosition::Subject => f.write_str("subject"),
            TermPosition::Predicate => f.write_str("predicate"),
            TermPosition::Object => f.write_str("object"),
        }
    }
}

/// Errors that can occur during encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A subject or predicate contains the field delimiter and cannot be
    /// split back out of an encoded triple.
    #[error("{position} {term:?} contains the triple delimiter")]
    DelimiterInTerm {
        /// Where the offending term sits in the triple.
        position: TermPosition,
        /// The serialized term.
        term: String,
    },

    /// A term whose string form does not parse back to the same term, such
    /// as an empty IRI or an IRI starting with `_:`.
    #[error("{position} {term:?} cannot be decoded back to the same term")]
    UndecodableTerm {
        /// Where the offending term sits in the triple.
        position: TermPosition,
        /// The serialized term.
        term: String,
    },

    /// The input is not a valid encoded term or triple.
    #[error("malformed encoded value {input:?}: {reason}")]
    Malformed {
        /// The rejected input.
        input: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl CodecError {
    /// Create a malformed input error.
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a delimiter collision error.
    pub fn delimiter_in_term(position: TermPosition, term: impl Into<String>) -> Self {
        Self::DelimiterInTerm {
            position,
            term: term.into(),
        }
    }

    /// Create an undecodable term error.
    pub fn undecodable_term(position: TermPosition, term: impl Into<String>) -> Self {
        Self::UndecodableTerm {
            position,
            term: term.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CodecError::delimiter_in_term(TermPosition::Predicate, "http://a|b");
        assert_eq!(
            err.to_string(),
            "predicate \"http://a|b\" contains the triple delimiter"
        );

        let err = CodecError::undecodable_term(TermPosition::Object, "_:x");
        assert_eq!(
            err.to_string(),
            "object \"_:x\" cannot be decoded back to the same term"
        );

        let err = CodecError::malformed("abc", "expected three fields");
        assert!(err.to_string().contains("expected three fields"));
    }
}
