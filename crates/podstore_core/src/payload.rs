//! Resource payloads: statement streams and byte streams.

use crate::error::{StoreError, StoreResult};
use crate::metadata::INTERNAL_QUADS;
use podstore_codec::Quad;
use std::fmt;
use std::io::{Cursor, Read};

/// Message used when a statement names a graph other than the default.
pub const DEFAULT_GRAPH_ONLY: &str = "Only triples in the default graph are supported.";

/// The data of a resource as handed to or returned by an accessor.
pub enum DataStream {
    /// RDF statements.
    Quads(Box<dyn Iterator<Item = Quad> + Send>),
    /// Opaque bytes.
    Bytes(Box<dyn Read + Send>),
}

impl DataStream {
    /// Creates a statement stream.
    pub fn from_quads(quads: Vec<Quad>) -> Self {
        Self::Quads(Box::new(quads.into_iter()))
    }

    /// Creates a byte stream over an in-memory buffer.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(Box::new(Cursor::new(bytes.into())))
    }

    /// Creates a byte stream over any reader.
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self::Bytes(Box::new(reader))
    }

    /// Returns true for a statement stream.
    pub fn is_quads(&self) -> bool {
        matches!(self, Self::Quads(_))
    }

    /// Collects a statement stream.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] for a byte stream.
    pub fn into_quads(self) -> StoreResult<Vec<Quad>> {
        match self {
            Self::Quads(quads) => Ok(quads.collect()),
            Self::Bytes(_) => Err(StoreError::invalid_payload(
                "expected a statement stream, got bytes",
            )),
        }
    }

    /// Reads a byte stream to the end.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPayload`] for a statement stream, or
    /// [`StoreError::Io`] if reading fails.
    pub fn into_bytes(self) -> StoreResult<Vec<u8>> {
        match self {
            Self::Bytes(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Ok(buf)
            }
            Self::Quads(_) => Err(StoreError::invalid_payload(
                "expected bytes, got a statement stream",
            )),
        }
    }
}

impl fmt::Debug for DataStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quads(_) => f.write_str("DataStream::Quads(..)"),
            Self::Bytes(_) => f.write_str("DataStream::Bytes(..)"),
        }
    }
}

/// A fully materialized payload, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Statements, all in the default graph.
    Statements(Vec<Quad>),
    /// Opaque bytes.
    Bytes(Vec<u8>),
}

impl Payload {
    /// Drains `data` according to `content_type`.
    ///
    /// [`INTERNAL_QUADS`] selects the statement form; anything else,
    /// including no content type, selects bytes.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotImplemented`] if a statement is outside the
    ///   default graph
    /// - [`StoreError::InvalidPayload`] if the stream kind does not match
    /// - [`StoreError::Io`] if reading bytes fails
    pub fn materialize(content_type: Option<&str>, data: DataStream) -> StoreResult<Self> {
        if content_type == Some(INTERNAL_QUADS) {
            let quads = data.into_quads()?;
            if quads.iter().any(|q| !q.is_in_default_graph()) {
                return Err(StoreError::not_implemented(DEFAULT_GRAPH_ONLY));
            }
            Ok(Self::Statements(quads))
        } else {
            Ok(Self::Bytes(data.into_bytes()?))
        }
    }

    /// Turns the payload back into a stream.
    pub fn into_stream(self) -> DataStream {
        match self {
            Self::Statements(quads) => DataStream::from_quads(quads),
            Self::Bytes(bytes) => DataStream::from_bytes(bytes),
        }
    }
}
