//! # PodStore Core
//!
//! A data accessor that keeps RDF resources and binary documents in a
//! Redis-style key-value store.
//!
//! This crate provides:
//! - [`DataAccessor`], the storage contract a resource store builds on
//! - [`KvDataAccessor`], its implementation over any [`KeyValueClient`]
//! - Container bookkeeping through an [`IdentifierStrategy`]
//! - Lazy, race-safe connection of the backing client
//!
//! ## Storage Layout
//!
//! For a resource at `id`:
//!
//! - `id`: the payload, bytes or a set of encoded triples
//! - `id|meta`: set of encoded metadata triples
//! - `id|children`: set of child paths (containers only)
//! - `id|contentType`: the content type, when declared
//!
//! A content type of [`INTERNAL_QUADS`] marks the payload as a triple set.
//!
//! [`KeyValueClient`]: podstore_kv::KeyValueClient

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod accessor;
mod config;
mod error;
mod identifier;
mod init;
mod keys;
mod metadata;
mod payload;

pub use accessor::{Children, DataAccessor, KvDataAccessor};
pub use config::{AccessorConfig, INIT_CHECK_PERIOD, MAX_INIT_WAIT};
pub use error::{StoreError, StoreResult};
pub use identifier::{IdentifierStrategy, ResourceIdentifier, SingleRootIdentifierStrategy};
pub use init::{ClientInit, INIT_FAILED};
pub use keys::{ResourceKeys, CHILDREN_SUFFIX, CONTENT_TYPE_SUFFIX, META_SUFFIX};
pub use metadata::{RepresentationMetadata, CONTENT_TYPE, INTERNAL_QUADS};
pub use payload::{DataStream, Payload, DEFAULT_GRAPH_ONLY};
