//! # PodStore Testkit
//!
//! Test utilities for PodStore.
//!
//! This crate provides:
//! - Accessor fixtures over the in-memory client
//! - Clients with slow or failing connects
//! - Property-based test generators using proptest
//! - End-to-end scenarios and a tracking harness
//! - Fuzz targets for the triple decoder
//! - Concurrent stress runs
//! - Encoding test vectors
//!
//! ## Usage
//!
//! ```rust
//! use podstore_testkit::prelude::*;
//! use podstore_core::DataAccessor;
//!
//! let store = memory_accessor();
//! assert_eq!(store.get_children(&root()).unwrap().len(), 0);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod fuzz;
pub mod generators;
pub mod integration;
pub mod stress;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::fuzz::*;
    pub use crate::generators::*;
    pub use crate::integration::*;
    pub use crate::stress::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use fuzz::*;
pub use generators::*;
pub use integration::*;
pub use stress::*;
pub use vectors::*;
