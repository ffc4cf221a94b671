//! # PodStore KV
//!
//! Key-value client facade and implementations for PodStore.
//!
//! This crate provides the lowest-level store abstraction for PodStore.
//! Clients are **opaque string and set stores** - they do not interpret the
//! keys or values they hold.
//!
//! ## Design Principles
//!
//! - Clients expose GET/SET, set membership and DEL primitives only
//! - No knowledge of resources, metadata or triple encoding
//! - Must be `Send + Sync` for concurrent access
//! - PodStore owns all key naming and value interpretation
//!
//! ## Available Clients
//!
//! - [`InMemoryClient`] - For testing and ephemeral storage
//! - `RedisClient` - For a Redis server (`redis` feature, on by default)
//!
//! ## Example
//!
//! ```rust
//! use podstore_kv::{InMemoryClient, KeyValueClient};
//!
//! let client = InMemoryClient::new();
//! client.connect().unwrap();
//! client.set("hello", b"world").unwrap();
//! assert_eq!(client.get("hello").unwrap(), Some(b"world".to_vec()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod memory;
#[cfg(feature = "redis")]
mod redis_client;

pub use client::KeyValueClient;
pub use config::{RedisConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use error::{KvError, KvResult};
pub use memory::InMemoryClient;
#[cfg(feature = "redis")]
pub use redis_client::RedisClient;
