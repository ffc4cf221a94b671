//! Key-value client trait definition.

use crate::error::KvResult;
use std::sync::Arc;

/// A thin facade over a Redis-style key-value/set store.
///
/// Clients are **dumb primitives**. They provide string values, string sets
/// and key deletion; PodStore owns all key naming and value encoding.
///
/// # Invariants
///
/// - `connect` is called once before any other method
/// - `members` of a missing key is an empty list, never an error
/// - `replace_members` leaves exactly the given members at the key
/// - Adding an existing member and removing an absent member are no-ops
/// - Clients must be `Send + Sync` for concurrent access
///
/// # Implementors
///
/// - [`super::InMemoryClient`] - For testing
/// - `super::RedisClient` - For a Redis server (`redis` feature)
pub trait KeyValueClient: Send + Sync {
    /// Opens the connection to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or rejects the
    /// credentials.
    fn connect(&self) -> KvResult<()>;

    /// Reads the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or `key` holds a set.
    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>>;

    /// Stores `value` at `key`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    fn set(&self, key: &str, value: &[u8]) -> KvResult<()>;

    /// Returns all members of the set at `key`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or `key` holds a plain value.
    fn members(&self, key: &str) -> KvResult<Vec<String>>;

    /// Clears the set at `key`, then adds `members`.
    ///
    /// An empty `members` slice leaves the key absent.
    ///
    /// # Errors
    ///
    /// Returns an error if either step fails.
    fn replace_members(&self, key: &str, members: &[String]) -> KvResult<()>;

    /// Adds `member` to the set at `key`, creating the set if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or `key` holds a plain value.
    fn add_member(&self, key: &str, member: &str) -> KvResult<()>;

    /// Removes `member` from the set at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or `key` holds a plain value.
    fn remove_member(&self, key: &str, member: &str) -> KvResult<()>;

    /// Deletes every key in `keys`. Missing keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    fn delete_keys(&self, keys: &[String]) -> KvResult<()>;
}

impl<C: KeyValueClient + ?Sized> KeyValueClient for Arc<C> {
    fn connect(&self) -> KvResult<()> {
        (**self).connect()
    }

    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> KvResult<()> {
        (**self).set(key, value)
    }

    fn members(&self, key: &str) -> KvResult<Vec<String>> {
        (**self).members(key)
    }

    fn replace_members(&self, key: &str, members: &[String]) -> KvResult<()> {
        (**self).replace_members(key, members)
    }

    fn add_member(&self, key: &str, member: &str) -> KvResult<()> {
        (**self).add_member(key, member)
    }

    fn remove_member(&self, key: &str, member: &str) -> KvResult<()> {
        (**self).remove_member(key, member)
    }

    fn delete_keys(&self, keys: &[String]) -> KvResult<()> {
        (**self).delete_keys(keys)
    }
}
