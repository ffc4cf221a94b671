//! In-memory key-value client for testing.

use crate::client::KeyValueClient;
use crate::error::{KvError, KvResult};
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Debug, Clone)]
enum Entry {
    Value(Vec<u8>),
    Set(BTreeSet<String>),
}

/// An in-memory key-value client.
///
/// Mirrors Redis semantics for the primitives PodStore uses:
/// - Sets disappear when their last member is removed
/// - Set commands on a plain value (and `GET` on a set) fail with
///   [`KvError::WrongType`]
/// - Every command fails with [`KvError::NotConnected`] until `connect`
///
/// # Thread Safety
///
/// This client is thread-safe and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use podstore_kv::{InMemoryClient, KeyValueClient};
///
/// let client = InMemoryClient::new();
/// client.connect().unwrap();
/// client.add_member("set", "a").unwrap();
/// assert_eq!(client.members("set").unwrap(), vec!["a".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryClient {
    entries: RwLock<HashMap<String, Entry>>,
    connected: AtomicBool,
    connects: AtomicUsize,
}

impl InMemoryClient {
    /// Creates a new empty, unconnected client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client that is already connected.
    #[must_use]
    pub fn connected() -> Self {
        let client = Self::new();
        client.connected.store(true, Ordering::SeqCst);
        client
    }

    /// Returns true once `connect` has succeeded.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Returns how many times `connect` was called.
    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Returns all keys, sorted.
    ///
    /// Useful for testing and debugging.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Returns true if `key` exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Removes every key.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    fn ensure_connected(&self) -> KvResult<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(KvError::NotConnected)
        }
    }
}

impl KeyValueClient for InMemoryClient {
    fn connect(&self) -> KvResult<()> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>> {
        self.ensure_connected()?;
        match self.entries.read().get(key) {
            None => Ok(None),
            Some(Entry::Value(value)) => Ok(Some(value.clone())),
            Some(Entry::Set(_)) => Err(KvError::wrong_type("GET", key)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> KvResult<()> {
        self.ensure_connected()?;
        self.entries
            .write()
            .insert(key.to_string(), Entry::Value(value.to_vec()));
        Ok(())
    }

    fn members(&self, key: &str) -> KvResult<Vec<String>> {
        self.ensure_connected()?;
        match self.entries.read().get(key) {
            None => Ok(Vec::new()),
            Some(Entry::Set(set)) => Ok(set.iter().cloned().collect()),
            Some(Entry::Value(_)) => Err(KvError::wrong_type("SMEMBERS", key)),
        }
    }

    fn replace_members(&self, key: &str, members: &[String]) -> KvResult<()> {
        self.ensure_connected()?;
        let mut entries = self.entries.write();
        entries.remove(key);
        if !members.is_empty() {
            let set = members.iter().cloned().collect();
            entries.insert(key.to_string(), Entry::Set(set));
        }
        Ok(())
    }

    fn add_member(&self, key: &str, member: &str) -> KvResult<()> {
        self.ensure_connected()?;
        let mut entries = self.entries.write();
        match entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Set(BTreeSet::new()))
        {
            Entry::Set(set) => {
                set.insert(member.to_string());
                Ok(())
            }
            Entry::Value(_) => Err(KvError::wrong_type("SADD", key)),
        }
    }

    fn remove_member(&self, key: &str, member: &str) -> KvResult<()> {
        self.ensure_connected()?;
        let mut entries = self.entries.write();
        let now_empty = match entries.get_mut(key) {
            None => return Ok(()),
            Some(Entry::Set(set)) => {
                set.remove(member);
                set.is_empty()
            }
            Some(Entry::Value(_)) => return Err(KvError::wrong_type("SREM", key)),
        };
        if now_empty {
            entries.remove(key);
        }
        Ok(())
    }

    fn delete_keys(&self, keys: &[String]) -> KvResult<()> {
        self.ensure_connected()?;
        let mut entries = self.entries.write();
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> InMemoryClient {
        let client = InMemoryClient::new();
        client.connect().unwrap();
        client
    }

    #[test]
    fn memory_commands_require_connect() {
        let client = InMemoryClient::new();
        assert!(matches!(client.get("key"), Err(KvError::NotConnected)));
        assert!(matches!(client.members("key"), Err(KvError::NotConnected)));

        client.connect().unwrap();
        assert!(client.is_connected());
        assert_eq!(client.connect_count(), 1);
        assert_eq!(client.get("key").unwrap(), None);
    }

    #[test]
    fn memory_set_and_get() {
        let client = client();
        client.set("key", b"value").unwrap();
        assert_eq!(client.get("key").unwrap(), Some(b"value".to_vec()));

        client.set("key", b"other").unwrap();
        assert_eq!(client.get("key").unwrap(), Some(b"other".to_vec()));
    }

    #[test]
    fn memory_members_of_missing_key_is_empty() {
        let client = client();
        assert!(client.members("missing").unwrap().is_empty());
    }

    #[test]
    fn memory_replace_members_clears_first() {
        let client = client();
        client.add_member("set", "old").unwrap();
        client
            .replace_members("set", &["a".to_string(), "b".to_string()])
            .unwrap();

        let mut members = client.members("set").unwrap();
        members.sort();
        assert_eq!(members, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn memory_replace_with_nothing_removes_key() {
        let client = client();
        client.add_member("set", "old").unwrap();
        client.replace_members("set", &[]).unwrap();
        assert!(!client.contains_key("set"));
    }

    #[test]
    fn memory_add_member_is_idempotent() {
        let client = client();
        client.add_member("set", "a").unwrap();
        client.add_member("set", "a").unwrap();
        assert_eq!(client.members("set").unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn memory_removing_last_member_deletes_set() {
        let client = client();
        client.add_member("set", "a").unwrap();
        client.remove_member("set", "missing").unwrap();
        assert!(client.contains_key("set"));

        client.remove_member("set", "a").unwrap();
        assert!(!client.contains_key("set"));
        client.remove_member("set", "a").unwrap();
    }

    #[test]
    fn memory_wrong_type() {
        let client = client();
        client.set("value", b"x").unwrap();
        client.add_member("set", "a").unwrap();

        assert!(matches!(
            client.members("value"),
            Err(KvError::WrongType { command: "SMEMBERS", .. })
        ));
        assert!(matches!(
            client.add_member("value", "a"),
            Err(KvError::WrongType { .. })
        ));
        assert!(matches!(client.get("set"), Err(KvError::WrongType { .. })));

        // SET overwrites whatever kind of value was there.
        client.set("set", b"now a value").unwrap();
        assert_eq!(client.get("set").unwrap(), Some(b"now a value".to_vec()));
    }

    #[test]
    fn memory_delete_keys() {
        let client = client();
        client.set("a", b"1").unwrap();
        client.add_member("b", "x").unwrap();
        client
            .delete_keys(&["a".to_string(), "b".to_string(), "c".to_string()])
            .unwrap();
        assert!(client.keys().is_empty());
    }

    #[test]
    fn memory_clear() {
        let client = client();
        client.set("a", b"1").unwrap();
        client.clear();
        assert!(client.keys().is_empty());
    }
}
