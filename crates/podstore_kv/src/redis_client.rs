//! Redis-backed key-value client.

use crate::client::KeyValueClient;
use crate::config::RedisConfig;
use crate::error::{KvError, KvResult};
use ::redis::{Commands, Connection, RedisResult};
use parking_lot::Mutex;
use tracing::{debug, info};

/// A key-value client talking to a Redis server over one connection.
///
/// The client is created unconnected; [`KeyValueClient::connect`] opens the
/// connection. Commands are serialized on that single connection.
///
/// # Example
///
/// ```rust,ignore
/// use podstore_kv::{KeyValueClient, RedisClient, RedisConfig};
///
/// let client = RedisClient::new(RedisConfig::new().host("localhost"))?;
/// client.connect()?;
/// client.set("greeting", b"hello")?;
/// ```
pub struct RedisClient {
    config: RedisConfig,
    client: ::redis::Client,
    connection: Mutex<Option<Connection>>,
}

impl RedisClient {
    /// Creates a client for the configured server without connecting.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::InvalidConfig`] if the configuration is invalid or
    /// the URL is rejected by the driver.
    pub fn new(config: RedisConfig) -> KvResult<Self> {
        config.validate()?;
        let client = ::redis::Client::open(config.url().as_str())
            .map_err(|e| KvError::InvalidConfig(e.to_string()))?;
        Ok(Self {
            config,
            client,
            connection: Mutex::new(None),
        })
    }

    /// Returns the configuration this client was built from.
    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    /// Returns true once `connect` has succeeded.
    pub fn is_connected(&self) -> bool {
        self.connection.lock().is_some()
    }

    fn with_connection<T>(
        &self,
        command: &'static str,
        f: impl FnOnce(&mut Connection) -> RedisResult<T>,
    ) -> KvResult<T> {
        let mut guard = self.connection.lock();
        let connection = guard.as_mut().ok_or(KvError::NotConnected)?;
        f(connection).map_err(|e| {
            if e.is_connection_dropped() || e.is_io_error() {
                KvError::Connection(format!("{command}: {e}"))
            } else {
                KvError::command(command, e.to_string())
            }
        })
    }
}

impl std::fmt::Debug for RedisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisClient")
            .field("url", &self.config.redacted_url())
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl KeyValueClient for RedisClient {
    fn connect(&self) -> KvResult<()> {
        info!(url = %self.config.redacted_url(), "connecting to redis");
        let connection = match self.config.timeout() {
            Some(timeout) => self.client.get_connection_with_timeout(timeout),
            None => self.client.get_connection(),
        }
        .map_err(|e| KvError::Connection(e.to_string()))?;
        *self.connection.lock() = Some(connection);
        debug!("redis connection established");
        Ok(())
    }

    fn get(&self, key: &str) -> KvResult<Option<Vec<u8>>> {
        self.with_connection("GET", |conn| conn.get(key))
    }

    fn set(&self, key: &str, value: &[u8]) -> KvResult<()> {
        self.with_connection("SET", |conn| conn.set(key, value))
    }

    fn members(&self, key: &str) -> KvResult<Vec<String>> {
        self.with_connection("SMEMBERS", |conn| conn.smembers(key))
    }

    fn replace_members(&self, key: &str, members: &[String]) -> KvResult<()> {
        if members.is_empty() {
            return self.with_connection("DEL", |conn| conn.del(key));
        }
        // DEL and SADD in one MULTI/EXEC so readers never see the gap.
        self.with_connection("SADD", |conn| {
            ::redis::pipe()
                .atomic()
                .del(key)
                .ignore()
                .sadd(key, members)
                .ignore()
                .query(conn)
        })
    }

    fn add_member(&self, key: &str, member: &str) -> KvResult<()> {
        self.with_connection("SADD", |conn| conn.sadd(key, member))
    }

    fn remove_member(&self, key: &str, member: &str) -> KvResult<()> {
        self.with_connection("SREM", |conn| conn.srem(key, member))
    }

    fn delete_keys(&self, keys: &[String]) -> KvResult<()> {
        if keys.is_empty() {
            return Ok(());
        }
        self.with_connection("DEL", |conn| conn.del(keys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redis_client_starts_disconnected() {
        let client = RedisClient::new(RedisConfig::default()).unwrap();
        assert!(!client.is_connected());
        assert!(matches!(client.get("key"), Err(KvError::NotConnected)));
    }

    #[test]
    fn redis_client_rejects_invalid_config() {
        let result = RedisClient::new(RedisConfig::new().host(""));
        assert!(matches!(result, Err(KvError::InvalidConfig(_))));
    }

    #[test]
    fn redis_client_debug_redacts_password() {
        let client = RedisClient::new(RedisConfig::new().credentials("u", "secret")).unwrap();
        assert!(!format!("{client:?}").contains("secret"));
    }

    #[test]
    fn redis_client_decodes_special_credentials() {
        let config = RedisConfig::new().credentials("app user", "p@ss/w:rd");
        let client = RedisClient::new(config).unwrap();
        let info = &client.client.get_connection_info().redis;
        assert_eq!(info.username.as_deref(), Some("app user"));
        assert_eq!(info.password.as_deref(), Some("p@ss/w:rd"));
    }

    // Requires a running Redis instance; skipped unless REDIS_HOST is set.
    fn live_client() -> Option<RedisClient> {
        let host = std::env::var("REDIS_HOST").ok()?;
        let port = std::env::var("REDIS_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(crate::config::DEFAULT_PORT);
        let client = RedisClient::new(RedisConfig::new().host(host).port(port)).ok()?;
        client.connect().ok()?;
        Some(client)
    }

    #[test]
    fn redis_live_set_commands() {
        let Some(client) = live_client() else {
            return;
        };
        let key = format!("podstore-test:{}", std::process::id());

        client
            .replace_members(&key, &["a".to_string(), "b".to_string()])
            .unwrap();
        client.add_member(&key, "c").unwrap();
        client.remove_member(&key, "a").unwrap();
        let mut members = client.members(&key).unwrap();
        members.sort();
        assert_eq!(members, vec!["b".to_string(), "c".to_string()]);

        client.delete_keys(&[key.clone()]).unwrap();
        assert!(client.members(&key).unwrap().is_empty());
    }

    #[test]
    fn redis_live_values() {
        let Some(client) = live_client() else {
            return;
        };
        let key = format!("podstore-test-value:{}", std::process::id());

        client.set(&key, b"\x00binary\xff").unwrap();
        assert_eq!(client.get(&key).unwrap(), Some(b"\x00binary\xff".to_vec()));
        client.delete_keys(&[key.clone()]).unwrap();
        assert_eq!(client.get(&key).unwrap(), None);
    }
}
