//! Redis connection configuration.

use crate::error::{KvError, KvResult};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Default Redis host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default Redis port.
pub const DEFAULT_PORT: u16 = 6379;

/// Where and how to connect to Redis.
///
/// Deserializable with every field optional, so a host application can load
/// it from whatever format it already uses.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Server host name or address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// ACL user name. Only used together with `password`.
    pub username: Option<String>,
    /// ACL password. Only used together with `username`.
    pub password: Option<String>,
    /// Logical database number.
    pub db: Option<u32>,
    /// Connect timeout in milliseconds; `None` waits for the OS.
    pub connect_timeout_ms: Option<u64>,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            username: None,
            password: None,
            db: None,
            connect_timeout_ms: None,
        }
    }
}

impl RedisConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the ACL credentials.
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Sets the logical database number.
    #[must_use]
    pub const fn db(mut self, db: u32) -> Self {
        self.db = Some(db);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Returns the connect timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    /// Checks that the configuration can produce a usable URL.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::InvalidConfig`] for an empty host or port 0.
    pub fn validate(&self) -> KvResult<()> {
        if self.host.trim().is_empty() {
            return Err(KvError::InvalidConfig("host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(KvError::InvalidConfig("port must not be 0".into()));
        }
        Ok(())
    }

    /// Builds the `redis://[user:pass@]host:port[/db]` connection URL.
    ///
    /// Credentials are included only when both user name and password are
    /// set, and are percent-encoded.
    pub fn url(&self) -> String {
        let password = self.password.as_deref().map(urlencoding::encode);
        self.build_url(password.as_deref())
    }

    /// Same as [`RedisConfig::url`] with the password masked, for logs.
    pub fn redacted_url(&self) -> String {
        self.build_url(self.password.as_ref().map(|_| "***"))
    }

    fn build_url(&self, password: Option<&str>) -> String {
        let auth = match (self.username.as_deref(), password) {
            (Some(user), Some(pass)) => format!("{}:{pass}@", urlencoding::encode(user)),
            _ => String::new(),
        };
        let db = self.db.map(|db| format!("/{db}")).unwrap_or_default();
        format!("redis://{auth}{}:{}{db}", self.host, self.port)
    }
}

impl fmt::Debug for RedisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("db", &self.db)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}
