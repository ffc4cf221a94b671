//! Error types for key-value operations.

use thiserror::Error;

/// Result type for key-value operations.
pub type KvResult<T> = Result<T, KvError>;

/// Errors that can occur while talking to the key-value store.
#[derive(Debug, Error)]
pub enum KvError {
    /// The connection could not be established or was lost.
    #[error("connection error: {0}")]
    Connection(String),

    /// A command was rejected or failed in transit.
    #[error("{command} failed: {message}")]
    Command {
        /// The primitive that failed (`GET`, `SADD`, ...).
        command: &'static str,
        /// Description of the failure.
        message: String,
    },

    /// A command was issued before `connect`.
    #[error("client is not connected")]
    NotConnected,

    /// The key holds a value of the wrong kind for the command.
    #[error("key {key:?} holds the wrong kind of value for {command}")]
    WrongType {
        /// The primitive that was issued.
        command: &'static str,
        /// The key it targeted.
        key: String,
    },

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl KvError {
    /// Creates a command error.
    pub fn command(command: &'static str, message: impl Into<String>) -> Self {
        Self::Command {
            command,
            message: message.into(),
        }
    }

    /// Creates a wrong type error.
    pub fn wrong_type(command: &'static str, key: impl Into<String>) -> Self {
        Self::WrongType {
            command,
            key: key.into(),
        }
    }
}
