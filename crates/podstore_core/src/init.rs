//! Lazy, race-safe client initialization.

use crate::config::AccessorConfig;
use crate::error::{StoreError, StoreResult};
use podstore_kv::KvResult;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Message returned when a waiting caller gives up.
pub const INIT_FAILED: &str = "Failed to initialize Redis client.";

/// Tracks whether the backing client has been connected.
///
/// The first caller of [`ClientInit::ensure`] runs the connect; callers
/// arriving while it runs poll every `init_check_period` and fail once
/// they have waited longer than `max_init_wait`. A failed connect releases
/// the claim so a later call can retry.
#[derive(Debug)]
pub struct ClientInit {
    initialized: AtomicBool,
    initializing: AtomicBool,
    check_period: Duration,
    max_wait: Duration,
}

impl ClientInit {
    /// Creates an uninitialized tracker.
    #[must_use]
    pub fn new(config: &AccessorConfig) -> Self {
        Self {
            initialized: AtomicBool::new(false),
            initializing: AtomicBool::new(false),
            check_period: config.init_check_period,
            max_wait: config.max_init_wait,
        }
    }

    /// Returns true once a connect has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Runs `connect` unless the client is already connected.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BackendUnavailable`] if `connect` fails or if
    /// another caller's connect does not finish in time.
    pub fn ensure(&self, connect: impl FnOnce() -> KvResult<()>) -> StoreResult<()> {
        let mut waited = Duration::ZERO;
        loop {
            if self.is_initialized() {
                return Ok(());
            }
            if self
                .initializing
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                break;
            }
            if waited > self.max_wait {
                warn!(waited_ms = waited.as_millis(), "gave up waiting for client initialization");
                return Err(StoreError::backend_unavailable(INIT_FAILED));
            }
            thread::sleep(self.check_period);
            waited += self.check_period;
        }

        // Another caller may have finished between the load and the claim.
        if self.is_initialized() {
            self.initializing.store(false, Ordering::Release);
            return Ok(());
        }

        info!("initializing key-value client");
        let result = connect();
        match result {
            Ok(()) => {
                self.initialized.store(true, Ordering::Release);
                self.initializing.store(false, Ordering::Release);
                info!("key-value client initialized");
                Ok(())
            }
            Err(err) => {
                self.initializing.store(false, Ordering::Release);
                warn!(error = %err, "key-value client failed to connect");
                Err(StoreError::backend_unavailable(format!("{INIT_FAILED} {err}")))
            }
        }
    }
}
