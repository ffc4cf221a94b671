//! Accessor configuration.

use std::time::Duration;

/// How often a caller waiting on another thread's connect re-checks.
pub const INIT_CHECK_PERIOD: Duration = Duration::from_millis(10);

/// How long a caller waits on another thread's connect before giving up.
pub const MAX_INIT_WAIT: Duration = Duration::from_millis(1500);

/// Configuration for a data accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorConfig {
    /// Polling period while another caller is connecting the client.
    pub init_check_period: Duration,

    /// Total time to wait for another caller's connect before failing.
    pub max_init_wait: Duration,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            init_check_period: INIT_CHECK_PERIOD,
            max_init_wait: MAX_INIT_WAIT,
        }
    }
}

impl AccessorConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the polling period used while waiting on initialization.
    #[must_use]
    pub const fn init_check_period(mut self, period: Duration) -> Self {
        self.init_check_period = period;
        self
    }

    /// Sets the initialization wait ceiling.
    #[must_use]
    pub const fn max_init_wait(mut self, wait: Duration) -> Self {
        self.max_init_wait = wait;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AccessorConfig::default();
        assert_eq!(config.init_check_period, Duration::from_millis(10));
        assert_eq!(config.max_init_wait, Duration::from_millis(1500));
    }

    #[test]
    fn builder_pattern() {
        let config = AccessorConfig::new()
            .init_check_period(Duration::from_millis(1))
            .max_init_wait(Duration::ZERO);

        assert_eq!(config.init_check_period, Duration::from_millis(1));
        assert_eq!(config.max_init_wait, Duration::ZERO);
    }
}
