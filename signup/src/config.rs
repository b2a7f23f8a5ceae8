//! Session configuration.

use composable_mvi_runtime::StoreConfig;
use std::time::Duration;

/// How long the simulated sign-up request takes
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(2000);

/// Toast shown when the simulated request completes
pub const SUCCESS_MESSAGE: &str = "Api Successful";

/// Configuration for a [`SignUpSession`](crate::SignUpSession)
///
/// # Example
///
/// ```
/// use signup::SignUpConfig;
/// use std::time::Duration;
///
/// let config = SignUpConfig::default()
///     .with_submit_latency(Duration::from_millis(250))
///     .with_success_message("Welcome aboard");
///
/// assert_eq!(config.success_message, "Welcome aboard");
/// ```
#[derive(Debug, Clone)]
pub struct SignUpConfig {
    /// Simulated request latency
    pub submit_latency: Duration,
    /// Toast text after a completed request
    pub success_message: String,
    /// View actions buffered per subscriber
    pub view_action_capacity: usize,
    /// Underlying store configuration
    pub store: StoreConfig,
}

impl SignUpConfig {
    /// Set the simulated request latency
    #[must_use]
    pub const fn with_submit_latency(mut self, latency: Duration) -> Self {
        self.submit_latency = latency;
        self
    }

    /// Set the toast text shown after a completed request
    #[must_use]
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Set how many view actions are buffered per subscriber
    #[must_use]
    pub const fn with_view_action_capacity(mut self, capacity: usize) -> Self {
        self.view_action_capacity = capacity;
        self
    }

    /// Replace the store configuration
    #[must_use]
    pub const fn with_store_config(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self {
            submit_latency: DEFAULT_SUBMIT_LATENCY,
            success_message: SUCCESS_MESSAGE.to_string(),
            view_action_capacity: 8,
            store: StoreConfig::default().with_shutdown_timeout(Duration::from_secs(5)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_screen_behaviour() {
        let config = SignUpConfig::default();
        assert_eq!(config.submit_latency, Duration::from_secs(2));
        assert_eq!(config.success_message, "Api Successful");
        assert_eq!(config.store.default_shutdown_timeout, Duration::from_secs(5));
    }

    #[test]
    fn builders_override() {
        let config = SignUpConfig::default()
            .with_view_action_capacity(2)
            .with_store_config(StoreConfig::default().with_action_capacity(3));

        assert_eq!(config.view_action_capacity, 2);
        assert_eq!(config.store.action_capacity, 3);
    }
}
