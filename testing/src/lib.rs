//! # Composable MVI Testing
//!
//! Testing utilities and helpers for the Composable MVI architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for pure reducer tests
//! - Effect assertion helpers
//! - Helpers for awaiting state snapshots and one-shot events with a deadline
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use composable_mvi_testing::{channels, ReducerTest};
//!
//! #[tokio::test(start_paused = true)]
//! async fn test_saved_notice() {
//!     let store = Store::new(FormState::default(), FormReducer, env.clone());
//!     let mut notices = env.notices.subscribe();
//!
//!     store.send(FormAction::Save)?;
//!
//!     let notice = channels::next_event(&mut notices, Duration::from_secs(5)).await;
//!     assert_eq!(notice, Some(Notice::Saved));
//! }
//! ```


/// Channel helpers for store-level tests
pub mod channels;

// Re-export commonly used items
pub use reducer_test::{ReducerTest, assertions};

/// Install a tracing subscriber for tests
///
/// Honors `RUST_LOG`, writes through the test writer so output is captured
/// per test, and is safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_init_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
        tracing::info!("still logging");
    }
}
