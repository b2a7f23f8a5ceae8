//! Await helpers for the store's state and event channels.
//!
//! All helpers take a deadline so a broken test fails instead of hanging.
//! Under `tokio::time::pause()` the deadline is virtual time.

use std::time::Duration;
use tokio::sync::{broadcast, watch};

/// Receive the next event, or `None` on timeout or closed channel
///
/// Lagged receivers skip ahead to the oldest retained event.
pub async fn next_event<T: Clone>(
    rx: &mut broadcast::Receiver<T>,
    timeout: Duration,
) -> Option<T> {
    tokio::time::timeout(timeout, async {
        loop {
            match rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Test receiver lagged");
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    })
    .await
    .ok()
    .flatten()
}

/// Take every event that is already buffered, without waiting
pub fn drain_events<T: Clone>(rx: &mut broadcast::Receiver<T>) -> Vec<T> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Lagged(_)) => {},
            Err(_) => return events,
        }
    }
}

/// Wait for the next published state, or `None` on timeout
pub async fn next_state<T: Clone>(rx: &mut watch::Receiver<T>, timeout: Duration) -> Option<T> {
    match tokio::time::timeout(timeout, rx.changed()).await {
        Ok(Ok(())) => Some(rx.borrow_and_update().clone()),
        _ => None,
    }
}

/// Wait until the published state satisfies `predicate`
///
/// Checks the current value first, so a state that already matches returns
/// immediately.
pub async fn wait_for_state<T, F>(
    rx: &mut watch::Receiver<T>,
    timeout: Duration,
    predicate: F,
) -> Option<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    match tokio::time::timeout(timeout, rx.wait_for(predicate)).await {
        Ok(Ok(state)) => Some(state.clone()),
        _ => None,
    }
}
