//! Screen session: the handle a view holds while the sign-up screen is open.
//!
//! Opening the screen starts a session; every user intent goes through
//! [`SignUpSession::handle_intent`], which reduces it before returning and
//! never waits on the simulated request. Intents are applied one at a time
//! in arrival order. Closing the screen cancels whatever is still in flight,
//! so no notification fires for a screen that is gone.

use crate::config::SignUpConfig;
use crate::reducer::{SignUpEnvironment, SignUpReducer};
use crate::types::{FormState, SignUpAction, SignUpIntent, SignUpViewAction};
use composable_mvi_runtime::{Store, StoreError};
use thiserror::Error;
use tokio::sync::{broadcast, watch};

/// Store type backing a sign-up session
pub type SignUpStore = Store<FormState, SignUpAction, SignUpEnvironment, SignUpReducer>;

/// Errors surfaced by a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session was closed; intents are no longer accepted
    #[error("Sign-up session is closed")]
    Closed,

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A running sign-up screen
///
/// Dropping the session cancels in-flight work, same as [`close`](Self::close).
pub struct SignUpSession {
    store: SignUpStore,
}

impl SignUpSession {
    /// Open a session with a blank form
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn start(config: SignUpConfig) -> Self {
        let environment = SignUpEnvironment::new(&config);
        let store = Store::with_config(
            FormState::default(),
            SignUpReducer::new(),
            environment,
            config.store,
        );

        tracing::info!("Sign-up session started");
        Self { store }
    }

    /// Forward one user intent
    ///
    /// The resulting state is visible through [`current_state`](Self::current_state)
    /// as soon as this returns. A submission's delay runs on its own task, so
    /// this never blocks.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] once the session has been closed.
    #[tracing::instrument(skip(self), name = "handle_intent")]
    pub fn handle_intent(&self, intent: SignUpIntent) -> Result<(), SessionError> {
        self.dispatch(intent)
    }

    /// Apply a state transition directly, e.g. to prefill the form
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] once the session has been closed.
    pub fn dispatch(&self, action: impl Into<SignUpAction>) -> Result<(), SessionError> {
        match self.store.send(action.into()) {
            Ok(_) => Ok(()),
            Err(StoreError::ShutdownInProgress) => Err(SessionError::Closed),
            Err(error) => Err(error.into()),
        }
    }

    /// Latest state snapshot
    #[must_use]
    pub fn current_state(&self) -> FormState {
        self.store.snapshot()
    }

    /// Follow state snapshots; the current one is available immediately
    #[must_use]
    pub fn subscribe_state(&self) -> watch::Receiver<FormState> {
        self.store.subscribe_state()
    }

    /// Follow view actions emitted from now on
    #[must_use]
    pub fn subscribe_view_actions(&self) -> broadcast::Receiver<SignUpViewAction> {
        self.store.environment().view_actions.subscribe()
    }

    /// Whether the session still accepts intents
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.store.is_shut_down()
    }

    /// Close the screen, cancelling any in-flight submission
    pub fn close(&self) {
        self.store.cancel();
    }

    /// Close the screen after in-flight work has finished
    ///
    /// Stops accepting intents, then waits for running effects up to the
    /// configured shutdown timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] with [`StoreError::ShutdownTimeout`]
    /// if effects were still running at the deadline; they are cancelled.
    pub async fn shutdown(self) -> Result<(), SessionError> {
        self.store.shutdown_with_default_timeout().await?;
        tracing::info!("Sign-up session shut down");
        Ok(())
    }
}

impl Drop for SignUpSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for SignUpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpSession")
            .field("open", &self.is_open())
            .field("pending_effects", &self.store.pending_effects())
            .finish_non_exhaustive()
    }
}
