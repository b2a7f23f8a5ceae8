//! Sign-up screen built on the Composable MVI architecture.
//!
//! A four-field form (full name, email, password, confirmation) with a
//! submit button. Edits update the form immediately; submitting either
//! flags the empty fields or runs a simulated two-second request that ends
//! with a toast and a dialog.
//!
//! The view layer is not part of this crate. It holds a [`SignUpSession`],
//! renders [`FormState`] snapshots from [`SignUpSession::subscribe_state`],
//! reacts to [`SignUpViewAction`]s from
//! [`SignUpSession::subscribe_view_actions`], and forwards user input as
//! [`SignUpIntent`]s.
//!
//! # Quick Start
//!
//! ```no_run
//! use signup::{FieldId, SignUpConfig, SignUpIntent, SignUpSession};
//!
//! # fn example() -> Result<(), signup::SessionError> {
//! let session = SignUpSession::start(SignUpConfig::default());
//! let _view_actions = session.subscribe_view_actions();
//!
//! session.handle_intent(SignUpIntent::UpdateField {
//!     field: FieldId::FullName,
//!     value: "Ada Lovelace".to_string(),
//! })?;
//! session.handle_intent(SignUpIntent::SubmitClicked)?;
//!
//! // Three fields are still empty
//! let state = session.current_state();
//! assert!(state.email.is_error);
//! assert!(!state.is_loading);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod reducer;
pub mod session;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::SignUpConfig;
pub use reducer::{SignUpEnvironment, SignUpReducer};
pub use session::{SessionError, SignUpSession, SignUpStore};
pub use types::{
    Field, FieldErrors, FieldId, FieldValues, FormAction, FormState, SignUpAction, SignUpIntent,
    SignUpViewAction,
};
