//! Reducer logic for the sign-up screen.
//!
//! Edits are applied immediately. A submit either flags the missing fields
//! or starts the simulated request: loading on, wait, loading off, then a
//! toast followed by the error dialog.

use crate::config::SignUpConfig;
use crate::types::{FormAction, FormState, SignUpAction, SignUpIntent, SignUpViewAction};
use composable_mvi_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use composable_mvi_runtime::EventChannel;
use std::time::Duration;

/// Environment dependencies for the sign-up reducer
#[derive(Clone, Debug)]
pub struct SignUpEnvironment {
    /// One-shot channel the view listens on
    pub view_actions: EventChannel<SignUpViewAction>,
    /// Simulated request latency
    pub submit_latency: Duration,
    /// Toast text after a completed request
    pub success_message: String,
}

impl SignUpEnvironment {
    /// Build the environment described by `config`
    #[must_use]
    pub fn new(config: &SignUpConfig) -> Self {
        Self {
            view_actions: EventChannel::new(config.view_action_capacity),
            submit_latency: config.submit_latency,
            success_message: config.success_message.clone(),
        }
    }
}

/// Reducer for the sign-up screen
#[derive(Clone, Debug, Default)]
pub struct SignUpReducer;

impl SignUpReducer {
    /// Creates a new `SignUpReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn submit(
        state: &mut FormState,
        env: &SignUpEnvironment,
    ) -> SmallVec<[Effect<SignUpAction>; 4]> {
        if state.is_loading {
            tracing::debug!("Submission already in flight, ignoring submit");
            return smallvec![Effect::None];
        }

        let errors = state.validate();
        if errors.any() {
            tracing::debug!(?errors, "Sign-up validation failed");
            state.apply(&FormAction::SetValidation(errors));
            return smallvec![Effect::None];
        }

        tracing::info!(latency_ms = env.submit_latency.as_millis(), "Submitting sign-up");
        state.apply(&FormAction::SetLoading(true));

        smallvec![Effect::Delay {
            duration: env.submit_latency,
            action: Box::new(SignUpAction::SubmissionFinished),
        }]
    }

    fn finish(
        state: &mut FormState,
        env: &SignUpEnvironment,
    ) -> SmallVec<[Effect<SignUpAction>; 4]> {
        state.apply(&FormAction::SetLoading(false));
        tracing::info!("Sign-up request finished");

        // Toast strictly before the dialog
        let toast = env.view_actions.clone();
        let message = env.success_message.clone();
        let dialog = env.view_actions.clone();

        smallvec![Effect::chain(vec![
            Effect::run(async move {
                toast.emit(SignUpViewAction::ShowToast(message));
            }),
            Effect::run(async move {
                dialog.emit(SignUpViewAction::ShowErrorDialog);
            }),
        ])]
    }
}

impl Reducer for SignUpReducer {
    type State = FormState;
    type Action = SignUpAction;
    type Environment = SignUpEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SignUpAction::Intent(SignUpIntent::UpdateField { field, value }) => {
                tracing::trace!(%field, empty = value.is_empty(), "Field updated");
                state.update_field(field, value);
                smallvec![Effect::None]
            },
            SignUpAction::Intent(SignUpIntent::SubmitClicked) => Self::submit(state, env),
            SignUpAction::Form(action) => {
                state.apply(&action);
                smallvec![Effect::None]
            },
            SignUpAction::SubmissionFinished => Self::finish(state, env),
        }
    }
}
