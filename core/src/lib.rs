//! # Composable MVI Core
//!
//! Core traits and types for unidirectional data-flow screens.
//!
//! A screen is modelled as a reducer over a state value. User intents and
//! internal follow-ups are both actions; side effects are returned from the
//! reducer as descriptions and executed by the runtime.
//!
//! ## Core Concepts
//!
//! - **State**: The snapshot a view renders
//! - **Action**: Every input to a reducer (user intents, internal transitions)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies (channels, configuration)
//!
//! ## Example
//!
//! ```ignore
//! use composable_mvi_core::*;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct ToggleState {
//!     on: bool,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum ToggleAction {
//!     Toggle,
//! }
//!
//! impl Reducer for ToggleReducer {
//!     type State = ToggleState;
//!     type Action = ToggleAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ToggleState,
//!         action: ToggleAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<ToggleAction>; 4]> {
//!         match action {
//!             ToggleAction::Toggle => state.on = !state.on,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for screen logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all presentation logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for screen logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for FormReducer {
    ///     type State = FormState;
    ///     type Action = FormAction;
    ///     type Environment = FormEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut FormState,
    ///         action: FormAction,
    ///         env: &FormEnvironment,
    ///     ) -> SmallVec<[Effect<FormAction>; 4]> {
    ///         match action {
    ///             FormAction::Submit => {
    ///                 state.is_loading = true;
    ///                 smallvec![Effect::Delay {
    ///                     duration: env.latency,
    ///                     action: Box::new(FormAction::Submitted),
    ///                 }]
    ///             }
    ///             FormAction::Submitted => {
    ///                 state.is_loading = false;
    ///                 smallvec![Effect::None]
    ///             }
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially, each one finishing before the next starts
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (simulated latency, timeouts)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap a future that performs work without feeding an action back
        ///
        /// Used for fire-and-forget outputs such as one-shot view notifications.
        #[must_use]
        pub fn run<F>(fut: F) -> Effect<Action>
        where
            F: std::future::Future<Output = ()> + Send + 'static,
            Action: Send + 'static,
        {
            Effect::Future(Box::pin(async move {
                fut.await;
                None
            }))
        }

        /// Whether this effect does nothing
        ///
        /// Nested `Parallel`/`Sequential` groups count as no-ops when every
        /// child is a no-op.
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Parallel(effects) | Effect::Sequential(effects) => {
                    effects.iter().all(Effect::is_none)
                },
                Effect::Delay { .. } | Effect::Future(_) => false,
            }
        }
    }
}

// Re-export the essentials at the crate root
pub use effect::Effect;
pub use reducer::Reducer;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Toggle {
        Flip,
    }

    #[test]
    fn nested_groups_of_none_are_none() {
        let effect: Effect<Toggle> = Effect::chain(vec![
            Effect::None,
            Effect::merge(vec![Effect::None, Effect::None]),
        ]);
        assert!(effect.is_none());
    }

    #[test]
    fn delay_is_not_none() {
        let effect = Effect::Delay {
            duration: Duration::from_millis(5),
            action: Box::new(Toggle::Flip),
        };
        assert!(!effect.is_none());
        assert!(!Effect::<Toggle>::run(async {}).is_none());
    }

    #[test]
    fn debug_hides_future_body() {
        let effect = Effect::<Toggle>::run(async {});
        assert_eq!(format!("{effect:?}"), "Effect::Future(<future>)");

        let delayed = Effect::Delay {
            duration: Duration::from_millis(1),
            action: Box::new(Toggle::Flip),
        };
        assert!(format!("{delayed:?}").contains("Flip"));
    }
}
