//! # Tasklist Runtime
//!
//! Runtime implementation for the task list reducer architecture.
//!
//! This crate provides the [`Store`], the owner of a reducer's state. The
//! store runs the reducer for every action it receives and executes the
//! returned effects, feeding dispatched actions back into the reducer.
//!
//! Execution is single-threaded and synchronous: [`Store::send`] takes
//! `&mut self`, so an action and all of its feedback complete before any
//! reader can look at the state again.
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use tasklist_core::{effect::Effect, reducer::Reducer};

/// Metric names and descriptions for the store
pub mod metrics;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use tasklist_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of feedback actions processed for one `send`
    ///
    /// Feedback actions come from [`Effect::Dispatch`]. Anything past this
    /// bound is dropped and logged.
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the feedback bound
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, max: usize) -> Self {
        self.max_feedback_actions = max;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
        }
    }
}

/// Outcome of a single [`Store::send`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendReport {
    /// Number of actions run through the reducer, the sent action included
    pub reduced: usize,
    /// Feedback actions dropped because the bound was reached
    pub dropped: usize,
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{metrics, Effect, Instant, Reducer, SendReport, StoreConfig, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store owns:
    /// 1. State (replaced only by the reducer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Example
        ///
        /// ```ignore
        /// let config = StoreConfig::default().with_max_feedback_actions(16);
        /// let store = Store::with_config(MyState::default(), MyReducer, env, config);
        /// ```
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Calls the reducer with (state, action, environment)
        /// 2. Executes the returned effects in order
        /// 3. Feeds dispatched actions back through the reducer, oldest first
        ///
        /// Feedback stops after [`StoreConfig::max_feedback_actions`]; the
        /// remainder is dropped and reported in the returned [`SendReport`].
        #[tracing::instrument(skip_all, name = "store_send")]
        pub fn send(&mut self, action: A) -> SendReport {
            let mut report = SendReport::default();
            let mut queue = VecDeque::from([action]);
            let mut feedback_budget = self.config.max_feedback_actions;

            while let Some(next) = queue.pop_front() {
                let effects = self.reduce_one(next);
                report.reduced += 1;

                let mut dispatched = Vec::new();
                for effect in effects {
                    collect_dispatches(effect, &mut dispatched);
                }

                for feedback in dispatched {
                    if feedback_budget == 0 {
                        report.dropped += 1;
                        continue;
                    }
                    feedback_budget -= 1;
                    queue.push_back(feedback);
                }
            }

            if report.dropped > 0 {
                tracing::warn!(
                    dropped = report.dropped,
                    limit = self.config.max_feedback_actions,
                    "Feedback limit reached, dropped {} actions",
                    report.dropped
                );
                metrics::counter!(metrics::FEEDBACK_DROPPED).increment(report.dropped as u64);
            }

            tracing::debug!(reduced = report.reduced, "Action processing completed");
            report
        }

        fn reduce_one(&mut self, action: A) -> tasklist_core::SmallVec<[Effect<A>; 4]> {
            metrics::counter!(metrics::ACTIONS_TOTAL).increment(1);

            let start = Instant::now();
            let effects = self
                .reducer
                .reduce(&mut self.state, action, &self.environment);
            let duration = start.elapsed();
            metrics::histogram!(metrics::REDUCER_DURATION).record(duration.as_secs_f64());

            tracing::trace!(
                elapsed_us = duration.as_micros(),
                "Reducer completed, returned {} effects",
                effects.len()
            );

            // Precision loss acceptable for metrics (effect counts < 2^52)
            #[allow(clippy::cast_precision_loss)]
            metrics::histogram!(metrics::EFFECTS_COUNT).record(effects.len() as f64);

            effects
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let task_count = store.state(|s| s.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Borrow the current state
        #[must_use]
        pub const fn current(&self) -> &S {
            &self.state
        }

        /// Borrow the injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> StoreConfig {
            self.config
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("config", &self.config)
                .finish_non_exhaustive()
        }
    }

    /// Flatten an effect tree into the actions it dispatches, in order
    fn collect_dispatches<A>(effect: Effect<A>, out: &mut Vec<A>) {
        match effect {
            Effect::None => {},
            Effect::Sequential(effects) => {
                for effect in effects {
                    collect_dispatches(effect, out);
                }
            },
            Effect::Dispatch(action) => out.push(*action),
        }
    }
}

pub use store::Store;

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::{smallvec, SmallVec};

    #[derive(Debug, Clone, Default)]
    struct TestState {
        value: i32,
        log: Vec<&'static str>,
    }

    #[derive(Debug, Clone)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
        ProduceFeedback,
        ProduceSequentialEffects,
        Loop,
    }

    #[derive(Debug, Clone)]
    struct TestEnv;

    #[derive(Debug, Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.value += 1;
                    state.log.push("inc");
                    smallvec![Effect::None]
                },
                TestAction::Decrement => {
                    state.value -= 1;
                    state.log.push("dec");
                    smallvec![Effect::None]
                },
                TestAction::NoOp => smallvec![Effect::None],
                TestAction::ProduceFeedback => {
                    smallvec![Effect::dispatch(TestAction::Increment)]
                },
                TestAction::ProduceSequentialEffects => {
                    smallvec![Effect::chain(vec![
                        Effect::dispatch(TestAction::Increment),
                        Effect::dispatch(TestAction::Increment),
                        Effect::dispatch(TestAction::Decrement),
                    ])]
                },
                TestAction::Loop => {
                    state.value += 1;
                    smallvec![Effect::dispatch(TestAction::Loop)]
                },
            }
        }
    }

    fn store() -> Store<TestState, TestAction, TestEnv, TestReducer> {
        Store::new(TestState::default(), TestReducer, TestEnv)
    }

    #[test]
    fn test_store_creation() {
        let store = store();
        assert_eq!(store.state(|s| s.value), 0);
        assert_eq!(store.config(), StoreConfig::default());
    }

    #[test]
    fn test_send_applies_reducer() {
        let mut store = store();

        let report = store.send(TestAction::Increment);
        assert_eq!(report, SendReport { reduced: 1, dropped: 0 });
        assert_eq!(store.current().value, 1);

        store.send(TestAction::Decrement);
        store.send(TestAction::NoOp);
        assert_eq!(store.state(|s| s.value), 0);
    }

    #[test]
    fn test_feedback_action_runs_before_send_returns() {
        let mut store = store();

        let report = store.send(TestAction::ProduceFeedback);

        assert_eq!(report.reduced, 2);
        assert_eq!(store.state(|s| s.value), 1);
    }

    #[test]
    fn test_sequential_effects_keep_order() {
        let mut store = store();

        store.send(TestAction::ProduceSequentialEffects);

        assert_eq!(store.state(|s| s.log.clone()), vec!["inc", "inc", "dec"]);
        assert_eq!(store.state(|s| s.value), 1);
    }

    #[test]
    fn test_feedback_loop_is_bounded() {
        let config = StoreConfig::default().with_max_feedback_actions(5);
        let mut store = Store::with_config(TestState::default(), TestReducer, TestEnv, config);

        let report = store.send(TestAction::Loop);

        assert_eq!(report.reduced, 6);
        assert_eq!(report.dropped, 1);
        assert_eq!(store.state(|s| s.value), 6);
    }

    #[test]
    fn test_zero_feedback_budget_drops_everything() {
        let config = StoreConfig::new(0);
        let mut store = Store::with_config(TestState::default(), TestReducer, TestEnv, config);

        let report = store.send(TestAction::ProduceSequentialEffects);

        assert_eq!(report, SendReport { reduced: 1, dropped: 3 });
        assert_eq!(store.state(|s| s.value), 0);
    }

    #[test]
    fn test_state_isolation() {
        let mut store1 = store();
        let mut store2 = store();

        store1.send(TestAction::Increment);
        store1.send(TestAction::Increment);
        store2.send(TestAction::Increment);

        assert_eq!(store1.state(|s| s.value), 2);
        assert_eq!(store2.state(|s| s.value), 1);
    }
}
