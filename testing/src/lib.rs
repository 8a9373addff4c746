//! # Tasklist Testing
//!
//! Testing utilities for reducers built on `tasklist-core`.
//!
//! This crate provides:
//! - [`ReducerTest`]: fluent Given-When-Then harness for reducers
//! - [`assertions`]: helpers for checking returned effects
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TaskReducer::new())
//!     .with_env(TaskEnvironment::default())
//!     .given_state(seed_tasks())
//!     .when_action(TaskAction::Toggle(TaskId::new(3)))
//!     .then_state(|tasks| assert!(tasks[2].done))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


pub use reducer_test::{assertions, ReducerTest};
