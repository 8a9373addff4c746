//! Task list state for a front-end: a list of tasks that can be created,
//! toggled, and removed.
//!
//! - [`types`]: tasks, the task list, actions, the next-id counter
//! - [`reducer`]: the pure transition function and its `Reducer` impl
//! - [`provider`]: the state holder UI code reads from and dispatches to
//!
//! # Quick Start
//!
//! ```
//! use todo::{Task, TaskAction, TaskProvider};
//!
//! let mut provider = TaskProvider::new();
//!
//! // Mint an id, then advance the counter
//! provider.next_id().set(5);
//! let id = provider.next_id().id();
//! provider.next_id().increment();
//!
//! provider.dispatch(TaskAction::create(Task::new(id, "Ship", false)));
//! provider.dispatch(TaskAction::toggle(id));
//!
//! let state = provider.state();
//! assert_eq!(state.len(), 5);
//! assert!(state.get(id).is_some_and(|task| task.done));
//! ```

pub mod provider;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use provider::{AccessPoint, ProviderConfig, ProviderError, ProviderScope, TaskProvider, TaskStore};
pub use reducer::{apply, apply_with_policy, DuplicateIdPolicy, TaskEnvironment, TaskReducer};
pub use types::{seed_tasks, NextId, Task, TaskAction, TaskId, TaskList};
