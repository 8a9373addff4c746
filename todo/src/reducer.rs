//! Reducer logic for the task list.
//!
//! [`apply`] is the whole state machine: it maps the current list and one
//! action to the next list without touching its input. [`TaskReducer`] plugs
//! it into the store.

use crate::types::{Task, TaskAction, TaskId, TaskList};
use tasklist_core::{effect::Effect, reducer::Reducer, SmallVec};

/// What `Create` does when the new task's id is already in the list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateIdPolicy {
    /// Leave the list unchanged and log a warning
    #[default]
    Reject,
    /// Append anyway; the list may then hold repeated ids
    Allow,
}

/// Environment dependencies for the task reducer
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskEnvironment {
    /// Handling of `Create` with an id already present
    pub duplicate_ids: DuplicateIdPolicy,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub const fn new(duplicate_ids: DuplicateIdPolicy) -> Self {
        Self { duplicate_ids }
    }
}

/// Computes the list that follows `current` once `action` is applied
///
/// Rejects duplicate ids on `Create`; see [`apply_with_policy`].
#[must_use]
pub fn apply(current: &TaskList, action: TaskAction) -> TaskList {
    apply_with_policy(current, action, DuplicateIdPolicy::Reject)
}

/// Computes the next list under an explicit duplicate-id policy
///
/// - `Create` appends the task at the end.
/// - `Toggle` inverts `done` on every task with the id and copies the rest.
/// - `Remove` keeps every task whose id differs, in order.
///
/// An id that matches nothing leaves the list as it was. The result is always
/// a fresh list; `current` is never modified.
#[must_use]
pub fn apply_with_policy(
    current: &TaskList,
    action: TaskAction,
    duplicate_ids: DuplicateIdPolicy,
) -> TaskList {
    match action {
        TaskAction::Create { task } => create(current, task, duplicate_ids),
        TaskAction::Toggle { id } => toggle(current, id),
        TaskAction::Remove { id } => remove(current, id),
    }
}

fn create(current: &TaskList, task: Task, duplicate_ids: DuplicateIdPolicy) -> TaskList {
    if duplicate_ids == DuplicateIdPolicy::Reject && current.contains(task.id) {
        tracing::warn!(id = %task.id, "Create rejected: task id already in list");
        return current.clone();
    }

    current.iter().cloned().chain(std::iter::once(task)).collect()
}

fn toggle(current: &TaskList, id: TaskId) -> TaskList {
    if !current.contains(id) {
        tracing::debug!(%id, "Toggle matched no task");
    }

    current
        .iter()
        .map(|task| if task.id == id { task.toggled() } else { task.clone() })
        .collect()
}

fn remove(current: &TaskList, id: TaskId) -> TaskList {
    if !current.contains(id) {
        tracing::debug!(%id, "Remove matched no task");
    }

    current.iter().filter(|task| task.id != id).cloned().collect()
}

/// Reducer for the task list
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskReducer;

impl TaskReducer {
    /// Creates a new `TaskReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TaskReducer {
    type State = TaskList;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::trace!(action = action.action_type(), "Reducing task action");

        // Build the next list first, then swap it in whole
        *state = apply_with_policy(state, action, env.duplicate_ids);

        SmallVec::new()
    }
}
