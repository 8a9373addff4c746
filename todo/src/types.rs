//! Domain types for the task list.
//!
//! A task list is an ordered collection of tasks that can be created,
//! toggled, and removed. Order is insertion order and is what the UI shows.

use serde::{Deserialize, Serialize};
use tasklist_macros::Action;

/// Unique identifier for a task
///
/// Minted by callers from the provider's [`NextId`] counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from its integer value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the integer value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, fixed at creation
    pub id: TaskId,
    /// What needs doing
    pub text: String,
    /// Whether the task is finished
    pub done: bool,
}

impl Task {
    /// Creates a new task
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>, done: bool) -> Self {
        Self {
            id,
            text: text.into(),
            done,
        }
    }

    /// Returns a copy with `done` inverted
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// Ordered list of tasks, the unit of state replaced on every action
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first task with the given id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.0.iter().find(|task| task.id == id)
    }

    /// Checks if a task with the given id exists
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.0.iter().any(|task| task.id == id)
    }

    /// Returns the number of finished tasks
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.0.iter().filter(|task| task.done).count()
    }

    /// Returns the number of tasks still open
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.len() - self.done_count()
    }

    /// Iterates over the tasks in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    /// Returns the ids in display order
    #[must_use]
    pub fn ids(&self) -> Vec<TaskId> {
        self.0.iter().map(|task| task.id).collect()
    }

    /// Returns the tasks as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TaskList {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for TaskList {
    type Output = Task;

    fn index(&self, index: usize) -> &Task {
        &self.0[index]
    }
}

/// The list every provider starts with unless configured otherwise
#[must_use]
pub fn seed_tasks() -> TaskList {
    TaskList(vec![
        Task::new(TaskId::new(1), "Create Project", true),
        Task::new(TaskId::new(2), "Styling Components", true),
        Task::new(TaskId::new(3), "Create Context", false),
        Task::new(TaskId::new(4), "Implements function", false),
    ])
}

/// Counter callers use to mint ids for new tasks
///
/// The reducer never reads or advances it; advancing is up to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NextId(u64);

impl NextId {
    /// Creates a counter starting at `start`
    #[must_use]
    pub const fn new(start: u64) -> Self {
        Self(start)
    }

    /// Current value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Current value as a task id
    #[must_use]
    pub const fn id(self) -> TaskId {
        TaskId(self.0)
    }

    /// Overwrites the current value
    pub const fn set(&mut self, value: u64) {
        self.0 = value;
    }

    /// Advances the counter by one, saturating at `u64::MAX`
    pub const fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

/// Actions accepted by the task reducer
///
/// Serialized with a `type` tag, e.g. `{"type":"TOGGLE","id":3}`.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskAction {
    /// Append a fully formed task
    Create {
        /// The task to append
        #[serde(rename = "todo")]
        task: Task,
    },

    /// Invert `done` on the task with this id
    Toggle {
        /// Task to toggle
        id: TaskId,
    },

    /// Drop the task with this id
    Remove {
        /// Task to remove
        id: TaskId,
    },
}

impl TaskAction {
    /// `Create` action for `task`
    #[must_use]
    pub const fn create(task: Task) -> Self {
        Self::Create { task }
    }

    /// `Toggle` action for `id`
    #[must_use]
    pub const fn toggle(id: TaskId) -> Self {
        Self::Toggle { id }
    }

    /// `Remove` action for `id`
    #[must_use]
    pub const fn remove(id: TaskId) -> Self {
        Self::Remove { id }
    }
}
