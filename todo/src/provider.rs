//! Access points for UI code.
//!
//! [`TaskProvider`] owns the task store and the next-id counter. Holding one
//! is proof the state exists, so its accessors cannot fail. Code that is
//! handed a [`ProviderScope`] instead may run before a provider is mounted;
//! there every accessor returns [`ProviderError::MissingProvider`].

use crate::reducer::{apply_with_policy, DuplicateIdPolicy, TaskEnvironment, TaskReducer};
use crate::types::{seed_tasks, NextId, TaskAction, TaskList};
use tasklist_runtime::{Store, StoreConfig};
use thiserror::Error;

/// Access point named in a [`ProviderError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessPoint {
    /// Current task list
    State,
    /// Action dispatcher
    Dispatch,
    /// Next-id counter
    NextId,
}

impl std::fmt::Display for AccessPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::State => "state",
            Self::Dispatch => "dispatch",
            Self::NextId => "next id",
        };
        f.write_str(name)
    }
}

/// Errors from provider access points
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderError {
    /// An access point was used while no provider was mounted
    #[error("cannot find task {0} provider")]
    MissingProvider(AccessPoint),
}

/// Configuration for a [`TaskProvider`]
///
/// # Example
///
/// ```
/// use todo::{DuplicateIdPolicy, ProviderConfig, TaskList};
///
/// let config = ProviderConfig::default()
///     .with_seed(TaskList::new())
///     .with_next_id(1)
///     .with_duplicate_ids(DuplicateIdPolicy::Allow);
/// assert!(config.seed.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Tasks present when the provider starts
    pub seed: TaskList,
    /// Starting value of the next-id counter
    pub next_id: u64,
    /// Handling of `Create` with an id already present
    pub duplicate_ids: DuplicateIdPolicy,
    /// Settings for the underlying store
    pub store: StoreConfig,
}

impl ProviderConfig {
    /// Set the starting tasks
    #[must_use]
    pub fn with_seed(mut self, seed: TaskList) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting counter value
    #[must_use]
    pub const fn with_next_id(mut self, next_id: u64) -> Self {
        self.next_id = next_id;
        self
    }

    /// Set the duplicate-id policy
    #[must_use]
    pub const fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }

    /// Set the store configuration
    #[must_use]
    pub const fn with_store_config(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            seed: seed_tasks(),
            next_id: 0,
            duplicate_ids: DuplicateIdPolicy::default(),
            store: StoreConfig::default(),
        }
    }
}

/// Store specialised to the task domain
pub type TaskStore = Store<TaskList, TaskAction, TaskEnvironment, TaskReducer>;

/// State holder for the task list
///
/// Pass it by reference to whatever needs the list, the dispatcher, or the
/// counter.
#[derive(Debug)]
pub struct TaskProvider {
    store: TaskStore,
    next_id: NextId,
}

impl TaskProvider {
    /// Provider with the four seed tasks and the counter at 0
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::default())
    }

    /// Provider built from `config`
    ///
    /// The seed is loaded through the reducer's `Create` path, so the
    /// duplicate-id policy applies to it as well.
    #[must_use]
    pub fn with_config(config: ProviderConfig) -> Self {
        let env = TaskEnvironment::new(config.duplicate_ids);
        let initial = config.seed.into_iter().fold(TaskList::new(), |list, task| {
            apply_with_policy(&list, TaskAction::create(task), env.duplicate_ids)
        });

        tracing::debug!(
            tasks = initial.len(),
            next_id = config.next_id,
            "Task provider initialized"
        );

        Self {
            store: Store::with_config(initial, TaskReducer::new(), env, config.store),
            next_id: NextId::new(config.next_id),
        }
    }

    /// Current task list
    #[must_use]
    pub const fn state(&self) -> &TaskList {
        self.store.current()
    }

    /// Read the task list via a closure
    pub fn select<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TaskList) -> T,
    {
        self.store.state(f)
    }

    /// Apply `action`; later reads see the result
    pub fn dispatch(&mut self, action: TaskAction) {
        tracing::debug!(action = action.action_type(), "Dispatching task action");
        self.store.send(action);
    }

    /// Mutable handle to the next-id counter
    ///
    /// Never advanced by the provider itself.
    pub const fn next_id(&mut self) -> &mut NextId {
        &mut self.next_id
    }

    /// Current counter value, without a mutable borrow
    #[must_use]
    pub const fn peek_next_id(&self) -> NextId {
        self.next_id
    }

    /// Environment the reducer runs with
    #[must_use]
    pub const fn environment(&self) -> &TaskEnvironment {
        self.store.environment()
    }
}

impl Default for TaskProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot through which components reach a provider that may not exist yet
#[derive(Debug, Default)]
pub struct ProviderScope {
    provider: Option<TaskProvider>,
}

impl ProviderScope {
    /// Scope with nothing mounted
    #[must_use]
    pub const fn empty() -> Self {
        Self { provider: None }
    }

    /// Scope with `provider` already mounted
    #[must_use]
    pub const fn mounted(provider: TaskProvider) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Mount `provider`, returning the one it replaces
    pub fn mount(&mut self, provider: TaskProvider) -> Option<TaskProvider> {
        tracing::debug!(replacing = self.provider.is_some(), "Mounting task provider");
        self.provider.replace(provider)
    }

    /// Remove and return the mounted provider
    pub fn unmount(&mut self) -> Option<TaskProvider> {
        tracing::debug!(was_mounted = self.provider.is_some(), "Unmounting task provider");
        self.provider.take()
    }

    /// Returns true if a provider is mounted
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.provider.is_some()
    }

    /// Current task list
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingProvider`] if nothing is mounted.
    pub fn state(&self) -> Result<&TaskList, ProviderError> {
        self.provider
            .as_ref()
            .map(TaskProvider::state)
            .ok_or(ProviderError::MissingProvider(AccessPoint::State))
    }

    /// Apply `action` through the mounted provider
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingProvider`] if nothing is mounted.
    pub fn dispatch(&mut self, action: TaskAction) -> Result<(), ProviderError> {
        let provider = self
            .provider
            .as_mut()
            .ok_or(ProviderError::MissingProvider(AccessPoint::Dispatch))?;
        provider.dispatch(action);
        Ok(())
    }

    /// Mutable handle to the mounted provider's counter
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingProvider`] if nothing is mounted.
    pub fn next_id(&mut self) -> Result<&mut NextId, ProviderError> {
        self.provider
            .as_mut()
            .map(TaskProvider::next_id)
            .ok_or(ProviderError::MissingProvider(AccessPoint::NextId))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Task, TaskId};

    #[test]
    fn test_new_provider_has_seed_and_zero_counter() {
        let provider = TaskProvider::new();

        assert_eq!(provider.state(), &seed_tasks());
        assert_eq!(provider.peek_next_id().get(), 0);
        assert_eq!(
            provider.environment().duplicate_ids,
            DuplicateIdPolicy::Reject
        );
    }

    #[test]
    fn test_dispatch_is_visible_to_next_read() {
        let mut provider = TaskProvider::new();

        provider.dispatch(TaskAction::toggle(TaskId::new(4)));

        assert_eq!(provider.select(|tasks| tasks.done_count()), 3);
    }

    #[test]
    fn test_counter_is_caller_driven() {
        let mut provider = TaskProvider::new();

        let id = provider.next_id().id();
        provider.dispatch(TaskAction::create(Task::new(id, "Write tests", false)));
        assert_eq!(provider.peek_next_id().get(), 0);

        provider.next_id().increment();
        assert_eq!(provider.peek_next_id().get(), 1);
        assert_eq!(provider.state().len(), 5);
    }

    #[test]
    fn test_config_seed_goes_through_duplicate_policy() {
        let seed = TaskList::from(vec![
            Task::new(TaskId::new(1), "a", false),
            Task::new(TaskId::new(1), "b", false),
        ]);

        let strict = TaskProvider::with_config(ProviderConfig::default().with_seed(seed.clone()));
        assert_eq!(strict.state().len(), 1);

        let lax = TaskProvider::with_config(
            ProviderConfig::default()
                .with_seed(seed)
                .with_duplicate_ids(DuplicateIdPolicy::Allow),
        );
        assert_eq!(lax.state().len(), 2);
    }

    #[test]
    fn test_config_next_id() {
        let provider = TaskProvider::with_config(ProviderConfig::default().with_next_id(5));
        assert_eq!(provider.peek_next_id().id(), TaskId::new(5));
    }

    #[test]
    fn test_empty_scope_reports_each_access_point() {
        let mut scope = ProviderScope::empty();

        assert_eq!(
            scope.state().err(),
            Some(ProviderError::MissingProvider(AccessPoint::State))
        );
        assert_eq!(
            scope.dispatch(TaskAction::toggle(TaskId::new(1))).err(),
            Some(ProviderError::MissingProvider(AccessPoint::Dispatch))
        );
        assert_eq!(
            scope.next_id().err(),
            Some(ProviderError::MissingProvider(AccessPoint::NextId))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProviderError::MissingProvider(AccessPoint::State).to_string(),
            "cannot find task state provider"
        );
        assert_eq!(
            ProviderError::MissingProvider(AccessPoint::Dispatch).to_string(),
            "cannot find task dispatch provider"
        );
        assert_eq!(
            ProviderError::MissingProvider(AccessPoint::NextId).to_string(),
            "cannot find task next id provider"
        );
    }

    #[test]
    fn test_mount_and_unmount() {
        let mut scope = ProviderScope::default();
        assert!(!scope.is_mounted());

        assert!(scope.mount(TaskProvider::new()).is_none());
        assert!(scope.is_mounted());
        assert!(scope.dispatch(TaskAction::remove(TaskId::new(1))).is_ok());
        assert_eq!(scope.state().map(TaskList::len), Ok(3));

        let replaced = scope.mount(TaskProvider::new());
        assert_eq!(replaced.map(|p| p.state().len()), Some(3));
        assert_eq!(scope.state().map(TaskList::len), Ok(4));

        assert!(scope.unmount().is_some());
        assert!(scope.state().is_err());
    }

    #[test]
    fn test_mounted_scope_counter() {
        let mut scope = ProviderScope::mounted(TaskProvider::new());

        if let Ok(next) = scope.next_id() {
            next.set(10);
        }

        assert_eq!(scope.next_id().map(|n| n.get()), Ok(10));
    }
}
