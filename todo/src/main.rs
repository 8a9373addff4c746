//! Simple CLI demo for the task list.
//!
//! Walks a provider through toggling, removing, and creating tasks and prints
//! the list after each step. Set `RUST_LOG` to change log output.

use todo::{Task, TaskAction, TaskId, TaskList, TaskProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_tasks(title: &str, tasks: &TaskList) {
    println!("\n{title}");
    for task in tasks {
        let status = if task.done { "✓" } else { " " };
        println!("  [{status}] #{} {}", task.id, task.text);
    }
    println!("  {} remaining of {}", tasks.remaining_count(), tasks.len());
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,tasklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    tasklist_runtime::metrics::register_metrics();

    println!("=== Task List Example ===");

    let mut provider = TaskProvider::new();
    print_tasks("Initial tasks:", provider.state());

    provider.dispatch(TaskAction::toggle(TaskId::new(3)));
    print_tasks("After toggling #3:", provider.state());

    provider.dispatch(TaskAction::remove(TaskId::new(2)));
    print_tasks("After removing #2:", provider.state());

    // The seed occupies 1-4; start minting after it
    provider.next_id().set(5);
    let id = provider.next_id().id();
    provider.next_id().increment();
    provider.dispatch(TaskAction::create(Task::new(id, "Ship", false)));
    print_tasks("After creating #5:", provider.state());

    println!("\n=== Demo Complete ===");
}
