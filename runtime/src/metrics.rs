//! Store metrics.
//!
//! The store records through the `metrics` facade. Nothing is exported unless
//! the host application installs a recorder; [`register_metrics`] attaches
//! descriptions to the names below once a recorder is in place.

use metrics::{describe_counter, describe_histogram};

// Re-export metrics macros for use in other modules
pub use metrics::{counter, histogram};

/// Actions run through the reducer, feedback included
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Reducer execution time
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";

/// Effects returned per reducer call
pub const EFFECTS_COUNT: &str = "store.effects.count";

/// Feedback actions dropped at the feedback bound
pub const FEEDBACK_DROPPED: &str = "store.feedback.dropped";

/// Every metric name the store records
pub const ALL: [&str; 4] = [ACTIONS_TOTAL, REDUCER_DURATION, EFFECTS_COUNT, FEEDBACK_DROPPED];

/// Register all metric descriptions with the installed recorder.
pub fn register_metrics() {
    describe_counter!(
        ACTIONS_TOTAL,
        "Total number of actions processed by the reducer"
    );
    describe_histogram!(
        REDUCER_DURATION,
        metrics::Unit::Seconds,
        "Time taken to execute the reducer"
    );
    describe_histogram!(EFFECTS_COUNT, "Number of effects returned per reducer call");
    describe_counter!(
        FEEDBACK_DROPPED,
        "Feedback actions dropped after the per-send limit was reached"
    );
}
