//! Action trait for type-safe state transitions

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions describe something that happened; the reducer decides what it
/// means for the state. They should be:
/// - Clone: Actions may be logged or passed through middleware
/// - Debug: For debugging and logging
/// - Send + 'static: So a store can be shared across threads
///
/// Use `#[derive(Action)]` from `tally-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and wire encoding
    fn name(&self) -> &'static str;
}

/// Short human-readable rendering of an action for logs
///
/// The default is the `Debug` output. Override it for actions whose
/// payload is noisy or whose `Debug` form is not worth reading.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
