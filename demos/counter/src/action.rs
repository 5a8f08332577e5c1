//! Counter actions
//!
//! Names follow the wire vocabulary of the action messages the UI
//! dispatches (`increment`, `increase`, `toggle_counter`, ...). The amount
//! only exists on the two variants that use it.

use tally::ActionSummary;

#[derive(tally::Action, Clone, Debug, PartialEq, Eq)]
#[action(rename_all = "snake_case")]
pub enum CounterAction {
    /// Add one
    Increment,

    /// Subtract one
    Decrement,

    /// Set the value back to zero
    Reset,

    /// Add an arbitrary amount
    Increase(i64),

    /// Subtract an arbitrary amount
    Decrease(i64),

    /// Show or hide the value
    #[action(rename = "toggle_counter")]
    ToggleVisibility,

    /// An action kind this store does not recognize; carries the kind
    Unknown(String),

    /// Leave the application. Handled by the event loop, not the reducer.
    Quit,
}

impl ActionSummary for CounterAction {
    fn summary(&self) -> String {
        match self {
            CounterAction::Increase(amount) => format!("increase({amount})"),
            CounterAction::Decrease(amount) => format!("decrease({amount})"),
            CounterAction::Unknown(kind) => format!("unknown({kind:?})"),
            other => tally::Action::name(other).to_string(),
        }
    }
}
