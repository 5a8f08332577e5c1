//! Counter state - single source of truth
//!
//! Only the transition function produces new values; the store replaces
//! its snapshot wholesale and views read it through `&CounterState`.

use serde::Serialize;

/// Everything the counter view needs to render
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CounterState {
    /// Current value. Unbounded; negative values are valid.
    pub counter: i64,

    /// Whether the value is displayed
    pub show_counter: bool,
}

impl CounterState {
    pub fn new(counter: i64, show_counter: bool) -> Self {
        Self {
            counter,
            show_counter,
        }
    }
}
