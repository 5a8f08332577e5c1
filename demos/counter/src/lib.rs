//! Counter demo built on tally
//!
//! A two-field state (`counter`, `show_counter`) driven by a pure
//! transition function. The terminal view and the headless script mode
//! both talk to the same store API: dispatch actions, observe snapshots.

pub mod action;
pub mod components;
pub mod config;
pub mod message;
pub mod reducer;
pub mod script;
pub mod state;

pub use action::CounterAction;
pub use reducer::transition;
pub use state::CounterState;
