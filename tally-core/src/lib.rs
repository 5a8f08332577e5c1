//! Core traits and types for tally
//!
//! This crate provides the abstractions for building small applications
//! around a single reducer-driven store, following a Redux/Elm-inspired
//! architecture.
//!
//! # Core Concepts
//!
//! - **Action**: Values describing what happened
//! - **Store**: Owns the state, replaces it through a pure reducer, notifies observers
//! - **SharedStore**: A store behind a mutex for multi-threaded hosts
//! - **Component**: Pure UI elements that render from props and return actions
//! - **Keybindings**: Configurable key-to-command mapping
//!
//! # Basic Example
//!
//! ```ignore
//! use tally::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum MyAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! #[derive(Clone, Default, PartialEq)]
//! struct AppState {
//!     counter: i32,
//! }
//!
//! fn reducer(state: &AppState, action: &MyAction) -> AppState {
//!     match action {
//!         MyAction::Increment => AppState { counter: state.counter + 1 },
//!         MyAction::Decrement => AppState { counter: state.counter - 1 },
//!     }
//! }
//!
//! let mut store = Store::new(AppState::default(), reducer);
//! let id = store.subscribe(|state| println!("counter = {}", state.counter));
//! store.dispatch(MyAction::Increment);
//! store.unsubscribe(id);
//! ```

pub mod action;
pub mod bus;
pub mod component;
pub mod event;
pub mod keybindings;
pub mod shared;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionSummary};
pub use component::Component;

// Event exports
pub use bus::{process_raw_event, spawn_event_poller, RawEvent};
pub use event::EventKind;

// Keybindings exports
pub use keybindings::{format_key_for_display, parse_key_string, Keybindings};

// Store exports
pub use shared::SharedStore;
pub use store::{
    ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Observer, Reducer, Store,
    StoreWithMiddleware, SubscriptionId,
};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{buffer_to_string_plain, char_key, key, key_event, RenderHarness, TestHarness};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionSummary};
    pub use crate::bus::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::component::Component;
    pub use crate::event::EventKind;
    pub use crate::keybindings::{format_key_for_display, parse_key_string, Keybindings};
    pub use crate::shared::SharedStore;
    pub use crate::store::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store,
        StoreWithMiddleware, SubscriptionId,
    };

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
