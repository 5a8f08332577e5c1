//! tally: a reducer-driven state store for Rust terminal apps
//!
//! Like Redux/Elm, but for terminals. State lives in one store, changes
//! only through dispatched actions, and components are pure functions of
//! the current snapshot.
//!
//! # Example
//! ```ignore
//! use tally::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(rename_all = "snake_case")]
//! enum MyAction {
//!     NextItem,
//!     PrevItem,
//! }
//!
//! assert_eq!(MyAction::NextItem.name(), "next_item");
//! ```

// Re-export everything from core
pub use tally_core::*;

// Re-export derive macros
pub use tally_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use tally_core::{Action, ActionSummary, Component};

    // Events
    pub use tally_core::{process_raw_event, spawn_event_poller, EventKind, RawEvent};

    // Keybindings
    pub use tally_core::{format_key_for_display, parse_key_string, Keybindings};

    // Store
    pub use tally_core::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, Reducer, SharedStore,
        Store, StoreWithMiddleware, SubscriptionId,
    };

    // Derive macros
    pub use tally_macros::Action;

    // Ratatui re-exports
    pub use tally_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
