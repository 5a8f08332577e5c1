//! Test utilities for tally applications
//!
//! - [`key`]: Create `KeyEvent` from string (e.g., `key("ctrl+p")`)
//! - [`TestHarness`]: A store plus a record of every state its observers saw
//! - [`RenderHarness`]: Render into an in-memory buffer and read it back as text
//! - Assertion macros for verifying actions returned by components
//!
//! # Example
//!
//! ```ignore
//! use tally::testing::TestHarness;
//!
//! let mut harness = TestHarness::new(CounterState::default(), transition);
//! harness.dispatch_all([CounterAction::Increment, CounterAction::Increment]);
//! assert_eq!(harness.state().counter, 2);
//! assert_eq!(harness.observed().len(), 2);
//! ```

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use parking_lot::Mutex;
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::event::EventKind;
use crate::keybindings::parse_key_string;
use crate::store::{Reducer, Store};
use crate::Action;

/// Create a `KeyEvent` from a key string.
///
/// # Examples
///
/// ```
/// use tally_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("ctrl+p");
/// assert_eq!(k.code, KeyCode::Char('p'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create an `EventKind::Key` from a key string.
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// Store wrapper that records every state delivered to observers.
///
/// The recorder is an ordinary subscriber registered first, so the
/// recorded list is exactly what any other observer would have seen.
pub struct TestHarness<S, A: Action> {
    store: Store<S, A>,
    observed: Arc<Mutex<Vec<S>>>,
}

impl<S, A> TestHarness<S, A>
where
    S: Clone + PartialEq + Send + 'static,
    A: Action,
{
    /// Create a harness around a fresh store.
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        let mut store = Store::new(state, reducer);
        let observed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&observed);
        store.subscribe(move |state: &S| sink.lock().push(state.clone()));
        Self { store, observed }
    }

    /// Dispatch one action.
    pub fn dispatch(&mut self, action: A) -> bool {
        self.store.dispatch(action)
    }

    /// Dispatch several actions in order, returning how many changed state.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = A>) -> usize {
        actions
            .into_iter()
            .map(|action| self.store.dispatch(action))
            .filter(|changed| *changed)
            .count()
    }

    /// Current state.
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// The underlying store, e.g. to add more observers.
    pub fn store_mut(&mut self) -> &mut Store<S, A> {
        &mut self.store
    }

    /// Every state observers have seen so far, oldest first.
    pub fn observed(&self) -> Vec<S> {
        self.observed.lock().clone()
    }

    /// Take the observed states, leaving the record empty.
    pub fn drain_observed(&mut self) -> Vec<S> {
        std::mem::take(&mut *self.observed.lock())
    }
}

/// Renders into a ratatui `TestBackend` for assertions on output text.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Render one frame and return the buffer.
    ///
    /// # Panics
    ///
    /// Panics if drawing fails.
    pub fn render(&mut self, f: impl FnOnce(&mut Frame)) -> &Buffer {
        self.terminal
            .draw(f)
            .unwrap_or_else(|e| panic!("failed to draw: {e}"));
        self.terminal.backend().buffer()
    }

    /// Render one frame and return its text, one line per row, without styling.
    pub fn render_to_string_plain(&mut self, f: impl FnOnce(&mut Frame)) -> String {
        buffer_to_string_plain(self.render(f))
    }
}

/// Convert a buffer to plain text, trimming trailing spaces per row.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Assert that a specific action was emitted.
///
/// # Example
///
/// ```ignore
/// let actions: Vec<_> = view.handle_event(&key_event("k"), props).into_iter().collect();
/// assert_emitted!(actions, CounterAction::Increment);
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
