//! Terminal event payloads handed to components

use crossterm::event::KeyEvent;

/// The actual event payload
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

impl EventKind {
    /// The key event, if this is one
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            EventKind::Key(key) => Some(key),
            EventKind::Resize(_, _) => None,
        }
    }
}
