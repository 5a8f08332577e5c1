//! Keybindings: command names mapped to key strings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keybindings configuration
///
/// Maps a command name to the key strings that trigger it. Serializes as a
/// plain JSON object, e.g. `{"quit": ["q", "esc"]}`. Commands are kept
/// sorted so lookups are deterministic when two commands share a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keybindings {
    commands: BTreeMap<String, Vec<String>>,
}

impl Keybindings {
    /// Create a new empty keybindings configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a command to keys, replacing any previous binding
    pub fn add(&mut self, command: impl Into<String>, keys: Vec<String>) {
        self.commands.insert(command.into(), keys);
    }

    /// All bindings, keyed by command name
    pub fn bindings(&self) -> &BTreeMap<String, Vec<String>> {
        &self.commands
    }

    /// Iterate over the bound command names
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Get command name for a key event
    pub fn get_command(&self, key: KeyEvent) -> Option<&str> {
        self.commands
            .iter()
            .find(|(_, keys)| keys.iter().any(|k| key_matches(k, &key)))
            .map(|(command, _)| command.as_str())
    }

    /// Get the first keybinding string for a command
    pub fn get_first_keybinding(&self, command: &str) -> Option<&str> {
        self.commands
            .get(command)
            .and_then(|keys| keys.first())
            .map(String::as_str)
    }

    /// Merge user config onto defaults - user config overrides defaults
    ///
    /// A user binding replaces the default keys of its command, and a key
    /// the user binds is taken away from every other command's defaults.
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        let user_keys: Vec<&String> = user.commands.values().flatten().collect();
        for keys in defaults.commands.values_mut() {
            keys.retain(|default_key| !user_keys.iter().any(|k| same_key(default_key, k)));
        }
        defaults.commands.extend(user.commands);
        defaults
    }
}

/// Two binding strings that fire on exactly the same key presses
fn same_key(a: &str, b: &str) -> bool {
    match (parse_key_string(a), parse_key_string(b)) {
        (Some(parsed_a), Some(parsed_b)) => key_matches(a, &parsed_b) && key_matches(b, &parsed_a),
        _ => false,
    }
}

fn key_matches(key_str: &str, key: &KeyEvent) -> bool {
    let Some(parsed) = parse_key_string(key_str) else {
        return false;
    };

    // Compare code and modifiers (ignore kind and state).
    // Character keys compare case-insensitively.
    let codes_match = match (&parsed.code, &key.code) {
        (KeyCode::Char(c1), KeyCode::Char(c2)) => c1.to_lowercase().eq(c2.to_lowercase()),
        _ => parsed.code == key.code,
    };

    // Terminals report shift for symbols like '+'; only compare it when the
    // binding asks for it.
    let mut modifiers = key.modifiers;
    if matches!(key.code, KeyCode::Char(_)) && !parsed.modifiers.contains(KeyModifiers::SHIFT) {
        modifiers.remove(KeyModifiers::SHIFT);
    }

    codes_match && parsed.modifiers == modifiers
}

/// Parse a key string like "q", "esc", "ctrl+p", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();

    if key_str.is_empty() {
        return None;
    }

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // A lone "+" is the key itself, not a separator
    if key_str == "+" {
        return Some(press(KeyCode::Char('+'), KeyModifiers::empty()));
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let mut modifiers = KeyModifiers::empty();
    let key_part = parts.last()?.trim();

    for part in &parts[..parts.len() - 1] {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(press(code, modifiers))
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Format a key string for display (e.g., "ctrl+p" -> "^P", "q" -> "Q", "up" -> "↑")
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();

    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }
    if key_str == "+" {
        return key_str;
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let key_part = parts.last().copied().unwrap_or(key_str.as_str());
    let modifiers: String = parts[..parts.len().saturating_sub(1)]
        .iter()
        .filter_map(|part| match part.trim() {
            "ctrl" | "control" => Some("^"),
            "shift" => Some("Shift+"),
            "alt" => Some("Alt+"),
            _ => None,
        })
        .collect();

    let key_display = match key_part {
        "esc" | "escape" => "Esc".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "tab" => "Tab".to_string(),
        "backspace" => "Backspace".to_string(),
        "up" => "↑".to_string(),
        "down" => "↓".to_string(),
        "left" => "←".to_string(),
        "right" => "→".to_string(),
        "pageup" => "PgUp".to_string(),
        "pagedown" => "PgDn".to_string(),
        "space" => "Space".to_string(),
        other if other.chars().count() == 1 => other.to_uppercase(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    };

    format!("{modifiers}{key_display}")
}
