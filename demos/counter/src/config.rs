//! Commands, default keybindings and the optional config file
//!
//! Each on-screen button is a [`Command`] with a stable name. The config
//! file only rebinds keys; it cannot invent commands.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tally::Keybindings;
use thiserror::Error;
use tracing::{info, warn};

use crate::action::CounterAction;

/// A button on the counter screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Increment,
    Decrement,
    Increase5,
    Decrease3,
    Increase10,
    Decrease15,
    Reset,
    ToggleCounter,
    Quit,
}

impl Command {
    /// Every command, in on-screen order
    pub const ALL: [Command; 9] = [
        Command::Increment,
        Command::Decrement,
        Command::Increase5,
        Command::Decrease3,
        Command::Increase10,
        Command::Decrease15,
        Command::Reset,
        Command::ToggleCounter,
        Command::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Increment => "increment",
            Command::Decrement => "decrement",
            Command::Increase5 => "increase_5",
            Command::Decrease3 => "decrease_3",
            Command::Increase10 => "increase_10",
            Command::Decrease15 => "decrease_15",
            Command::Reset => "reset",
            Command::ToggleCounter => "toggle_counter",
            Command::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Button caption. The toggle caption depends on current visibility.
    pub fn label(self, show_counter: bool) -> &'static str {
        match self {
            Command::Increment => "Increment",
            Command::Decrement => "Decrement",
            Command::Increase5 => "Increase By 5",
            Command::Decrease3 => "Decrease By 3",
            Command::Increase10 => "Increase By 10",
            Command::Decrease15 => "Decrease By 15",
            Command::Reset => "Reset",
            Command::ToggleCounter if show_counter => "Hide-Counter",
            Command::ToggleCounter => "Show-Counter",
            Command::Quit => "Quit",
        }
    }

    pub fn action(self) -> CounterAction {
        match self {
            Command::Increment => CounterAction::Increment,
            Command::Decrement => CounterAction::Decrement,
            Command::Increase5 => CounterAction::Increase(5),
            Command::Decrease3 => CounterAction::Decrease(3),
            Command::Increase10 => CounterAction::Increase(10),
            Command::Decrease15 => CounterAction::Decrease(15),
            Command::Reset => CounterAction::Reset,
            Command::ToggleCounter => CounterAction::ToggleVisibility,
            Command::Quit => CounterAction::Quit,
        }
    }
}

pub fn default_keybindings() -> Keybindings {
    let mut bindings = Keybindings::new();
    let mut bind = |command: Command, keys: &[&str]| {
        bindings.add(command.name(), keys.iter().map(|k| k.to_string()).collect());
    };
    bind(Command::Increment, &["k", "up", "+"]);
    bind(Command::Decrement, &["j", "down", "-"]);
    bind(Command::Increase5, &["5"]);
    bind(Command::Decrease3, &["3"]);
    bind(Command::Increase10, &["0"]);
    bind(Command::Decrease15, &["1"]);
    bind(Command::Reset, &["r"]);
    bind(Command::ToggleCounter, &["t", "space"]);
    bind(Command::Quit, &["q", "esc", "ctrl+c"]);
    bindings
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of the JSON config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub keybindings: Keybindings,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Defaults with the user's bindings layered on top
    pub fn keybindings(&self) -> Keybindings {
        let mut user = Keybindings::new();
        for (command, keys) in self.keybindings.bindings() {
            if Command::from_name(command).is_some() {
                user.add(command.clone(), keys.clone());
            } else {
                warn!(command = %command, "Ignoring binding for unknown command");
            }
        }
        Keybindings::merge(default_keybindings(), user)
    }
}
