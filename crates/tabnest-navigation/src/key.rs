//! Key identity as reported by the host

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Enter,
    Space,
    /// Any key the tab widget does not handle
    Other(String),
}

impl Key {
    /// Parse a host key value (`KeyboardEvent.key` style).
    ///
    /// Accepts the legacy `"Right"`, `"Left"` and `"Spacebar"` values too.
    pub fn parse(value: &str) -> Self {
        match value {
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Key::ArrowRight => "ArrowRight",
            Key::ArrowLeft => "ArrowLeft",
            Key::Enter => "Enter",
            Key::Space => " ",
            Key::Other(value) => value,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Space => write!(f, "Space"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::parse(&value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.as_str().to_string()
    }
}
