//! Navigation commands derived from keys

use serde::{Deserialize, Serialize};

use crate::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavCommand {
    /// Move to the following tab, wrapping to the first
    Next,
    /// Move to the preceding tab, wrapping to the last
    Previous,
    /// Activate the focused tab in place
    Activate,
}

impl NavCommand {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowRight => Some(NavCommand::Next),
            Key::ArrowLeft => Some(NavCommand::Previous),
            Key::Enter | Key::Space => Some(NavCommand::Activate),
            Key::Other(_) => None,
        }
    }

    /// Index reached from `current` in a sequence of `count` tabs.
    ///
    /// `None` for [`NavCommand::Activate`] (no index change) and for an empty
    /// sequence.
    pub fn target_index(&self, current: usize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        match self {
            NavCommand::Next => Some((current + 1) % count),
            NavCommand::Previous => Some((current + count - 1) % count),
            NavCommand::Activate => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavCommand::Next => "next",
            NavCommand::Previous => "previous",
            NavCommand::Activate => "activate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(NavCommand::from_key(&Key::ArrowRight), Some(NavCommand::Next));
        assert_eq!(NavCommand::from_key(&Key::ArrowLeft), Some(NavCommand::Previous));
        assert_eq!(NavCommand::from_key(&Key::Enter), Some(NavCommand::Activate));
        assert_eq!(NavCommand::from_key(&Key::Space), Some(NavCommand::Activate));
        assert_eq!(NavCommand::from_key(&Key::parse("Tab")), None);
    }

    #[test]
    fn test_wrap_around() {
        assert_eq!(NavCommand::Next.target_index(2, 3), Some(0));
        assert_eq!(NavCommand::Previous.target_index(0, 3), Some(2));
        assert_eq!(NavCommand::Next.target_index(0, 3), Some(1));
        assert_eq!(NavCommand::Previous.target_index(2, 3), Some(1));
    }

    #[test]
    fn test_single_tab_stays_put() {
        assert_eq!(NavCommand::Next.target_index(0, 1), Some(0));
        assert_eq!(NavCommand::Previous.target_index(0, 1), Some(0));
    }

    #[test]
    fn test_no_index_change() {
        assert_eq!(NavCommand::Activate.target_index(1, 3), None);
        assert_eq!(NavCommand::Next.target_index(0, 0), None);
    }
}
