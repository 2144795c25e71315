//! Keyboard Navigation Controller
//!
//! Maps a key press on a focused tab to a move within its sibling tabs.
//! Arrow keys wrap around the tab sequence, move focus, activate the new tab
//! and then select the first tab of any set nested in the panel at the new
//! position. Nested selections are not restored on this path.

use serde::Serialize;
use tabnest_dom::NodeId;
use tabnest_tabs::{SelectionMachine, TabError};

use crate::command::NavCommand;
use crate::key::Key;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum KeyAction {
    /// Key not handled by the tab widget
    Ignored,
    /// Focused tab activated in place
    Activated { tab: NodeId },
    /// Focus and selection moved to another tab (possibly the same one)
    Moved { from: NodeId, to: NodeId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyOutcome {
    pub action: KeyAction,
    /// The host should suppress the key's default behaviour
    pub default_prevented: bool,
}

impl KeyOutcome {
    fn ignored() -> Self {
        Self {
            action: KeyAction::Ignored,
            default_prevented: false,
        }
    }

    pub fn is_handled(&self) -> bool {
        self.action != KeyAction::Ignored
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardController;

impl KeyboardController {
    pub fn new() -> Self {
        Self
    }

    /// Handle `key` pressed while `current` has focus
    pub fn on_key(
        &self,
        machine: &mut SelectionMachine<'_>,
        current: NodeId,
        key: &Key,
    ) -> Result<KeyOutcome> {
        let Some(command) = NavCommand::from_key(key) else {
            tracing::trace!(tab = %current, key = %key, "Key ignored");
            return Ok(KeyOutcome::ignored());
        };

        let registry = machine.registry();
        let (set, index) = registry.locate(current)?;

        let Some(new_index) = command.target_index(index, set.len()) else {
            machine.activate(current)?;
            tracing::debug!(tab = %current, key = %key, "Tab activated from keyboard");
            return Ok(KeyOutcome {
                action: KeyAction::Activated { tab: current },
                default_prevented: false,
            });
        };

        let target = set.tabs()[new_index];
        machine.focus(target)?;
        machine.activate(target)?;

        // Panel by position, not by label: the nested set of the panel at the
        // new index gets its first tab.
        let nested = set
            .panels()
            .get(new_index)
            .and_then(|node| registry.panel(*node))
            .and_then(|panel| panel.nested);
        if let Some(nested) = nested {
            match machine.activate_first(nested) {
                Ok(_) => {}
                Err(TabError::Structure(reason)) => {
                    tracing::warn!(set = %nested, reason = %reason, "Skipping nested tab set");
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::debug!(
            from = %current,
            to = %target,
            command = command.as_str(),
            "Tab focus moved"
        );

        Ok(KeyOutcome {
            action: KeyAction::Moved {
                from: current,
                to: target,
            },
            default_prevented: true,
        })
    }
}
