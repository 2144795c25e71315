//! Event scripts
//!
//! A script is a JSON array of input events addressed by tab id:
//!
//! ```json
//! [
//!   { "type": "click", "tab": "advanced" },
//!   { "type": "key", "tab": "advanced", "key": "ArrowLeft" }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tabnest_core::{Dispatch, Result};

use super::tabs::{click_tab, press_key};
use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Click { tab: String },
    Key { tab: String, key: String },
}

pub fn parse(json: &str) -> Result<Vec<ScriptEvent>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptEvent>> {
    let events = parse(&std::fs::read_to_string(path.as_ref())?)?;

    tracing::debug!(path = %path.as_ref().display(), events = events.len(), "Loaded event script");

    Ok(events)
}

/// Run every event in order. A failing event is reported and the script
/// carries on.
pub fn replay(state: &AppState, events: &[ScriptEvent]) -> Vec<CommandResult<Dispatch>> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let result = match event {
                ScriptEvent::Click { tab } => click_tab(state, tab),
                ScriptEvent::Key { tab, key } => press_key(state, tab, key),
            };
            if let Some(error) = &result.error {
                tracing::warn!(index, error = %error, "Script event failed");
            }
            result
        })
        .collect()
}
