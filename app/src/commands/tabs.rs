//! Tab commands
use serde::Serialize;
use tabnest_core::{Dispatch, InputEvent, Key, NodeId, SetState, TabWidget};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabInfo {
    pub id: Option<String>,
    pub node: NodeId,
    pub selected: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetInfo {
    #[serde(flatten)]
    pub state: SetState,
    pub tabs: Vec<TabInfo>,
}

fn set_infos(widget: &TabWidget) -> Vec<SetInfo> {
    let doc = widget.document();
    widget
        .states()
        .into_iter()
        .map(|state| {
            let tabs = widget
                .registry()
                .set(state.set)
                .map(|set| set.tabs())
                .unwrap_or_default()
                .iter()
                .map(|&node| TabInfo {
                    id: doc.attribute(node, "id").map(str::to_string),
                    node,
                    selected: doc.attribute(node, "aria-selected") == Some("true"),
                    focused: doc.focused() == Some(node),
                })
                .collect();
            SetInfo { state, tabs }
        })
        .collect()
}

pub fn click_tab(state: &AppState, tab_id: &str) -> CommandResult<Dispatch> {
    state
        .with_widget_mut(|widget| {
            let target = widget.tab(tab_id)?;
            Ok(widget.dispatch(&InputEvent::Click { target }))
        })
        .into()
}

pub fn press_key(state: &AppState, tab_id: &str, key: &str) -> CommandResult<Dispatch> {
    state
        .with_widget_mut(|widget| {
            let target = widget.tab(tab_id)?;
            Ok(widget.dispatch(&InputEvent::KeyDown {
                target,
                key: Key::parse(key),
            }))
        })
        .into()
}

pub fn get_tab_sets(state: &AppState) -> CommandResult<Vec<SetInfo>> {
    state.with_widget(|widget| Ok(set_infos(widget))).into()
}

pub fn render_html(state: &AppState) -> CommandResult<String> {
    state.with_widget(|widget| Ok(widget.to_html())).into()
}
