//! Widget configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabnest_dom::Markers;
use tabnest_tabs::NestedSelection;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Attribute names marking tab sets, tab lists, tabs and panels
    pub markers: Markers,
    /// Class toggled on the visible panel; empty disables it
    pub show_class: String,
    /// How nested sets settle after a click on an ancestor tab
    pub nested_selection: NestedSelection,
    /// Bring every set to its selected-or-first tab during initialization
    pub normalize_on_init: bool,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;

        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let names = [
            &self.markers.tab_set,
            &self.markers.tab_list,
            &self.markers.tab,
            &self.markers.tab_panel,
        ];
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(CoreError::Config(
                "marker attribute names cannot be empty".to_string(),
            ));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(CoreError::Config(format!(
                    "marker attribute {name:?} is used twice"
                )));
            }
        }
        if self.show_class.contains(char::is_whitespace) {
            return Err(CoreError::Config(format!(
                "show class {:?} must be a single class name",
                self.show_class
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            show_class: "is-show".to_string(),
            nested_selection: NestedSelection::default(),
            normalize_on_init: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.nested_selection, NestedSelection::Remembered);
        assert!(config.normalize_on_init);
    }

    #[test]
    fn test_partial_overrides() {
        let config = Config::from_json(
            r#"{ "show_class": "active", "nested_selection": "forced_first", "markers": { "tab": "data-x-tab" } }"#,
        )
        .unwrap();

        assert_eq!(config.show_class, "active");
        assert_eq!(config.nested_selection, NestedSelection::ForcedFirst);
        assert_eq!(config.markers.tab, "data-x-tab");
        assert_eq!(config.markers.tab_panel, "data-tabpanel");
    }

    #[test]
    fn test_rejects_duplicate_markers() {
        let result = Config::from_json(r#"{ "markers": { "tab": "data-tabset" } }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_rejects_multi_word_show_class() {
        let result = Config::from_json(r#"{ "show_class": "is show" }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_unknown_policy_is_error() {
        let result = Config::from_json(r#"{ "nested_selection": "sometimes" }"#);
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }
}
