use serde::Deserialize;

use crate::error::ThemeError;
use crate::theme::{Theme, DEFAULT_THEME, THEME_ATTRIBUTE, THEME_KEY};

/// What mount does when the toggle control or icon display is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingElementPolicy {
    #[default]
    FailFast,
    Degrade,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub icon_id: String,
    pub default_theme: Theme,
    pub missing_elements: MissingElementPolicy,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_KEY.to_string(),
            attribute: THEME_ATTRIBUTE.to_string(),
            toggle_id: "theme-toggle".to_string(),
            icon_id: "theme-icon".to_string(),
            default_theme: DEFAULT_THEME,
            missing_elements: MissingElementPolicy::FailFast,
        }
    }
}

impl ThemeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))
    }
}
