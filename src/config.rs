//! Declarative configuration for toggle views.
//!
//! A [`ToggleConfig`] captures the settings a toggle view is constructed with. It
//! can be written by hand or loaded from JSON:
//!
//! ```rust
//! use toggleui::config::ToggleConfig;
//!
//! let config = ToggleConfig::from_json(r#"{ "id": "mode", "toggleOnClick": true }"#).unwrap();
//! assert!(config.is_in_first_state);
//! assert!(config.toggle_on_click);
//! ```

use serde::{Deserialize, Serialize};
use toggleui_core::{IdGenerator, ViewId};

use crate::{ToggleView, error::ConfigError};

/// Construction-time settings of a [`ToggleView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ToggleConfig {
    /// Element id of the container. Generated when absent.
    pub id: Option<ViewId>,
    /// Whether the view starts out showing its first child.
    pub is_in_first_state: bool,
    /// Whether tapping the visible child toggles the view.
    pub toggle_on_click: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            id: None,
            is_in_first_state: true,
            toggle_on_click: false,
        }
    }
}

impl ToggleConfig {
    /// Parses a configuration from JSON.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
    /// [`ConfigError::EmptyId`] if `id` is present but empty.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values that parse but make no sense.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyId`] if `id` is present but empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.id {
            Some(id) if id.is_empty() => Err(ConfigError::EmptyId),
            _ => Ok(()),
        }
    }

    /// Serializes the configuration back to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ToggleView {
    /// Creates an unpopulated toggle view from `config`.
    ///
    /// Views without an explicit id take the next one from `ids`. Children still have
    /// to be supplied before the first render.
    #[must_use]
    pub fn from_config(config: &ToggleConfig, ids: &IdGenerator) -> Self {
        let id = config.id.clone().unwrap_or_else(|| ids.next_id());
        let view = Self::new(id).toggle_on_click(config.toggle_on_click);
        if config.is_in_first_state {
            view
        } else {
            view.starting_in_second_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = ToggleConfig::from_json("{}").unwrap();
        assert_eq!(config, ToggleConfig::default());
    }

    #[test]
    fn camel_case_fields_are_read() {
        let config =
            ToggleConfig::from_json(r#"{"id":"mode","isInFirstState":false,"toggleOnClick":true}"#)
                .unwrap();
        assert_eq!(config.id, Some(ViewId::from("mode")));
        assert!(!config.is_in_first_state);
        assert!(config.toggle_on_click);
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = ToggleConfig::from_json(r#"{"id":""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyId));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ToggleConfig::from_json(r#"{"childViews":"a b"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn to_json_uses_camel_case() {
        let json = ToggleConfig::default().to_json().unwrap();
        assert_eq!(json, r#"{"id":null,"isInFirstState":true,"toggleOnClick":false}"#);
    }

    #[test]
    fn from_config_generates_missing_ids() {
        let ids = IdGenerator::new();
        let config = ToggleConfig {
            is_in_first_state: false,
            toggle_on_click: true,
            ..ToggleConfig::default()
        };

        let first = ToggleView::from_config(&config, &ids);
        let second = ToggleView::from_config(&config, &ids);

        assert_eq!(first.id().as_str(), "m_0");
        assert_eq!(second.id().as_str(), "m_1");
        assert!(!first.is_in_first_state());
        assert!(first.toggles_on_click());
    }

    #[test]
    fn from_config_keeps_explicit_id() {
        let ids = IdGenerator::new();
        let config = ToggleConfig {
            id: Some("mode".into()),
            ..ToggleConfig::default()
        };
        let view = ToggleView::from_config(&config, &ids);
        assert_eq!(view.id().as_str(), "mode");
        assert!(view.is_in_first_state());
        assert_eq!(ids.next_id().as_str(), "m_0");
    }
}
