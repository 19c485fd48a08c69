//! Provider configuration.

use circles_core::ActivityError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application identifier of the circles app.
pub const APP_ID: &str = "circles";

/// Default icon resource for circle activity events.
pub const DEFAULT_ICON: &str = "img/circles.svg";

/// Configuration of the activity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Application identifier events must carry to be accepted.
    #[serde(default = "default_app_id")]
    pub app_id: String,
    /// Icon resource assigned to every accepted event.
    #[serde(default = "default_icon_url")]
    pub icon_url: String,
}

fn default_app_id() -> String {
    APP_ID.to_owned()
}

fn default_icon_url() -> String {
    DEFAULT_ICON.to_owned()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            icon_url: default_icon_url(),
        }
    }
}

impl ProviderConfig {
    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// [`ActivityError::Config`] when the file cannot be read or parsed, or
    /// when a required field is empty.
    pub fn load_from_path(path: &Path) -> Result<Self, ActivityError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ActivityError::config(format!("read {}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ActivityError::config(format!("parse {}: {e}", path.display())))?;
        config.validate()?;
        debug!(app_id = %config.app_id, icon = %config.icon_url, "provider config loaded");
        Ok(config)
    }

    /// Reject empty identifiers.
    pub fn validate(&self) -> Result<(), ActivityError> {
        if self.app_id.is_empty() {
            return Err(ActivityError::config("appId must not be empty"));
        }
        if self.icon_url.is_empty() {
            return Err(ActivityError::config("iconUrl must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn default_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.app_id, "circles");
        assert_eq!(config.icon_url, "img/circles.svg");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ProviderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.app_id, "circles");
        assert_eq!(config.icon_url, "img/circles.svg");
    }

    #[test]
    fn camel_case_fields() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"appId": "teams", "iconUrl": "img/teams.svg"}"#).unwrap();
        assert_eq!(config.app_id, "teams");
        assert_eq!(config.icon_url, "img/teams.svg");
    }

    #[test]
    fn load_from_missing_path_errors() {
        let err = ProviderConfig::load_from_path(Path::new("/nonexistent/config.json"))
            .unwrap_err();
        assert_matches!(err, ActivityError::Config { .. });
    }

    #[test]
    fn load_rejects_empty_app_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"appId": ""}"#).unwrap();
        let err = ProviderConfig::load_from_path(&path).unwrap_err();
        assert_matches!(err, ActivityError::Config { .. });
    }

    #[test]
    fn load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"appId": "circles", "iconUrl": "img/alt.svg"}"#).unwrap();
        let config = ProviderConfig::load_from_path(&path).unwrap();
        assert_eq!(config.icon_url, "img/alt.svg");
    }
}
