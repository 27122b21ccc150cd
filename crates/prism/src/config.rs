//! Configuration file loading for prism.
//!
//! Reads `prism.config.json` from the current working directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use prism_palette::{PlaygroundConfig, ACK_WINDOW};
use prism_pigment::{ColorOption, SizeOption, VariantOption};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "prism.config.json";

/// Top-level prism configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PrismConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Initial playground state.
    #[serde(default)]
    pub playground: PlaygroundSettings,

    /// Where `copy` writes to.
    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

/// Configuration for the playground.
///
/// Unset fields fall back to the playground's own defaults.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlaygroundSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<VariantOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// How long the "Copied!" acknowledgement stays visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack_window_ms: Option<u64>,
}

impl PlaygroundSettings {
    /// Initial playground configuration.
    pub fn initial_config(&self) -> PlaygroundConfig {
        let mut config = PlaygroundConfig::default();
        if let Some(color) = self.color {
            config.params.color = color;
        }
        if let Some(size) = self.size {
            config.params.size = size;
        }
        if let Some(variant) = self.variant {
            config.params.variant = variant;
        }
        if let Some(text) = &self.text {
            config.text = text.clone();
        }
        config
    }

    pub fn ack_window(&self) -> Duration {
        self.ack_window_ms
            .map(Duration::from_millis)
            .unwrap_or(ACK_WINDOW)
    }
}

/// Configuration for the clipboard.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardSettings {
    /// Write copied code to this file. When unset, copies stay in memory
    /// for the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Load `prism.config.json` from the given directory (or CWD if None).
///
/// A missing file yields the defaults; an unreadable or malformed one is
/// reported and also yields the defaults.
pub fn load_config(dir: Option<&Path>) -> PrismConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("config: {} not found, using defaults", config_path.display());
        return PrismConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::debug!("config: loaded {}", config_path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                PrismConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            PrismConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(dir.path()));
        assert_eq!(config.playground.initial_config(), PlaygroundConfig::default());
        assert_eq!(config.playground.ack_window(), ACK_WINDOW);
        assert!(config.clipboard.file.is_none());
    }

    #[test]
    fn test_partial_settings_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{
  "playground": { "color": "danger", "text": "Delete", "ackWindowMs": 500 },
  "clipboard": { "file": "out.txt" }
}"#,
        )
        .unwrap();

        let config = load_config(Some(dir.path()));
        let initial = config.playground.initial_config();
        assert_eq!(initial.params.color, ColorOption::Danger);
        assert_eq!(initial.params.size, SizeOption::Md);
        assert_eq!(initial.params.variant, VariantOption::Solid);
        assert_eq!(initial.text, "Delete");
        assert_eq!(config.playground.ack_window(), Duration::from_millis(500));
        assert_eq!(config.clipboard.file, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_unsupported_option_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "playground": { "size": "huge" } }"#,
        )
        .unwrap();

        let config = load_config(Some(dir.path()));
        assert_eq!(config.playground.initial_config(), PlaygroundConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let parsed: Result<PrismConfig, _> = serde_json::from_str(r#"{ "theme": "dark" }"#);
        assert!(parsed.is_err());
    }
}
