//! Playground type definitions.

use std::fmt;
use std::str::FromStr;

use prism_pigment::{ColorOption, PigmentError, SizeOption, StyleParameters, VariantOption};
use serde::{Deserialize, Serialize};

/// Text shown on a freshly opened playground.
pub const DEFAULT_TEXT: &str = "Click Me";

/// The configuration a playground edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundConfig {
    #[serde(flatten)]
    pub params: StyleParameters,
    pub text: String,
}

impl Default for PlaygroundConfig {
    #[inline]
    fn default() -> Self {
        Self {
            params: StyleParameters::new(ColorOption::Primary, SizeOption::Md, VariantOption::Solid),
            text: DEFAULT_TEXT.to_string(),
        }
    }
}

impl PlaygroundConfig {
    /// Copy of `self` with exactly one field replaced.
    pub fn with_update(&self, update: ParameterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            ParameterUpdate::Color(color) => next.params.color = color,
            ParameterUpdate::Size(size) => next.params.size = size,
            ParameterUpdate::Variant(variant) => next.params.variant = variant,
            ParameterUpdate::Text(text) => next.text = text,
        }
        next
    }
}

/// Editable playground fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterField {
    Color,
    Size,
    Variant,
    Text,
}

impl ParameterField {
    pub const ALL: &'static [ParameterField] = &[Self::Color, Self::Size, Self::Variant, Self::Text];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Size => "size",
            Self::Variant => "variant",
            Self::Text => "text",
        }
    }

    /// Build an update for this field from its textual value.
    pub fn parse_value(self, value: &str) -> Result<ParameterUpdate, PaletteError> {
        Ok(match self {
            Self::Color => ParameterUpdate::Color(value.parse()?),
            Self::Size => ParameterUpdate::Size(value.parse()?),
            Self::Variant => ParameterUpdate::Variant(value.parse()?),
            Self::Text => ParameterUpdate::Text(value.to_string()),
        })
    }
}

impl FromStr for ParameterField {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| PaletteError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A replacement value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterUpdate {
    Color(ColorOption),
    Size(SizeOption),
    Variant(VariantOption),
    Text(String),
}

impl ParameterUpdate {
    #[inline]
    pub const fn field(&self) -> ParameterField {
        match self {
            Self::Color(_) => ParameterField::Color,
            Self::Size(_) => ParameterField::Size,
            Self::Variant(_) => ParameterField::Variant,
            Self::Text(_) => ParameterField::Text,
        }
    }
}

/// Errors raised by playground operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("Unknown playground field '{0}' (expected one of: color, size, variant, text)")]
    UnknownField(String),

    #[error(transparent)]
    Unsupported(#[from] PigmentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.params.color, ColorOption::Primary);
        assert_eq!(config.params.size, SizeOption::Md);
        assert_eq!(config.params.variant, VariantOption::Solid);
        assert_eq!(config.text, "Click Me");
    }

    #[test]
    fn test_single_field_update_isolation() {
        let config = PlaygroundConfig::default();
        let next = config.with_update(ParameterUpdate::Size(SizeOption::Lg));
        assert_eq!(
            next,
            PlaygroundConfig {
                params: StyleParameters::new(ColorOption::Primary, SizeOption::Lg, VariantOption::Solid),
                text: "Click Me".to_string(),
            }
        );
        assert_eq!(config.params.size, SizeOption::Md);
    }

    #[test]
    fn test_parse_field_values() {
        let field: ParameterField = "variant".parse().unwrap();
        assert_eq!(
            field.parse_value("ghost"),
            Ok(ParameterUpdate::Variant(VariantOption::Ghost))
        );
        assert_eq!(
            ParameterField::Text.parse_value("  spaced  "),
            Ok(ParameterUpdate::Text("  spaced  ".to_string()))
        );
        assert!(matches!(
            ParameterField::Size.parse_value("huge"),
            Err(PaletteError::Unsupported(PigmentError::UnsupportedOption { kind: "size", .. }))
        ));
        assert_eq!(
            "weight".parse::<ParameterField>(),
            Err(PaletteError::UnknownField("weight".to_string()))
        );
    }

    #[test]
    fn test_config_serde_is_flat() {
        let json = serde_json::to_value(PlaygroundConfig::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "color": "primary",
                "size": "md",
                "variant": "solid",
                "text": "Click Me"
            })
        );
    }
}
