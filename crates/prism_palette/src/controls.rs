//! Form controls of the playground.
//!
//! Describes the inputs a host shows next to the preview: one select per
//! style parameter and a free text input. The description is serializable
//! so hosts can build their form from JSON.

use prism_pigment::{ColorOption, SizeOption, StyleOption, VariantOption};
use serde::{Deserialize, Serialize};

use crate::types::{ParameterField, PlaygroundConfig};

/// Kind of input used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlKind {
    /// Text input control.
    Text,
    /// Select dropdown.
    Select,
}

/// Option of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    /// Display label.
    pub label: String,
    /// Wire value.
    pub value: String,
}

/// Control definition for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropControl {
    pub field: ParameterField,
    pub label: String,
    pub control: ControlKind,
    /// Current value.
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<SelectOption>,
}

impl PropControl {
    /// Create a select control listing every value of `T`.
    pub fn select<T: StyleOption>(field: ParameterField, label: &str, current: T) -> Self {
        Self {
            field,
            label: label.to_string(),
            control: ControlKind::Select,
            value: current.as_str().to_string(),
            options: T::ALL
                .iter()
                .map(|option| SelectOption {
                    label: option.label().to_string(),
                    value: option.as_str().to_string(),
                })
                .collect(),
        }
    }

    /// Create a text input control.
    pub fn text(field: ParameterField, label: &str, current: &str) -> Self {
        Self {
            field,
            label: label.to_string(),
            control: ControlKind::Text,
            value: current.to_string(),
            options: Vec::new(),
        }
    }
}

/// Controls for a configuration, in form order.
pub fn playground_controls(config: &PlaygroundConfig) -> Vec<PropControl> {
    vec![
        PropControl::select::<ColorOption>(ParameterField::Color, "Color", config.params.color),
        PropControl::select::<SizeOption>(ParameterField::Size, "Size", config.params.size),
        PropControl::select::<VariantOption>(ParameterField::Variant, "Variant", config.params.variant),
        PropControl::text(ParameterField::Text, "Button Text", &config.text),
    ]
}
