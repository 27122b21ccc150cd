//! Closed enumerations of style parameters.
//!
//! Every option carries a wire name (the attribute value used in markup and
//! generated code) and a human label (used by the playground form). Parsing
//! is strict: anything outside the enumeration is rejected with
//! [`PigmentError::UnsupportedOption`], never mapped to a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PigmentError, Result};

/// Shared behaviour of every enumerated style parameter.
pub trait StyleOption: Copy + Sized + 'static {
    /// Parameter name used in error messages.
    const KIND: &'static str;

    /// Every value, in declaration order.
    const ALL: &'static [Self];

    /// Wire name, as written in markup.
    fn as_str(self) -> &'static str;

    /// Human readable label.
    fn label(self) -> &'static str;

    /// Parse a wire name.
    fn parse_option(value: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.as_str() == value)
            .ok_or_else(|| PigmentError::UnsupportedOption {
                kind: Self::KIND,
                value: value.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|option| option.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Semantic colour of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
}

impl StyleOption for ColorOption {
    const KIND: &'static str = "color";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Danger,
        Self::Warning,
    ];

    #[inline]
    fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
        }
    }

    #[inline]
    fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Success => "Success",
            Self::Danger => "Danger",
            Self::Warning => "Warning",
        }
    }
}

/// Spacing and typography scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeOption {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl StyleOption for SizeOption {
    const KIND: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Xl];

    #[inline]
    fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    #[inline]
    fn label(self) -> &'static str {
        match self {
            Self::Sm => "Small",
            Self::Md => "Medium",
            Self::Lg => "Large",
            Self::Xl => "Extra Large",
        }
    }
}

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantOption {
    #[default]
    Solid,
    Outline,
    Ghost,
}

impl VariantOption {
    /// Whether this treatment draws a border.
    ///
    /// Ghost buttons never do, whatever their colour.
    #[inline]
    pub const fn draws_border(self) -> bool {
        !matches!(self, Self::Ghost)
    }
}

impl StyleOption for VariantOption {
    const KIND: &'static str = "variant";
    const ALL: &'static [Self] = &[Self::Solid, Self::Outline, Self::Ghost];

    #[inline]
    fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }

    #[inline]
    fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Outline => "Outline",
            Self::Ghost => "Ghost",
        }
    }
}

/// Accent colour of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Purple,
    Green,
    Pink,
    Blue,
    Cyan,
    Orange,
    #[default]
    None,
}

impl StyleOption for AccentColor {
    const KIND: &'static str = "accent color";
    const ALL: &'static [Self] = &[
        Self::Purple,
        Self::Green,
        Self::Pink,
        Self::Blue,
        Self::Cyan,
        Self::Orange,
        Self::None,
    ];

    #[inline]
    fn as_str(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
            Self::None => "none",
        }
    }

    #[inline]
    fn label(self) -> &'static str {
        match self {
            Self::Purple => "Purple",
            Self::Green => "Green",
            Self::Pink => "Pink",
            Self::Blue => "Blue",
            Self::Cyan => "Cyan",
            Self::Orange => "Orange",
            Self::None => "None",
        }
    }
}

/// Card frame treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Default,
    Bordered,
}

impl StyleOption for CardVariant {
    const KIND: &'static str = "card variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Bordered];

    #[inline]
    fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bordered => "bordered",
        }
    }

    #[inline]
    fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Bordered => "Bordered",
        }
    }
}

impl FromStr for ColorOption {
    type Err = PigmentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_option(s)
    }
}

impl FromStr for SizeOption {
    type Err = PigmentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_option(s)
    }
}

impl FromStr for VariantOption {
    type Err = PigmentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_option(s)
    }
}

impl FromStr for AccentColor {
    type Err = PigmentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_option(s)
    }
}

impl FromStr for CardVariant {
    type Err = PigmentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_option(s)
    }
}

impl fmt::Display for ColorOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SizeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VariantOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
