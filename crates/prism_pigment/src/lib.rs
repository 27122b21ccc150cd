//! # prism_pigment
//!
//! Pigment - Style variant resolution for Prism controls.
//!
//! ## Name Origin
//!
//! **Pigment** is the raw colour an artist mixes before it touches the
//! canvas. This crate mixes a handful of enumerated style parameters into
//! the concrete class bundle a renderer paints with.
//!
//! ## Concepts
//!
//! - **Style parameters**: [`ColorOption`], [`SizeOption`] and [`VariantOption`]
//! - **Appearance**: the resolved, immutable class bundle ([`ResolvedAppearance`])
//! - **Accent**: the single-axis Card counterpart ([`CardAppearance`])
//!
//! ## Usage
//!
//! ```rust
//! use prism_pigment::{resolve, ColorOption, SizeOption, VariantOption};
//!
//! let appearance = resolve(
//!     VariantOption::Ghost,
//!     ColorOption::Primary,
//!     SizeOption::Md,
//!     false,
//!     false,
//! );
//! assert!(!appearance.has_border());
//! println!("{}", appearance.class_name());
//! ```

pub mod button;
pub mod card;
pub mod classes;
pub mod error;
pub mod options;

pub use button::{resolve, ResolvedAppearance, StyleParameters};
pub use card::{resolve_accent, CardAppearance};
pub use classes::ClassList;
pub use error::{PigmentError, Result};
pub use options::{AccentColor, CardVariant, ColorOption, SizeOption, StyleOption, VariantOption};
