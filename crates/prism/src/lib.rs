//! # Prism
//!
//! Variant-driven button toolkit with a live playground.
//!
//! This crate re-exports all Prism sub-crates for unified documentation and
//! hosts the pieces the `prism` binary shares with tests: configuration
//! loading and a file-backed clipboard.
//!
//! ## Crates
//!
//! - [`pigment`] - Style parameters and variant resolution
//! - [`easel`] - Element rendering and HTML output
//! - [`palette`] - Playground controller and code synthesis

/// Style parameters and variant resolution.
pub use prism_pigment as pigment;

/// Element rendering and HTML output.
pub use prism_easel as easel;

/// Playground controller and code synthesis.
pub use prism_palette as palette;

pub mod clipboard;
pub mod config;
pub mod session;
