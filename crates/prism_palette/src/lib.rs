//! # prism_palette
//!
//! Palette - Interactive button playground for Prism.
//!
//! ## Name Origin
//!
//! A **palette** is where colours are tried out before they go on the
//! canvas. This crate holds one button configuration, previews it live and
//! synthesizes the markup that reproduces it.
//!
//! ## Concepts
//!
//! - **Config**: the edited record ([`PlaygroundConfig`])
//! - **Controller**: owner of the record ([`PlaygroundController`])
//! - **Code**: the synthesized invocation ([`generate_code`])
//! - **Acknowledgement**: the transient "copied" flag, cleared by an [`AckTimer`]
//!
//! ## Usage
//!
//! ```rust
//! use prism_palette::{MemoryClipboard, PlaygroundController};
//!
//! let mut playground = PlaygroundController::new(MemoryClipboard::new());
//! playground.update_field("color", "danger").unwrap();
//! playground.update_field("text", "Delete").unwrap();
//!
//! assert!(playground.copy_code().is_copied());
//! assert!(playground.clipboard().contents().unwrap().contains("color=\"danger\""));
//! ```

mod clipboard;
mod codegen;
mod controller;
mod controls;
mod timer;
mod types;
mod view;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use codegen::{generate_code, COMPONENT_TAG};
pub use controller::{CopyOutcome, PlaygroundController};
pub use controls::{playground_controls, ControlKind, PropControl, SelectOption};
pub use timer::{AckTimer, Clock, ManualClock, SystemClock, ACK_WINDOW};
pub use types::{PaletteError, ParameterField, ParameterUpdate, PlaygroundConfig, DEFAULT_TEXT};
pub use view::{render_playground, PlaygroundView, COPIED_LABEL, COPY_LABEL, SUBTITLE, TITLE};
