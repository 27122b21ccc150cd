//! # prism_easel
//!
//! Easel - Element rendering for Prism controls.
//!
//! ## Name Origin
//!
//! An **easel** holds the canvas while the painting happens. This crate
//! takes a resolved appearance from `prism_pigment` and props it up as a
//! small element tree the host UI can mount, or serialize to HTML.
//!
//! ## Usage
//!
//! ```rust
//! use prism_easel::Button;
//! use prism_pigment::{ColorOption, VariantOption};
//!
//! let element = Button::new()
//!     .color(ColorOption::Danger)
//!     .variant(VariantOption::Outline)
//!     .render("Delete");
//!
//! assert!(element.to_html().starts_with("<button class=\""));
//! ```

pub mod button;
pub mod card;
mod html;
pub mod node;

pub use button::{render_button, Button, HOVER_SCALE, PRESS_SCALE};
#[allow(deprecated)]
pub use button::NeonButton;
pub use card::{render_card, Card};
pub use node::{Attributes, Element, Feedback, Handler, Handlers, HostProps, Node, NodeRef, Style};
