//! Subcommands of the `prism` binary.

pub mod code;
pub mod palette;
pub mod play;
pub mod render;
pub mod resolve;

use clap::Args;
use prism_pigment::{ColorOption, SizeOption, StyleParameters, VariantOption};

/// Style flags shared by the button commands.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Button color (default, primary, secondary, success, danger, warning)
    #[arg(long)]
    pub color: Option<ColorOption>,

    /// Button size (sm, md, lg, xl)
    #[arg(long)]
    pub size: Option<SizeOption>,

    /// Button variant (solid, outline, ghost)
    #[arg(long)]
    pub variant: Option<VariantOption>,
}

impl StyleArgs {
    /// Overlay the flags that were given onto `params`.
    pub fn apply(&self, mut params: StyleParameters) -> StyleParameters {
        if let Some(color) = self.color {
            params.color = color;
        }
        if let Some(size) = self.size {
            params.size = size;
        }
        if let Some(variant) = self.variant {
            params.variant = variant;
        }
        params
    }
}
