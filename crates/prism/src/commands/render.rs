//! Render commands - Print a button or card as HTML

use clap::Args;
use prism_easel::{Button, Card, Node};
use prism_pigment::{AccentColor, CardVariant, StyleParameters};

use super::StyleArgs;

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub style: StyleArgs,

    /// Button content
    #[arg(short, long, default_value = "Button")]
    pub text: String,

    /// Render the button disabled
    #[arg(long)]
    pub disabled: bool,

    /// Stretch the button to the container width
    #[arg(long)]
    pub full_width: bool,

    /// Extra classes appended after the resolved ones
    #[arg(long)]
    pub class: Option<String>,
}

pub fn run(args: RenderArgs) {
    let mut button = Button::from_params(args.style.apply(StyleParameters::default()))
        .disabled(args.disabled)
        .full_width(args.full_width);
    if let Some(class) = args.class {
        button = button.class(class);
    }

    println!("{}", button.render(args.text).to_html());
}

#[derive(Args)]
pub struct CardArgs {
    /// Accent color (purple, green, pink, blue, cyan, orange, none)
    #[arg(long, default_value = "none")]
    pub accent: AccentColor,

    /// Card variant (default, bordered)
    #[arg(long, default_value = "default")]
    pub variant: CardVariant,

    /// Card content
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Extra classes appended after the resolved ones
    #[arg(long)]
    pub class: Option<String>,
}

pub fn run_card(args: CardArgs) {
    let mut card = Card::new().accent(args.accent).variant(args.variant);
    if let Some(class) = args.class {
        card = card.class(class);
    }

    let children = if args.text.is_empty() {
        Vec::new()
    } else {
        vec![Node::from(args.text)]
    };
    println!("{}", card.render(children).to_html());
}
