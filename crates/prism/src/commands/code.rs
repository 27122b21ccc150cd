//! Code command - Print the markup that reproduces a button configuration

use clap::Args;
use prism_palette::generate_code;

use super::StyleArgs;
use prism::config::load_config;

#[derive(Args)]
pub struct CodeArgs {
    #[command(flatten)]
    pub style: StyleArgs,

    /// Button content
    #[arg(short, long)]
    pub text: Option<String>,
}

pub fn run(args: CodeArgs) {
    let settings = load_config(None).playground;
    let mut config = settings.initial_config();
    config.params = args.style.apply(config.params);
    if let Some(text) = args.text {
        config.text = text;
    }

    println!("{}", generate_code(&config));
}
