//! Palette command - Print the playground form controls

use clap::Args;
use prism_palette::playground_controls;

use prism::config::load_config;

#[derive(Args)]
pub struct PaletteArgs {
    /// Emit compact JSON on one line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: PaletteArgs) {
    let config = load_config(None).playground.initial_config();
    let controls = playground_controls(&config);

    let json = if args.compact {
        serde_json::to_string(&controls)
    } else {
        serde_json::to_string_pretty(&controls)
    };

    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize controls: {e}");
            std::process::exit(1);
        }
    }
}
