//! Resolve command - Print the classes a button resolves to

use clap::Args;
use prism_pigment::StyleParameters;

use super::StyleArgs;

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub style: StyleArgs,

    /// Resolve the disabled appearance
    #[arg(long)]
    pub disabled: bool,

    /// Stretch the button to the container width
    #[arg(long)]
    pub full_width: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn run(args: ResolveArgs) {
    let params = args.style.apply(StyleParameters::default());
    let appearance = params.resolve(args.disabled, args.full_width);

    match args.format.as_str() {
        "json" => {
            let output = serde_json::json!({
                "params": params,
                "appearance": appearance,
                "className": appearance.class_name(),
            });
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to serialize appearance: {e}");
                    std::process::exit(1);
                }
            }
        }
        _ => println!("{}", appearance.class_name()),
    }
}
