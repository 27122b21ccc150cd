//! # prism
//!
//! Command-line front end for Prism: resolve button styles, render controls
//! to HTML, synthesize code and run a terminal playground.

mod commands;
mod logging;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "Variant-driven button toolkit with a live playground", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved classes of a button
    #[command(visible_alias = "pigment")]
    Resolve(commands::resolve::ResolveArgs),

    /// Render a button as HTML
    Render(commands::render::RenderArgs),

    /// Render a card as HTML
    Card(commands::render::CardArgs),

    /// Print the code that reproduces a button configuration
    Code(commands::code::CodeArgs),

    /// Print the playground form controls as JSON
    Palette(commands::palette::PaletteArgs),

    /// Start an interactive playground session on stdin
    Play(commands::play::PlayArgs),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Resolve(args)) => commands::resolve::run(args),
        Some(Commands::Render(args)) => commands::render::run(args),
        Some(Commands::Card(args)) => commands::render::run_card(args),
        Some(Commands::Code(args)) => commands::code::run(args),
        Some(Commands::Palette(args)) => commands::palette::run(args),
        Some(Commands::Play(args)) => commands::play::run(args),
        None => {
            // Default to the playground with default args
            commands::play::run(commands::play::PlayArgs::default());
        }
    }
}
