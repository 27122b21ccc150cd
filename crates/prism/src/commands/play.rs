//! Play command - Interactive button playground on stdin

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use prism_palette::{Clipboard, MemoryClipboard, PlaygroundController};

use super::StyleArgs;
use prism::clipboard::FileClipboard;
use prism::config::load_config;
use prism::session::{run_session, HELP};

#[derive(Args, Default)]
pub struct PlayArgs {
    #[command(flatten)]
    pub style: StyleArgs,

    /// Initial button content
    #[arg(short, long)]
    pub text: Option<String>,

    /// Write copied code to this file
    #[arg(long)]
    pub clipboard_file: Option<PathBuf>,

    /// How long the "Copied!" acknowledgement stays visible, in milliseconds
    #[arg(long)]
    pub ack_window_ms: Option<u64>,
}

pub fn run(args: PlayArgs) {
    let config = load_config(None);

    let mut initial = config.playground.initial_config();
    initial.params = args.style.apply(initial.params);
    if let Some(text) = args.text {
        initial.text = text;
    }

    let window = args
        .ack_window_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.playground.ack_window());

    let clipboard: Box<dyn Clipboard> = match args.clipboard_file.or(config.clipboard.file) {
        Some(path) => {
            tracing::debug!("play: copying to {}", path.display());
            Box::new(FileClipboard::new(path))
        }
        None => Box::new(MemoryClipboard::new()),
    };

    let mut playground = PlaygroundController::new(clipboard)
        .with_config(initial)
        .with_ack_window(window);

    eprintln!("{HELP}");
    println!("{}", playground.generate_code());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_session(&mut playground, stdin.lock(), &mut stdout) {
        eprintln!("Playground session failed: {e}");
        std::process::exit(1);
    }
}
