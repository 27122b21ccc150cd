//! Line-oriented playground session.
//!
//! Each input line is one user event. Timers are polled before every event,
//! so an acknowledgement that expired while the user was typing is already
//! cleared when the next command runs.

use std::io::{self, BufRead, Write};

use prism_palette::{
    playground_controls, render_playground, Clipboard, Clock, CopyOutcome, PlaygroundController,
};

pub const HELP: &str = "\
Commands:
  color <default|primary|secondary|success|danger|warning>
  size <sm|md|lg|xl>
  variant <solid|outline|ghost>
  text <button text>
  copy       copy the generated code
  show       print the code, preview classes and copy state
  html       print the playground page as HTML
  controls   print the form controls as JSON
  help       print this help
  quit       leave the playground";

/// Run commands from `input` until it ends or `quit` is read.
pub fn run_session<C: Clipboard, K: Clock>(
    playground: &mut PlaygroundController<C, K>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if playground.poll() {
            tracing::debug!("session: acknowledgement expired");
        }

        let trimmed = line.trim_start();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (trimmed.trim_end(), ""),
        };

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "color" | "size" | "variant" | "text" => {
                // Text is taken verbatim; option names are trimmed.
                let value = if command == "text" { rest } else { rest.trim() };
                match playground.update_field(command, value) {
                    Ok(()) => writeln!(out, "{}", playground.generate_code())?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "copy" => match playground.copy_code() {
                CopyOutcome::Copied => writeln!(out, "Copied!")?,
                CopyOutcome::Rejected(err) => writeln!(out, "Copy failed: {err}")?,
            },
            "show" => {
                let view = playground.view();
                writeln!(out, "{}", view.code)?;
                writeln!(out, "preview: {}", view.preview.class_name())?;
                writeln!(out, "[{}]", view.copy_label())?;
            }
            "html" => {
                let view = playground.view();
                writeln!(out, "{}", render_playground(&view).to_html())?;
            }
            "controls" => {
                let controls = playground_controls(playground.config());
                let json = serde_json::to_string_pretty(&controls).map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
            other => writeln!(out, "error: unknown command '{other}' (try 'help')")?,
        }
        out.flush()?;
    }
    Ok(())
}
