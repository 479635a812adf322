// UI module for consistent terminal output with spinners and styling
//
// All user-facing printing goes through here.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use crate::loadorder::{ModRecord, Notation};
use console::{Term, style};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

/// Spinner style similar to uv/pnpm
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Check if stderr is a TTY (for interactive output)
fn is_tty() -> bool {
    Term::stderr().is_term()
}

fn spinner_style(template: &str) -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars(SPINNER_CHARS)
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Create a styled spinner for network fetches
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if !is_tty() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    pb.set_style(spinner_style("{spinner:.cyan} {msg}"));
    pb.set_message(message.to_string());

    if is_tty() {
        pb.enable_steady_tick(Duration::from_millis(80));
    }

    pb
}

/// Clear a spinner without leaving a message
pub fn clear_spinner(pb: &ProgressBar) {
    pb.finish_and_clear();
}

/// Finish a spinner with error
pub fn finish_spinner_error(pb: &ProgressBar, message: &str) {
    let msg = format!("{} {}", style("✗").red(), message);
    if is_tty() {
        pb.set_style(spinner_style("{msg}"));
        pb.finish_with_message(msg);
    } else {
        pb.finish_and_clear();
        eprintln!("{}", msg);
    }
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print an info/action message with arrow
pub fn action(message: &str) {
    println!("{} {}", style("→").cyan(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Print a header/section message
pub fn header(message: &str) {
    println!("{}", style(message).bold());
}

/// Print a dimmed/secondary message
pub fn dim(message: &str) {
    println!("{}", style(message).dim());
}

/// Print a value as pretty JSON
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print one version token next to its display form
pub fn version_line(token: &str, display: &str) {
    println!("  {} {}", style(display).bold(), style(format!("({})", token)).dim());
}

/// Print one mod entry of a load order
///
/// Unavailable mods are struck through. A missing version shows as N/A.
pub fn mod_entry(position: usize, record: &ModRecord, notation: Option<Notation>) {
    let name = if record.unavailable {
        style(record.name.as_str()).strikethrough().dim()
    } else {
        style(record.name.as_str()).bold()
    };
    let version = record.version.as_deref().unwrap_or("N/A");
    let tag = notation
        .map(|n| format!(" {}", style(format!("[{}]", n)).magenta()))
        .unwrap_or_default();

    println!(
        "{:>3}. {}  {}{}",
        position,
        name,
        style(format!("Version: {}", version)).dim(),
        tag
    );

    for (label, link) in record.links() {
        println!("     {} {}", style(format!("{}:", label)).cyan(), link);
    }

    if let Some(note) = &record.note {
        println!("     {} {}", style("Note:").yellow(), note);
    }
}
