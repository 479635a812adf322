// Load order parsing: lines of text in, mod records out

pub mod parser;
pub mod record;
pub mod version;

use log::trace;

pub use parser::{Notation, classify_line, parse_line};
pub use record::ModRecord;
pub use version::format_version;

/// Parse a whole load order file, skipping blank lines
pub fn parse_text(text: &str) -> Vec<ModRecord> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse a whole load order file, keeping the notation of each entry
pub fn classify_text(text: &str) -> Vec<(Notation, ModRecord)> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let parsed = classify_line(line);
            if parsed.is_none() {
                trace!("Skipping blank line {}", index + 1);
            }
            parsed
        })
        .collect()
}
