// Parse command for reading a local load order file without any network

use crate::constants;
use crate::loadorder::{self, ModRecord, Notation};
use crate::ui;
use log::debug;
use serde::Serialize;
use std::fs;

#[derive(Debug, Serialize)]
struct ExplainedRecord {
    notation: Notation,
    #[serde(flatten)]
    record: ModRecord,
}

#[derive(Debug, Serialize)]
struct ParseOutput<T: Serialize> {
    schema_version: u32,
    file: String,
    mods: Vec<T>,
}

pub fn parse(file: String, json: bool, explain: bool) -> anyhow::Result<()> {
    let text = fs::read_to_string(&file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let entries = loadorder::classify_text(&text);
    debug!("Parsed {} entries from {}", entries.len(), file);

    if json {
        return if explain {
            ui::json(&ParseOutput {
                schema_version: constants::SCHEMA_VERSION,
                file,
                mods: entries
                    .into_iter()
                    .map(|(notation, record)| ExplainedRecord { notation, record })
                    .collect(),
            })
        } else {
            ui::json(&ParseOutput {
                schema_version: constants::SCHEMA_VERSION,
                file,
                mods: entries.into_iter().map(|(_, record)| record).collect(),
            })
        };
    }

    if entries.is_empty() {
        ui::warning(&format!("The load order file {} is empty", file));
        return Ok(());
    }

    ui::action(&format!("{} ({} mods)", file, entries.len()));
    for (index, (notation, record)) in entries.iter().enumerate() {
        ui::mod_entry(index + 1, record, explain.then_some(*notation));
    }

    Ok(())
}
