// Show command for displaying the load order of one game version

use crate::config::Config;
use crate::constants;
use crate::loadorder::{self, ModRecord, format_version};
use crate::sources::{self, LoadOrderSource};
use crate::ui;
use log::debug;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LoadOrderOutput {
    schema_version: u32,
    version: String,
    display_version: String,
    mods: Vec<ModRecord>,
}

/// Exit codes: 0 = shown (or nothing to show), 1 = version not found
pub async fn show(
    version: Option<String>,
    json: bool,
    hide_unavailable: bool,
) -> anyhow::Result<i32> {
    let config = Config::load()?;
    let source = sources::from_config(&config);

    let version = match version {
        Some(v) => v,
        None => match first_version(source.as_ref()).await? {
            Some(v) => v,
            None => {
                ui::dim(&format!("No game versions found in {}", source.location()));
                return Ok(0);
            }
        },
    };
    let display_version = format_version(&version);

    let pb = ui::spinner(&format!("Loading mods for {}...", display_version));
    let text = match source.fetch_load_order(&version).await {
        Ok(text) => {
            ui::clear_spinner(&pb);
            text
        }
        Err(e) => {
            ui::finish_spinner_error(&pb, "Error loading the load order");
            return Err(e);
        }
    };

    let Some(text) = text else {
        ui::error(&format!(
            "No load order file found for version {} in {}",
            version,
            source.location()
        ));
        return Ok(1);
    };

    let mut mods = loadorder::parse_text(&text);
    if mods.is_empty() && !json {
        ui::warning(&format!(
            "The load order file for version {} is empty",
            version
        ));
        return Ok(0);
    }

    if hide_unavailable {
        let before = mods.len();
        mods.retain(|m| !m.unavailable);
        debug!("Hid {} unavailable mod(s)", before - mods.len());
    }

    if json {
        ui::json(&LoadOrderOutput {
            schema_version: constants::SCHEMA_VERSION,
            version,
            display_version,
            mods,
        })?;
        return Ok(0);
    }

    if mods.is_empty() {
        ui::warning(&format!(
            "No available mods in the load order for version {}",
            version
        ));
        return Ok(0);
    }

    ui::header(&format!(
        "Load order for {} ({} mods)",
        display_version,
        mods.len()
    ));
    for (index, record) in mods.iter().enumerate() {
        ui::mod_entry(index + 1, record, None);
    }

    Ok(0)
}

/// The lowest available version, like the default selection of a version picker
async fn first_version(source: &dyn LoadOrderSource) -> anyhow::Result<Option<String>> {
    let pb = ui::spinner("Fetching versions...");
    match source.list_versions().await {
        Ok(tokens) => {
            ui::clear_spinner(&pb);
            Ok(tokens.into_iter().next())
        }
        Err(e) => {
            ui::finish_spinner_error(&pb, "Could not load game versions");
            Err(e)
        }
    }
}
