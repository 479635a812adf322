// Versions command for listing the available game versions

use crate::config::Config;
use crate::constants;
use crate::loadorder::format_version;
use crate::sources;
use crate::ui;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct VersionEntry {
    token: String,
    display: String,
}

#[derive(Debug, Serialize)]
struct VersionsOutput {
    schema_version: u32,
    source: String,
    versions: Vec<VersionEntry>,
}

pub async fn versions(json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let source = sources::from_config(&config);

    let pb = ui::spinner("Fetching versions...");
    let tokens = match source.list_versions().await {
        Ok(tokens) => {
            ui::clear_spinner(&pb);
            tokens
        }
        Err(e) => {
            ui::finish_spinner_error(&pb, "Could not load game versions");
            return Err(e);
        }
    };

    if json {
        return ui::json(&VersionsOutput {
            schema_version: constants::SCHEMA_VERSION,
            source: source.location(),
            versions: tokens
                .iter()
                .map(|token| VersionEntry {
                    token: token.clone(),
                    display: format_version(token),
                })
                .collect(),
        });
    }

    if tokens.is_empty() {
        ui::dim(&format!("No game versions found in {}", source.location()));
        return Ok(());
    }

    ui::header(&format!("Game versions in {}", source.location()));
    for token in &tokens {
        ui::version_line(token, &format_version(token));
    }

    Ok(())
}
