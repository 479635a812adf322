// Init command for writing loadorder.toml

use crate::config::{self, Config, RepositorySpec, SourceSpec};
use crate::ui;
use log::info;

pub struct InitOptions {
    pub user: Option<String>,
    pub repo: Option<String>,
    pub path: Option<String>,
    pub branch: Option<String>,
    pub local_dir: Option<String>,
}

pub fn init(options: InitOptions) -> anyhow::Result<()> {
    if Config::exists() {
        ui::dim(&format!(
            "Config detected at {}, skipping init",
            config::config_path()
        ));
        return Ok(());
    }

    let defaults = RepositorySpec::default();
    let config = Config {
        repository: RepositorySpec {
            user: options.user.unwrap_or(defaults.user),
            repo: options.repo.unwrap_or(defaults.repo),
            path: options.path.unwrap_or(defaults.path),
            branch: options.branch.unwrap_or(defaults.branch),
        },
        source: SourceSpec {
            local_dir: options.local_dir,
        },
    };

    config.save()?;
    info!("Wrote {}", config::config_path());
    ui::success(&format!("Initialized {}", config::config_path()));

    Ok(())
}
