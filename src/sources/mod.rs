// Sources module for load order source implementations

pub mod github;
pub mod http;
pub mod local;
pub mod source_trait;

pub use github::GitHubSource;
pub use local::LocalSource;
pub use source_trait::LoadOrderSource;

use crate::config::{self, Config};
use log::debug;
use std::path::Path;

/// Build the source selected by the config
///
/// A configured local directory wins over the GitHub repository. Relative
/// directories are resolved against the config directory.
pub fn from_config(config: &Config) -> Box<dyn LoadOrderSource> {
    let source: Box<dyn LoadOrderSource> = match &config.source.local_dir {
        Some(dir) => Box::new(LocalSource::new(Path::new(&config::config_dir()).join(dir))),
        None => Box::new(GitHubSource::new(config.repository.clone())),
    };
    debug!("Using {} source at {}", source.name(), source.location());
    source
}
