// GitHub repository source: contents API for listing, raw host for files

use crate::config::RepositorySpec;
use crate::loadorder::version::{
    load_order_filename, sort_version_tokens, version_token_from_filename,
};
use crate::sources::http;
use crate::sources::source_trait::LoadOrderSource;
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

/// Entry of the GitHub contents API listing
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    entry_type: String,
}

pub struct GitHubSource {
    repository: RepositorySpec,
}

impl GitHubSource {
    pub fn new(repository: RepositorySpec) -> Self {
        Self { repository }
    }

    fn contents_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/contents/{}",
            self.repository.user, self.repository.repo, self.repository.path
        )
    }

    fn raw_url(&self, version: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}/{}",
            self.repository.user,
            self.repository.repo,
            self.repository.branch,
            self.repository.path,
            urlencoding::encode(&load_order_filename(version))
        )
    }
}

/// Keep regular files that follow the load order naming scheme
fn version_tokens(entries: Vec<ContentEntry>) -> Vec<String> {
    let mut tokens: Vec<String> = entries
        .into_iter()
        .filter(|entry| entry.entry_type == "file")
        .filter_map(|entry| version_token_from_filename(&entry.name))
        .collect();
    sort_version_tokens(&mut tokens);
    tokens
}

#[async_trait]
impl LoadOrderSource for GitHubSource {
    async fn list_versions(&self) -> Result<Vec<String>> {
        let url = self.contents_url();
        debug!("Listing load orders from {}", url);

        let entries: Vec<ContentEntry> = http::fetch_json(&url).await.map_err(|e| {
            anyhow::anyhow!(
                "Failed to list load orders in '{}/{}' (path '{}'): {}",
                self.repository.user,
                self.repository.repo,
                self.repository.path,
                e
            )
        })?;

        Ok(version_tokens(entries))
    }

    async fn fetch_load_order(&self, version: &str) -> Result<Option<String>> {
        let url = self.raw_url(version);
        debug!("Fetching load order {} from {}", version, url);

        http::fetch_text_optional(&url).await.map_err(|e| {
            anyhow::anyhow!("Failed to fetch load order for version {}: {}", version, e)
        })
    }

    fn name(&self) -> &'static str {
        "github"
    }

    fn location(&self) -> String {
        format!(
            "{}/{} ({})",
            self.repository.user, self.repository.repo, self.repository.path
        )
    }
}
