// Local directory source, mainly for offline use and testing

use crate::loadorder::version::{
    load_order_filename, sort_version_tokens, version_token_from_filename,
};
use crate::sources::source_trait::LoadOrderSource;
use anyhow::Result;
use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct LocalSource {
    dir: PathBuf,
}

impl LocalSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl LoadOrderSource for LocalSource {
    async fn list_versions(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read load order directory '{}': {}",
                self.dir.display(),
                e
            )
        })?;

        let mut tokens = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(token) = entry
                .file_name()
                .to_str()
                .and_then(version_token_from_filename)
            {
                tokens.push(token);
            }
        }

        sort_version_tokens(&mut tokens);
        Ok(tokens)
    }

    async fn fetch_load_order(&self, version: &str) -> Result<Option<String>> {
        let path = self.dir.join(load_order_filename(version));
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::anyhow!(
                "Failed to read '{}': {}",
                path.display(),
                e
            )),
        }
    }

    fn name(&self) -> &'static str {
        "local"
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}
