// Shared HTTP client utilities

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// User-Agent string for all HTTP requests
const USER_AGENT: &str = concat!("lo/", env!("CARGO_PKG_VERSION"));

lazy_static::lazy_static! {
    /// Shared HTTP client with proper User-Agent
    static ref CLIENT: Client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client");
}

/// Fetch JSON from a URL and deserialize it
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response: Response = CLIENT.get(url).send().await?;

    if response.status() == StatusCode::NOT_FOUND {
        anyhow::bail!("Resource not found: {}", url);
    }

    if !response.status().is_success() {
        anyhow::bail!("HTTP request failed: {} ({})", url, response.status());
    }

    let result = response.json().await?;
    Ok(result)
}

/// Fetch a text document, returning None for 404 errors
pub async fn fetch_text_optional(url: &str) -> Result<Option<String>> {
    let response: Response = CLIENT.get(url).send().await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    if !response.status().is_success() {
        anyhow::bail!("HTTP request failed: {} ({})", url, response.status());
    }

    let text = response.text().await?;
    Ok(Some(text))
}
