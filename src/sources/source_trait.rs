// Trait definition for load order sources

use anyhow::Result;

/// Trait for places that host load order files (GitHub, a local directory)
#[async_trait::async_trait]
pub trait LoadOrderSource: Send + Sync {
    /// List the available version tokens, sorted ascending
    ///
    /// An empty list means the source holds no load orders.
    async fn list_versions(&self) -> Result<Vec<String>>;

    /// Fetch the raw text of the load order for a version token
    ///
    /// # Returns
    /// * `Ok(Some(text))` - the file contents
    /// * `Ok(None)` - no load order exists for this version
    /// * `Err(_)` - the source could not be reached or read
    async fn fetch_load_order(&self, version: &str) -> Result<Option<String>>;

    /// Get the source name (e.g., "github", "local")
    fn name(&self) -> &'static str;

    /// Human-readable location, used in messages
    fn location(&self) -> String;
}
