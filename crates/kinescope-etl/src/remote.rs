use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

/// The versioned bootstrap catalog document.
pub const DEFAULT_BOOTSTRAP_URL: &str =
    "https://github.com/JarbasSkills/skill-retrotv/raw/dev/bootstrap.json";

/// One record of the remote catalog document. Keys of the document are
/// the entry keys (source URLs); values carry the entry fields.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntry {
    pub title: String,
    pub author: String,
    pub url: String,
    pub thumbnail: String,
}

/// Remote catalog client.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    bootstrap_url: String,
}

impl CatalogClient {
    /// Create a new catalog client for the given bootstrap document.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(bootstrap_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("kinescope/0.1.0 (https://github.com/oxur/kinescope)")
            .build()?;

        Ok(Self {
            http,
            bootstrap_url: bootstrap_url.into(),
        })
    }

    /// Fetch and parse the bootstrap document.
    ///
    /// Returned in key order; the merge preserves whatever order the
    /// store already has for known keys, so document order only governs
    /// first insertion.
    ///
    /// # Errors
    /// Returns an error if the request fails or the document cannot be
    /// parsed.
    pub async fn fetch(&self) -> Result<BTreeMap<String, RemoteEntry>, reqwest::Error> {
        let response = self.http.get(&self.bootstrap_url).send().await?;
        let catalog = response.json::<BTreeMap<String, RemoteEntry>>().await?;

        Ok(catalog)
    }
}
