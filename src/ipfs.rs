//! IPFS pinning through the Pinata API

use crate::config::{PinataConfig, PluginSettings};
use crate::{Error, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Metadata document a coin's URI points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    pub properties: CoinProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinProperties {
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PinResponse {
    ipfs_hash: String,
}

/// Whether `image` already names remote content rather than a local file
pub fn is_remote_uri(image: &str) -> bool {
    ["ipfs://", "https://", "http://", "ar://", "data:"]
        .iter()
        .any(|prefix| image.starts_with(prefix))
}

pub struct PinataClient {
    client: Client,
    base_url: String,
    jwt: SecretString,
}

impl PinataClient {
    pub fn new(config: &PinataConfig, settings: &PluginSettings) -> Result<Self> {
        Self::with_base_url(config, &settings.pinata_api_url)
    }

    pub fn with_base_url(config: &PinataConfig, base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            jwt: config.jwt.clone(),
        })
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(self.jwt.expose_secret())
    }

    async fn ipfs_uri(response: Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Ipfs(format!("Pinata returned {}: {}", status, body)));
        }
        let pinned: PinResponse = response.json().await?;
        Ok(format!("ipfs://{}", pinned.ipfs_hash))
    }

    /// Pin a JSON document, returning its `ipfs://` URI
    pub async fn pin_json<T: Serialize>(&self, name: &str, content: &T) -> Result<String> {
        let response = self
            .post("/pinning/pinJSONToIPFS")
            .json(&json!({
                "pinataContent": content,
                "pinataMetadata": { "name": name }
            }))
            .send()
            .await?;

        let uri = Self::ipfs_uri(response).await?;
        info!(name, %uri, "Pinned JSON to IPFS");
        Ok(uri)
    }

    /// Upload and pin a local file, returning its `ipfs://` URI
    pub async fn pin_file(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name.clone()))
            .text(
                "pinataMetadata",
                json!({ "name": file_name.clone() }).to_string(),
            );

        let response = self
            .post("/pinning/pinFileToIPFS")
            .multipart(form)
            .send()
            .await?;

        let uri = Self::ipfs_uri(response).await?;
        info!(file = %file_name, %uri, "Pinned file to IPFS");
        Ok(uri)
    }

    /// Pin coin metadata, uploading the image first when it is a local file
    pub async fn pin_coin_metadata(&self, mut metadata: CoinMetadata) -> Result<String> {
        if !is_remote_uri(&metadata.image) {
            metadata.image = self.pin_file(Path::new(&metadata.image)).await?;
        }
        let name = format!("{} metadata", metadata.symbol);
        self.pin_json(&name, &metadata).await
    }
}

impl std::fmt::Debug for PinataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinataClient")
            .field("base_url", &self.base_url)
            .field("jwt", &"[REDACTED]")
            .finish()
    }
}
