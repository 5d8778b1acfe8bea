//! jsonbin.io-backed BlobStore.
//!
//! The hosted store is a generic key-value JSON service: one bin id,
//! `GET /v3/b/{bin}` to read, `PUT /v3/b/{bin}` to replace. Responses
//! wrap the stored value in a `{"record": ..., "metadata": ...}`
//! envelope. Reads authenticate with an access key, writes with a
//! master key.

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::traits::BlobStore;

/// Connection settings for a hosted JSON bin.
#[derive(Debug, Clone)]
pub struct JsonBinConfig {
    /// Base URL of the bin API (e.g. `https://api.jsonbin.io/v3/b`).
    pub base_url: String,
    /// The bin (document) id.
    pub bin_id: String,
    /// Read credential, sent as `X-Access-Key`.
    pub access_key: String,
    /// Write credential, sent as `X-Master-Key`.
    pub master_key: String,
}

/// BlobStore implementation over the jsonbin.io v3 HTTP API.
pub struct JsonBinStore {
    config: JsonBinConfig,
    client: reqwest::blocking::Client,
}

impl JsonBinStore {
    pub fn new(config: JsonBinConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn bin_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.bin_id
        )
    }
}

impl BlobStore for JsonBinStore {
    fn get_document(&self) -> Result<Option<serde_json::Value>, StoreError> {
        let url = self.bin_url();
        debug!(%url, "fetching remote document");

        let resp = self
            .client
            .get(&url)
            .header("X-Access-Key", &self.config.access_key)
            .header("Content-Type", "application/json")
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            warn!(status = %resp.status(), "remote fetch failed");
            return Err(StoreError::Remote(format!(
                "fetch failed: {}",
                resp.status()
            )));
        }

        let envelope: serde_json::Value = resp
            .json()
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        // The bin API wraps the stored value in a "record" envelope.
        match envelope.get("record") {
            Some(record) if !record.is_null() => Ok(Some(record.clone())),
            _ => Ok(None),
        }
    }

    fn put_document(&self, doc: &serde_json::Value) -> Result<(), StoreError> {
        let url = self.bin_url();
        debug!(%url, "writing remote document");

        let resp = self
            .client
            .put(&url)
            .header("X-Master-Key", &self.config.master_key)
            .header("Content-Type", "application/json")
            .json(doc)
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            warn!(status = %resp.status(), "remote write failed");
            return Err(StoreError::Remote(format!(
                "update failed: {}",
                resp.status()
            )));
        }

        Ok(())
    }
}
