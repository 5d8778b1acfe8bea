//! Client-side configuration.
//!
//! Reads/writes `~/.rezidans/config.toml`: the hosted store
//! credentials plus the persisted session token.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use rezidans_store::JsonBinConfig;

/// Hosted JSON store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Base URL of the bin API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// The bin (document) id.
    #[serde(default)]
    pub bin_id: String,

    /// Read credential.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_key: String,

    /// Write credential.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub master_key: String,
}

fn default_base_url() -> String {
    "https://api.jsonbin.io/v3/b".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bin_id: String::new(),
            access_key: String::new(),
            master_key: String::new(),
        }
    }
}

impl StoreSettings {
    pub fn to_jsonbin(&self) -> JsonBinConfig {
        JsonBinConfig {
            base_url: self.base_url.clone(),
            bin_id: self.bin_id.clone(),
            access_key: self.access_key.clone(),
            master_key: self.master_key.clone(),
        }
    }
}

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Hosted store connection settings.
    #[serde(default)]
    pub store: StoreSettings,

    /// Session token (set by `rezidans login`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
}

impl ClientConfig {
    /// Default config file path: ~/.rezidans/config.toml.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".rezidans").join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.store.base_url, "https://api.jsonbin.io/v3/b");
        assert!(config.store.bin_id.is_empty());
        assert!(config.token.is_empty());
    }

    #[test]
    fn roundtrip() {
        let mut config = ClientConfig::default();
        config.store.bin_id = "abc123".to_string();
        config.store.master_key = "$2a$10$x".to_string();
        config.token = "h.p.s".to_string();

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: ClientConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.store.bin_id, "abc123");
        assert_eq!(back.store.master_key, "$2a$10$x");
        assert_eq!(back.token, "h.p.s");
    }

    #[test]
    fn load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = ClientConfig::load(&path).unwrap();
        assert!(config.store.bin_id.is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ClientConfig::default();
        config.store.bin_id = "bin-1".to_string();
        config.save(&path).unwrap();

        let back = ClientConfig::load(&path).unwrap();
        assert_eq!(back.store.bin_id, "bin-1");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: ClientConfig = toml::from_str("[store]\nbin_id = \"b\"\n").unwrap();
        assert_eq!(config.store.bin_id, "b");
        assert_eq!(config.store.base_url, "https://api.jsonbin.io/v3/b");
        assert!(config.token.is_empty());
    }
}
