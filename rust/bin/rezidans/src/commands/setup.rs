//! Store configuration commands.

use anyhow::Result;

use crate::config::ClientConfig;

/// Set hosted store connection settings.
pub fn set(
    bin_id: Option<&str>,
    access_key: Option<&str>,
    master_key: Option<&str>,
    base_url: Option<&str>,
    config_path: &std::path::Path,
) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    if let Some(v) = bin_id {
        config.store.bin_id = v.to_string();
    }
    if let Some(v) = access_key {
        config.store.access_key = v.to_string();
    }
    if let Some(v) = master_key {
        config.store.master_key = v.to_string();
    }
    if let Some(v) = base_url {
        config.store.base_url = v.to_string();
    }

    config.save(config_path)?;
    println!("Configuration saved to {}.", config_path.display());
    Ok(())
}

/// Show the current configuration, credentials masked.
pub fn show(config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;

    println!("base_url:   {}", config.store.base_url);
    println!(
        "bin_id:     {}",
        if config.store.bin_id.is_empty() {
            "(not set)"
        } else {
            &config.store.bin_id
        }
    );
    println!("access_key: {}", mask(&config.store.access_key));
    println!("master_key: {}", mask(&config.store.master_key));
    println!(
        "session:    {}",
        if config.token.is_empty() {
            "logged out"
        } else {
            "token present"
        }
    );
    Ok(())
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{}...", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_hides_all_but_prefix() {
        assert_eq!(mask(""), "(not set)");
        assert_eq!(mask("abcd1234"), "abcd...");
        assert_eq!(mask("ab"), "ab...");
    }
}
