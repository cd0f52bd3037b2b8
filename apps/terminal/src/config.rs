use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub products_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            products_url: "http://localhost:5000/products".into(),
        }
    }
}

/// Defaults, then `catalog.toml` in the working directory, then the environment.
pub fn load_settings() -> Settings {
    let mut settings = load_settings_from(Path::new(DEFAULT_CONFIG_FILE));

    if let Ok(v) = std::env::var("CATALOG_PRODUCTS_URL") {
        settings.products_url = v;
    }
    if let Ok(v) = std::env::var("APP__PRODUCTS_URL") {
        settings.products_url = v;
    }

    settings
}

pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("products_url") {
                    settings.products_url = v.clone();
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring unreadable config file");
            }
        }
    }

    settings
}

pub fn parse_products_url(raw: &str) -> anyhow::Result<Url> {
    let raw = raw.trim();
    let url = Url::parse(raw).with_context(|| format!("invalid products url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("products url '{raw}' must use http or https");
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
