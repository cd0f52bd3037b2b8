use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub products_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:5000".into(),
            products_file: "data/products.json".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = load_settings_from(Path::new("server.toml"));

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("APP__PRODUCTS_FILE") {
        settings.products_file = v;
    }

    settings
}

pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("products_file") {
                settings.products_file = v.clone();
            }
        }
    }

    settings
}

/// Resolves the fixture path, failing early when nothing is there to serve.
pub fn resolve_products_file(raw_products_file: &str) -> anyhow::Result<PathBuf> {
    let raw_products_file = raw_products_file.trim();
    let path = if raw_products_file.is_empty() {
        PathBuf::from(Settings::default().products_file)
    } else {
        PathBuf::from(raw_products_file.replace('\\', "/"))
    };

    let metadata = fs::metadata(&path)
        .with_context(|| format!("products file '{}' is not readable", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("products file '{}' is not a regular file", path.display());
    }

    Ok(path)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
