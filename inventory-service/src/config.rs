use std::path::{Path, PathBuf};

use anyhow::Context;

/// Catalog location relative to the executable or the working directory.
const BUNDLED_CATALOG: &str = "data/products.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            catalog_path: resolve_catalog_path(
                std::env::var("CATALOG_PATH").ok(),
                exe_dir.as_deref(),
            ),
        })
    }
}

/// `CATALOG_PATH` if set; otherwise `data/products.json` next to the
/// executable when that file exists, else relative to the working directory.
pub fn resolve_catalog_path(explicit: Option<String>, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }

    exe_dir
        .map(|dir| dir.join(BUNDLED_CATALOG))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(BUNDLED_CATALOG))
}
