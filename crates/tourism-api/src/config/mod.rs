//! Service config loader (strict parsing).
//!
//! The service needs no config to run; a missing file yields defaults.

pub mod schema;

use std::fs;
use std::path::Path;

use tourism_core::error::{Result, TourismError};

pub use schema::{CorsSection, ServerSection, ServiceConfig};

/// File picked up from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "tourism.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        TourismError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| TourismError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    let path = path.as_ref();
    if path.exists() {
        tracing::info!(path = %path.display(), "loading config");
        load_from_file(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(ServiceConfig::default())
    }
}
