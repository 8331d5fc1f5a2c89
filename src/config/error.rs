use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to parse {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unable to parse {path} as TOML: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("cannot load configuration section; ensure the '{section}' section is configured")]
    MissingSection { section: &'static str },
    #[error("unsupported config format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}
