use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::error::ConfigLoadError;
use super::types::{ConfigDocument, ConfigMap, Section};
use crate::credential::fields;

pub const SECTION: &str = "paypal";
pub const ENV_CONFIG_PATH: &str = "PAYCRED_CONFIG";

const LOCAL_FILES: &[&str] = &["paycred.toml", "paycred.json"];

/// Flatten the section into settings plus `account<N>.<field>` keys, in file order.
/// Unknown account keys, empty account values and nested settings are dropped.
pub fn flatten(section: Section) -> ConfigMap {
    let mut config = ConfigMap::new();
    for (key, value) in section.settings {
        match value.into_value() {
            Some(value) => {
                config.insert(key, value);
            }
            None => debug!("skipping non-scalar setting '{}'", key),
        }
    }

    for (index, mut account) in section.accounts.into_iter().enumerate() {
        for field in fields::ALL {
            let Some(value) = account.remove(*field) else {
                continue;
            };
            match value.into_value() {
                Some(value) if !value.is_empty() => {
                    config.insert(format!("account{}.{}", index, field), value);
                }
                _ => {}
            }
        }
    }

    config
}

fn from_document(doc: ConfigDocument) -> Result<ConfigMap, ConfigLoadError> {
    doc.paypal
        .map(flatten)
        .ok_or(ConfigLoadError::MissingSection { section: SECTION })
}

pub fn from_json_str(contents: &str, path: &Path) -> Result<ConfigMap, ConfigLoadError> {
    let doc: ConfigDocument =
        serde_json::from_str(contents).map_err(|source| ConfigLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    from_document(doc)
}

pub fn from_toml_str(contents: &str, path: &Path) -> Result<ConfigMap, ConfigLoadError> {
    let doc: ConfigDocument = toml::from_str(contents).map_err(|source| ConfigLoadError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    from_document(doc)
}

/// Load and flatten a config file; the format follows the extension.
pub fn load_file(path: &Path) -> Result<ConfigMap, ConfigLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str, &Path) -> Result<ConfigMap, ConfigLoadError> = match ext.as_deref() {
        Some("json") => from_json_str,
        Some("toml") => from_toml_str,
        _ => {
            return Err(ConfigLoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, path)
}

/// Where the process-wide manager looks on first access.
pub fn default_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
        return Some(PathBuf::from(path));
    }

    if let Some(local) = LOCAL_FILES.iter().map(PathBuf::from).find(|p| p.exists()) {
        return Some(local);
    }

    dirs::config_dir().map(|dir| dir.join("paycred").join("config.toml"))
}
