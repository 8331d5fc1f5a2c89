use crate::config::{ConfigManager, ConfigMap};

use super::error::CredentialError;
use super::select::select;
use super::types::Credential;
use super::validate::validate;

/// Select then validate. Errors from either step are returned unchanged.
pub fn resolve(config: &ConfigMap, wanted: Option<&str>) -> Result<Credential, CredentialError> {
    let credential = select(config, wanted)?;
    validate(&credential)?;
    Ok(credential)
}

/// Hands out credentials from a configuration snapshot.
pub struct CredentialManager<'a> {
    config: &'a ConfigManager,
}

impl<'a> CredentialManager<'a> {
    pub fn new(config: &'a ConfigManager) -> Self {
        Self { config }
    }

    pub fn credentials(&self, wanted: Option<&str>) -> Result<Credential, CredentialError> {
        resolve(&self.config.properties(), wanted)
    }
}
