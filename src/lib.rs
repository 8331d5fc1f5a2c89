//! Resolves API credentials for a payment client from a flat key/value
//! configuration namespace.
//!
//! Account fields live under `account<N>.<field>` keys. Resolution picks one
//! account, classifies it as a signature or certificate credential, and checks
//! its required fields.

pub mod config;
pub mod credential;

pub use config::{ConfigLoadError, ConfigManager, ConfigMap};
pub use credential::{resolve, Credential, CredentialError, CredentialManager};
