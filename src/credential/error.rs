use thiserror::Error;

pub const ERROR_USERNAME: &str = "missing or empty username";
pub const ERROR_PASSWORD: &str = "missing or empty password";
pub const ERROR_SIGNATURE: &str = "missing or empty signature";
pub const ERROR_CERTIFICATE: &str = "missing or empty certificate";
pub const ERROR_PRIVATE_KEY_PASSWORD: &str = "missing or empty private key password";

/// Failures of credential resolution. Both are fatal to the current attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// No account matched the requested username, or there were no accounts at all.
    #[error("{0}")]
    MissingCredential(String),
    /// The selected account is missing a required field; holds the first failing reason.
    #[error("invalid credential: {0}")]
    InvalidCredential(&'static str),
}

impl CredentialError {
    pub fn missing_for(username: Option<&str>) -> Self {
        CredentialError::MissingCredential(format!(
            "Missing credentials for {}",
            username.unwrap_or("")
        ))
    }
}
