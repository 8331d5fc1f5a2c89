use super::error::{
    CredentialError, ERROR_CERTIFICATE, ERROR_PASSWORD, ERROR_PRIVATE_KEY_PASSWORD,
    ERROR_SIGNATURE, ERROR_USERNAME,
};
use super::types::Credential;

fn require(value: &str, reason: &'static str) -> Result<(), CredentialError> {
    if value.is_empty() {
        return Err(CredentialError::InvalidCredential(reason));
    }
    Ok(())
}

/// Check required fields in order; the first failure is returned.
/// Application id and subjects are optional.
pub fn validate(credential: &Credential) -> Result<(), CredentialError> {
    require(credential.username(), ERROR_USERNAME)?;
    require(credential.password(), ERROR_PASSWORD)?;

    match credential {
        Credential::Signature(c) => require(&c.signature, ERROR_SIGNATURE),
        Credential::Certificate(c) => {
            require(&c.certificate_file, ERROR_CERTIFICATE)?;
            require(&c.private_key_password, ERROR_PRIVATE_KEY_PASSWORD)
        }
    }
}
