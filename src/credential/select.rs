use log::debug;

use crate::config::ConfigMap;

use super::error::CredentialError;
use super::extract;
use super::types::{
    Account, CertificateCredential, Credential, SignatureCredential, SubjectAuthorization,
};

/// Pick the first account whose username matches (any account when `wanted` is `None`).
///
/// First match wins, not best match: accounts are tried in map order, so with
/// no `wanted` username the loaders' `account0` is the one picked.
pub fn select_account(
    config: &ConfigMap,
    wanted: Option<&str>,
) -> Result<(String, Account), CredentialError> {
    extract::accounts(config)
        .find(|(_, account)| wanted.map_or(true, |name| name == account.username))
        .ok_or_else(|| CredentialError::missing_for(wanted))
}

fn subject(value: &str) -> Option<SubjectAuthorization> {
    (!value.is_empty()).then(|| SubjectAuthorization::new(value))
}

/// Build the credential kind implied by the populated fields.
pub fn classify(account: Account) -> Credential {
    if !account.api_certificate.is_empty() {
        return Credential::Certificate(CertificateCredential {
            third_party_authorization: subject(&account.certificate_subject),
            username: account.username,
            password: account.password,
            certificate_file: account.api_certificate,
            private_key_password: account.private_key_password,
            application_id: account.application_id,
        });
    }

    // Intentional but odd: on the signature path the certificate subject
    // overrides the signature subject when both are set.
    let mut authorization = subject(&account.signature_subject);
    if let Some(cert_subject) = subject(&account.certificate_subject) {
        authorization = Some(cert_subject);
    }

    Credential::Signature(SignatureCredential {
        username: account.username,
        password: account.password,
        signature: account.api_signature,
        application_id: account.application_id,
        third_party_authorization: authorization,
    })
}

/// Select an account and turn it into a credential. Field validity is not checked here.
pub fn select(config: &ConfigMap, wanted: Option<&str>) -> Result<Credential, CredentialError> {
    let (prefix, account) = select_account(config, wanted)?;
    let credential = classify(account);
    debug!("selected {} credential from '{}'", credential.kind(), prefix);
    Ok(credential)
}
