use crate::config::ConfigMap;

use super::types::{fields, Account};

/// Returns the `account<N>.` prefix if `key` is an account username key.
fn username_prefix(key: &str) -> Option<&str> {
    let dot = key.find('.')?;
    (&key[dot + 1..] == fields::API_USERNAME).then(|| &key[..=dot])
}

fn lookup(config: &ConfigMap, prefix: &str, field: &str) -> String {
    config
        .get(&format!("{}{}", prefix, field))
        .cloned()
        .unwrap_or_default()
}

/// Rebuild the account stored under `prefix` (including the trailing `.`).
pub fn account_at(config: &ConfigMap, prefix: &str) -> Account {
    Account {
        username: lookup(config, prefix, fields::API_USERNAME),
        password: lookup(config, prefix, fields::API_PASSWORD),
        application_id: lookup(config, prefix, fields::APPLICATION_ID),
        api_signature: lookup(config, prefix, fields::API_SIGNATURE),
        api_certificate: lookup(config, prefix, fields::API_CERTIFICATE),
        private_key_password: lookup(config, prefix, fields::PRIVATE_KEY_PASSWORD),
        signature_subject: lookup(config, prefix, fields::SIGNATURE_SUBJECT),
        certificate_subject: lookup(config, prefix, fields::CERTIFICATE_SUBJECT),
    }
}

/// Lazily yields `(prefix, account)` for every username key in scan order.
///
/// Never fails: fields under a prefix without a username key are ignored, and
/// missing fields come back empty.
pub fn accounts(config: &ConfigMap) -> impl Iterator<Item = (String, Account)> + '_ {
    config.keys().filter_map(move |key| {
        let prefix = username_prefix(key)?;
        Some((prefix.to_string(), account_at(config, prefix)))
    })
}
