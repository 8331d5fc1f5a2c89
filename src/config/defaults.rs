use super::types::ConfigMap;

pub const CONNECTION_TIMEOUT: &str = "connectionTimeout";
pub const REQUEST_RETRIES: &str = "requestRetries";
pub const CLIENT_IP_ADDRESS: &str = "IPAddress";

/// Connection timeout is in milliseconds.
const DEFAULTS: &[(&str, &str)] = &[
    (CONNECTION_TIMEOUT, "30000"),
    (REQUEST_RETRIES, "3"),
    (CLIENT_IP_ADDRESS, "127.0.0.1"),
];

/// Copy of `config` with any missing default keys filled in. Existing values win.
pub fn with_defaults(config: &ConfigMap) -> ConfigMap {
    let mut merged = config.clone();
    for (key, value) in DEFAULTS {
        merged
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
    merged
}

pub fn default_for(key: &str) -> Option<&'static str> {
    DEFAULTS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
