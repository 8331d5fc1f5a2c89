use std::collections::HashMap;

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;

/// Flat configuration namespace: bare global keys plus `account<N>.<field>` keys.
///
/// Keeps insertion order, so loaders put `account0` ahead of `account1`.
pub type ConfigMap = IndexMap<String, String>;

/// Top-level config document. Only the `paypal` section is read.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigDocument {
    pub paypal: Option<Section>,
}

/// The `paypal` section: global settings plus a list of accounts.
#[derive(Debug, Default, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub settings: IndexMap<String, Scalar>,
    #[serde(default)]
    pub accounts: Vec<HashMap<String, Scalar>>,
}

/// A setting value as written in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null,
    /// Arrays and nested tables; these have no flat string form.
    Unsupported(IgnoredAny),
}

impl Scalar {
    /// Flat string form. `null` becomes empty, nested values have none.
    pub fn into_value(self) -> Option<String> {
        match self {
            Scalar::Bool(b) => Some(b.to_string()),
            Scalar::Int(i) => Some(i.to_string()),
            Scalar::Float(f) => Some(f.to_string()),
            Scalar::Text(s) => Some(s),
            Scalar::Null => Some(String::new()),
            Scalar::Unsupported(_) => None,
        }
    }
}
