use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use paycred::config::{self, loader, ConfigManager, ConfigMap};
use paycred::credential;

/// An explicit `--config` file is loaded on its own; the process-wide
/// default is only consulted when no path is given.
fn load(path: Option<&Path>) -> Result<Arc<ConfigMap>> {
    match path {
        Some(path) => {
            let config = loader::load_file(path)
                .with_context(|| format!("Could not load config from {}", path.display()))?;
            Ok(Arc::new(config))
        }
        None => Ok(ConfigManager::global().properties()),
    }
}

/// Numeric `N` of an `account<N>.` prefix.
fn account_index(prefix: &str) -> Option<u64> {
    prefix
        .trim_end_matches('.')
        .trim_start_matches("account")
        .parse()
        .ok()
}

fn is_account_key(key: &str) -> bool {
    key.split_once('.')
        .map_or(false, |(_, field)| credential::fields::ALL.contains(&field))
}

pub fn cmd_resolve(path: Option<&Path>, username: Option<&str>, field: Option<&str>) -> Result<()> {
    let config = load(path)?;
    let cred = credential::resolve(&config, username)?;

    match field {
        Some(f) => {
            let val = cred
                .field(f)
                .ok_or_else(|| anyhow::anyhow!("Field '{}' not found", f))?;
            println!("{}", val);
        }
        None => {
            let json = serde_json::to_string_pretty(&cred)?;
            println!("{}", json);
        }
    }

    Ok(())
}

pub fn cmd_accounts(path: Option<&Path>) -> Result<()> {
    let config = load(path)?;

    let mut accounts: Vec<_> = credential::accounts(&config).collect();
    if accounts.is_empty() {
        eprintln!("No accounts configured.");
        return Ok(());
    }
    accounts.sort_by_key(|(prefix, _)| (account_index(prefix), prefix.clone()));

    for (prefix, account) in accounts {
        let username = account.username.clone();
        let cred = credential::classify(account);
        let status = match credential::validate(&cred) {
            Ok(()) => "ok".to_string(),
            Err(e) => e.to_string(),
        };
        println!(
            "  {} {} -- {} | {}",
            prefix.trim_end_matches('.'),
            username,
            cred.kind(),
            status
        );
    }

    Ok(())
}

pub fn cmd_settings(path: Option<&Path>, with_defaults: bool) -> Result<()> {
    let loaded = load(path)?;
    let settings = if with_defaults {
        config::with_defaults(&loaded)
    } else {
        (*loaded).clone()
    };

    let mut keys: Vec<&String> = settings.keys().filter(|k| !is_account_key(k)).collect();
    keys.sort();
    for key in keys {
        println!("{} = {}", key, settings[key]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_config_skips_default_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paycred.toml");
        fs::write(
            &path,
            "[[paypal.accounts]]\napiUsername = \"bob\"\napiPassword = \"pw\"\napiSignature = \"sig\"\n",
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config["account0.apiUsername"], "bob");
        assert!(ConfigManager::try_global().is_none());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/paycred.toml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("Could not load config"));
        assert!(ConfigManager::try_global().is_none());
    }

    #[test]
    fn account_prefixes_sort_numerically() {
        let mut prefixes = vec!["account10.", "account2.", "account0."];
        prefixes.sort_by_key(|p| account_index(p));
        assert_eq!(prefixes, vec!["account0.", "account2.", "account10."]);
        assert_eq!(account_index("custom."), None);
    }

    #[test]
    fn account_keys_are_hidden_from_settings() {
        assert!(is_account_key("account0.apiPassword"));
        assert!(!is_account_key("connectionTimeout"));
        assert!(!is_account_key("http.proxy"));
    }
}
