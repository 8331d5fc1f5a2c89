use std::fs;
use std::path::PathBuf;

use paycred::config::{loader, with_defaults, ConfigManager};
use paycred::credential::{CredentialError, ERROR_SIGNATURE};
use paycred::{Credential, CredentialManager};

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const TOML_CONFIG: &str = r#"
[paypal.settings]
mode = "sandbox"
connectionTimeout = 10000

[[paypal.accounts]]
apiUsername = "sig_user"
apiPassword = "sig_pw"
apiSignature = "sig-abc"
applicationId = "APP-80W284485P519543T"
signatureSubject = "S1"
certificateSubject = "S2"

[[paypal.accounts]]
apiUsername = "cert_user"
apiPassword = "cert_pw"
apiCertificate = "/etc/certs/cert_user.p12"
privateKeyPassword = "secret"
certificateSubject = "merchant@example.com"

[[paypal.accounts]]
apiUsername = "broken_user"
apiPassword = "pw"
"#;

#[test]
fn resolves_both_kinds_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "paycred.toml", TOML_CONFIG);
    let config = loader::load_file(&path).unwrap();

    match paycred::resolve(&config, Some("cert_user")).unwrap() {
        Credential::Certificate(c) => {
            assert_eq!(c.certificate_file, "/etc/certs/cert_user.p12");
            assert_eq!(c.private_key_password, "secret");
            assert_eq!(
                c.third_party_authorization.unwrap().subject,
                "merchant@example.com"
            );
        }
        other => panic!("expected certificate credential, got {:?}", other),
    }

    match paycred::resolve(&config, Some("sig_user")).unwrap() {
        Credential::Signature(c) => {
            assert_eq!(c.signature, "sig-abc");
            assert_eq!(c.application_id, "APP-80W284485P519543T");
            assert_eq!(c.third_party_authorization.unwrap().subject, "S2");
        }
        other => panic!("expected signature credential, got {:?}", other),
    }
}

#[test]
fn no_username_resolves_first_account_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "paycred.toml", TOML_CONFIG);

    for _ in 0..5 {
        let config = loader::load_file(&path).unwrap();
        let cred = paycred::resolve(&config, None).unwrap();
        assert_eq!(cred.username(), "sig_user");
    }
}

#[test]
fn resolution_failures_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "paycred.toml", TOML_CONFIG);
    let config = loader::load_file(&path).unwrap();

    assert_eq!(
        paycred::resolve(&config, Some("broken_user")).unwrap_err(),
        CredentialError::InvalidCredential(ERROR_SIGNATURE)
    );

    let err = paycred::resolve(&config, Some("ghost_user")).unwrap_err();
    assert!(matches!(err, CredentialError::MissingCredential(_)));
    assert!(err.to_string().contains("ghost_user"));
}

#[test]
fn settings_merge_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "paycred.toml", TOML_CONFIG);
    let config = with_defaults(&loader::load_file(&path).unwrap());

    assert_eq!(config["connectionTimeout"], "10000");
    assert_eq!(config["requestRetries"], "3");
    assert_eq!(config["IPAddress"], "127.0.0.1");
}

#[test]
fn manager_reloads_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "paycred.json",
        r#"{
            "paypal": {
                "settings": { "mode": "live" },
                "accounts": [
                    { "apiUsername": "bob", "apiPassword": "pw", "apiSignature": "sig123" }
                ]
            }
        }"#,
    );

    let manager = ConfigManager::from_map(Default::default());
    manager.load_file(&path).unwrap();

    let creds = CredentialManager::new(&manager);
    let first = creds.credentials(None).unwrap();
    assert_eq!(first.username(), "bob");
    assert_eq!(first.field("signature"), Some("sig123"));
    assert_eq!(creds.credentials(None).unwrap(), first);
}

#[test]
fn broken_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "paycred.json", "{ not json");

    let manager = ConfigManager::from_map(Default::default());
    let err = manager.load_file(&path).unwrap_err();
    assert!(err.to_string().contains("JSON"));
    assert!(manager.properties().is_empty());
}
