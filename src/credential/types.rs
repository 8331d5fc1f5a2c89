use std::fmt;

use serde::Serialize;

/// Config field names for account-scoped keys (`account<N>.<field>`).
pub mod fields {
    pub const API_USERNAME: &str = "apiUsername";
    pub const API_PASSWORD: &str = "apiPassword";
    pub const APPLICATION_ID: &str = "applicationId";
    pub const API_SIGNATURE: &str = "apiSignature";
    pub const API_CERTIFICATE: &str = "apiCertificate";
    pub const PRIVATE_KEY_PASSWORD: &str = "privateKeyPassword";
    pub const CERTIFICATE_SUBJECT: &str = "certificateSubject";
    pub const SIGNATURE_SUBJECT: &str = "signatureSubject";

    pub const ALL: &[&str] = &[
        API_USERNAME,
        API_PASSWORD,
        APPLICATION_ID,
        API_SIGNATURE,
        API_CERTIFICATE,
        PRIVATE_KEY_PASSWORD,
        CERTIFICATE_SUBJECT,
        SIGNATURE_SUBJECT,
    ];
}

/// One group of credential fields sharing a key prefix. Absent keys are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub application_id: String,
    pub api_signature: String,
    pub api_certificate: String,
    pub private_key_password: String,
    pub signature_subject: String,
    pub certificate_subject: String,
}

/// "Acting on behalf of" attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectAuthorization {
    pub subject: String,
}

impl SubjectAuthorization {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureCredential {
    pub username: String,
    pub password: String,
    pub signature: String,
    pub application_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_authorization: Option<SubjectAuthorization>,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateCredential {
    pub username: String,
    pub password: String,
    /// Opaque path or identifier; never opened here.
    pub certificate_file: String,
    pub private_key_password: String,
    pub application_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_authorization: Option<SubjectAuthorization>,
}

/// The resolved credential. The two kinds are a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Credential {
    Signature(SignatureCredential),
    Certificate(CertificateCredential),
}

impl Credential {
    pub fn kind(&self) -> &'static str {
        match self {
            Credential::Signature(_) => "signature",
            Credential::Certificate(_) => "certificate",
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Credential::Signature(c) => &c.username,
            Credential::Certificate(c) => &c.username,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Credential::Signature(c) => &c.password,
            Credential::Certificate(c) => &c.password,
        }
    }

    pub fn application_id(&self) -> &str {
        match self {
            Credential::Signature(c) => &c.application_id,
            Credential::Certificate(c) => &c.application_id,
        }
    }

    pub fn third_party_authorization(&self) -> Option<&SubjectAuthorization> {
        match self {
            Credential::Signature(c) => c.third_party_authorization.as_ref(),
            Credential::Certificate(c) => c.third_party_authorization.as_ref(),
        }
    }

    /// Look up a single field by its serialized (camelCase) name.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value: &str = match (self, name) {
            (_, "type") => self.kind(),
            (_, "username") => self.username(),
            (_, "password") => self.password(),
            (_, "applicationId") => self.application_id(),
            (_, "subject") => &self.third_party_authorization()?.subject,
            (Credential::Signature(c), "signature") => &c.signature,
            (Credential::Certificate(c), "certificateFile") => &c.certificate_file,
            (Credential::Certificate(c), "privateKeyPassword") => &c.private_key_password,
            _ => return None,
        };
        Some(value)
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "[REDACTED]"
    }
}

impl fmt::Debug for SignatureCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureCredential")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("signature", &redact(&self.signature))
            .field("application_id", &self.application_id)
            .field("third_party_authorization", &self.third_party_authorization)
            .finish()
    }
}

impl fmt::Debug for CertificateCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateCredential")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("certificate_file", &self.certificate_file)
            .field("private_key_password", &redact(&self.private_key_password))
            .field("application_id", &self.application_id)
            .field("third_party_authorization", &self.third_party_authorization)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signature() -> Credential {
        Credential::Signature(SignatureCredential {
            username: "bob".into(),
            password: "pw".into(),
            signature: "sig123".into(),
            application_id: String::new(),
            third_party_authorization: Some(SubjectAuthorization::new("alice")),
        })
    }

    #[test]
    fn debug_redacts_secrets() {
        let out = format!("{:?}", signature());
        assert!(out.contains("bob"));
        assert!(!out.contains("sig123"));
        assert!(!out.contains("\"pw\""));
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(signature()).unwrap();
        assert_eq!(json["type"], "signature");
        assert_eq!(json["signature"], "sig123");
        assert_eq!(json["applicationId"], "");
        assert_eq!(json["thirdPartyAuthorization"]["subject"], "alice");
    }

    #[test]
    fn field_lookup_is_kind_aware() {
        let cred = signature();
        assert_eq!(cred.field("signature"), Some("sig123"));
        assert_eq!(cred.field("subject"), Some("alice"));
        assert_eq!(cred.field("certificateFile"), None);
    }
}
