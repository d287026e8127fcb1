//! DNS-01 challenge record derivation.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

const CHALLENGE_LABEL: &str = "_acme-challenge";

/// Record name and TXT value to publish for a DNS-01 challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRecord {
    /// Record name without the trailing root dot, e.g. `_acme-challenge.example.com`.
    pub name: String,
    /// Unpadded base64url SHA-256 digest of the key authorization.
    pub value: String,
}

impl ChallengeRecord {
    pub fn new(domain: &str, key_auth: &str) -> Self {
        let fqdn = format!("{}.{}", CHALLENGE_LABEL, to_fqdn(domain));
        let digest = Sha256::digest(key_auth.as_bytes());

        Self {
            name: un_fqdn(&fqdn).to_string(),
            value: URL_SAFE_NO_PAD.encode(digest),
        }
    }
}

pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

pub fn un_fqdn(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
