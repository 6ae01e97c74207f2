//! Credential detection for config leaves.
//!
//! The engine config only holds display and fee settings, but operators
//! point `lmk` at a wallet backend and paste things next to it. Anything
//! shaped like a backend credential is refused at load time.

use anyhow::{bail, Result};
use serde_json::Value;

use crate::pointer::collect_leaf_pointers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SecretKind {
    /// `Authorization` header value copied verbatim.
    BearerToken,
    /// Backend session token (`header.payload.signature`, base64url JSON).
    Jwt,
    /// PEM private key block.
    PrivateKey,
    /// Connection string carrying `user:password@`.
    UrlCredentials,
}

impl SecretKind {
    fn as_str(&self) -> &'static str {
        match self {
            SecretKind::BearerToken => "bearer_token",
            SecretKind::Jwt => "jwt",
            SecretKind::PrivateKey => "private_key",
            SecretKind::UrlCredentials => "url_credentials",
        }
    }
}

pub(crate) fn classify_secret(raw: &str) -> Option<SecretKind> {
    let s = raw.trim();

    let lower = s.to_ascii_lowercase();
    if lower.starts_with("bearer ") && s.len() > "bearer ".len() + 8 {
        return Some(SecretKind::BearerToken);
    }

    let segments: Vec<&str> = s.split('.').collect();
    if s.starts_with("eyJ")
        && segments.len() == 3
        && segments.iter().all(|seg| {
            !seg.is_empty()
                && seg
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        })
    {
        return Some(SecretKind::Jwt);
    }

    if s.contains("-----BEGIN") && s.contains("PRIVATE KEY") {
        return Some(SecretKind::PrivateKey);
    }

    if let Some((_, rest)) = s.split_once("://") {
        let authority = rest.split('/').next().unwrap_or(rest);
        if let Some((userinfo, _host)) = authority.rsplit_once('@') {
            if userinfo.contains(':') {
                return Some(SecretKind::UrlCredentials);
            }
        }
    }

    None
}

/// Refuse any document with a credential-shaped leaf; the value is never echoed.
pub(crate) fn enforce_no_secret_literals(doc: &Value) -> Result<()> {
    let mut leaves = Vec::new();
    collect_leaf_pointers(doc, "", &mut leaves);

    for ptr in leaves {
        let Some(text) = doc.pointer(&ptr).and_then(Value::as_str) else {
            continue;
        };
        if let Some(kind) = classify_secret(text) {
            bail!(
                "CONFIG_SECRET_DETECTED leaf={} kind={} value=REDACTED",
                ptr,
                kind.as_str()
            );
        }
    }
    Ok(())
}
