//! Schema fingerprints.
//!
//! Fingerprints are computed as `sha256(domain_separator || rfc8785(schema))`
//! and encoded as base64url without padding.

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest as Sha2Digest, Sha256};

use crate::errors::RegistryError;

/// Domain separator for schema fingerprints: `b"defname:schema:v1\0"`.
const SCHEMA_DOMAIN_SEPARATOR: &[u8] = b"defname:schema:v1\0";

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlg {
    /// SHA-256.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + bytes digest, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm.
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    pub b64: String,
}

/// Computes the fingerprint of a schema body.
///
/// Key order and insignificant whitespace do not affect the result.
///
/// # Errors
///
/// Returns [`RegistryError::Canonicalization`] if the value cannot be
/// canonicalized.
pub fn fingerprint(schema: &Value) -> Result<Digest, RegistryError> {
    let canonical = canonical_json::to_string(schema)
        .map_err(|err| RegistryError::Canonicalization(err.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(SCHEMA_DOMAIN_SEPARATOR);
    hasher.update(canonical.as_bytes());
    let hash_bytes = hasher.finalize();

    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash_bytes);
    Ok(Digest {
        alg: DigestAlg::Sha256,
        b64,
    })
}
