//! Job signing
//!
//! Job-submission payloads are signed with the station's private key and
//! verified by the daemon against the public key registered during setup.
//! The trait hides the key material: callers can only request "sign this",
//! never read the key itself.

use async_trait::async_trait;
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::error::{BridgeError, BridgeResult};

/// Signing capability for outbound job submissions
#[async_trait]
pub trait JobSigner: Send + Sync {
    /// The public counterpart (PEM), as registered with the daemon
    fn public_key_pem(&self) -> BridgeResult<String>;

    /// SHA-256 fingerprint (hex) of the public key, sent in the handshake
    /// so the daemon selects the matching registered key
    fn key_fingerprint(&self) -> String;

    /// Sign `data` with the station key (RSA PKCS#1 v1.5, SHA-256)
    async fn sign(&self, data: &[u8]) -> BridgeResult<Vec<u8>>;
}

/// Signer backed by an RSA private key held in memory.
///
/// The key is loaded once from a local PEM file at session start; there is
/// no rotation or re-negotiation during a session.
pub struct RsaSigner {
    signing_key: SigningKey<Sha256>,
    public_key_pem: String,
    fingerprint: String,
}

impl RsaSigner {
    /// Load from a PKCS#8 PEM string
    pub fn new(private_key_pem: &str) -> BridgeResult<Self> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(private_key_pem)
            .map_err(|e| BridgeError::Signing(format!("Invalid RSA private key: {}", e)))?;

        let public_key = private_key.to_public_key();
        let public_key_pem = public_key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| BridgeError::Signing(format!("Failed to encode public key: {}", e)))?;

        let der = public_key
            .to_public_key_der()
            .map_err(|e| BridgeError::Signing(format!("Failed to encode public key: {}", e)))?;
        let fingerprint = hex::encode(Sha256::digest(der.as_bytes()));

        Ok(Self {
            signing_key: SigningKey::<Sha256>::new(private_key),
            public_key_pem,
            fingerprint,
        })
    }

    /// Load from a PEM file on disk
    pub fn from_file(path: &str) -> BridgeResult<Self> {
        let pem = std::fs::read_to_string(path)
            .map_err(|e| BridgeError::Signing(format!("Failed to read signing key: {}", e)))?;
        Self::new(&pem)
    }
}

#[async_trait]
impl JobSigner for RsaSigner {
    fn public_key_pem(&self) -> BridgeResult<String> {
        Ok(self.public_key_pem.clone())
    }

    fn key_fingerprint(&self) -> String {
        self.fingerprint.clone()
    }

    async fn sign(&self, data: &[u8]) -> BridgeResult<Vec<u8>> {
        Ok(self.signing_key.sign(data).to_vec())
    }
}

/// Verify a job signature against a public key (PEM).
///
/// This is the daemon's side of the trust setup; it lives here so daemon
/// stubs in tests verify with the exact production primitives.
pub fn verify_signature(public_key_pem: &str, data: &[u8], signature: &[u8]) -> BridgeResult<()> {
    let public_key = RsaPublicKey::from_public_key_pem(public_key_pem)
        .map_err(|e| BridgeError::Signing(format!("Invalid RSA public key: {}", e)))?;

    let signature = Signature::try_from(signature)
        .map_err(|e| BridgeError::Signing(format!("Malformed signature: {}", e)))?;

    VerifyingKey::<Sha256>::new(public_key)
        .verify(data, &signature)
        .map_err(|_| BridgeError::Signing("Signature verification failed".into()))
}
