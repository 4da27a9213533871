//! Key and keyed commitment for the commit-reveal scheme.

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Single-use key for a commitment. 32 bytes from the operating system's
/// secure random source.
#[derive(Clone, Serialize, Deserialize)]
pub struct CommitKey([u8; 32]);

impl CommitKey {
    /// Generate a fresh random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for CommitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitKey({})", hex::encode(&self.0[..8]))
    }
}

/// Commitment = HMAC-SHA256(key, decimal string of the message).
///
/// Binding and hiding: for a fixed (key, message) the digest is
/// deterministic, and without the key the digest reveals nothing about the
/// message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to an integer message under the given key.
    pub fn commit(key: &CommitKey, message: u64) -> Self {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(message.to_string().as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the revealed (key, message) pair reproduces this digest.
    ///
    /// The comparison runs in constant time. A `false` here means the
    /// revealed value cannot be trusted and the round must abort.
    pub fn verify(&self, key: &CommitKey, message: u64) -> bool {
        let expected = Self::commit(key, message);
        self.0[..].ct_eq(&expected.0[..]).into()
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
