// Ledger Core Types
// This module defines the identity and identifier types shared by all
// ledger components.

use std::fmt;

use serde::{Deserialize, Serialize};

// ========================================
// Protocol Constants
// ========================================

/// Maximum batch operation size.
///
/// Fixed design constant matching the reference behavior; not a tunable.
pub const MAX_BATCH_SIZE: usize = 100;

/// Maximum token name length (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum token symbol length (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 8;

// ========================================
// Identifier
// ========================================

/// Unique sequential token identifier (starts from 1, 0 is invalid)
pub type TokenId = u64;

// ========================================
// Identity
// ========================================

/// Opaque participant reference (holder or administrator).
///
/// The all-zero value is the null identity; it is never a valid holder or
/// administrator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity(#[serde(with = "hex::serde")] [u8; 32]);

impl Identity {
    /// Create an identity from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The null (zero) identity
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Check whether this is the null identity
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Raw byte representation
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Identity {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_identity() {
        assert!(Identity::zero().is_zero());
        assert!(!Identity::new([1u8; 32]).is_zero());
    }

    #[test]
    fn test_identity_hex_display() {
        let identity = Identity::new([0xabu8; 32]);
        assert_eq!(identity.to_string(), "ab".repeat(32));
    }

    #[test]
    fn test_identity_serde_hex() {
        let identity = Identity::new([7u8; 32]);
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(json, format!("\"{}\"", "07".repeat(32)));

        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
    }
}
