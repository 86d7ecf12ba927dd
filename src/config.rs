// Token Variant Configuration
// The two deployed variants (video license and hash-lock media) share the
// same ledger logic and differ only in naming, so they are expressed as
// configuration presets.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::types::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH};

/// Naming configuration for a token ledger instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token name (max 64 bytes)
    pub name: String,

    /// Symbol (max 8 bytes, uppercase ASCII or digits)
    pub symbol: String,

    /// Label attached to issuance events
    pub issued_label: String,

    /// Label attached to retirement events
    pub retired_label: String,
}

impl TokenConfig {
    /// Video license variant
    pub fn video_license() -> Self {
        Self {
            name: "Video License NFT".to_string(),
            symbol: "VLNFT".to_string(),
            issued_label: "VideoLicenseMinted".to_string(),
            retired_label: "VideoLicenseBurned".to_string(),
        }
    }

    /// Hash-lock media variant
    pub fn hash_lock_media() -> Self {
        Self {
            name: "HashLock Media NFT".to_string(),
            symbol: "HLMNFT".to_string(),
            issued_label: "MediaLicenseMinted".to_string(),
            retired_label: "MediaLicenseBurned".to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> LedgerResult<()> {
        if self.name.is_empty() || self.name.len() > MAX_NAME_LENGTH {
            return Err(LedgerError::InvalidNameLength);
        }

        if self.symbol.is_empty() || self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(LedgerError::InvalidSymbolLength);
        }
        if !self
            .symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(LedgerError::SymbolInvalidChar);
        }

        Ok(())
    }
}
