// Ledger Error Codes
// This module defines all error codes for ledger operations.
//
// Error Code Ranges:
// - 0: Success
// - 100-199: Existence errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 900-999: System errors

use thiserror::Error;

/// Ledger operation result type
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum LedgerError {
    // ========================================
    // Existence errors (100-199)
    // ========================================
    #[error("Token not found")]
    NotFound = 100,

    #[error("Token already exists")]
    AlreadyExists = 101,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Unauthorized")]
    Unauthorized = 200,

    #[error("Invalid transfer target")]
    InvalidTarget = 201,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Holder is the zero identity")]
    ZeroHolder = 300,

    #[error("Empty locator")]
    EmptyLocator = 301,

    #[error("Batch arrays length mismatch")]
    LengthMismatch = 302,

    #[error("Batch size exceeded")]
    BatchTooLarge = 303,

    #[error("Invalid name length")]
    InvalidNameLength = 305,

    #[error("Invalid symbol length")]
    InvalidSymbolLength = 306,

    #[error("Invalid symbol character")]
    SymbolInvalidChar = 307,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,
}

impl LedgerError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::NotFound),
            101 => Some(Self::AlreadyExists),
            200 => Some(Self::Unauthorized),
            201 => Some(Self::InvalidTarget),
            300 => Some(Self::ZeroHolder),
            301 => Some(Self::EmptyLocator),
            302 => Some(Self::LengthMismatch),
            303 => Some(Self::BatchTooLarge),
            305 => Some(Self::InvalidNameLength),
            306 => Some(Self::InvalidSymbolLength),
            307 => Some(Self::SymbolInvalidChar),
            900 => Some(Self::Overflow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_unique() {
        // Verify all error codes are unique
        let codes = [
            LedgerError::NotFound,
            LedgerError::AlreadyExists,
            LedgerError::Unauthorized,
            LedgerError::InvalidTarget,
            LedgerError::ZeroHolder,
            LedgerError::EmptyLocator,
            LedgerError::LengthMismatch,
            LedgerError::BatchTooLarge,
            LedgerError::InvalidNameLength,
            LedgerError::InvalidSymbolLength,
            LedgerError::SymbolInvalidChar,
            LedgerError::Overflow,
        ];

        let mut seen = std::collections::HashSet::new();
        for err in codes {
            let code = err.code();
            assert!(
                seen.insert(code),
                "Duplicate error code: {} for {:?}",
                code,
                err
            );
        }
    }

    #[test]
    fn test_error_code_roundtrip() {
        let err = LedgerError::EmptyLocator;
        let code = err.code();
        let recovered = LedgerError::from_code(code);
        assert_eq!(recovered, Some(err));
    }

    #[test]
    fn test_unknown_error_code() {
        assert_eq!(LedgerError::from_code(9999), None);
    }
}
