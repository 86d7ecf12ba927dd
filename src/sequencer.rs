// Identifier Sequencer
// Monotonically increasing counter producing unique token identifiers.
// Identifiers are never reused, not even after retirement.

use crate::error::{LedgerError, LedgerResult};
use crate::types::TokenId;

/// Sequential identifier allocator (starts from 1)
#[derive(Clone, Debug)]
pub struct IdentifierSequencer {
    next: TokenId,
}

impl Default for IdentifierSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierSequencer {
    /// Create a sequencer with the next identifier at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Identifier the next allocation will return
    pub fn peek_next(&self) -> TokenId {
        self.next
    }

    /// Allocate the next identifier and advance the counter by one
    pub fn allocate(&mut self) -> LedgerResult<TokenId> {
        let id = self.next;
        self.next = self.next.checked_add(1).ok_or(LedgerError::Overflow)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let sequencer = IdentifierSequencer::new();
        assert_eq!(sequencer.peek_next(), 1);
    }

    #[test]
    fn test_sequential_allocation() {
        let mut sequencer = IdentifierSequencer::new();
        assert_eq!(sequencer.allocate(), Ok(1));
        assert_eq!(sequencer.allocate(), Ok(2));
        assert_eq!(sequencer.allocate(), Ok(3));
        assert_eq!(sequencer.peek_next(), 4);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut sequencer = IdentifierSequencer::new();
        assert_eq!(sequencer.peek_next(), 1);
        assert_eq!(sequencer.peek_next(), 1);
        assert_eq!(sequencer.allocate(), Ok(1));
    }

    #[test]
    fn test_overflow() {
        let mut sequencer = IdentifierSequencer { next: u64::MAX };
        assert_eq!(sequencer.allocate(), Err(LedgerError::Overflow));
    }
}
