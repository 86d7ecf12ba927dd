// Base Ownership Ledger Boundary
// The underlying ownership/approval/transfer subsystem is consumed as an
// injected capability rather than re-derived here. `InMemoryOwnership` is
// the reference implementation used by tests and in-process embedders.

use indexmap::IndexMap;

use crate::error::{LedgerError, LedgerResult};
use crate::types::{Identity, TokenId};

// ========================================
// Ownership Ledger Trait
// ========================================

/// Abstract ownership interface the token ledger builds upon.
///
/// Implementations own the transfer/approval mechanics and their
/// correctness guarantees; the token ledger only relies on the contract
/// stated per method.
pub trait OwnershipLedger {
    /// Register new ownership; must reject a pre-existing id
    fn mint_new(&mut self, holder: &Identity, id: TokenId) -> LedgerResult<()>;

    /// Remove the ownership record for an existing id
    fn burn(&mut self, id: TokenId) -> LedgerResult<()>;

    /// Current owner, if the id exists
    fn owner_of(&self, id: TokenId) -> Option<Identity>;

    /// Number of tokens currently held
    fn balance_of(&self, holder: &Identity) -> u64;

    /// Move ownership to `to`; caller must be the owner or approved
    fn transfer(&mut self, caller: &Identity, to: &Identity, id: TokenId) -> LedgerResult<()>;

    /// Set or clear the approved operator for a token; caller must be the owner
    fn approve(
        &mut self,
        caller: &Identity,
        operator: Option<Identity>,
        id: TokenId,
    ) -> LedgerResult<()>;

    /// Whether the caller is the current owner or an approved operator
    fn is_approved_or_owner(&self, caller: &Identity, id: TokenId) -> bool;
}

// ========================================
// In-Memory Implementation
// ========================================

#[derive(Clone, Debug)]
struct OwnershipRecord {
    owner: Identity,
    /// Single approved operator, cleared on transfer and burn
    approved: Option<Identity>,
}

/// In-memory ownership ledger
#[derive(Clone, Debug, Default)]
pub struct InMemoryOwnership {
    tokens: IndexMap<TokenId, OwnershipRecord>,
    balances: IndexMap<Identity, u64>,
}

impl InMemoryOwnership {
    /// Create an empty ownership ledger
    pub fn new() -> Self {
        Self::default()
    }

    fn increment_balance(&mut self, holder: &Identity) -> LedgerResult<()> {
        let balance = self.balances.entry(*holder).or_insert(0);
        *balance = balance.checked_add(1).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    fn decrement_balance(&mut self, holder: &Identity) -> LedgerResult<()> {
        let balance = self.balances.entry(*holder).or_insert(0);
        *balance = balance.checked_sub(1).ok_or(LedgerError::Overflow)?;
        Ok(())
    }
}

impl OwnershipLedger for InMemoryOwnership {
    fn mint_new(&mut self, holder: &Identity, id: TokenId) -> LedgerResult<()> {
        if self.tokens.contains_key(&id) {
            return Err(LedgerError::AlreadyExists);
        }
        self.tokens.insert(
            id,
            OwnershipRecord {
                owner: *holder,
                approved: None,
            },
        );
        self.increment_balance(holder)
    }

    fn burn(&mut self, id: TokenId) -> LedgerResult<()> {
        let record = self.tokens.shift_remove(&id).ok_or(LedgerError::NotFound)?;
        self.decrement_balance(&record.owner)
    }

    fn owner_of(&self, id: TokenId) -> Option<Identity> {
        self.tokens.get(&id).map(|record| record.owner)
    }

    fn balance_of(&self, holder: &Identity) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    fn transfer(&mut self, caller: &Identity, to: &Identity, id: TokenId) -> LedgerResult<()> {
        if to.is_zero() {
            return Err(LedgerError::InvalidTarget);
        }
        if !self.is_approved_or_owner(caller, id) {
            if !self.tokens.contains_key(&id) {
                return Err(LedgerError::NotFound);
            }
            return Err(LedgerError::Unauthorized);
        }

        let record = self.tokens.get_mut(&id).ok_or(LedgerError::NotFound)?;
        let from = record.owner;
        record.owner = *to;
        record.approved = None;

        self.decrement_balance(&from)?;
        self.increment_balance(to)
    }

    fn approve(
        &mut self,
        caller: &Identity,
        operator: Option<Identity>,
        id: TokenId,
    ) -> LedgerResult<()> {
        let record = self.tokens.get_mut(&id).ok_or(LedgerError::NotFound)?;
        if record.owner != *caller {
            return Err(LedgerError::Unauthorized);
        }
        record.approved = operator;
        Ok(())
    }

    fn is_approved_or_owner(&self, caller: &Identity, id: TokenId) -> bool {
        match self.tokens.get(&id) {
            Some(record) => record.owner == *caller || record.approved == Some(*caller),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder_a() -> Identity {
        Identity::new([1u8; 32])
    }

    fn holder_b() -> Identity {
        Identity::new([2u8; 32])
    }

    #[test]
    fn test_mint_and_owner() {
        let mut base = InMemoryOwnership::new();
        base.mint_new(&holder_a(), 1).unwrap();

        assert_eq!(base.owner_of(1), Some(holder_a()));
        assert_eq!(base.balance_of(&holder_a()), 1);
    }

    #[test]
    fn test_mint_existing_id_fails() {
        let mut base = InMemoryOwnership::new();
        base.mint_new(&holder_a(), 1).unwrap();
        assert_eq!(
            base.mint_new(&holder_b(), 1),
            Err(LedgerError::AlreadyExists)
        );
        assert_eq!(base.owner_of(1), Some(holder_a()));
    }

    #[test]
    fn test_burn() {
        let mut base = InMemoryOwnership::new();
        base.mint_new(&holder_a(), 1).unwrap();
        base.burn(1).unwrap();

        assert_eq!(base.owner_of(1), None);
        assert_eq!(base.balance_of(&holder_a()), 0);
        assert_eq!(base.burn(1), Err(LedgerError::NotFound));
    }

    #[test]
    fn test_transfer() {
        let mut base = InMemoryOwnership::new();
        base.mint_new(&holder_a(), 1).unwrap();
        base.transfer(&holder_a(), &holder_b(), 1).unwrap();

        assert_eq!(base.owner_of(1), Some(holder_b()));
        assert_eq!(base.balance_of(&holder_a()), 0);
        assert_eq!(base.balance_of(&holder_b()), 1);
    }

    #[test]
    fn test_transfer_by_non_owner_fails() {
        let mut base = InMemoryOwnership::new();
        base.mint_new(&holder_a(), 1).unwrap();
        assert_eq!(
            base.transfer(&holder_b(), &holder_b(), 1),
            Err(LedgerError::Unauthorized)
        );
    }

    #[test]
    fn test_approve_and_transfer() {
        let mut base = InMemoryOwnership::new();
        base.mint_new(&holder_a(), 1).unwrap();
        base.approve(&holder_a(), Some(holder_b()), 1).unwrap();

        assert!(base.is_approved_or_owner(&holder_b(), 1));
        base.transfer(&holder_b(), &holder_b(), 1).unwrap();
        assert_eq!(base.owner_of(1), Some(holder_b()));
    }

    #[test]
    fn test_approval_cleared_on_transfer() {
        let mut base = InMemoryOwnership::new();
        base.mint_new(&holder_a(), 1).unwrap();
        base.approve(&holder_a(), Some(holder_b()), 1).unwrap();
        base.transfer(&holder_a(), &holder_b(), 1).unwrap();

        // Previous approval does not follow the token
        assert!(!base.is_approved_or_owner(&holder_a(), 1));
        assert!(base.is_approved_or_owner(&holder_b(), 1));
    }

    #[test]
    fn test_approve_by_non_owner_fails() {
        let mut base = InMemoryOwnership::new();
        base.mint_new(&holder_a(), 1).unwrap();
        assert_eq!(
            base.approve(&holder_b(), Some(holder_b()), 1),
            Err(LedgerError::Unauthorized)
        );
    }

    #[test]
    fn test_is_approved_or_owner_missing_token() {
        let base = InMemoryOwnership::new();
        assert!(!base.is_approved_or_owner(&holder_a(), 999));
    }
}
