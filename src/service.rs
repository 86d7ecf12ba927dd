// Shared Ledger Service
// Wraps the token ledger in a single exclusive critical section so that
// concurrent callers are linearized: each public operation locks once,
// runs to completion and never observes partial state.

use std::sync::{Arc, Mutex};

use crate::base::OwnershipLedger;
use crate::config::TokenConfig;
use crate::error::LedgerResult;
use crate::events::LedgerEvent;
use crate::ledger::TokenLedger;
use crate::types::{Identity, TokenId};

/// Thread-safe handle over a token ledger
pub struct SharedLedger<L: OwnershipLedger> {
    inner: Arc<Mutex<TokenLedger<L>>>,
}

impl<L: OwnershipLedger> Clone for SharedLedger<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: OwnershipLedger> SharedLedger<L> {
    /// Create a shared ledger
    pub fn new(config: TokenConfig, administrator: Identity, base: L) -> LedgerResult<Self> {
        let ledger = TokenLedger::new(config, administrator, base)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(ledger)),
        })
    }

    /// Wrap an existing ledger
    pub fn from_ledger(ledger: TokenLedger<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut TokenLedger<L>) -> R,
    {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    /// Issue a single token
    pub fn issue(
        &self,
        caller: &Identity,
        holder: &Identity,
        locator: String,
    ) -> LedgerResult<TokenId> {
        self.with_ledger(|ledger| ledger.issue(caller, holder, locator))
    }

    /// Issue a batch of tokens atomically
    pub fn issue_batch(
        &self,
        caller: &Identity,
        holders: &[Identity],
        locators: &[String],
    ) -> LedgerResult<()> {
        self.with_ledger(|ledger| ledger.issue_batch(caller, holders, locators))
    }

    /// Replace the locator of a live token (administrator only)
    pub fn update_locator(
        &self,
        caller: &Identity,
        id: TokenId,
        locator: String,
    ) -> LedgerResult<()> {
        self.with_ledger(|ledger| ledger.update_locator(caller, id, locator))
    }

    /// Retire (burn) a token
    pub fn retire(&self, caller: &Identity, id: TokenId) -> LedgerResult<()> {
        self.with_ledger(|ledger| ledger.retire(caller, id))
    }

    /// Transfer the administrator role
    pub fn transfer_administrator(
        &self,
        caller: &Identity,
        new_admin: &Identity,
    ) -> LedgerResult<()> {
        self.with_ledger(|ledger| ledger.transfer_administrator(caller, new_admin))
    }

    /// Transfer a token through the base ledger
    pub fn transfer(&self, caller: &Identity, to: &Identity, id: TokenId) -> LedgerResult<()> {
        self.with_ledger(|ledger| ledger.transfer(caller, to, id))
    }

    /// Set or clear a token approval through the base ledger
    pub fn approve(
        &self,
        caller: &Identity,
        operator: Option<Identity>,
        id: TokenId,
    ) -> LedgerResult<()> {
        self.with_ledger(|ledger| ledger.approve(caller, operator, id))
    }

    /// Current administrator
    pub fn administrator(&self) -> Identity {
        self.with_ledger(|ledger| *ledger.administrator())
    }

    /// Lifetime issuance count
    pub fn total_issued(&self) -> u64 {
        self.with_ledger(|ledger| ledger.total_issued())
    }

    /// Identifier the next issuance will assign
    pub fn peek_next_identifier(&self) -> TokenId {
        self.with_ledger(|ledger| ledger.peek_next_identifier())
    }

    /// Locator of a live token
    pub fn locator(&self, id: TokenId) -> LedgerResult<String> {
        self.with_ledger(|ledger| ledger.locator(id).map(str::to_string))
    }

    /// Current owner of a token, if it exists
    pub fn owner_of(&self, id: TokenId) -> Option<Identity> {
        self.with_ledger(|ledger| ledger.owner_of(id))
    }

    /// Number of tokens currently held by `holder`
    pub fn balance_of(&self, holder: &Identity) -> u64 {
        self.with_ledger(|ledger| ledger.balance_of(holder))
    }

    /// Drain the buffered events
    pub fn take_events(&self) -> Vec<LedgerEvent> {
        self.with_ledger(|ledger| ledger.take_events())
    }
}
