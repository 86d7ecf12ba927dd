// Token Ledger
// Orchestrates issuance and retirement on top of the access gate, the
// identifier sequencer, the metadata store and the injected base
// ownership ledger.
//
// Every operation is transactional: all validation happens before the
// first mutation, so a failed call leaves no partial state. The counters
// uphold `total_issued == next_identifier - 1` at all times; retirement
// touches neither.

use log::debug;

use crate::access::AccessGate;
use crate::base::OwnershipLedger;
use crate::config::TokenConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::events::LedgerEvent;
use crate::metadata::MetadataStore;
use crate::sequencer::IdentifierSequencer;
use crate::types::{Identity, TokenId, MAX_BATCH_SIZE};

/// Issuance-and-lifecycle ledger over a base ownership ledger
#[derive(Clone, Debug)]
pub struct TokenLedger<L: OwnershipLedger> {
    config: TokenConfig,
    gate: AccessGate,
    sequencer: IdentifierSequencer,
    metadata: MetadataStore,
    base: L,
    total_issued: u64,
    events: Vec<LedgerEvent>,
}

impl<L: OwnershipLedger> TokenLedger<L> {
    /// Create a ledger with the given variant configuration, initial
    /// administrator and base ownership ledger
    ///
    /// # Returns
    /// - `Err(InvalidTarget)` if the administrator is the null identity
    /// - A config validation error if the naming is malformed
    pub fn new(config: TokenConfig, administrator: Identity, base: L) -> LedgerResult<Self> {
        config.validate()?;
        let gate = AccessGate::new(administrator)?;
        Ok(Self {
            config,
            gate,
            sequencer: IdentifierSequencer::new(),
            metadata: MetadataStore::new(),
            base,
            total_issued: 0,
            events: Vec::new(),
        })
    }

    // ========================================
    // Issuance
    // ========================================

    /// Issue a single token
    ///
    /// # Parameters
    /// - `caller`: Must be the administrator
    /// - `holder`: Recipient of the new token
    /// - `locator`: Non-empty metadata locator
    ///
    /// # Returns
    /// - `Ok(TokenId)`: The new identifier
    /// - `Err(LedgerError)`: No state was mutated
    pub fn issue(
        &mut self,
        caller: &Identity,
        holder: &Identity,
        locator: String,
    ) -> LedgerResult<TokenId> {
        // Step 1: Authorization
        self.gate.require_administrator(caller)?;

        // Step 2: Input validation
        if holder.is_zero() {
            return Err(LedgerError::ZeroHolder);
        }
        if locator.is_empty() {
            return Err(LedgerError::EmptyLocator);
        }

        // Step 3: Probe the identifier before mutating anything
        if self.base.owner_of(self.sequencer.peek_next()).is_some() {
            return Err(LedgerError::AlreadyExists);
        }

        // Step 4: Execute
        self.apply_issue(holder, locator)
    }

    /// Issue a batch of tokens, one per (holder, locator) pair, in order
    ///
    /// The batch is atomic: the administrator check, the length checks and
    /// every entry are validated before the first mutation, so a failing
    /// call leaves counters, metadata and ownership untouched.
    ///
    /// # Returns
    /// - `Ok(())`: All entries were issued
    /// - `Err(LedgerError)`: No state was mutated
    pub fn issue_batch(
        &mut self,
        caller: &Identity,
        holders: &[Identity],
        locators: &[String],
    ) -> LedgerResult<()> {
        // Step 1: Authorization (checked once, before any mutation)
        self.gate.require_administrator(caller)?;

        // Step 2: Batch shape
        if holders.len() != locators.len() {
            return Err(LedgerError::LengthMismatch);
        }
        if holders.len() > MAX_BATCH_SIZE {
            return Err(LedgerError::BatchTooLarge);
        }

        // Step 3: Validate every entry
        for (holder, locator) in holders.iter().zip(locators) {
            if holder.is_zero() {
                return Err(LedgerError::ZeroHolder);
            }
            if locator.is_empty() {
                return Err(LedgerError::EmptyLocator);
            }
        }

        // Step 4: Probe the whole identifier range
        let next = self.sequencer.peek_next();
        for offset in 0..holders.len() as u64 {
            let id = next.checked_add(offset).ok_or(LedgerError::Overflow)?;
            if self.base.owner_of(id).is_some() {
                return Err(LedgerError::AlreadyExists);
            }
        }

        // Step 5: Execute in order
        for (holder, locator) in holders.iter().zip(locators) {
            self.apply_issue(holder, locator.clone())?;
        }

        Ok(())
    }

    /// Allocate an identifier and record the issuance.
    ///
    /// Callers have already validated inputs and probed the identifier
    /// against the base ledger; past this point nothing fails under the
    /// base ledger's stated contract.
    fn apply_issue(&mut self, holder: &Identity, locator: String) -> LedgerResult<TokenId> {
        let id = self.sequencer.allocate()?;
        self.base.mint_new(holder, id)?;
        self.metadata.set(id, locator.clone())?;
        self.total_issued = self
            .total_issued
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;

        debug!(
            "{}: token {} issued to {}",
            self.config.issued_label, id, holder
        );
        self.events.push(LedgerEvent::Issued {
            holder: *holder,
            id,
            locator,
        });

        Ok(id)
    }

    // ========================================
    // Locator Update
    // ========================================

    /// Replace the locator of a live token (administrator only)
    ///
    /// Does not change issuance counters.
    ///
    /// # Returns
    /// - `Err(Unauthorized)` if the caller is not the administrator
    /// - `Err(NotFound)` if the token was never issued or has been retired
    /// - `Err(EmptyLocator)` on an empty locator
    pub fn update_locator(
        &mut self,
        caller: &Identity,
        id: TokenId,
        locator: String,
    ) -> LedgerResult<()> {
        self.gate.require_administrator(caller)?;
        self.metadata.update(id, locator)
    }

    // ========================================
    // Retirement
    // ========================================

    /// Retire (burn) a token
    ///
    /// Authorization is delegated to the base ledger: the current owner or
    /// an approved operator may retire, independently of the administrator.
    /// The identifier is permanently consumed and never reassigned;
    /// `total_issued` is unaffected.
    ///
    /// # Returns
    /// - `Err(NotFound)` if the id does not currently exist
    /// - `Err(Unauthorized)` if the caller is neither owner nor approved
    pub fn retire(&mut self, caller: &Identity, id: TokenId) -> LedgerResult<()> {
        // Step 1: Existence
        let holder = self.base.owner_of(id).ok_or(LedgerError::NotFound)?;

        // Step 2: Delegated permission check
        if !self.base.is_approved_or_owner(caller, id) {
            return Err(LedgerError::Unauthorized);
        }

        // Step 3: Execute
        self.base.burn(id)?;
        self.metadata.remove(id);

        debug!("{}: token {} retired", self.config.retired_label, id);
        self.events.push(LedgerEvent::Retired { holder, id });

        Ok(())
    }

    // ========================================
    // Administration
    // ========================================

    /// Transfer the administrator role
    ///
    /// # Returns
    /// - `Err(Unauthorized)` if the caller is not the administrator
    /// - `Err(InvalidTarget)` if the new administrator is the null identity
    pub fn transfer_administrator(
        &mut self,
        caller: &Identity,
        new_admin: &Identity,
    ) -> LedgerResult<()> {
        let previous = self.gate.transfer_administrator(caller, new_admin)?;

        debug!("administrator transferred from {} to {}", previous, new_admin);
        self.events.push(LedgerEvent::AdminTransferred {
            previous,
            current: *new_admin,
        });

        Ok(())
    }

    // ========================================
    // Base Ledger Pass-Through
    // ========================================

    /// Transfer a token through the base ledger
    pub fn transfer(&mut self, caller: &Identity, to: &Identity, id: TokenId) -> LedgerResult<()> {
        self.base.transfer(caller, to, id)
    }

    /// Set or clear a token approval through the base ledger
    pub fn approve(
        &mut self,
        caller: &Identity,
        operator: Option<Identity>,
        id: TokenId,
    ) -> LedgerResult<()> {
        self.base.approve(caller, operator, id)
    }

    // ========================================
    // Read Surface
    // ========================================

    /// Current administrator
    pub fn administrator(&self) -> &Identity {
        self.gate.current_administrator()
    }

    /// Lifetime issuance count (unaffected by retirement)
    pub fn total_issued(&self) -> u64 {
        self.total_issued
    }

    /// Identifier the next issuance will assign
    pub fn peek_next_identifier(&self) -> TokenId {
        self.sequencer.peek_next()
    }

    /// Locator of a live token
    pub fn locator(&self, id: TokenId) -> LedgerResult<&str> {
        self.metadata.get(id)
    }

    /// Current owner of a token, if it exists
    pub fn owner_of(&self, id: TokenId) -> Option<Identity> {
        self.base.owner_of(id)
    }

    /// Number of tokens currently held by `holder`
    pub fn balance_of(&self, holder: &Identity) -> u64 {
        self.base.balance_of(holder)
    }

    /// Variant configuration
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Events emitted so far and not yet drained
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Drain the buffered events
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}
